#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary, almost-certainly-malformed bytes through the block
    // decoder. An `Err` is expected and fine; what this asserts is the
    // absence of panics, out-of-bounds reads, or out-of-bounds writes.
    let _ = lz4::decode_block(data);
});
