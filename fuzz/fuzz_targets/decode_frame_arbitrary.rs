#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary, almost-certainly-malformed bytes through the frame
    // decoder, both one-shot and via the streaming adapter. An `Err` is
    // expected and fine; what this asserts is the absence of panics.
    let mut src = data;
    let _ = lz4::decode_frame(&mut src, true);

    use std::io::Read;
    let mut reader = lz4::decompress_stream(data, true);
    let mut out = vec![0u8; 4096];
    loop {
        match reader.read(&mut out) {
            Ok(0) => break,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
});
