#![no_main]
use libfuzzer_sys::fuzz_target;

mod encode {
    include!("../../tests/common/encode.rs");
}

fuzz_target!(|data: &[u8]| {
    // Encode arbitrary bytes with the test-only encoder, then decode them
    // back through the real decoder — must always reproduce the input.
    let compressed = encode::encode_block(data);
    match lz4::decode_block(&compressed) {
        Ok(recovered) => assert_eq!(
            recovered,
            data,
            "block round-trip mismatch for {} input bytes",
            data.len()
        ),
        Err(e) => panic!("decode of our own encoder's output failed: {e}"),
    }
});
