#![no_main]
use libfuzzer_sys::fuzz_target;

mod encode {
    include!("../../tests/common/encode.rs");
}

fuzz_target!(|data: &[u8]| {
    // Encode arbitrary bytes as a complete LZ4 frame with the test-only
    // encoder, then decode through the real frame decoder.
    let opts = encode::EncodeOptions {
        block_checksum: true,
        content_checksum: true,
        content_size: true,
    };
    let compressed = encode::encode_frame_chunked(data, 4096, &opts);

    let mut src = compressed.as_slice();
    match lz4::decode_frame(&mut src, true) {
        Ok(recovered) => assert_eq!(
            recovered,
            data,
            "frame round-trip mismatch for {} input bytes",
            data.len()
        ),
        Err(e) => panic!("decode of our own encoder's output failed: {e}"),
    }
});
