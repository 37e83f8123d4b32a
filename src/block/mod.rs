//! LZ4 block decompression.
//!
//! The LZ4 block format packs a run of *sequences* — a literal copy
//! optionally followed by a back-reference match — into a dense token
//! stream. This module decodes that stream into a growable output buffer.
//! There is no block compressor here: this crate is decode-only.

mod decode;

pub use decode::decode_block_into;

use crate::error::BlockError;

/// Decode a complete LZ4 block, returning a freshly allocated buffer of its
/// decompressed bytes.
///
/// This is the one-shot entry point. Callers decoding many blocks into a
/// shared frame buffer — as the frame decoder does — should call
/// [`decode_block_into`] directly instead, appending to the frame's buffer
/// so later blocks can reference bytes emitted by earlier ones without an
/// extra allocation and copy per block.
pub fn decode_block(src: &[u8]) -> Result<Vec<u8>, BlockError> {
    let mut out = Vec::new();
    decode_block_into(src, &mut out)?;
    Ok(out)
}
