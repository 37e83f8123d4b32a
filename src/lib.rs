//! A decoder for the LZ4 compressed data format — Rust port of the decode
//! path of lz4-1.10.0's `lz4.c` and `lz4frame.c`.
//!
//! This crate covers two layers of the format plus a streaming adapter
//! over them:
//!
//! - [`block`] — the raw LZ77-style literal/match token stream.
//! - [`frame`] — the self-describing container around one or more data
//!   blocks (magic, descriptor, optional checksums).
//! - [`stream`] — a [`std::io::Read`] adapter that decodes a source
//!   frame-by-frame and presents it as one continuous byte stream,
//!   transparent to frame boundaries.
//!
//! This is a decode-only crate: there is no compressor here. See the
//! module docs on [`block`] and [`frame`] for the exact wire formats.

pub mod block;
pub mod error;
pub mod frame;
pub mod source;
pub mod stream;
pub mod xxhash;

use std::io::Read;

pub use error::{BlockError, FrameError};
pub use source::ByteSource;
pub use stream::StreamReader;

/// One-shot decode of a single LZ4 block. Equivalent to `LZ4_decompress_safe`
/// generalized to an unbounded output, since this decoder has no notion of a
/// caller-supplied destination capacity to stop at.
pub use block::decode_block;

/// Decode exactly one LZ4 frame from `source`, returning its uncompressed
/// content.
///
/// `source` need not be seekable; bytes past the end of the frame are left
/// unread. A cleanly empty `source` — no bytes available at all — is
/// reported as [`FrameError::EndOfStream`], the one error [`decompress_stream`]
/// treats as a normal end of input rather than a failure; every other
/// short read is [`FrameError::PrematureEnd`].
///
/// Skippable frames decode to an empty payload: their opaque bytes are
/// discarded by format, not inspected.
pub fn decode_frame(
    source: &mut (impl Read + ?Sized),
    verify_checksums: bool,
) -> Result<Vec<u8>, FrameError> {
    frame::decode_frame(source, verify_checksums).map(|frame| frame.data)
}

/// Wrap `source` in a [`StreamReader`] that decodes one LZ4 frame at a time
/// on demand and serves the concatenation of their content as an ordinary
/// [`std::io::Read`] byte stream. Concatenated frames — ordinary or
/// skippable — are indistinguishable from a single logical stream to the
/// caller, matching the LZ4 frame format's own treatment of concatenation.
pub fn decompress_stream<R: Read>(source: R, verify_checksums: bool) -> StreamReader<R> {
    StreamReader::new(source, verify_checksums)
}
