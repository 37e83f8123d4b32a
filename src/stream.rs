//! The streaming reader adapter.
//!
//! Wraps a byte source and presents the concatenation of its LZ4 frames —
//! ordinary or skippable — as one continuous [`std::io::Read`] stream, the
//! way the LZ4 frame format itself treats concatenated frames as a single
//! logical payload. Corresponds to the buffered-decompression side of
//! `LZ4F_decompress`'s streaming usage pattern, generalized over any
//! `Read` source instead of a fixed input buffer supplied call-by-call.

use std::io::{self, Read};

use crate::frame::decode_frame;

/// A pull-model LZ4 stream reader.
///
/// Holds at most one decoded frame's output at a time — the currently
/// undelivered tail of the most recently decoded frame — plus the byte
/// source itself. Reading past the end of the current frame's buffer
/// transparently decodes the next frame; reading past the end of the
/// underlying source is reported the ordinary `Read` way, as a `0`-byte
/// result.
pub struct StreamReader<R> {
    source: R,
    verify_checksums: bool,
    buffer: Vec<u8>,
    offset: usize,
}

impl<R: Read> StreamReader<R> {
    /// Wrap `source`. No bytes are read until the first [`Read::read`] call.
    pub fn new(source: R, verify_checksums: bool) -> Self {
        Self {
            source,
            verify_checksums,
            buffer: Vec::new(),
            offset: 0,
        }
    }

    /// Consume the adapter, releasing its buffer and returning the
    /// underlying source. Mirrors the explicit free/close step of the
    /// `LZ4F_*Context` lineage this crate descends from; in Rust the same
    /// thing happens on an ordinary drop, but an explicit `close` documents
    /// the intent at the call site and hands the source back if the caller
    /// still wants it.
    pub fn close(self) -> R {
        self.source
    }

    fn undelivered(&self) -> &[u8] {
        &self.buffer[self.offset..]
    }
}

impl<R: Read> Read for StreamReader<R> {
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        if dst.is_empty() {
            return Ok(0);
        }

        let mut written = 0;
        loop {
            let avail = self.undelivered();
            if !avail.is_empty() {
                let n = avail.len().min(dst.len() - written);
                dst[written..written + n].copy_from_slice(&avail[..n]);
                self.offset += n;
                written += n;
            }

            if written == dst.len() {
                return Ok(written);
            }

            // The current frame's buffer is exhausted; pull the next one.
            // A clean EndOfStream here means the source is exhausted
            // between frames, which is an ordinary short/empty read, not
            // an error — any other failure propagates as-is.
            match decode_frame(&mut self.source, self.verify_checksums) {
                Ok(frame) => {
                    self.buffer = frame.data;
                    self.offset = 0;
                }
                Err(e) if e.is_end_of_stream() => return Ok(written),
                Err(e) => return Err(e.into()),
            }
        }
    }
}
