//! The byte-source collaborator.
//!
//! The frame decoder and stream adapter only need two operations from
//! whatever produces their input: fill a buffer, and discard a run of
//! bytes. Both are expressed here in terms of `std::io::Read` so that any
//! reader — a file, a socket, a `&[u8]`, a chain of readers — works without
//! a bespoke adapter at the call site. Neither operation assumes the
//! source is seekable.

use std::io::{self, Read};

/// A byte-producing source. Blanket-implemented for every `Read`.
pub trait ByteSource: Read {
    /// Discard exactly `n` bytes from the source.
    ///
    /// Returns `Ok(())` only if all `n` bytes were available; a short
    /// source yields an `UnexpectedEof` error, which the frame decoder
    /// maps to [`crate::error::FrameError::PrematureEnd`].
    fn skip(&mut self, n: u64) -> io::Result<()> {
        let mut remaining = n;
        let mut scratch = [0u8; 4096];
        while remaining > 0 {
            let chunk = remaining.min(scratch.len() as u64) as usize;
            let read = self.read(&mut scratch[..chunk])?;
            if read == 0 {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
            }
            remaining -= read as u64;
        }
        Ok(())
    }
}

impl<R: Read + ?Sized> ByteSource for R {}

/// Fill `buf` completely from `src`, looping over short reads.
///
/// Returns the number of bytes actually filled, which is less than
/// `buf.len()` only when `src` reached end-of-file. Callers distinguish a
/// clean frame-boundary EOF (zero bytes filled on the very first field of
/// a frame) from a mid-field `PrematureEnd` (any other short fill).
pub fn fill(src: &mut (impl ByteSource + ?Sized), buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = src.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_reads_exact_length_from_a_full_source() {
        let mut src: &[u8] = b"abcdef";
        let mut buf = [0u8; 6];
        assert_eq!(fill(&mut src, &mut buf).unwrap(), 6);
        assert_eq!(&buf, b"abcdef");
    }

    #[test]
    fn fill_reports_short_count_on_eof() {
        let mut src: &[u8] = b"ab";
        let mut buf = [0u8; 6];
        assert_eq!(fill(&mut src, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ab");
    }

    #[test]
    fn fill_of_empty_buffer_reads_nothing() {
        let mut src: &[u8] = b"abcdef";
        let mut buf = [0u8; 0];
        assert_eq!(fill(&mut src, &mut buf).unwrap(), 0);
    }

    #[test]
    fn skip_discards_exact_count() {
        let mut src: &[u8] = b"0123456789";
        ByteSource::skip(&mut src, 4).unwrap();
        let mut rest = Vec::new();
        src.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"456789");
    }

    #[test]
    fn skip_past_end_is_unexpected_eof() {
        let mut src: &[u8] = b"short";
        let err = ByteSource::skip(&mut src, 100).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn skip_zero_is_a_no_op() {
        let mut src: &[u8] = b"abc";
        ByteSource::skip(&mut src, 0).unwrap();
        let mut rest = Vec::new();
        src.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"abc");
    }

    #[test]
    fn skip_larger_than_scratch_buffer_works() {
        let data = vec![7u8; 10_000];
        let mut src: &[u8] = &data;
        ByteSource::skip(&mut src, 9_000).unwrap();
        let mut rest = Vec::new();
        src.read_to_end(&mut rest).unwrap();
        assert_eq!(rest.len(), 1_000);
    }
}
