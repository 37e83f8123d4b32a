//! LZ4 frame decoding.
//!
//! Reads exactly one frame — ordinary or skippable — from a byte source
//! and returns its decoded content. Data blocks within one frame share a
//! single growing output buffer, so a data block may carry matches that
//! reach back into bytes emitted by an earlier block in the same frame;
//! the descriptor's `block_independent` flag is recorded but does not
//! change this — it is an advisory hint for encoders, not a decode-time
//! constraint.

use crate::block::decode_block_into;
use crate::error::FrameError;
use crate::source::{fill, ByteSource};
use crate::xxhash::xxh32_oneshot;

use super::header::{build_descriptor, header_checksum, parse_bd, parse_flg};
use super::types::{FrameDescriptor, FrameKind};

const LZ4_MAGIC: u32 = 0x184D_2204;
const SKIPPABLE_MAGIC_MASK: u32 = 0xFFFF_FFF0;
const SKIPPABLE_MAGIC_START: u32 = 0x184D_2A50;

/// Bit 31 of a data-block header marks the block as stored uncompressed.
const BLOCK_UNCOMPRESSED_FLAG: u32 = 0x8000_0000;

/// The decoded content of one frame, plus a record of which kind it was.
pub struct DecodedFrame {
    pub kind: FrameKind,
    pub descriptor: Option<FrameDescriptor>,
    pub data: Vec<u8>,
}

/// Decode exactly one frame from `source`.
///
/// Returns [`FrameError::EndOfStream`] if `source` is cleanly exhausted
/// before any byte of the frame is read — the single error the stream
/// adapter treats as a normal end-of-stream rather than a failure. Every
/// other short read past that point is `PrematureEnd`.
pub fn decode_frame(
    source: &mut (impl ByteSource + ?Sized),
    verify_checksums: bool,
) -> Result<DecodedFrame, FrameError> {
    let mut magic_buf = [0u8; 4];
    let n = fill(source, &mut magic_buf)?;
    if n == 0 {
        return Err(FrameError::EndOfStream);
    }
    if n < 4 {
        return Err(FrameError::PrematureEnd);
    }
    let magic = u32::from_le_bytes(magic_buf);

    if magic & SKIPPABLE_MAGIC_MASK == SKIPPABLE_MAGIC_START {
        return decode_skippable_frame(source);
    }
    if magic != LZ4_MAGIC {
        return Err(FrameError::BadStartMagic);
    }

    let mut header_bytes = Vec::with_capacity(14);

    let mut flg_bd = [0u8; 2];
    read_required(source, &mut flg_bd)?;
    header_bytes.extend_from_slice(&flg_bd);
    let flags = parse_flg(flg_bd[0])?;
    let block_max_size = parse_bd(flg_bd[1])?;

    let content_size = if flags.content_size_present {
        let mut buf = [0u8; 8];
        read_required(source, &mut buf)?;
        header_bytes.extend_from_slice(&buf);
        Some(u64::from_le_bytes(buf))
    } else {
        None
    };

    if flags.dict_id_present {
        // Still consumed off the wire even though decoding fails: there's
        // no requirement to preserve the source's byte position on error.
        let mut buf = [0u8; 4];
        read_required(source, &mut buf)?;
        return Err(FrameError::DictionaryUnsupported);
    }

    let mut checksum_byte = [0u8; 1];
    read_required(source, &mut checksum_byte)?;
    if verify_checksums && header_checksum(&header_bytes) != checksum_byte[0] {
        return Err(FrameError::ChecksumMismatch);
    }

    let descriptor = build_descriptor(&flags, block_max_size, content_size);

    let mut out = Vec::new();
    out.try_reserve(block_max_size.bytes())
        .map_err(|_| FrameError::OutOfMemory)?;
    let mut block_buf = Vec::new();
    block_buf
        .try_reserve(block_max_size.bytes())
        .map_err(|_| FrameError::OutOfMemory)?;

    loop {
        let mut header_word = [0u8; 4];
        read_required(source, &mut header_word)?;
        let word = u32::from_le_bytes(header_word);
        if word == 0 {
            break;
        }
        let uncompressed = word & BLOCK_UNCOMPRESSED_FLAG != 0;
        let block_size = (word & !BLOCK_UNCOMPRESSED_FLAG) as usize;

        block_buf.clear();
        block_buf
            .try_reserve(block_size)
            .map_err(|_| FrameError::OutOfMemory)?;
        block_buf.resize(block_size, 0);
        let read = fill(source, &mut block_buf)?;
        if read < block_size {
            return Err(FrameError::PrematureEnd);
        }

        if flags.block_checksum {
            let mut cksum_buf = [0u8; 4];
            read_required(source, &mut cksum_buf)?;
            let expected = u32::from_le_bytes(cksum_buf);
            if verify_checksums && xxh32_oneshot(&block_buf, 0) != expected {
                return Err(FrameError::ChecksumMismatch);
            }
        }

        if uncompressed {
            out.try_reserve(block_buf.len())
                .map_err(|_| FrameError::OutOfMemory)?;
            out.extend_from_slice(&block_buf);
        } else {
            decode_block_into(&block_buf, &mut out)?;
        }
    }

    if flags.content_checksum {
        let mut cksum_buf = [0u8; 4];
        read_required(source, &mut cksum_buf)?;
        let expected = u32::from_le_bytes(cksum_buf);
        if verify_checksums && xxh32_oneshot(&out, 0) != expected {
            return Err(FrameError::ChecksumMismatch);
        }
    }

    if let Some(declared) = content_size {
        if verify_checksums && declared != out.len() as u64 {
            warn_content_size_mismatch(declared, out.len() as u64);
        }
    }

    Ok(DecodedFrame {
        kind: FrameKind::Lz4Frame,
        descriptor: Some(descriptor),
        data: out,
    })
}

fn decode_skippable_frame(
    source: &mut (impl ByteSource + ?Sized),
) -> Result<DecodedFrame, FrameError> {
    let mut size_buf = [0u8; 4];
    read_required(source, &mut size_buf)?;
    let size = u32::from_le_bytes(size_buf);
    source
        .skip(size as u64)
        .map_err(|_| FrameError::PrematureEnd)?;
    Ok(DecodedFrame {
        kind: FrameKind::Skippable,
        descriptor: None,
        data: Vec::new(),
    })
}

/// Read a fixed-size field, failing with `PrematureEnd` on any short read.
/// Every field past the frame's opening magic is mandatory.
fn read_required(
    source: &mut (impl ByteSource + ?Sized),
    buf: &mut [u8],
) -> Result<(), FrameError> {
    let n = fill(source, buf)?;
    if n < buf.len() {
        return Err(FrameError::PrematureEnd);
    }
    Ok(())
}

/// A declared content size that disagrees with the decoded length is a
/// diagnostic, never a decode failure — matching the reference
/// implementation's own advisory-only treatment of this field. This
/// crate carries no logging dependency, so the one advisory message this
/// format calls for is a plain `eprintln!`, not a `log`/`tracing` call
/// site with no other use in the crate.
fn warn_content_size_mismatch(declared: u64, actual: u64) {
    eprintln!("lz4: declared content size {declared} does not match decoded size {actual}");
}
