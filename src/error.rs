//! Crate-wide error types.
//!
//! Split into a block-level and a frame-level enum the way this crate
//! splits block/ and frame/ concerns into separate modules: `FrameError`
//! embeds `BlockError` for the block-decode delegation step inside a data
//! block. Both implement `Display`/`std::error::Error` so they compose
//! with `?` through call sites that return a boxed or dynamic error.

use std::fmt;
use std::io;

/// Errors produced while decoding a single LZ4 block.
#[derive(Debug)]
pub enum BlockError {
    /// The source window was exhausted mid-token, mid-literal, mid-offset,
    /// or mid-extended-length.
    PrematureEnd,
    /// A match offset was zero, or pointed further back than any byte
    /// decoded so far.
    BadMatchOffset,
    /// A literal or match length overflowed the integer width used to
    /// accumulate it, or would overrun a caller-bounded output.
    BadMatchLen,
    /// The global allocator refused to grow the output buffer.
    OutOfMemory,
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockError::PrematureEnd => "lz4 block: source exhausted mid-sequence",
            BlockError::BadMatchOffset => "lz4 block: match offset is zero or exceeds decoded length",
            BlockError::BadMatchLen => "lz4 block: match or literal length overflowed",
            BlockError::OutOfMemory => "lz4 block: allocator refused to grow output buffer",
        })
    }
}

impl std::error::Error for BlockError {}

/// Errors produced while decoding an LZ4 frame.
#[derive(Debug)]
pub enum FrameError {
    /// The source was cleanly empty at a frame boundary. Not a user-facing
    /// failure: the stream adapter converts this into a zero-byte read.
    EndOfStream,
    /// The 4-byte magic was neither the LZ4 frame magic nor in the
    /// skippable-frame magic range.
    BadStartMagic,
    /// Reserved for the legacy single-block framing variant's end word;
    /// this decoder does not parse that variant (see crate docs), so this
    /// variant is never constructed today.
    BadEndMagic,
    /// A reserved descriptor or block-descriptor bit was nonzero.
    ReservedBitSet,
    /// The descriptor's version field was not 1.
    InvalidVersion,
    /// The descriptor's `dict_id` flag was set.
    DictionaryUnsupported,
    /// The block-max-size code was outside `{4, 5, 6, 7}`.
    InvalidMaxSize,
    /// A header, block, or content XXH32 checksum did not match, with
    /// verification enabled.
    ChecksumMismatch,
    /// The source was exhausted mid-field (anywhere other than a frame
    /// boundary).
    PrematureEnd,
    /// A compressed data block failed to decode.
    Block(BlockError),
    /// The global allocator refused to grow a frame-level buffer.
    OutOfMemory,
    /// An error surfaced verbatim from the underlying byte source.
    Source(io::Error),
}

impl From<BlockError> for FrameError {
    fn from(e: BlockError) -> Self {
        match e {
            BlockError::OutOfMemory => FrameError::OutOfMemory,
            other => FrameError::Block(other),
        }
    }
}

impl From<io::Error> for FrameError {
    fn from(e: io::Error) -> Self {
        FrameError::Source(e)
    }
}

/// Lets [`FrameError`] cross a [`std::io::Read`] boundary — used by
/// [`crate::stream::StreamReader`], whose `Read` impl can only report
/// `io::Error`.
impl From<FrameError> for io::Error {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::Source(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::EndOfStream => f.write_str("lz4 frame: end of stream at frame boundary"),
            FrameError::BadStartMagic => f.write_str("lz4 frame: bad start magic"),
            FrameError::BadEndMagic => f.write_str("lz4 frame: bad end magic"),
            FrameError::ReservedBitSet => f.write_str("lz4 frame: reserved bit set"),
            FrameError::InvalidVersion => f.write_str("lz4 frame: unsupported descriptor version"),
            FrameError::DictionaryUnsupported => f.write_str("lz4 frame: dictionary id present, unsupported"),
            FrameError::InvalidMaxSize => f.write_str("lz4 frame: invalid block-max-size code"),
            FrameError::ChecksumMismatch => f.write_str("lz4 frame: checksum mismatch"),
            FrameError::PrematureEnd => f.write_str("lz4 frame: source exhausted mid-field"),
            FrameError::Block(e) => write!(f, "lz4 frame: {e}"),
            FrameError::OutOfMemory => f.write_str("lz4 frame: allocator refused to grow buffer"),
            FrameError::Source(e) => write!(f, "lz4 frame: source error: {e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Block(e) => Some(e),
            FrameError::Source(e) => Some(e),
            _ => None,
        }
    }
}

impl FrameError {
    /// `true` for [`FrameError::EndOfStream`], the one variant the stream
    /// adapter treats as non-fatal.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, FrameError::EndOfStream)
    }
}
