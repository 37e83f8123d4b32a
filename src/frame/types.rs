//! Frame descriptor types.

/// The three-bit block-max-size code from the block-descriptor byte,
/// resolved to the maximum number of bytes a single data block may
/// decompress to. The frame decoder uses this value to preallocate its
/// output and per-block scratch buffers before reading the first data
/// block; a conforming encoder never exceeds it, but this decoder does
/// not enforce it as a hard limit on untrusted input — buffers still
/// grow past it via fallible reallocation if a block turns out larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMaxSize {
    Max64Kb,
    Max256Kb,
    Max1Mb,
    Max4Mb,
}

impl BlockMaxSize {
    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            4 => Some(Self::Max64Kb),
            5 => Some(Self::Max256Kb),
            6 => Some(Self::Max1Mb),
            7 => Some(Self::Max4Mb),
            _ => None,
        }
    }

    /// Maximum decompressed size of one data block under this code.
    pub fn bytes(self) -> usize {
        match self {
            Self::Max64Kb => 64 * 1024,
            Self::Max256Kb => 256 * 1024,
            Self::Max1Mb => 1024 * 1024,
            Self::Max4Mb => 4 * 1024 * 1024,
        }
    }
}

/// A fully parsed and validated LZ4 frame descriptor.
#[derive(Debug, Clone, Copy)]
pub struct FrameDescriptor {
    /// Advisory only; this decoder resolves every match offset against the
    /// whole frame buffer regardless of this flag (see the frame decoder's
    /// module docs).
    pub block_independent: bool,
    pub block_checksum: bool,
    pub content_size: Option<u64>,
    pub content_checksum: bool,
    pub block_max_size: BlockMaxSize,
}

/// The result of decoding one frame from a byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// An ordinary LZ4 frame; its decoded content is carried alongside.
    Lz4Frame,
    /// A skippable frame. Its payload is opaque and was discarded; the
    /// decoded content is always empty.
    Skippable,
}
