//! Frame descriptor bit layout and header checksum.
//!
//! Two bytes, unpacked as:
//!
//! ```text
//! FLG: | version:2 | block_indep:1 | block_cksum:1 | content_size:1 | content_cksum:1 | reserved:1 | dict_id:1 |
//! BD:  | reserved:1 | block_max_size:3 | reserved:4 |
//! ```

use crate::error::FrameError;
use crate::xxhash::xxh32_oneshot;

use super::types::{BlockMaxSize, FrameDescriptor};

const SUPPORTED_VERSION: u8 = 1;

/// The fixed fields decoded from the FLG byte, before the variable-length
/// optional trailer fields are known.
pub(crate) struct Flags {
    pub(crate) block_independent: bool,
    pub(crate) block_checksum: bool,
    pub(crate) content_size_present: bool,
    pub(crate) content_checksum: bool,
    pub(crate) dict_id_present: bool,
}

/// Parse and validate the FLG byte.
pub(crate) fn parse_flg(flg: u8) -> Result<Flags, FrameError> {
    let version = (flg >> 6) & 0x3;
    if version != SUPPORTED_VERSION {
        return Err(FrameError::InvalidVersion);
    }
    let reserved = (flg >> 1) & 0x1;
    if reserved != 0 {
        return Err(FrameError::ReservedBitSet);
    }
    Ok(Flags {
        block_independent: (flg >> 5) & 0x1 != 0,
        block_checksum: (flg >> 4) & 0x1 != 0,
        content_size_present: (flg >> 3) & 0x1 != 0,
        content_checksum: (flg >> 2) & 0x1 != 0,
        dict_id_present: flg & 0x1 != 0,
    })
}

/// Parse and validate the BD (block-descriptor) byte.
pub(crate) fn parse_bd(bd: u8) -> Result<BlockMaxSize, FrameError> {
    if (bd >> 7) & 0x1 != 0 || bd & 0x0F != 0 {
        return Err(FrameError::ReservedBitSet);
    }
    let code = (bd >> 4) & 0x7;
    BlockMaxSize::from_code(code).ok_or(FrameError::InvalidMaxSize)
}

/// Assemble the fully parsed descriptor from its pieces.
pub(crate) fn build_descriptor(
    flags: &Flags,
    block_max_size: BlockMaxSize,
    content_size: Option<u64>,
) -> FrameDescriptor {
    FrameDescriptor {
        block_independent: flags.block_independent,
        block_checksum: flags.block_checksum,
        content_size,
        content_checksum: flags.content_checksum,
        block_max_size,
    }
}

/// `(XXH32(header_bytes, seed=0) >> 8) & 0xFF`, the one-byte header
/// checksum trailing the descriptor and its optional fields.
pub(crate) fn header_checksum(header_bytes: &[u8]) -> u8 {
    ((xxh32_oneshot(header_bytes, 0) >> 8) & 0xFF) as u8
}
