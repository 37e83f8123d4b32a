//! LZ4 Frame format — decoding.
//!
//! Corresponds to the decode path of `lz4frame.c` / `lz4frame.h` from LZ4
//! v1.10.0: magic detection, descriptor parsing (with its header checksum),
//! the data-block loop (delegating compressed payloads to [`crate::block`]),
//! and the trailing content checksum. There is no frame encoder here; this
//! crate is decode-only.

mod decode;
mod header;
mod types;

pub use decode::{decode_frame, DecodedFrame};
pub use types::{BlockMaxSize, FrameDescriptor, FrameKind};
