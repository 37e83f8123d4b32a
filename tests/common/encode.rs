// A minimal LZ4 block/frame encoder, used only to produce valid
// compressed fixtures for tests and benches.
//
// This is intentionally not the library's own code: compression is a
// non-goal of the crate under test, so the fixtures that exercise its
// decode path are generated by a small greedy encoder that lives only in
// test/bench harnesses and is never part of the public API.

const MIN_MATCH: usize = 4;
const HASH_LOG: u32 = 14;
const HASH_SIZE: usize = 1 << HASH_LOG;
const MAX_OFFSET: usize = 0xFFFF;

fn hash4(bytes: &[u8]) -> usize {
    let v = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    ((v.wrapping_mul(2_654_435_761)) >> (32 - HASH_LOG)) as usize
}

fn length_code(len: usize) -> u8 {
    len.min(15) as u8
}

fn write_extra_length(out: &mut Vec<u8>, len: usize) {
    if len < 15 {
        return;
    }
    let mut rem = len - 15;
    while rem >= 255 {
        out.push(255);
        rem -= 255;
    }
    out.push(rem as u8);
}

/// Encode `src` as a single valid LZ4 block (no frame wrapper). Uses a
/// simple hash-chain-free greedy matcher: good enough to produce both
/// literal runs and back-references for test/bench fixtures, not tuned for
/// compression ratio.
pub fn encode_block(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut table = vec![usize::MAX; HASH_SIZE];
    let n = src.len();
    let mut pos = 0usize;
    let mut literal_start = 0usize;

    while pos + MIN_MATCH <= n {
        let h = hash4(&src[pos..pos + 4]);
        let candidate = table[h];
        table[h] = pos;

        let is_match = candidate != usize::MAX
            && pos - candidate <= MAX_OFFSET
            && src[candidate..candidate + MIN_MATCH] == src[pos..pos + MIN_MATCH];

        if !is_match {
            pos += 1;
            continue;
        }

        let offset = pos - candidate;
        let mut match_len = MIN_MATCH;
        while pos + match_len < n && src[candidate + match_len] == src[pos + match_len] {
            match_len += 1;
        }

        emit_sequence(&mut out, &src[literal_start..pos], offset, match_len);
        pos += match_len;
        literal_start = pos;
    }

    emit_last_literals(&mut out, &src[literal_start..]);
    out
}

fn emit_sequence(out: &mut Vec<u8>, literal: &[u8], offset: usize, match_len: usize) {
    let match_code_len = match_len - MIN_MATCH;
    let token = (length_code(literal.len()) << 4) | length_code(match_code_len);
    out.push(token);
    write_extra_length(out, literal.len());
    out.extend_from_slice(literal);
    out.extend_from_slice(&(offset as u16).to_le_bytes());
    write_extra_length(out, match_code_len);
}

fn emit_last_literals(out: &mut Vec<u8>, literal: &[u8]) {
    let token = length_code(literal.len()) << 4;
    out.push(token);
    write_extra_length(out, literal.len());
    out.extend_from_slice(literal);
}

/// Which optional descriptor fields [`encode_frame`] should set.
#[derive(Clone, Copy, Default)]
pub struct EncodeOptions {
    pub block_checksum: bool,
    pub content_checksum: bool,
    pub content_size: bool,
}

const LZ4_MAGIC: u32 = 0x184D_2204;

/// Encode `content` as a complete, valid, single-block LZ4 frame.
pub fn encode_frame(content: &[u8], opts: &EncodeOptions) -> Vec<u8> {
    encode_frame_chunked(content, content.len().max(1), opts)
}

/// Encode `content` as a complete, valid LZ4 frame, splitting it into data
/// blocks of at most `chunk_size` uncompressed bytes each — lets tests
/// exercise cross-block back-references and the multi-block loop in
/// [`crate::frame::decode_frame`]-equivalent code paths.
pub fn encode_frame_chunked(content: &[u8], chunk_size: usize, opts: &EncodeOptions) -> Vec<u8> {
    use lz4::xxhash::xxh32_oneshot;

    let mut out = LZ4_MAGIC.to_le_bytes().to_vec();

    let mut flg = 0b0100_0000u8; // version = 1
    if opts.block_checksum {
        flg |= 1 << 4;
    }
    if opts.content_size {
        flg |= 1 << 3;
    }
    if opts.content_checksum {
        flg |= 1 << 2;
    }
    let bd = 0b0100_0000u8; // block_max_size code 4 (64 KiB), reserved bits zero

    let mut header = vec![flg, bd];
    if opts.content_size {
        header.extend_from_slice(&(content.len() as u64).to_le_bytes());
    }
    out.extend_from_slice(&header);
    out.push(((xxh32_oneshot(&header, 0) >> 8) & 0xFF) as u8);

    let chunk_size = chunk_size.max(1);
    for chunk in content.chunks(chunk_size) {
        let block = encode_block(chunk);
        out.extend_from_slice(&(block.len() as u32).to_le_bytes());
        out.extend_from_slice(&block);
        if opts.block_checksum {
            out.extend_from_slice(&xxh32_oneshot(&block, 0).to_le_bytes());
        }
    }
    if content.is_empty() {
        // No data blocks at all for empty content; fall straight to the
        // end mark, matching how an empty frame is encoded on the wire.
    }

    out.extend_from_slice(&0u32.to_le_bytes()); // end mark

    if opts.content_checksum {
        out.extend_from_slice(&xxh32_oneshot(content, 0).to_le_bytes());
    }

    out
}

/// Encode a skippable frame: any magic in `0x184D2A50..=0x184D2A5F`,
/// followed by its 4-byte length and opaque payload.
pub fn encode_skippable_frame(payload: &[u8]) -> Vec<u8> {
    let mut out = 0x184D_2A50u32.to_le_bytes().to_vec();
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    out
}
