//! Key-relative prefix compression of stored values.
//!
//! Grounded on `compress()`/`decompress()` in `original_source/src/trie.c`.
//! The source's `decompress` truncates the copied suffix in a way one
//! revision history calls out as a likely bug (`data_len - common + 1`
//! bytes copied instead of the full suffix); this implementation copies
//! the full `v[p..]` suffix, per the decided open question in
//! `SPEC_FULL.md` §9.

/// Longest shared prefix between `key` and `value`, capped at 9 so it fits
/// in a single ASCII digit header byte.
fn shared_prefix_len(key: &[u8], value: &[u8]) -> usize {
    key.iter()
        .zip(value.iter())
        .take_while(|(a, b)| a == b)
        .count()
        .min(9)
}

/// Rewrite `value` as a one-byte prefix-length header followed by the
/// unshared suffix.
pub fn compress(key: &[u8], value: &[u8]) -> Vec<u8> {
    let p = shared_prefix_len(key, value);
    let mut out = Vec::with_capacity(1 + value.len() - p);
    out.push(b'0' + p as u8);
    out.extend_from_slice(&value[p..]);
    out
}

/// Inverse of [`compress`]: `piece` is a single compressed value (header
/// byte + suffix, no `'\n'`), reconstructed against the original `key`.
/// `None` if `piece` is empty, its header isn't a decimal digit, or the
/// claimed shared-prefix length exceeds `key` — a malformed on-disk
/// blob, never produced by [`compress`] itself.
pub fn decompress_piece(key: &[u8], piece: &[u8]) -> Option<Vec<u8>> {
    let header = *piece.first()?;
    if !header.is_ascii_digit() {
        return None;
    }
    let p = (header - b'0') as usize;
    if p > key.len() {
        return None;
    }
    let mut out = Vec::with_capacity(p + piece.len() - 1);
    out.extend_from_slice(&key[..p]);
    out.extend_from_slice(&piece[1..]);
    Some(out)
}

#[cfg(test)]
#[path = "compress_test.rs"]
mod compress_test;
