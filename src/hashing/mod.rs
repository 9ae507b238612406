//! Stable BLAKE3-derived hashes.
//!
//! Used where output must be reproducible across runs and platforms: the stub embedder's
//! token buckets and the screenplay analyzer's deterministic market pick.

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Not used for anything security-relevant; collisions only merge stub-embedding buckets.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Hashes a single token for feature hashing.
#[inline]
pub fn hash_token(token: &str) -> u64 {
    hash_to_u64(token.as_bytes())
}

/// Maps `data` onto an index in `0..len` (returns 0 for `len == 0`).
#[inline]
pub fn hash_to_index(data: &[u8], len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (hash_to_u64(data) % len as u64) as usize
}
