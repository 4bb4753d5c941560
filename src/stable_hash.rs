//! Deterministic hashing helpers backing every "random" draw in this crate.
//!
//! This module intentionally does **not** provide cryptographic guarantees; it is meant for
//! reproducible pseudo-random draws that can be recomputed offline from the logged decision key.

/// Deterministic (non-crypto) stable hash over raw bytes.
///
/// Implementation:
/// - FNV-1a over bytes (cheap, stable across platforms)
/// - SplitMix64 finalizer (improves bit diffusion / uniformity)
#[must_use]
pub fn stable_hash64(seed: u64, bytes: &[u8]) -> u64 {
    let mut h: u64 = 14695981039346656037u64;
    for b in bytes {
        h ^= *b as u64;
        h = h.wrapping_mul(1099511628211u64);
    }
    splitmix64(seed ^ h)
}

/// Map a 64-bit hash linearly into `[0, 1)`.
///
/// Uses the top 53 bits so every output is exactly representable as an `f64`
/// and `1.0` is never produced.
#[inline]
#[must_use]
pub fn unit_interval(h: u64) -> f64 {
    (h >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
