//! Deterministic entropy.
//!
//! Every pseudo-random value produced by the built-in generators flows from a
//! single 64-bit seed:
//!
//! ```text
//! seed = use_execution_entropy ? crc32(identity) + extra_entropy : extra_entropy
//! ```
//!
//! The hash is CRC-32/IEEE (the zlib checksum) over the UTF-8 bytes of the
//! execution identity, widened to 64 bits; the addition wraps modulo 2^64.
//!
//! Generators never share a PRNG. Each call builds a fresh [`SeededRng`] from
//! an explicit seed, so the same seed always yields the same draws.

use rand::RngCore;
use rand_pcg::Pcg64Mcg;

/// Multiplier used to fill the low half of the generator state.
const STATE_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Hash an execution identity: CRC-32/IEEE of its UTF-8 bytes.
pub fn execution_hash(execution_identity: &str) -> u64 {
    u64::from(crc32fast::hash(execution_identity.as_bytes()))
}

/// Derive the seed for one invocation.
pub fn derive_seed(execution_identity: &str, use_execution_entropy: bool, extra_entropy: u64) -> u64 {
    if !use_execution_entropy {
        return extra_entropy;
    }
    execution_hash(execution_identity).wrapping_add(extra_entropy)
}

/// The pseudo-random generator shared by all built-in generators.
///
/// The algorithm is PCG MCG 128/64 XSL-RR. A 64-bit seed `s` becomes the
/// 128-bit state `(s << 64 | s * 0x9e3779b97f4a7c15) | 3`. Draws are defined
/// here rather than through `rand` distributions so that the output is pinned
/// to this module:
///
/// - [`SeededRng::next_f64`] is `(next_u64 >> 11) * 2^-53`
/// - [`SeededRng::below`] is `next_u64 % n`
pub struct SeededRng {
    inner: Pcg64Mcg,
}

impl SeededRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        let state = (u128::from(seed) << 64) | u128::from(seed.wrapping_mul(STATE_MIX));
        Self {
            inner: Pcg64Mcg::new(state | 3),
        }
    }

    /// Create the generator for one array index: seeded with `seed + index`,
    /// wrapping, so negative indexes are valid.
    pub fn for_index(seed: u64, index: i64) -> Self {
        Self::new(seed.wrapping_add_signed(index))
    }

    /// Draw a raw u64.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Draw a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64() >> 11;
        bits as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw an integer in [0, n). `n` must be non-zero.
    pub fn below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0, "n must be > 0");
        self.next_u64() % n
    }
}
