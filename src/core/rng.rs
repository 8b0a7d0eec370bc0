//! Deterministic deck randomness.
//!
//! ## Replay contract
//!
//! The deck is reconstructed from the seed string on every move instead of
//! being stored, so the seed→ordering mapping must never change. The
//! canonical pair, fixed forever:
//!
//! - seed hash: 64-bit FNV-1a over the seed string's UTF-8 bytes
//! - generator: ChaCha8 seeded from that u64
//! - shuffle: Fisher-Yates from the last index down to 1, swapping index `i`
//!   with a uniform index in `0..=i`
//!
//! FNV-1a is used rather than `DefaultHasher` because std's hasher is not
//! stable across Rust releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Canonical 64-bit FNV-1a hash of a seed string.
#[must_use]
pub fn fnv1a64(seed: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in seed.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Deterministic RNG for deck shuffling.
///
/// Same seed string, same sequence, on every host.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
}

impl DeckRng {
    /// Seed from an opaque seed string.
    #[must_use]
    pub fn from_seed_str(seed: &str) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(fnv1a64(seed)),
        }
    }

    /// Uniform index in `0..=bound`.
    fn swap_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..=bound)
    }

    /// In-place Fisher-Yates shuffle, last index down to 1.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.swap_index(i);
            slice.swap(i, j);
        }
    }
}
