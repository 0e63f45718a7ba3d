//! RNG oracle for the computer's decisions.
//!
//! The computer draws twice per set: once to sample its two distinct hands
//! and once to pick the hand it discards in the minus-one phase. Every draw
//! derives its own seed from the match seed and a running nonce, so a given
//! match seed always replays the same computer behaviour.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Pick an index into a collection of `len` elements.
    ///
    /// Returns 0 for empty or single-element collections without drawing.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.range(seed, 0, (len - 1) as u32) as usize
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Independent draw streams within a single set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RngContext {
    /// First computer hand.
    FirstHand = 0,
    /// Second computer hand, drawn from the remaining two.
    SecondHand = 1,
    /// Which computer hand to discard.
    Discard = 2,
}

/// Compute the seed for one draw.
///
/// * `game_seed` - Base seed fixed for the whole match
/// * `nonce` - Draw counter kept on the model
/// * `context` - Which decision the draw feeds
pub fn compute_seed(game_seed: u64, nonce: u64, context: RngContext) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_stays_in_bounds() {
        let rng = PcgRng;
        for seed in 0..1_000 {
            let value = rng.range(seed, 3, 7);
            assert!((3..=7).contains(&value));
        }
        assert_eq!(rng.range(9, 5, 5), 5);
    }

    #[test]
    fn pick_index_covers_every_slot() {
        let rng = PcgRng;
        let mut seen = [false; 3];
        for nonce in 0..200 {
            let seed = compute_seed(7, nonce, RngContext::FirstHand);
            seen[rng.pick_index(seed, 3)] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(rng.pick_index(1, 1), 0);
        assert_eq!(rng.pick_index(1, 0), 0);
    }

    #[test]
    fn contexts_produce_distinct_seeds() {
        let first = compute_seed(1, 5, RngContext::FirstHand);
        let second = compute_seed(1, 5, RngContext::SecondHand);
        let discard = compute_seed(1, 5, RngContext::Discard);
        assert_ne!(first, second);
        assert_ne!(second, discard);
        assert_ne!(first, compute_seed(1, 6, RngContext::FirstHand));
    }
}
