//! RNG module - uniform random piece selection
//!
//! Every new piece kind is an independent uniform choice over the seven
//! kinds. There is no bag: repeats and droughts are possible.
//!
//! Backed by a simple seeded LCG so games replay exactly in tests.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

const LCG_MUL: u32 = 1664525;
const LCG_INC: u32 = 1013904223;

/// Number of distinct values in the high half of an LCG output
const HIGH_SPAN: u32 = 1 << 16;

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        self.state
    }

    /// Generate a uniform value in range [0, max)
    ///
    /// Uses the high 16 bits of each output, since the low bits of a
    /// power-of-two LCG cycle quickly. Draws at or above the last whole
    /// multiple of `max` are thrown away and redrawn, so no value is favored.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0 or above 65536.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0 && max <= HIGH_SPAN, "range {max} out of bounds");
        let limit = HIGH_SPAN - HIGH_SPAN % max;
        loop {
            let x = self.next_u32() >> 16;
            if x < limit {
                return x % max;
            }
        }
    }
}

/// Source of new piece kinds
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    seed: u32,
    rng: SimpleRng,
}

impl PieceRandomizer {
    /// Create a randomizer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind, uniformly and independently of history
    pub fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_next_range_redraws_past_last_whole_multiple() {
        // Inverse of the multiplier mod 2^32 (Newton iteration, odd input).
        let mut inv = LCG_MUL;
        for _ in 0..5 {
            inv = inv.wrapping_mul(2u32.wrapping_sub(LCG_MUL.wrapping_mul(inv)));
        }
        // State whose next output has high half 0xFFFF, which is past
        // 65534, the last multiple of 7.
        let state = 0xFFFF_0000u32.wrapping_sub(LCG_INC).wrapping_mul(inv);
        let mut rng = SimpleRng { state };

        let mut raw = rng.clone();
        assert_eq!(raw.next_u32() >> 16, 0xFFFF);
        let second = raw.next_u32() >> 16;
        assert!(second < HIGH_SPAN - HIGH_SPAN % 7);

        assert_eq!(rng.next_range(7), second % 7);
        assert_eq!(rng.state, raw.state);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_next_range_rejects_empty_range() {
        SimpleRng::new(1).next_range(0);
    }

    #[test]
    fn test_randomizer_replays_with_same_seed() {
        let mut a = PieceRandomizer::new(99);
        let mut b = PieceRandomizer::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_randomizer_covers_all_kinds() {
        let mut randomizer = PieceRandomizer::new(1);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = randomizer.next_kind();
            let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        // Roughly uniform: each kind near 1000 draws
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (700..1300).contains(&count),
                "{:?} drawn {} times",
                ShapeKind::ALL[i],
                count
            );
        }
    }
}
