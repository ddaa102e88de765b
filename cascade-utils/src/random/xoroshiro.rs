use crate::random::Random;

const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;

/// Xoroshiro128++ generator.
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

impl Xoroshiro {
    /// Creates a generator from a 64-bit seed, spread over 128 bits of state.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::from_state(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    /// An all-zero state would only ever produce zeros.
    fn from_state(lo: u64, hi: u64) -> Self {
        if lo | hi == 0 {
            Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            }
        } else {
            Self { lo, hi }
        }
    }

    fn next_u64(&mut self) -> u64 {
        let (lo, hi) = (self.lo, self.hi);
        let result = lo.wrapping_add(hi).rotate_left(17).wrapping_add(lo);
        let hi = hi ^ lo;
        self.lo = lo.rotate_left(49) ^ hi ^ (hi << 21);
        self.hi = hi.rotate_left(28);
        result
    }
}

fn mix_stafford_13(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Random for Xoroshiro {
    fn next_i32(&mut self) -> i32 {
        self.next_u64() as i32
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        // Lemire's multiply-shift with rejection of the biased low products
        let bound = bound as u32;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let product = u64::from(self.next_i32() as u32) * u64::from(bound);
            if (product as u32) >= threshold {
                return (product >> 32) as i32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Xoroshiro::from_seed(1234);
        let mut b = Xoroshiro::from_seed(1234);
        assert!((0..32).all(|_| a.next_i32() == b.next_i32()));
    }

    #[test]
    fn test_bounded_covers_range() {
        let mut rand = Xoroshiro::from_seed(7);
        let mut seen = [false; 4];
        for _ in 0..256 {
            let value = rand.next_i32_bounded(4);
            assert!((0..4).contains(&value));
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_zero_state_is_replaced() {
        let mut rand = Xoroshiro::from_state(0, 0);
        assert_ne!(rand.next_u64(), 0);
    }
}
