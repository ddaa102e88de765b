use crate::random::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// A 48-bit linear congruential generator.
pub struct LegacyRandom {
    state: i64,
}

impl LegacyRandom {
    /// Creates a generator from a seed, scrambled with the multiplier.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: (seed as i64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns its top `bits` bits.
    fn next_bits(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound & (bound - 1) == 0 {
            // Powers of two take the high bits directly
            return ((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            // Reject the partial bucket at the top of the range
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }
}
