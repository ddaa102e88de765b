//! Encoded fluid level.
//!
//! A level packs a strength in the low three bits and a falling flag in bit
//! three: `(falling << 3) | strength`. Strength 0 is a source, 1 to 7 are
//! flowing cells getting weaker away from their source.

use std::fmt::{self, Display};

use thiserror::Error;

/// Bit marking a cell fed from directly above.
pub const FALLING_FLAG: u8 = 0x08;
/// The weakest strength a flowing cell can have.
pub const MAX_STRENGTH: u8 = 0x07;

/// Errors raised by strict level decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The raw byte does not fit in four bits.
    #[error("fluid level {0} is outside 0..=15")]
    OutOfRange(u8),
    /// The strength does not fit in three bits.
    #[error("fluid strength {0} is outside 0..=7")]
    StrengthOutOfRange(u8),
}

/// A validated fluid level in `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FluidLevel(u8);

impl FluidLevel {
    /// A source.
    pub const SOURCE: Self = Self(0);

    /// Creates a level from a strength and falling flag.
    pub fn new(strength: u8, falling: bool) -> Result<Self, LevelError> {
        if strength > MAX_STRENGTH {
            return Err(LevelError::StrengthOutOfRange(strength));
        }
        Ok(Self(if falling { strength | FALLING_FLAG } else { strength }))
    }

    /// A flowing, non-falling level. Strengths above 7 are clamped.
    #[must_use]
    pub const fn flowing(strength: u8) -> Self {
        Self(if strength > MAX_STRENGTH { MAX_STRENGTH } else { strength })
    }

    /// A falling level. Strengths above 7 are clamped.
    #[must_use]
    pub const fn falling(strength: u8) -> Self {
        Self(Self::flowing(strength).0 | FALLING_FLAG)
    }

    /// Normalizes any raw byte read from the grid.
    ///
    /// Values above 15 keep the falling flag and clamp their strength to 7,
    /// so nothing unbounded ever reaches the flow arithmetic.
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        if raw > MAX_STRENGTH | FALLING_FLAG {
            log::warn!("Corrupt fluid level {raw}, clamping to a falling level");
            Self(MAX_STRENGTH | FALLING_FLAG)
        } else {
            Self(raw)
        }
    }

    /// The raw encoded value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The strength without the falling flag.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self.0 & MAX_STRENGTH
    }

    /// Returns true if this cell is fed from above.
    #[must_use]
    pub const fn is_falling(self) -> bool {
        self.0 & FALLING_FLAG != 0
    }

    /// Returns true for a source.
    #[must_use]
    pub const fn is_source(self) -> bool {
        self.0 == 0
    }

    /// The strength used when measuring how far the fluid can still spread.
    /// Falling cells count as full strength.
    #[must_use]
    pub const fn effective(self) -> u8 {
        if self.is_falling() { 0 } else { self.0 }
    }
}

impl TryFrom<u8> for FluidLevel {
    type Error = LevelError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > MAX_STRENGTH | FALLING_FLAG {
            Err(LevelError::OutOfRange(raw))
        } else {
            Ok(Self(raw))
        }
    }
}

impl Display for FluidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_falling() {
            write!(f, "falling({})", self.strength())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
