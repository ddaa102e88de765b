//! Fluid kinds and their flow constants.

mod level;
mod registry;
pub mod vanilla_fluids;

use std::fmt::{self, Display};

pub use level::{FALLING_FLAG, FluidLevel, LevelError, MAX_STRENGTH};
pub use registry::FluidRegistry;

use crate::material::{MaterialId, vanilla_materials};

/// The kind of fluid a cell carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidKind {
    /// The light fluid: spreads fast and far, forms infinite pools.
    Water,
    /// The heavy fluid: spreads slowly, hardens on contact with water.
    Lava,
}

impl FluidKind {
    /// Every fluid kind.
    pub const ALL: [FluidKind; 2] = [FluidKind::Water, FluidKind::Lava];

    /// The material used for cells of this kind.
    #[must_use]
    pub const fn material(self) -> MaterialId {
        match self {
            Self::Water => vanilla_materials::WATER.id,
            Self::Lava => vanilla_materials::LAVA.id,
        }
    }
}

impl Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water => f.write_str("water"),
            Self::Lava => f.write_str("lava"),
        }
    }
}

/// What a fluid turns into when it touches an incompatible fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hardening {
    /// The fluid that triggers the reaction.
    pub reacts_with: FluidKind,
    /// Result for a source cell (level 0).
    pub source_result: MaterialId,
    /// Result for a flowing cell at or below `partial_max_level`.
    pub partial_result: MaterialId,
    /// Highest raw level that still hardens into `partial_result`.
    pub partial_max_level: u8,
    /// Result written into a cell of `reacts_with` that this fluid falls into.
    pub flow_into_result: MaterialId,
}

/// Static flow constants of one fluid kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidEntry {
    /// The kind described by this entry.
    pub kind: FluidKind,
    /// Lowercase name.
    pub name: &'static str,
    /// Ticks between a notification and the evaluation it books.
    pub tick_delay: u32,
    /// Strength lost per block of lateral spread.
    pub drop_off: u8,
    /// When set, a partially decayed cell only changes level with a
    /// one in `throttle` chance per evaluation.
    pub throttle: Option<i32>,
    /// Whether two neighboring sources over a solid floor form a new source.
    pub forms_sources: bool,
    /// Reaction with an incompatible fluid.
    pub hardening: Option<Hardening>,
}
