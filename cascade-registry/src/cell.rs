//! The content of a single grid cell.

use crate::REGISTRY;
use crate::fluid::{FluidKind, FluidLevel};
use crate::material::{Material, MaterialId, vanilla_materials};

/// A material plus its raw level byte.
///
/// The level only carries meaning for fluid materials, where it holds the
/// encoded [`FluidLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellState {
    /// The material occupying the cell.
    pub material: MaterialId,
    /// The raw level byte.
    pub level: u8,
}

impl CellState {
    /// An empty cell.
    pub const AIR: Self = Self::of(vanilla_materials::AIR.id);

    /// A cell filled with a material at level 0.
    #[must_use]
    pub const fn of(material: MaterialId) -> Self {
        Self { material, level: 0 }
    }

    /// A fluid cell of the given kind and level.
    #[must_use]
    pub const fn fluid(kind: FluidKind, level: FluidLevel) -> Self {
        Self {
            material: kind.material(),
            level: level.raw(),
        }
    }

    /// Looks up the material of this cell.
    #[must_use]
    pub fn material(&self) -> Option<&'static Material> {
        REGISTRY.materials.get(self.material)
    }

    /// The fluid kind of this cell, if it holds one.
    #[must_use]
    pub fn fluid_kind(&self) -> Option<FluidKind> {
        self.material().and_then(|material| material.fluid)
    }

    /// The normalized fluid level of this cell.
    #[must_use]
    pub fn fluid_level(&self) -> FluidLevel {
        FluidLevel::from_raw(self.level)
    }

    /// Returns true if the cell holds no material.
    #[must_use]
    pub fn is_air(&self) -> bool {
        self.material == vanilla_materials::AIR.id
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::AIR
    }
}
