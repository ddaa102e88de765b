//! # Cascade Registry
//!
//! Static per-type data: materials, fluid kinds and their flow constants.
//! The vanilla content is registered once into [`REGISTRY`] and frozen.

use std::sync::LazyLock;

pub mod cell;
pub mod fluid;
pub mod material;

pub use cell::CellState;
pub use fluid::{
    FluidEntry, FluidKind, FluidLevel, FluidRegistry, Hardening, LevelError, vanilla_fluids,
};
pub use material::{Material, MaterialId, MaterialRegistry, vanilla_materials};

/// The global registry holding all vanilla content.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::vanilla);

/// Registries that stop accepting entries once frozen.
pub trait RegistryExt {
    /// Rejects any further registration.
    fn freeze(&mut self);
}

/// All registries bundled together.
pub struct Registry {
    /// Block materials.
    pub materials: MaterialRegistry,
    /// Fluid kinds.
    pub fluids: FluidRegistry,
}

impl Registry {
    /// Builds and freezes the vanilla registry.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut materials = MaterialRegistry::new();
        vanilla_materials::register_all(&mut materials);
        materials.freeze();

        let mut fluids = FluidRegistry::new();
        vanilla_fluids::register_all(&mut fluids);
        fluids.freeze();

        log::debug!(
            "Registry ready: {} materials, {} fluids",
            materials.len(),
            fluids.len()
        );

        Self { materials, fluids }
    }
}
