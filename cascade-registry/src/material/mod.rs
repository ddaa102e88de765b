//! Block materials.

mod registry;
pub mod vanilla_materials;

pub use registry::MaterialRegistry;

use crate::fluid::FluidKind;

/// Raw material id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u16);

/// Static properties of a material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// The id of this material.
    pub id: MaterialId,
    /// Lowercase name.
    pub name: &'static str,
    /// Full, supporting block. Fluids count a solid floor as support when
    /// forming new sources.
    pub solid: bool,
    /// Spreading fluid may overwrite this material, breaking it first if it
    /// is not air.
    pub flowable: bool,
    /// The fluid this material carries, if any.
    pub fluid: Option<FluidKind>,
}
