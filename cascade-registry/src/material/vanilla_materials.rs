//! Built-in materials.

use super::{Material, MaterialId, MaterialRegistry};
use crate::fluid::FluidKind;

/// Empty space.
pub const AIR: Material = Material {
    id: MaterialId(0),
    name: "air",
    solid: false,
    flowable: true,
    fluid: None,
};

/// Generic rock. Lava flowing down into water leaves this behind.
pub const STONE: Material = Material {
    id: MaterialId(1),
    name: "stone",
    solid: true,
    flowable: false,
    fluid: None,
};

/// Flowing lava touched by water hardens into this.
pub const COBBLESTONE: Material = Material {
    id: MaterialId(2),
    name: "cobblestone",
    solid: true,
    flowable: false,
    fluid: None,
};

/// A lava source touched by water hardens into this.
pub const OBSIDIAN: Material = Material {
    id: MaterialId(3),
    name: "obsidian",
    solid: true,
    flowable: false,
    fluid: None,
};

/// Cells holding water at any level.
pub const WATER: Material = Material {
    id: MaterialId(4),
    name: "water",
    solid: false,
    flowable: false,
    fluid: Some(FluidKind::Water),
};

/// Cells holding lava at any level.
pub const LAVA: Material = Material {
    id: MaterialId(5),
    name: "lava",
    solid: false,
    flowable: false,
    fluid: Some(FluidKind::Lava),
};

/// A plant that fluids wash away.
pub const SHORT_GRASS: Material = Material {
    id: MaterialId(6),
    name: "short_grass",
    solid: false,
    flowable: true,
    fluid: None,
};

/// Returned for reads outside the world's vertical bounds.
pub const BARRIER: Material = Material {
    id: MaterialId(7),
    name: "barrier",
    solid: true,
    flowable: false,
    fluid: None,
};

/// Registers every built-in material.
pub fn register_all(registry: &mut MaterialRegistry) {
    for material in [AIR, STONE, COBBLESTONE, OBSIDIAN, WATER, LAVA, SHORT_GRASS, BARRIER] {
        registry.register(material);
    }
}
