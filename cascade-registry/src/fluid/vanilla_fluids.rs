//! Built-in fluid kinds.

use super::{FluidEntry, FluidKind, FluidRegistry, Hardening};
use crate::material::vanilla_materials;

/// Fast light fluid that forms new sources.
pub const WATER: FluidEntry = FluidEntry {
    kind: FluidKind::Water,
    name: "water",
    tick_delay: 5,
    drop_off: 1,
    throttle: None,
    forms_sources: true,
    hardening: None,
};

/// Slow heavy fluid that hardens against water.
pub const LAVA: FluidEntry = FluidEntry {
    kind: FluidKind::Lava,
    name: "lava",
    tick_delay: 30,
    drop_off: 2,
    throttle: Some(4),
    forms_sources: false,
    hardening: Some(Hardening {
        reacts_with: FluidKind::Water,
        source_result: vanilla_materials::OBSIDIAN.id,
        partial_result: vanilla_materials::COBBLESTONE.id,
        partial_max_level: 4,
        flow_into_result: vanilla_materials::STONE.id,
    }),
};

/// Registers every built-in fluid kind.
pub fn register_all(registry: &mut FluidRegistry) {
    registry.register(WATER);
    registry.register(LAVA);
}
