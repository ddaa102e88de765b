//! Fluid behavior system.
//!
//! This module handles fluid mechanics: spreading, receding, falling and
//! hardening. Every fluid kind runs the same [`FlowingFluid`] state machine,
//! parameterized by its registry entry.

pub mod flow_vector;
pub mod flowing;
pub mod slope;
mod spread_context;

use cascade_registry::{CellState, FluidKind};
use cascade_utils::BlockPos;

pub use flow_vector::flow_vector;
pub use flowing::{FlowingFluid, fluid_behaviour};
pub use slope::{FlowCosts, flow_costs, optimal_flow_directions};
pub use spread_context::SpreadContext;

use crate::world::BlockAccess;

/// Raw level of `state` if it holds `kind`, otherwise -1.
#[must_use]
pub fn decay_of(state: CellState, kind: FluidKind) -> i32 {
    if state.fluid_kind() == Some(kind) {
        i32::from(state.fluid_level().raw())
    } else {
        -1
    }
}

/// Like [`decay_of`], with falling levels counted as full strength.
#[must_use]
pub fn effective_decay_of(state: CellState, kind: FluidKind) -> i32 {
    match decay_of(state, kind) {
        decay if decay >= 8 => 0,
        decay => decay,
    }
}

/// Raw level of `kind` at `pos`, or -1 when the cell holds something else.
pub fn get_flow_decay<W: BlockAccess + ?Sized>(world: &W, pos: BlockPos, kind: FluidKind) -> i32 {
    decay_of(world.get_cell(pos), kind)
}

/// Effective level of `kind` at `pos`, or -1 when the cell holds something else.
pub fn get_effective_flow_decay<W: BlockAccess + ?Sized>(
    world: &W,
    pos: BlockPos,
    kind: FluidKind,
) -> i32 {
    effective_decay_of(world.get_cell(pos), kind)
}

#[cfg(test)]
mod tests {
    use cascade_registry::{FluidLevel, vanilla_materials};

    use super::*;

    #[test]
    fn test_decay_of_other_material_is_negative() {
        let stone = CellState::of(vanilla_materials::STONE.id);
        let lava = CellState::fluid(FluidKind::Lava, FluidLevel::flowing(2));
        assert_eq!(decay_of(stone, FluidKind::Water), -1);
        assert_eq!(decay_of(lava, FluidKind::Water), -1);
        assert_eq!(decay_of(lava, FluidKind::Lava), 2);
    }

    #[test]
    fn test_falling_counts_as_full_strength() {
        let falling = CellState::fluid(FluidKind::Water, FluidLevel::falling(3));
        assert_eq!(decay_of(falling, FluidKind::Water), 11);
        assert_eq!(effective_decay_of(falling, FluidKind::Water), 0);
    }
}
