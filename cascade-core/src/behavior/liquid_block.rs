//! Liquid block behavior (water, lava).

use cascade_registry::{FluidKind, FluidLevel};
use cascade_utils::BlockPos;
use cascade_utils::math::Vector3;

use crate::fluid::{FlowingFluid, flow_vector, fluid_behaviour};
use crate::world::{BlockAccess, FluidTickScheduler};

/// Behavior of a cell holding a fluid.
///
/// When a neighbor changes, the cell books an evaluation so it can recompute
/// whether it should still exist, grow, or shrink.
#[derive(Debug, Clone, Copy)]
pub struct LiquidBlockBehavior {
    fluid: FlowingFluid,
}

impl LiquidBlockBehavior {
    /// Creates a liquid behavior around a fluid state machine.
    #[must_use]
    pub const fn new(fluid: FlowingFluid) -> Self {
        Self { fluid }
    }

    /// The behavior for cells of `kind`, if the kind is registered.
    #[must_use]
    pub fn for_kind(kind: FluidKind) -> Option<Self> {
        fluid_behaviour(kind).map(Self::new)
    }

    /// The fluid state machine behind this block.
    #[must_use]
    pub const fn fluid(&self) -> &FlowingFluid {
        &self.fluid
    }

    /// Called when the cell at `pos` or a neighboring cell changed.
    pub fn handle_neighbor_changed<W>(&self, world: &W, pos: BlockPos)
    where
        W: BlockAccess + FluidTickScheduler + ?Sized,
    {
        self.fluid.on_neighbor_changed(world, pos);
    }

    /// Fraction of the cell left empty by a fluid at `level`.
    ///
    /// Sources and falling fluid leave 1/9 of the cell empty, strength 7
    /// leaves 8/9.
    #[must_use]
    pub fn fluid_height_percent(level: FluidLevel) -> f32 {
        f32::from(level.effective() + 1) / 9.0
    }

    /// The flow direction at `pos`.
    pub fn flow_vector<W: BlockAccess + ?Sized>(&self, world: &W, pos: BlockPos) -> Vector3<f64> {
        flow_vector(world, pos, self.fluid.kind())
    }

    /// Adds the push of the fluid at `pos` to an entity velocity.
    pub fn add_velocity_to_entity<W: BlockAccess + ?Sized>(
        &self,
        world: &W,
        pos: BlockPos,
        velocity: &mut Vector3<f64>,
    ) {
        *velocity += self.flow_vector(world, pos);
    }
}
