//! The narrow interfaces the fluid engine uses to reach a grid.

use cascade_registry::{CellState, FluidKind, REGISTRY};
use cascade_utils::{BlockPos, UpdateFlags};

/// Read and write access to the cells of a grid.
///
/// Methods take `&self`; implementations use interior mutability so that
/// evaluations can write while holding only a shared reference.
pub trait BlockAccess {
    /// Returns the cell at `pos`.
    fn get_cell(&self, pos: BlockPos) -> CellState;

    /// Writes `state` at `pos`.
    ///
    /// Returns `false` if nothing changed, in which case no neighbor is
    /// notified.
    fn set_cell(&self, pos: BlockPos, state: CellState, flags: UpdateFlags) -> bool;

    /// Removes a non-fluid occupant at `pos` so fluid can take its place.
    fn break_occupant(&self, pos: BlockPos);

    /// Whether spreading fluid may overwrite `state`.
    fn is_flow_receptive(&self, state: CellState) -> bool {
        state.material().is_some_and(|material| material.flowable)
    }

    /// Whether `state` is a full supporting block.
    fn is_solid(&self, state: CellState) -> bool {
        state.material().is_some_and(|material| material.solid)
    }

    /// Whether `kind` may form new sources in this grid.
    fn source_conversion(&self, kind: FluidKind) -> bool {
        REGISTRY
            .fluids
            .get(kind)
            .is_some_and(|entry| entry.forms_sources)
    }
}

/// Accepts requests to evaluate a fluid cell later.
pub trait FluidTickScheduler {
    /// Books an evaluation of `kind` at `pos` after `delay` ticks.
    ///
    /// A request for a (pos, kind) that is already pending is ignored.
    fn schedule_fluid_tick(&self, pos: BlockPos, kind: FluidKind, delay: u32);
}
