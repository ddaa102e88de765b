//! Cost-based selection of lateral flow directions.
//!
//! Each horizontal neighbor gets the length of the shortest path, at most
//! [`MAX_SEARCH_DEPTH`] steps, to a drop-off. Fluid spreads only towards the
//! cheapest neighbors, which makes it run to the nearest edge instead of
//! flooding a flat floor evenly.

use cascade_utils::{BlockPos, Direction};
use smallvec::SmallVec;

use super::spread_context::SpreadContext;
use crate::world::BlockAccess;

/// Cost of a direction with no drop-off in reach.
pub const UNREACHABLE: u16 = 1000;

/// How many steps the search walks away from the spreading cell.
pub const MAX_SEARCH_DEPTH: u16 = 4;

/// Per-direction path costs, indexed like [`Direction::HORIZONTAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowCosts([u16; 4]);

impl FlowCosts {
    /// The cost of a horizontal direction. Vertical directions are unreachable.
    #[must_use]
    pub fn get(&self, direction: Direction) -> u16 {
        direction
            .horizontal_index()
            .map_or(UNREACHABLE, |index| self.0[index])
    }

    /// The lowest cost.
    #[must_use]
    pub fn min(&self) -> u16 {
        self.0.iter().copied().min().unwrap_or(UNREACHABLE)
    }

    /// Every direction whose cost equals the minimum.
    #[must_use]
    pub fn optimal(&self) -> SmallVec<[Direction; 4]> {
        let min = self.min();
        Direction::HORIZONTAL
            .into_iter()
            .zip(self.0)
            .filter(|&(_, cost)| cost == min)
            .map(|(direction, _)| direction)
            .collect()
    }

    /// The raw costs in -x, +x, -z, +z order.
    #[must_use]
    pub const fn as_array(&self) -> [u16; 4] {
        self.0
    }
}

/// Computes the cost table for fluid spreading out of `pos`.
pub fn flow_costs<W: BlockAccess + ?Sized>(world: &W, pos: BlockPos) -> FlowCosts {
    let mut ctx = SpreadContext::new(world);
    let mut costs = [UNREACHABLE; 4];

    for (cost, direction) in costs.iter_mut().zip(Direction::HORIZONTAL) {
        let neighbor = direction.relative(pos);

        if !ctx.can_pass(neighbor) {
            continue;
        }

        *cost = if ctx.is_drop_off(neighbor) {
            0
        } else {
            calculate_flow_cost(&mut ctx, neighbor, 1, direction)
        };
    }

    FlowCosts(costs)
}

/// The directions fluid at `pos` should spread into.
pub fn optimal_flow_directions<W: BlockAccess + ?Sized>(
    world: &W,
    pos: BlockPos,
) -> SmallVec<[Direction; 4]> {
    flow_costs(world, pos).optimal()
}

/// Shortest path length from `pos` to a drop-off, never stepping back the
/// way the search came.
fn calculate_flow_cost<W: BlockAccess + ?Sized>(
    ctx: &mut SpreadContext<'_, W>,
    pos: BlockPos,
    depth: u16,
    came_from: Direction,
) -> u16 {
    let mut cost = UNREACHABLE;

    for direction in Direction::HORIZONTAL {
        if direction == came_from.opposite() {
            continue;
        }

        let neighbor = direction.relative(pos);

        if !ctx.can_pass(neighbor) {
            continue;
        }

        if ctx.is_drop_off(neighbor) {
            return depth;
        }

        if depth >= MAX_SEARCH_DEPTH {
            continue;
        }

        cost = cost.min(calculate_flow_cost(ctx, neighbor, depth + 1, direction));
    }

    cost
}
