//! The push a fluid cell applies to whatever is inside it.

use cascade_registry::FluidKind;
use cascade_utils::math::Vector3;
use cascade_utils::{BlockPos, Direction};

use super::{effective_decay_of, get_effective_flow_decay};
use crate::world::BlockAccess;

/// Downward pull added to falling fluid next to a wall.
const FALLING_PULL: Vector3<f64> = Vector3::new(0.0, -6.0, 0.0);

/// Computes the unit flow direction of the `kind` fluid at `pos`.
///
/// Fluid pushes towards weaker neighbors and towards open cells above a
/// drop. Falling fluid next to a wall is also pulled down. Returns the zero
/// vector when the cell does not hold `kind` or nothing pushes.
pub fn flow_vector<W: BlockAccess + ?Sized>(
    world: &W,
    pos: BlockPos,
    kind: FluidKind,
) -> Vector3<f64> {
    let cell = world.get_cell(pos);
    let decay = effective_decay_of(cell, kind);
    if decay < 0 {
        return Vector3::ZERO;
    }

    let mut flow = Vector3::<f64>::ZERO;

    for direction in Direction::HORIZONTAL {
        let side_pos = direction.relative(pos);
        let side = world.get_cell(side_pos);
        let side_decay = effective_decay_of(side, kind);

        let weight = if side_decay >= 0 {
            side_decay - decay
        } else {
            if !world.is_flow_receptive(side) {
                continue;
            }
            let below_decay = get_effective_flow_decay(world, side_pos.below(), kind);
            if below_decay < 0 {
                continue;
            }
            below_decay - (decay - 8)
        };

        flow += direction.normal().as_f64() * f64::from(weight);
    }

    if cell.fluid_level().is_falling() && is_against_wall(world, pos) {
        flow = flow.normalize() + FALLING_PULL;
    }

    flow.normalize()
}

/// Checks the four cells around `pos` and the four around the cell above.
fn is_against_wall<W: BlockAccess + ?Sized>(world: &W, pos: BlockPos) -> bool {
    let above = pos.above();
    Direction::HORIZONTAL.into_iter().any(|direction| {
        !world.is_flow_receptive(world.get_cell(direction.relative(pos)))
            || !world.is_flow_receptive(world.get_cell(direction.relative(above)))
    })
}
