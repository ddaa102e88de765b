//! Core fluid flowing behavior.
//!
//! A fluid cell reacts to two events. A neighbor change books a delayed
//! evaluation through the scheduler. When that evaluation fires, the cell
//! recomputes its own level from its neighbors, then pours downward or, if it
//! cannot, spreads towards the cheapest lateral directions. Every write
//! notifies the written cell's neighbors, which is how a change travels
//! through a body of fluid one tick interval at a time.

use cascade_registry::{CellState, FluidEntry, FluidKind, FluidLevel, REGISTRY};
use cascade_utils::{BlockPos, Direction, UpdateFlags};

use super::slope::optimal_flow_directions;
use super::{decay_of, get_flow_decay};
use crate::random::FluidRandom;
use crate::world::{BlockAccess, FluidTickScheduler};

/// Flow state machine of one fluid kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowingFluid {
    entry: FluidEntry,
}

/// Looks up the behavior of `kind` in the global registry.
#[must_use]
pub fn fluid_behaviour(kind: FluidKind) -> Option<FlowingFluid> {
    REGISTRY.fluids.get(kind).copied().map(FlowingFluid::new)
}

/// Result of scanning the four lateral neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NeighborScan {
    /// Lowest decay among same-kind neighbors, falling ones counted as 0.
    smallest: Option<i32>,
    /// Same-kind sources next to the cell.
    sources: u8,
}

impl FlowingFluid {
    /// Creates the behavior for a registry entry.
    #[must_use]
    pub const fn new(entry: FluidEntry) -> Self {
        Self { entry }
    }

    /// The fluid kind driven by this behavior.
    #[must_use]
    pub const fn kind(&self) -> FluidKind {
        self.entry.kind
    }

    /// The registry entry driving this behavior.
    #[must_use]
    pub const fn entry(&self) -> &FluidEntry {
        &self.entry
    }

    /// Ticks between a notification and the evaluation it books.
    #[must_use]
    pub const fn tick_delay(&self) -> u32 {
        self.entry.tick_delay
    }

    /// Called when the cell at `pos` or one of its neighbors changed.
    pub fn on_neighbor_changed<W>(&self, world: &W, pos: BlockPos)
    where
        W: BlockAccess + FluidTickScheduler + ?Sized,
    {
        if world.get_cell(pos).fluid_kind() != Some(self.kind()) {
            return;
        }
        if self.check_for_harden(world, pos) {
            return;
        }
        world.schedule_fluid_tick(pos, self.kind(), self.tick_delay());
    }

    /// Runs a scheduled evaluation of the cell at `pos`.
    pub fn tick<W>(&self, world: &W, pos: BlockPos, random: &FluidRandom)
    where
        W: BlockAccess + FluidTickScheduler + ?Sized,
    {
        let kind = self.kind();
        let multiplier = i32::from(self.entry.drop_off);

        let mut decay = get_flow_decay(world, pos, kind);
        if decay < 0 {
            return;
        }

        if decay > 0 {
            let scan = self.get_smallest_flow_decay(world, pos);

            let mut k = match scan.smallest {
                Some(smallest) if smallest + multiplier < 8 => smallest + multiplier,
                _ => -1,
            };

            let above = get_flow_decay(world, pos.above(), kind);
            if above >= 0 {
                k = if above >= 8 { above } else { above | 0x08 };
            }

            if scan.sources >= 2 && world.source_conversion(kind) {
                let below = world.get_cell(pos.below());
                if world.is_solid(below) || decay_of(below, kind) == 0 {
                    k = 0;
                }
            }

            if let Some(chance) = self.entry.throttle
                && decay < 8
                && k < 8
                && k > 1
                && !random.roll(chance)
            {
                k = decay;
            }

            if k != decay {
                decay = k;
                if decay < 0 {
                    world.set_cell(pos, CellState::AIR, UpdateFlags::UPDATE_NEIGHBORS);
                    log::trace!("{kind} at {pos} dried up");
                } else {
                    world.set_cell(pos, self.cell(decay), UpdateFlags::UPDATE_NEIGHBORS);
                    world.schedule_fluid_tick(pos, kind, self.tick_delay());
                }
            }
        }

        let below_pos = pos.below();
        let below = world.get_cell(below_pos);
        let below_kind = below.fluid_kind();

        if let Some(hardening) = self.entry.hardening
            && below_kind == Some(hardening.reacts_with)
        {
            world.set_cell(
                below_pos,
                CellState::of(hardening.flow_into_result),
                UpdateFlags::UPDATE_NEIGHBORS,
            );
            log::debug!("{kind} at {pos} flowed into {} below", hardening.reacts_with);
            return;
        }

        // A cell that just dried up still drips its last level (7) downward
        if self.can_spread_down(world, below) {
            let falling = if decay >= 8 { decay } else { decay + 8 };
            if world.set_cell(below_pos, self.cell(falling), UpdateFlags::UPDATE_NEIGHBORS) {
                world.schedule_fluid_tick(below_pos, kind, self.tick_delay());
            }
        } else if decay >= 0 {
            let spread = if decay >= 8 { 1 } else { decay + multiplier };
            if spread >= 8 {
                self.check_for_harden(world, pos);
                return;
            }

            for direction in optimal_flow_directions(world, pos) {
                self.flow_into_block(world, direction.relative(pos), spread);
            }
        }

        self.check_for_harden(world, pos);
    }

    /// Hardens the cell at `pos` if it touches the fluid this kind reacts
    /// with. Returns true if the cell was replaced.
    pub fn check_for_harden<W>(&self, world: &W, pos: BlockPos) -> bool
    where
        W: BlockAccess + ?Sized,
    {
        let Some(hardening) = self.entry.hardening else {
            return false;
        };

        let cell = world.get_cell(pos);
        if cell.fluid_kind() != Some(self.kind()) {
            return false;
        }

        let colliding = Direction::ALL.into_iter().any(|direction| {
            world.get_cell(direction.relative(pos)).fluid_kind() == Some(hardening.reacts_with)
        });
        if !colliding {
            return false;
        }

        let level = cell.fluid_level().raw();
        let result = if level == 0 {
            hardening.source_result
        } else if level <= hardening.partial_max_level {
            hardening.partial_result
        } else {
            return false;
        };

        world.set_cell(pos, CellState::of(result), UpdateFlags::UPDATE_NEIGHBORS);
        log::debug!(
            "{} at {pos} hardened into {}",
            self.kind(),
            REGISTRY.materials.get(result).map_or("?", |material| material.name)
        );
        true
    }

    /// Floods `pos` with fluid of decay `decay` if the cell accepts it.
    pub fn flow_into_block<W>(&self, world: &W, pos: BlockPos, decay: i32)
    where
        W: BlockAccess + FluidTickScheduler + ?Sized,
    {
        let cell = world.get_cell(pos);
        if !world.is_flow_receptive(cell) {
            return;
        }

        if !cell.is_air() {
            log::debug!(
                "{} at {pos} washed away {}",
                self.kind(),
                cell.material().map_or("?", |material| material.name)
            );
            world.break_occupant(pos);
        }

        if world.set_cell(pos, self.cell(decay), UpdateFlags::UPDATE_NEIGHBORS) {
            world.schedule_fluid_tick(pos, self.kind(), self.tick_delay());
        }
    }

    /// Whether fluid falls into the cell below.
    ///
    /// Open cells and other fluids are filled. A source of the same kind is
    /// left alone and acts as a floor.
    fn can_spread_down<W: BlockAccess + ?Sized>(&self, world: &W, below: CellState) -> bool {
        match below.fluid_kind() {
            Some(kind) if kind == self.kind() => !below.fluid_level().is_source(),
            Some(_) => true,
            None => world.is_flow_receptive(below),
        }
    }

    /// Scans the lateral neighbors for the strongest same-kind fluid.
    fn get_smallest_flow_decay<W: BlockAccess + ?Sized>(
        &self,
        world: &W,
        pos: BlockPos,
    ) -> NeighborScan {
        let mut scan = NeighborScan {
            smallest: None,
            sources: 0,
        };

        for direction in Direction::HORIZONTAL {
            let mut decay = get_flow_decay(world, direction.relative(pos), self.kind());
            if decay < 0 {
                continue;
            }
            if decay == 0 {
                scan.sources += 1;
            } else if decay >= 8 {
                decay = 0;
            }
            scan.smallest = Some(scan.smallest.map_or(decay, |smallest| smallest.min(decay)));
        }

        scan
    }

    /// A cell of this kind at a decay in `0..=15`.
    fn cell(&self, decay: i32) -> CellState {
        CellState::fluid(self.kind(), FluidLevel::from_raw(decay as u8))
    }
}

#[cfg(test)]
mod tests {
    use cascade_registry::vanilla_materials;
    use cascade_utils::random::RandomKind;

    use super::*;
    use crate::world::World;

    const STONE: CellState = CellState::of(vanilla_materials::STONE.id);

    fn water(level: FluidLevel) -> CellState {
        CellState::fluid(FluidKind::Water, level)
    }

    fn lava(level: FluidLevel) -> CellState {
        CellState::fluid(FluidKind::Lava, level)
    }

    fn behaviour(kind: FluidKind) -> FlowingFluid {
        fluid_behaviour(kind).expect("vanilla fluid registered")
    }

    fn floored_world() -> World {
        let world = World::default();
        world.fill(
            BlockPos::new(-8, 0, -8),
            BlockPos::new(8, 0, 8),
            STONE,
            UpdateFlags::empty(),
        );
        world
    }

    #[test]
    fn test_source_stays_source() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::SOURCE), UpdateFlags::empty());

        let fluid = behaviour(FluidKind::Water);
        for _ in 0..5 {
            fluid.tick(&world, pos, &random);
            assert_eq!(world.get_cell(pos), water(FluidLevel::SOURCE));
        }
    }

    #[test]
    fn test_source_spreads_to_open_neighbors() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::SOURCE), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);

        for direction in Direction::HORIZONTAL {
            assert_eq!(
                world.get_cell(direction.relative(pos)),
                water(FluidLevel::flowing(1))
            );
        }
        // The four new cells plus the source, notified by each write
        assert_eq!(world.pending_fluid_ticks(), 5);
    }

    #[test]
    fn test_unsupported_flow_dries_up() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::flowing(3)), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), CellState::AIR);
        assert_eq!(world.get_cell(pos.below()), STONE);
        for direction in Direction::HORIZONTAL {
            assert_eq!(world.get_cell(direction.relative(pos)), CellState::AIR);
        }
    }

    #[test]
    fn test_dried_up_cell_drips_into_open_air() {
        let world = World::default();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 10, 0);
        world.set_cell(pos, water(FluidLevel::flowing(3)), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), CellState::AIR);
        assert_eq!(world.get_cell(pos.below()), water(FluidLevel::flowing(7)));
        assert!(world.has_scheduled_fluid_tick(pos.below(), FluidKind::Water));
        assert_eq!(world.get_cell(pos.offset(1, 0, 0)), CellState::AIR);
    }

    #[test]
    fn test_drained_column_recedes_to_nothing() {
        let world = World::default();
        let top = BlockPos::new(0, 10, 0);
        world.set_cell(top, water(FluidLevel::SOURCE), UpdateFlags::UPDATE_NEIGHBORS);
        for _ in 0..30 {
            world.tick();
        }
        assert_eq!(world.get_cell(top.offset(0, -3, 0)), water(FluidLevel::falling(0)));

        world.set_cell(top, CellState::AIR, UpdateFlags::UPDATE_NEIGHBORS);
        for _ in 0..80 {
            world.tick();
        }
        for y in 5..10 {
            assert_eq!(world.get_cell(BlockPos::new(0, y, 0)), CellState::AIR, "y {y}");
        }
    }

    /// First seed whose opening draw out of four is zero, or non-zero.
    fn seed_with_first_draw(zero: bool) -> u64 {
        (0..)
            .find(|&seed| {
                let random = FluidRandom::new(RandomKind::Legacy, seed);
                (random.next_i32_bounded(4) == 0) == zero
            })
            .expect("some seed matches")
    }

    fn throttle_setup(kind: FluidKind) -> (World, BlockPos) {
        let world = floored_world();
        let pos = BlockPos::new(0, 1, 0);
        let cell = |strength| CellState::fluid(kind, FluidLevel::flowing(strength));
        world.set_cell(pos, cell(6), UpdateFlags::empty());
        world.set_cell(pos.offset(1, 0, 0), cell(2), UpdateFlags::empty());
        (world, pos)
    }

    #[test]
    fn test_lava_holds_its_level_on_a_failed_roll() {
        let (world, pos) = throttle_setup(FluidKind::Lava);
        let random = FluidRandom::new(RandomKind::Legacy, seed_with_first_draw(false));

        behaviour(FluidKind::Lava).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), lava(FluidLevel::flowing(6)));
    }

    #[test]
    fn test_lava_moves_on_a_winning_roll() {
        let (world, pos) = throttle_setup(FluidKind::Lava);
        let random = FluidRandom::new(RandomKind::Legacy, seed_with_first_draw(true));

        behaviour(FluidKind::Lava).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), lava(FluidLevel::flowing(4)));
    }

    #[test]
    fn test_water_is_never_throttled() {
        for zero in [false, true] {
            let (world, pos) = throttle_setup(FluidKind::Water);
            let random = FluidRandom::new(RandomKind::Legacy, seed_with_first_draw(zero));

            behaviour(FluidKind::Water).tick(&world, pos, &random);
            assert_eq!(world.get_cell(pos), water(FluidLevel::flowing(3)));
        }
    }

    #[test]
    fn test_fed_from_above_becomes_falling() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::flowing(5)), UpdateFlags::empty());
        world.set_cell(pos.above(), water(FluidLevel::flowing(2)), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), water(FluidLevel::falling(2)));
    }

    #[test]
    fn test_two_sources_over_solid_form_a_source() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::flowing(1)), UpdateFlags::empty());
        world.set_cell(pos.offset(1, 0, 0), water(FluidLevel::SOURCE), UpdateFlags::empty());
        world.set_cell(pos.offset(-1, 0, 0), water(FluidLevel::SOURCE), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), water(FluidLevel::SOURCE));
    }

    #[test]
    fn test_lava_does_not_form_sources() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, lava(FluidLevel::flowing(2)), UpdateFlags::empty());
        world.set_cell(pos.offset(1, 0, 0), lava(FluidLevel::SOURCE), UpdateFlags::empty());
        world.set_cell(pos.offset(-1, 0, 0), lava(FluidLevel::SOURCE), UpdateFlags::empty());

        behaviour(FluidKind::Lava).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos), lava(FluidLevel::flowing(2)));
    }

    #[test]
    fn test_pours_into_open_cell_below() {
        let world = World::default();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 10, 0);
        world.set_cell(pos, water(FluidLevel::SOURCE), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos.below()), water(FluidLevel::falling(0)));
        // Nothing spreads sideways while the fluid can fall
        assert_eq!(world.get_cell(pos.offset(1, 0, 0)), CellState::AIR);
    }

    #[test]
    fn test_does_not_pour_over_own_source() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 2, 0);
        world.set_cell(pos, water(FluidLevel::SOURCE), UpdateFlags::empty());
        world.set_cell(pos.below(), water(FluidLevel::SOURCE), UpdateFlags::empty());

        behaviour(FluidKind::Water).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos.below()), water(FluidLevel::SOURCE));
        assert_eq!(world.get_cell(pos.offset(1, 0, 0)), water(FluidLevel::flowing(1)));
    }

    #[test]
    fn test_lava_falling_into_water_makes_stone() {
        let world = floored_world();
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        let pos = BlockPos::new(0, 3, 0);
        world.set_cell(pos, lava(FluidLevel::SOURCE), UpdateFlags::empty());
        world.set_cell(pos.below(), water(FluidLevel::flowing(3)), UpdateFlags::empty());

        behaviour(FluidKind::Lava).tick(&world, pos, &random);
        assert_eq!(world.get_cell(pos.below()), STONE);
        // The evaluation ends there: no lateral spread, no hardening
        assert_eq!(world.get_cell(pos.offset(1, 0, 0)), CellState::AIR);
        assert_eq!(world.get_cell(pos), lava(FluidLevel::SOURCE));
    }

    #[test]
    fn test_hardening_depends_on_level() {
        let cases = [
            (FluidLevel::SOURCE, CellState::of(vanilla_materials::OBSIDIAN.id)),
            (FluidLevel::flowing(2), CellState::of(vanilla_materials::COBBLESTONE.id)),
            (FluidLevel::flowing(4), CellState::of(vanilla_materials::COBBLESTONE.id)),
            (FluidLevel::flowing(5), lava(FluidLevel::flowing(5))),
            (FluidLevel::flowing(7), lava(FluidLevel::flowing(7))),
        ];

        for (level, expected) in cases {
            let world = floored_world();
            let pos = BlockPos::new(0, 1, 0);
            world.set_cell(pos, lava(level), UpdateFlags::empty());
            world.set_cell(pos.offset(0, 0, 1), water(FluidLevel::SOURCE), UpdateFlags::empty());

            let hardened = behaviour(FluidKind::Lava).check_for_harden(&world, pos);
            assert_eq!(world.get_cell(pos), expected, "lava level {level}");
            assert_eq!(hardened, expected.fluid_kind().is_none());
        }
    }

    #[test]
    fn test_water_never_hardens() {
        let world = floored_world();
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::SOURCE), UpdateFlags::empty());
        world.set_cell(pos.offset(1, 0, 0), lava(FluidLevel::SOURCE), UpdateFlags::empty());

        assert!(!behaviour(FluidKind::Water).check_for_harden(&world, pos));
        assert_eq!(world.get_cell(pos), water(FluidLevel::SOURCE));
    }

    #[test]
    fn test_flooding_breaks_plants() {
        let world = floored_world();
        let pos = BlockPos::new(0, 1, 0);
        let grass = CellState::of(vanilla_materials::SHORT_GRASS.id);
        world.set_cell(pos, grass, UpdateFlags::empty());

        behaviour(FluidKind::Water).flow_into_block(&world, pos, 2);
        assert_eq!(world.get_cell(pos), water(FluidLevel::flowing(2)));
    }

    #[test]
    fn test_flooding_skips_solid_cells() {
        let world = floored_world();
        let pos = BlockPos::new(0, 0, 0);

        behaviour(FluidKind::Water).flow_into_block(&world, pos, 2);
        assert_eq!(world.get_cell(pos), STONE);
        assert_eq!(world.pending_fluid_ticks(), 0);
    }

    #[test]
    fn test_neighbor_change_books_one_tick() {
        let world = floored_world();
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, water(FluidLevel::flowing(2)), UpdateFlags::empty());

        let fluid = behaviour(FluidKind::Water);
        fluid.on_neighbor_changed(&world, pos);
        fluid.on_neighbor_changed(&world, pos);
        assert_eq!(world.pending_fluid_ticks(), 1);
    }

    #[test]
    fn test_neighbor_change_hardens_without_booking() {
        let world = floored_world();
        let pos = BlockPos::new(0, 1, 0);
        world.set_cell(pos, lava(FluidLevel::SOURCE), UpdateFlags::empty());
        world.set_cell(pos.above(), water(FluidLevel::falling(0)), UpdateFlags::empty());

        behaviour(FluidKind::Lava).on_neighbor_changed(&world, pos);
        assert_eq!(world.get_cell(pos), CellState::of(vanilla_materials::OBSIDIAN.id));
    }
}
