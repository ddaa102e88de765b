//! A self-contained grid that runs the fluid engine.
//!
//! [`World`] stores cells sparsely, owns the scheduled fluid tick queue and
//! forwards every write to the liquid behaviors around it. Hosts that keep
//! their own grid implement [`BlockAccess`] and [`FluidTickScheduler`]
//! instead and drive [`FlowingFluid`](crate::fluid::FlowingFluid) directly.

mod access;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cascade_registry::{CellState, FluidKind, vanilla_materials};
use cascade_utils::{BlockPos, Direction, UpdateFlags};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

pub use access::{BlockAccess, FluidTickScheduler};

use crate::behavior::LiquidBlockBehavior;
use crate::config::FluidConfig;
use crate::fluid::fluid_behaviour;
use crate::random::{DEFAULT_FLUID_RANDOM, FluidRandom};
use crate::ticks::LevelTicks;

/// What reads outside the vertical bounds return.
const OUT_OF_BOUNDS: CellState = CellState::of(vanilla_materials::BARRIER.id);

/// A sparse voxel grid with scheduled fluid ticks.
pub struct World {
    /// Every non-air cell
    cells: RwLock<FxHashMap<BlockPos, CellState>>,
    /// Pending fluid evaluations
    fluid_ticks: Mutex<LevelTicks<FluidKind>>,
    /// Ticks advanced so far
    game_time: AtomicU64,
    /// Source for throttle draws
    random: Arc<FluidRandom>,
    config: FluidConfig,
}

impl World {
    /// Creates an empty world.
    ///
    /// With a configured seed the world owns its own random source, otherwise
    /// it shares the process-wide one.
    #[must_use]
    pub fn new(config: FluidConfig) -> Self {
        let random = match config.random_seed {
            Some(seed) => Arc::new(FluidRandom::new(config.random_source, seed)),
            None => Arc::clone(&DEFAULT_FLUID_RANDOM),
        };
        Self::with_random(config, random)
    }

    /// Creates an empty world drawing from `random`.
    #[must_use]
    pub fn with_random(config: FluidConfig, random: Arc<FluidRandom>) -> Self {
        log::debug!(
            "Creating fluid world (y {}..={}, seed {:?})",
            config.min_y,
            config.max_y,
            config.random_seed
        );
        Self {
            cells: RwLock::new(FxHashMap::default()),
            fluid_ticks: Mutex::new(LevelTicks::new()),
            game_time: AtomicU64::new(0),
            random,
            config,
        }
    }

    /// The settings this world was created with.
    #[must_use]
    pub const fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// The random source used for throttle draws.
    #[must_use]
    pub fn random(&self) -> &Arc<FluidRandom> {
        &self.random
    }

    /// Ticks advanced so far.
    #[must_use]
    pub fn game_time(&self) -> u64 {
        self.game_time.load(Ordering::Relaxed)
    }

    /// Whether `pos` lies inside the vertical bounds.
    #[must_use]
    pub const fn is_in_bounds(&self, pos: BlockPos) -> bool {
        pos.y() >= self.config.min_y && pos.y() <= self.config.max_y
    }

    /// Number of stored non-air cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.read().len()
    }

    /// Number of pending fluid evaluations.
    #[must_use]
    pub fn pending_fluid_ticks(&self) -> usize {
        self.fluid_ticks.lock().count()
    }

    /// Whether an evaluation of `kind` at `pos` is pending.
    #[must_use]
    pub fn has_scheduled_fluid_tick(&self, pos: BlockPos, kind: FluidKind) -> bool {
        self.fluid_ticks.lock().has_scheduled_tick(pos, kind)
    }

    /// Writes `state` into every cell of the box spanned by `from` and `to`.
    ///
    /// Returns the number of cells that changed.
    pub fn fill(&self, from: BlockPos, to: BlockPos, state: CellState, flags: UpdateFlags) -> usize {
        let (min, max) = (
            BlockPos::new(from.0.x.min(to.0.x), from.0.y.min(to.0.y), from.0.z.min(to.0.z)),
            BlockPos::new(from.0.x.max(to.0.x), from.0.y.max(to.0.y), from.0.z.max(to.0.z)),
        );

        let mut changed = 0;
        for x in min.0.x..=max.0.x {
            for y in min.0.y..=max.0.y {
                for z in min.0.z..=max.0.z {
                    if self.set_cell(BlockPos::new(x, y, z), state, flags) {
                        changed += 1;
                    }
                }
            }
        }
        changed
    }

    /// Advances the world by one tick and runs the fluid evaluations due.
    ///
    /// Returns the number of evaluations run.
    pub fn tick(&self) -> usize {
        let game_time = self.game_time.fetch_add(1, Ordering::Relaxed) + 1;
        let _span = tracing::debug_span!("fluid_tick", game_time).entered();

        let due = self
            .fluid_ticks
            .lock()
            .tick(game_time, self.config.max_fluid_ticks_per_tick);

        for &(pos, kind) in &due {
            if let Some(fluid) = fluid_behaviour(kind) {
                fluid.tick(self, pos, &self.random);
            }
        }

        if !due.is_empty() {
            log::trace!("Ran {} fluid evaluations at tick {game_time}", due.len());
        }
        due.len()
    }

    /// Ticks until no fluid evaluation is pending or `max_ticks` ticks have
    /// passed.
    ///
    /// Returns the number of ticks advanced.
    pub fn run_until_idle(&self, max_ticks: u64) -> u64 {
        let mut ticks = 0;
        while ticks < max_ticks && self.pending_fluid_ticks() > 0 {
            self.tick();
            ticks += 1;
        }
        if self.pending_fluid_ticks() > 0 {
            log::warn!(
                "Fluids still active after {max_ticks} ticks ({} pending)",
                self.pending_fluid_ticks()
            );
        }
        ticks
    }

    /// Lets the cells around `pos`, and `pos` itself, react to a change.
    fn update_neighbors(&self, pos: BlockPos) {
        self.neighbor_changed(pos);
        for direction in Direction::ALL {
            self.neighbor_changed(direction.relative(pos));
        }
    }

    fn neighbor_changed(&self, pos: BlockPos) {
        let Some(kind) = self.get_cell(pos).fluid_kind() else {
            return;
        };
        if let Some(behavior) = LiquidBlockBehavior::for_kind(kind) {
            behavior.handle_neighbor_changed(self, pos);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(FluidConfig::default())
    }
}

impl BlockAccess for World {
    fn get_cell(&self, pos: BlockPos) -> CellState {
        if !self.is_in_bounds(pos) {
            return OUT_OF_BOUNDS;
        }
        self.cells.read().get(&pos).copied().unwrap_or(CellState::AIR)
    }

    fn set_cell(&self, pos: BlockPos, state: CellState, flags: UpdateFlags) -> bool {
        if !self.is_in_bounds(pos) {
            log::warn!("Refusing to write {:?} outside the world at {pos}", state.material);
            return false;
        }

        {
            let mut cells = self.cells.write();
            let old = if state.is_air() {
                cells.remove(&pos)
            } else {
                cells.insert(pos, state)
            };
            if old.unwrap_or(CellState::AIR) == state {
                return false;
            }
        }

        if flags.contains(UpdateFlags::UPDATE_NEIGHBORS) {
            self.update_neighbors(pos);
        }
        true
    }

    fn break_occupant(&self, pos: BlockPos) {
        self.set_cell(pos, CellState::AIR, UpdateFlags::empty());
    }

    fn source_conversion(&self, kind: FluidKind) -> bool {
        self.config.source_conversion(kind)
    }
}

impl FluidTickScheduler for World {
    fn schedule_fluid_tick(&self, pos: BlockPos, kind: FluidKind, delay: u32) {
        self.fluid_ticks
            .lock()
            .schedule_tick(pos, kind, self.game_time(), delay);
    }
}
