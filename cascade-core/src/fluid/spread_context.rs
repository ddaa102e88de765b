//! Spread calculation context for the flow cost search.
//!
//! Caches cell lookups made during one search, so the recursive search does
//! not query the grid for the same position repeatedly. A context lives for a
//! single search and is never reused.

use cascade_registry::CellState;
use cascade_utils::BlockPos;
use rustc_hash::FxHashMap;

use crate::world::BlockAccess;

/// Per-search cache in front of a grid.
pub struct SpreadContext<'a, W: BlockAccess + ?Sized> {
    /// Cells by absolute position
    state_cache: FxHashMap<BlockPos, CellState>,
    /// Drop-off results by absolute position
    drop_off_cache: FxHashMap<BlockPos, bool>,
    /// Reference to the grid for cache misses
    world: &'a W,
}

impl<'a, W: BlockAccess + ?Sized> SpreadContext<'a, W> {
    /// Creates an empty context over `world`.
    #[must_use]
    pub fn new(world: &'a W) -> Self {
        Self {
            state_cache: FxHashMap::default(),
            drop_off_cache: FxHashMap::default(),
            world,
        }
    }

    /// Gets the cached cell at `pos`, querying the grid if not cached.
    pub fn get_cell(&mut self, pos: BlockPos) -> CellState {
        *self
            .state_cache
            .entry(pos)
            .or_insert_with(|| self.world.get_cell(pos))
    }

    /// Whether the search may step into `pos`.
    ///
    /// Flowing fluid of any kind can be crossed, sources of any kind cannot.
    pub fn can_pass(&mut self, pos: BlockPos) -> bool {
        let cell = self.get_cell(pos);
        if cell.fluid_kind().is_some() {
            return !cell.fluid_level().is_source();
        }
        self.world.is_flow_receptive(cell)
    }

    /// Whether the cell below `pos` lets fluid fall, with caching.
    pub fn is_drop_off(&mut self, pos: BlockPos) -> bool {
        if let Some(&cached) = self.drop_off_cache.get(&pos) {
            return cached;
        }
        let below = self.get_cell(pos.below());
        let drop_off = self.world.is_flow_receptive(below);
        self.drop_off_cache.insert(pos, drop_off);
        drop_off
    }

    /// Number of distinct cells read so far.
    #[must_use]
    pub fn cached_cells(&self) -> usize {
        self.state_cache.len()
    }
}
