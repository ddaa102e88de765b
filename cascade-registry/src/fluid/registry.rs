use rustc_hash::FxHashMap;

use super::{FluidEntry, FluidKind};
use crate::RegistryExt;

/// The fluid kind table.
pub struct FluidRegistry {
    by_kind: FxHashMap<FluidKind, FluidEntry>,
    by_name: FxHashMap<&'static str, FluidKind>,
    allows_registering: bool,
}

impl FluidRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_kind: FxHashMap::default(),
            by_name: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Registers the constants of a fluid kind, replacing any earlier entry.
    ///
    /// # Panics
    /// Panics if the registry is frozen.
    pub fn register(&mut self, entry: FluidEntry) {
        assert!(
            self.allows_registering,
            "Cannot register fluid after registry is frozen"
        );
        self.by_name.insert(entry.name, entry.kind);
        self.by_kind.insert(entry.kind, entry);
    }

    /// Looks up the constants of a fluid kind.
    #[must_use]
    pub fn get(&self, kind: FluidKind) -> Option<&FluidEntry> {
        self.by_kind.get(&kind)
    }

    /// Looks up a fluid kind by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<FluidKind> {
        self.by_name.get(name).copied()
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_kind.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
