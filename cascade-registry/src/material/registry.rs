use rustc_hash::FxHashMap;

use super::{Material, MaterialId};
use crate::RegistryExt;

/// Lookup table of all known materials.
pub struct MaterialRegistry {
    by_id: FxHashMap<MaterialId, Material>,
    by_name: FxHashMap<&'static str, MaterialId>,
    allows_registering: bool,
}

impl MaterialRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Registers a material.
    ///
    /// # Panics
    /// Panics if the registry is frozen or the id is already taken.
    pub fn register(&mut self, material: Material) {
        assert!(
            self.allows_registering,
            "Cannot register material after registry is frozen"
        );
        assert!(
            !self.by_id.contains_key(&material.id),
            "Material id {:?} registered twice",
            material.id
        );
        self.by_name.insert(material.name, material.id);
        self.by_id.insert(material.id, material);
    }

    /// Looks up a material by id.
    #[must_use]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.by_id.get(&id)
    }

    /// Looks up a material id by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    /// Number of registered materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for MaterialRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
