//! Material registry with pairwise friction overrides.

use hashbrown::HashMap;

use brine_types::{Friction, Material};

/// Process-scoped lookup table of materials and their pairwise friction.
///
/// Created at the start of a load and owned by the simulation manager for
/// the session. The compiler holds only read/insert capability.
///
/// Duplicate material names and duplicate friction pairs are
/// last-write-wins: a later entry silently replaces an earlier one.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
    // Keyed by the unordered pair, stored with names sorted.
    interactions: HashMap<(String, String), Friction>,
}

impl MaterialRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material. A material with the same name is replaced.
    pub fn create_material(&mut self, name: impl Into<String>, density: f64, restitution: f64) {
        let name = name.into();
        self.materials
            .insert(name.clone(), Material::new(name, density, restitution));
    }

    /// Override the friction combination for an unordered material pair.
    pub fn set_materials_interaction(
        &mut self,
        material1: impl Into<String>,
        material2: impl Into<String>,
        static_coef: f64,
        dynamic_coef: f64,
    ) {
        let key = Self::pair_key(material1.into(), material2.into());
        self.interactions
            .insert(key, Friction::new(static_coef, dynamic_coef));
    }

    /// Look up a material by exact name.
    #[must_use]
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Check whether a material with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Get the friction for an unordered material pair, falling back to the
    /// default combination when no override was registered.
    #[must_use]
    pub fn interaction(&self, material1: &str, material2: &str) -> Friction {
        let key = Self::pair_key(material1.to_string(), material2.to_string());
        self.interactions.get(&key).copied().unwrap_or_default()
    }

    /// Number of registered materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over all registered materials.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    fn pair_key(a: String, b: String) -> (String, String) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn materials_retrievable_by_exact_name() {
        let mut registry = MaterialRegistry::new();
        registry.create_material("steel", 7800.0, 0.2);
        registry.create_material("rubber", 1200.0, 0.8);

        assert_eq!(registry.len(), 2);
        let steel = registry.material("steel").expect("steel registered");
        assert_relative_eq!(steel.density, 7800.0, epsilon = 1e-10);
        assert!(registry.material("wood").is_none());
    }

    #[test]
    fn duplicate_names_are_last_write_wins() {
        let mut registry = MaterialRegistry::new();
        registry.create_material("steel", 7800.0, 0.2);
        registry.create_material("steel", 7900.0, 0.3);

        assert_eq!(registry.len(), 1);
        let steel = registry.material("steel").expect("steel registered");
        assert_relative_eq!(steel.density, 7900.0, epsilon = 1e-10);
    }

    #[test]
    fn interaction_is_unordered() {
        let mut registry = MaterialRegistry::new();
        registry.create_material("steel", 7800.0, 0.2);
        registry.create_material("rubber", 1200.0, 0.8);
        registry.set_materials_interaction("steel", "rubber", 0.9, 0.7);

        let forward = registry.interaction("steel", "rubber");
        let backward = registry.interaction("rubber", "steel");
        assert_relative_eq!(forward.static_coef, 0.9, epsilon = 1e-10);
        assert_relative_eq!(backward.dynamic_coef, 0.7, epsilon = 1e-10);
    }

    #[test]
    fn missing_pair_falls_back_to_default() {
        let registry = MaterialRegistry::new();
        let friction = registry.interaction("steel", "rubber");
        assert_relative_eq!(
            friction.static_coef,
            Friction::default().static_coef,
            epsilon = 1e-10
        );
    }

    #[test]
    fn duplicate_pair_overrides() {
        let mut registry = MaterialRegistry::new();
        registry.set_materials_interaction("a", "b", 0.9, 0.7);
        registry.set_materials_interaction("b", "a", 0.5, 0.4);

        let friction = registry.interaction("a", "b");
        assert_relative_eq!(friction.static_coef, 0.5, epsilon = 1e-10);
    }
}
