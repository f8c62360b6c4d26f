//! Look registry.

use hashbrown::HashMap;

use brine_types::Look;

/// Process-scoped lookup table of visual appearances.
///
/// Duplicate look names are last-write-wins, mirroring the material
/// registry policy.
#[derive(Debug, Default)]
pub struct LookRegistry {
    looks: HashMap<String, Look>,
}

impl LookRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a look. A look with the same name is replaced.
    pub fn create_look(&mut self, look: Look) {
        self.looks.insert(look.name.clone(), look);
    }

    /// Look up a look by exact name.
    #[must_use]
    pub fn look(&self, name: &str) -> Option<&Look> {
        self.looks.get(name)
    }

    /// Check whether a look with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.looks.contains_key(name)
    }

    /// Number of registered looks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.looks.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.looks.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use brine_types::Color;

    #[test]
    fn looks_retrievable_by_name() {
        let mut registry = LookRegistry::new();
        registry.create_look(Look::new("yellow", Color::rgb(1.0, 0.9, 0.0), 0.3));

        assert!(registry.contains("yellow"));
        assert!(!registry.contains("green"));
    }

    #[test]
    fn duplicate_names_are_last_write_wins() {
        let mut registry = LookRegistry::new();
        registry.create_look(Look::new("hull", Color::gray(0.2), 0.3));
        registry.create_look(Look::new("hull", Color::gray(0.8), 0.5));

        assert_eq!(registry.len(), 1);
        let look = registry.look("hull").expect("hull registered");
        assert!((look.color.r - 0.8).abs() < 1e-10);
    }
}
