//! Physical surface materials.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named physical surface property set.
///
/// Density is used to derive mass from shape volume; restitution controls
/// contact bounciness. Friction is not a per-material property - it is
/// defined per material *pair* through [`Friction`] overrides in the
/// material registry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Unique material name.
    pub name: String,
    /// Density in kg/m^3.
    pub density: f64,
    /// Restitution coefficient (0 = inelastic, 1 = perfectly elastic).
    pub restitution: f64,
}

impl Material {
    /// Create a new material.
    #[must_use]
    pub fn new(name: impl Into<String>, density: f64, restitution: f64) -> Self {
        Self {
            name: name.into(),
            density,
            restitution,
        }
    }
}

/// Static and dynamic friction coefficients for a pair of materials.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Friction {
    /// Static friction coefficient.
    pub static_coef: f64,
    /// Dynamic (kinetic) friction coefficient.
    pub dynamic_coef: f64,
}

impl Default for Friction {
    /// Fallback friction used when a material pair has no explicit override.
    fn default() -> Self {
        Self {
            static_coef: 0.5,
            dynamic_coef: 0.5,
        }
    }
}

impl Friction {
    /// Create a friction coefficient pair.
    #[must_use]
    pub const fn new(static_coef: f64, dynamic_coef: f64) -> Self {
        Self {
            static_coef,
            dynamic_coef,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn material_new() {
        let mat = Material::new("steel", 7800.0, 0.2);
        assert_eq!(mat.name, "steel");
        assert_relative_eq!(mat.density, 7800.0, epsilon = 1e-10);
        assert_relative_eq!(mat.restitution, 0.2, epsilon = 1e-10);
    }

    #[test]
    fn friction_default_is_symmetric() {
        let f = Friction::default();
        assert_relative_eq!(f.static_coef, f.dynamic_coef, epsilon = 1e-10);
    }
}
