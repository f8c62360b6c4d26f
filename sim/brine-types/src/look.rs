//! Visual appearance definitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Color {
    /// Create a color from RGB components.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color.
    #[must_use]
    pub const fn gray(value: f64) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

/// A named visual appearance attached to renderable entities.
///
/// Metalness, reflectivity and texture are optional in scenario documents
/// and default to `0`, `0` and none respectively.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Look {
    /// Unique look name.
    pub name: String,
    /// Base color.
    pub color: Color,
    /// Surface roughness (0 = mirror smooth, 1 = fully diffuse).
    pub roughness: f64,
    /// Metalness factor.
    pub metalness: f64,
    /// Reflectivity factor.
    pub reflectivity: f64,
    /// Optional texture file reference.
    pub texture: Option<String>,
}

impl Look {
    /// Create a look with default metalness, reflectivity and no texture.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, roughness: f64) -> Self {
        Self {
            name: name.into(),
            color,
            roughness,
            metalness: 0.0,
            reflectivity: 0.0,
            texture: None,
        }
    }

    /// Set metalness.
    #[must_use]
    pub fn with_metalness(mut self, metalness: f64) -> Self {
        self.metalness = metalness;
        self
    }

    /// Set reflectivity.
    #[must_use]
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the texture reference.
    #[must_use]
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }
}
