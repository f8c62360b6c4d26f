//! Mesh geometry references.

use crate::Transform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to a mesh file with uniform scale and a local origin.
///
/// Model-type entities carry one mesh for physics and optionally a second,
/// higher-detail mesh for rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshGeometry {
    /// Mesh file path.
    pub filename: String,
    /// Uniform scale factor applied to the mesh.
    pub scale: f64,
    /// Local origin of the mesh within the entity frame.
    pub origin: Transform,
}

impl MeshGeometry {
    /// Create a mesh geometry reference.
    #[must_use]
    pub fn new(filename: impl Into<String>, scale: f64, origin: Transform) -> Self {
        Self {
            filename: filename.into(),
            scale,
            origin,
        }
    }
}
