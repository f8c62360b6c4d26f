//! Immovable world geometry.

use nalgebra::Vector3;

use crate::MeshGeometry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extent of the infinite ground plane in meters.
///
/// Planes are created with this fixed, effectively infinite extent
/// regardless of any dimension block in the document.
pub const PLANE_EXTENT: f64 = 10_000.0;

/// Shape of a static entity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StaticShape {
    /// Axis-aligned box obstacle with full extents.
    Box {
        /// Full dimensions along each axis.
        dimensions: Vector3<f64>,
    },
    /// Cylinder obstacle.
    Cylinder {
        /// Cylinder radius.
        radius: f64,
        /// Cylinder height.
        height: f64,
    },
    /// Sphere obstacle.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
    /// Mesh model obstacle. When no separate graphics mesh is given the
    /// physics mesh doubles as the render mesh.
    Model {
        /// Collision mesh.
        physics: MeshGeometry,
        /// Optional render mesh.
        graphics: Option<MeshGeometry>,
    },
    /// Infinite ground plane.
    Plane {
        /// Plane extent (always [`PLANE_EXTENT`] when compiled from a
        /// document).
        extent: f64,
    },
    /// Heightmap terrain.
    Terrain {
        /// Heightmap image file path.
        height_map: String,
        /// Horizontal grid spacing along x in meters per pixel.
        scale_x: f64,
        /// Horizontal grid spacing along y in meters per pixel.
        scale_y: f64,
        /// Maximum terrain height in meters.
        height: f64,
    },
}

impl StaticShape {
    /// Create a box shape.
    #[must_use]
    pub fn box_shape(dimensions: Vector3<f64>) -> Self {
        Self::Box { dimensions }
    }

    /// Create a cylinder shape.
    #[must_use]
    pub fn cylinder(radius: f64, height: f64) -> Self {
        Self::Cylinder { radius, height }
    }

    /// Create a sphere shape.
    #[must_use]
    pub fn sphere(radius: f64) -> Self {
        Self::Sphere { radius }
    }

    /// Create an infinite plane.
    #[must_use]
    pub fn plane() -> Self {
        Self::Plane {
            extent: PLANE_EXTENT,
        }
    }

    /// Get the name of this shape kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Cylinder { .. } => "cylinder",
            Self::Sphere { .. } => "sphere",
            Self::Model { .. } => "model",
            Self::Plane { .. } => "plane",
            Self::Terrain { .. } => "terrain",
        }
    }
}

/// An immovable world object bound to a material and a look.
///
/// Created once at load time; owned by the simulation manager after
/// registration and never mutated by the compiler afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaticEntity {
    /// Entity name.
    pub name: String,
    /// Referenced material name.
    pub material: String,
    /// Referenced look name.
    pub look: String,
    /// Entity shape.
    pub shape: StaticShape,
}

impl StaticEntity {
    /// Create a static entity.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        look: impl Into<String>,
        shape: StaticShape,
    ) -> Self {
        Self {
            name: name.into(),
            material: material.into(),
            look: look.into(),
            shape,
        }
    }
}
