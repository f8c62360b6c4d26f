//! Movable rigid-body shapes, including compound bodies.
//!
//! A [`SolidEntity`] is either a single [`ShapeSolid`] or a [`CompoundSolid`]
//! assembled from sub-parts. Compound parts are always non-compound shapes;
//! nesting compounds inside compounds is not supported and the type structure
//! makes it unrepresentable.

use nalgebra::Vector3;

use crate::{MeshGeometry, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a body interacts with the fluid/air environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyPhysicsMode {
    /// Rigid body constrained to the water surface.
    Surface,
    /// Rigid body floating at the surface with partial immersion.
    Floating,
    /// Fully submerged rigid body with hydrodynamic forces.
    #[default]
    Submerged,
    /// Body in air with aerodynamic forces.
    Aerodynamic,
}

impl BodyPhysicsMode {
    /// Parse a physics mode from its document string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "surface" => Some(Self::Surface),
            "floating" => Some(Self::Floating),
            "submerged" => Some(Self::Submerged),
            "aerodynamic" => Some(Self::Aerodynamic),
            _ => None,
        }
    }

    /// Get the document string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::Floating => "floating",
            Self::Submerged => "submerged",
            Self::Aerodynamic => "aerodynamic",
        }
    }
}

impl std::fmt::Display for BodyPhysicsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a non-compound solid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolidShape {
    /// Box with full extents.
    Box {
        /// Full dimensions along each axis.
        dimensions: Vector3<f64>,
    },
    /// Cylinder.
    Cylinder {
        /// Cylinder radius.
        radius: f64,
        /// Cylinder height.
        height: f64,
    },
    /// Sphere.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
    /// Torus.
    Torus {
        /// Distance from the torus center to the tube center.
        major_radius: f64,
        /// Tube radius.
        minor_radius: f64,
    },
    /// Mesh model. When no separate graphics mesh is given the physics
    /// mesh doubles as the render mesh.
    Model {
        /// Collision mesh.
        physics: MeshGeometry,
        /// Optional render mesh.
        graphics: Option<MeshGeometry>,
    },
}

impl SolidShape {
    /// Get the name of this shape kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Cylinder { .. } => "cylinder",
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::Model { .. } => "model",
        }
    }
}

/// A movable rigid-body shape with physical and visual bindings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeSolid {
    /// Entity name.
    pub name: String,
    /// Entity shape.
    pub shape: SolidShape,
    /// Local origin transform. Identity for model shapes, whose placement
    /// comes from their mesh origin blocks.
    pub origin: Transform,
    /// Referenced material name.
    pub material: String,
    /// Referenced look name.
    pub look: String,
    /// Physical interaction mode.
    pub physics_mode: BodyPhysicsMode,
    /// Shell wall thickness in meters; `-1` means a solid body without a
    /// shell.
    pub thickness: f64,
    /// Whether buoyancy forces apply.
    pub buoyant: bool,
}

impl ShapeSolid {
    /// Create a solid with default origin, physics mode, thickness and
    /// buoyancy.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        shape: SolidShape,
        material: impl Into<String>,
        look: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            origin: Transform::identity(),
            material: material.into(),
            look: look.into(),
            physics_mode: BodyPhysicsMode::default(),
            thickness: -1.0,
            buoyant: true,
        }
    }

    /// Set the local origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Transform) -> Self {
        self.origin = origin;
        self
    }

    /// Set the physics mode.
    #[must_use]
    pub fn with_physics_mode(mut self, mode: BodyPhysicsMode) -> Self {
        self.physics_mode = mode;
        self
    }

    /// Set the shell thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the buoyancy flag.
    #[must_use]
    pub fn with_buoyant(mut self, buoyant: bool) -> Self {
        self.buoyant = buoyant;
        self
    }

    /// Check whether the body is a hollow shell.
    #[must_use]
    pub fn is_shell(&self) -> bool {
        self.thickness >= 0.0
    }
}

/// A sub-part of a compound body with its compound-local transform.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompoundPart {
    /// The part itself; always a non-compound shape.
    pub solid: ShapeSolid,
    /// Placement of the part in the compound frame.
    pub origin: Transform,
}

/// A rigid body assembled from sub-parts.
///
/// External parts contribute both collision geometry and mass; internal
/// parts contribute mass only. The compound itself carries no shape, only
/// the aggregate of its parts. Part order follows document order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompoundSolid {
    /// Entity name.
    pub name: String,
    /// Physical interaction mode of the whole assembly.
    pub physics_mode: BodyPhysicsMode,
    /// Collision-visible parts, in document order. Never empty.
    pub external_parts: Vec<CompoundPart>,
    /// Mass-only parts, in document order.
    pub internal_parts: Vec<CompoundPart>,
}

impl CompoundSolid {
    /// Create a compound seeded with its first external part.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        first_part: ShapeSolid,
        origin: Transform,
        physics_mode: BodyPhysicsMode,
    ) -> Self {
        Self {
            name: name.into(),
            physics_mode,
            external_parts: vec![CompoundPart {
                solid: first_part,
                origin,
            }],
            internal_parts: Vec::new(),
        }
    }

    /// Attach a collision-visible part.
    pub fn add_external_part(&mut self, solid: ShapeSolid, origin: Transform) {
        self.external_parts.push(CompoundPart { solid, origin });
    }

    /// Attach a mass-only part.
    pub fn add_internal_part(&mut self, solid: ShapeSolid, origin: Transform) {
        self.internal_parts.push(CompoundPart { solid, origin });
    }

    /// Total number of attached parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.external_parts.len() + self.internal_parts.len()
    }
}

/// A movable rigid body: a single shape or a compound assembly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolidEntity {
    /// A single shape solid.
    Shape(ShapeSolid),
    /// A compound assembly of shape solids.
    Compound(CompoundSolid),
}

impl SolidEntity {
    /// Get the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Shape(s) => &s.name,
            Self::Compound(c) => &c.name,
        }
    }

    /// Get the physical interaction mode.
    #[must_use]
    pub fn physics_mode(&self) -> BodyPhysicsMode {
        match self {
            Self::Shape(s) => s.physics_mode,
            Self::Compound(c) => c.physics_mode,
        }
    }
}
