//! Articulated robot definitions.
//!
//! A [`Robot`] is an assembly of links (solid entities) connected by joints,
//! carrying sensors and actuators. Definition methods keep the assembly
//! referentially consistent: joints and sensors can only attach to links
//! that exist, and link names are unique within one robot.

use nalgebra::Vector3;

use brine_sensor::Sensor;

use crate::error::RobotError;
use crate::{SolidEntity, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position limits of a prismatic or revolute joint.
///
/// The unlimited state is encoded by the sentinel `min > max`, matching the
/// wire contract of scenario documents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointLimits {
    /// Minimum position (angle for revolute, distance for prismatic).
    pub min: f64,
    /// Maximum position.
    pub max: f64,
}

impl Default for JointLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl JointLimits {
    /// Create limits with the given bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create the unlimited sentinel (`min > max`).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            min: 1.0,
            max: -1.0,
        }
    }

    /// Check whether the limits restrict motion.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.min <= self.max
    }
}

/// Kind of joint constraint, with per-kind parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointKind {
    /// No relative motion between parent and child.
    Fixed,
    /// Translation along a single axis.
    Prismatic {
        /// Unit translation axis in the joint frame.
        axis: Vector3<f64>,
        /// Position limits.
        limits: JointLimits,
    },
    /// Rotation around a single axis.
    Revolute {
        /// Unit rotation axis in the joint frame.
        axis: Vector3<f64>,
        /// Position limits.
        limits: JointLimits,
    },
}

impl JointKind {
    /// Get the document string for this joint kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Prismatic { .. } => "prismatic",
            Self::Revolute { .. } => "revolute",
        }
    }
}

impl std::fmt::Display for JointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A joint connecting two named links.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Joint {
    /// Joint name.
    pub name: String,
    /// Joint kind and parameters.
    pub kind: JointKind,
    /// Parent link name.
    pub parent: String,
    /// Child link name.
    pub child: String,
    /// Joint origin in the parent frame.
    pub origin: Transform,
}

/// A sensor attached to a named link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkSensor {
    /// The sensor definition.
    pub sensor: Sensor,
    /// Name of the link the sensor is mounted on.
    pub link: String,
    /// Sensor origin in the link frame.
    pub origin: Transform,
}

/// Actuator attached to a robot.
///
/// Actuator compilation is an extension point; robots currently carry an
/// empty actuator list so declarations remain forward-compatible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Actuator {
    /// Actuator name.
    pub name: String,
}

/// An articulated assembly of links, joints, sensors and actuators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Robot {
    /// Robot name.
    pub name: String,
    /// Whether the base link is fixed to the world.
    pub fixed_base: bool,
    /// Whether collisions between the robot's own links are simulated.
    pub self_collisions: bool,
    /// The base link.
    pub base_link: SolidEntity,
    /// Additional links.
    pub links: Vec<SolidEntity>,
    /// Joints connecting links.
    pub joints: Vec<Joint>,
    /// Sensors attached to links.
    pub sensors: Vec<LinkSensor>,
    /// Actuators (extension point, currently never populated by the
    /// compiler).
    pub actuators: Vec<Actuator>,
}

impl Robot {
    /// Define a robot from its base link and additional links.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::DuplicateLink`] if two links share a name.
    pub fn define_links(
        name: impl Into<String>,
        fixed_base: bool,
        base_link: SolidEntity,
        links: Vec<SolidEntity>,
        self_collisions: bool,
    ) -> Result<Self, RobotError> {
        let mut seen = std::collections::HashSet::new();
        seen.insert(base_link.name().to_string());
        for link in &links {
            if !seen.insert(link.name().to_string()) {
                return Err(RobotError::DuplicateLink(link.name().to_string()));
            }
        }

        Ok(Self {
            name: name.into(),
            fixed_base,
            self_collisions,
            base_link,
            links,
            joints: Vec::new(),
            sensors: Vec::new(),
            actuators: Vec::new(),
        })
    }

    /// Check whether a link with the given name exists.
    #[must_use]
    pub fn has_link(&self, name: &str) -> bool {
        self.base_link.name() == name || self.links.iter().any(|l| l.name() == name)
    }

    /// Iterate over all link names, base link first.
    pub fn link_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base_link.name()).chain(self.links.iter().map(SolidEntity::name))
    }

    fn require_link(&self, link: &str, context: &str) -> Result<(), RobotError> {
        if self.has_link(link) {
            Ok(())
        } else {
            Err(RobotError::undefined_link(link, context))
        }
    }

    fn define_joint(
        &mut self,
        name: String,
        kind: JointKind,
        parent: String,
        child: String,
        origin: Transform,
    ) -> Result<(), RobotError> {
        let context = format!("joint '{name}'");
        self.require_link(&parent, &context)?;
        self.require_link(&child, &context)?;
        self.joints.push(Joint {
            name,
            kind,
            parent,
            child,
            origin,
        });
        Ok(())
    }

    /// Define a fixed joint between two links.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::UndefinedLink`] if either link name does not
    /// resolve.
    pub fn define_fixed_joint(
        &mut self,
        name: impl Into<String>,
        parent: impl Into<String>,
        child: impl Into<String>,
        origin: Transform,
    ) -> Result<(), RobotError> {
        self.define_joint(name.into(), JointKind::Fixed, parent.into(), child.into(), origin)
    }

    /// Define a prismatic joint between two links.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::UndefinedLink`] if either link name does not
    /// resolve.
    pub fn define_prismatic_joint(
        &mut self,
        name: impl Into<String>,
        parent: impl Into<String>,
        child: impl Into<String>,
        origin: Transform,
        axis: Vector3<f64>,
        limits: JointLimits,
    ) -> Result<(), RobotError> {
        self.define_joint(
            name.into(),
            JointKind::Prismatic { axis, limits },
            parent.into(),
            child.into(),
            origin,
        )
    }

    /// Define a revolute joint between two links.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::UndefinedLink`] if either link name does not
    /// resolve.
    pub fn define_revolute_joint(
        &mut self,
        name: impl Into<String>,
        parent: impl Into<String>,
        child: impl Into<String>,
        origin: Transform,
        axis: Vector3<f64>,
        limits: JointLimits,
    ) -> Result<(), RobotError> {
        self.define_joint(
            name.into(),
            JointKind::Revolute { axis, limits },
            parent.into(),
            child.into(),
            origin,
        )
    }

    /// Attach a sensor to a named link.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::UndefinedLink`] if the link name does not
    /// resolve.
    pub fn add_link_sensor(
        &mut self,
        sensor: Sensor,
        link: impl Into<String>,
        origin: Transform,
    ) -> Result<(), RobotError> {
        let link = link.into();
        self.require_link(&link, &format!("sensor '{}'", sensor.name()))?;
        self.sensors.push(LinkSensor {
            sensor,
            link,
            origin,
        });
        Ok(())
    }
}
