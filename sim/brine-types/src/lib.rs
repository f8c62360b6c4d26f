//! Object-graph types for marine robotics scenario compilation.
//!
//! This crate provides the data types produced by the scenario compiler and
//! consumed by the simulation manager:
//!
//! - [`Transform`] - Rigid transform (translation + orientation)
//! - [`Material`] / [`Friction`] - Physical surface properties
//! - [`Look`] / [`Color`] - Visual appearance definitions
//! - [`StaticEntity`] - Immovable world geometry (obstacles, plane, terrain)
//! - [`SolidEntity`] - Movable rigid-body shapes, including [`CompoundSolid`]
//!   bodies assembled from external and internal sub-parts
//! - [`Robot`] - Articulated assembly of links, joints, sensors and actuators
//!
//! # Design Philosophy
//!
//! These types are **pure data** plus the definition methods that keep the
//! object graph referentially consistent (e.g. [`Robot::define_revolute_joint`]
//! refuses a joint whose parent link does not exist). They have no physics,
//! no rendering and no I/O, so they can be used in:
//!
//! - Headless batch simulation
//! - Scenario authoring and validation tools
//! - Analysis pipelines
//!
//! # Coordinate System
//!
//! World frame is NED (north-east-down), right-handed. Orientations given as
//! roll/pitch/yaw triples compose yaw first, then pitch, then roll - see
//! [`Transform::from_xyz_rpy`].

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::should_implement_trait
)]

mod error;
mod look;
mod material;
mod mesh;
mod robot;
mod solids;
mod statics;
mod transform;

pub use error::RobotError;
pub use look::{Color, Look};
pub use material::{Friction, Material};
pub use mesh::MeshGeometry;
pub use robot::{Actuator, Joint, JointKind, JointLimits, LinkSensor, Robot};
pub use solids::{BodyPhysicsMode, CompoundPart, CompoundSolid, ShapeSolid, SolidEntity, SolidShape};
pub use statics::{StaticEntity, StaticShape, PLANE_EXTENT};
pub use transform::Transform;
