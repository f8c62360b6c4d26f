//! Simulation manager and shared registries.
//!
//! This crate provides the runtime container the scenario compiler registers
//! entities into:
//!
//! - [`MaterialRegistry`] - Named materials plus pairwise friction overrides
//! - [`LookRegistry`] - Named visual appearances
//! - [`Ned`] - Geographic origin of the NED world frame
//! - [`SimulationManager`] - Owner of the registries, environment state and
//!   the placed entity sets (statics, solids, robots)
//!
//! Registration calls are one-directional ownership transfers: once an
//! entity is handed to the manager, the manager is its sole owner. The
//! compiler never reads entities back after registering them.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

mod environment;
mod look;
mod manager;
mod material;
mod ned;

pub use environment::{Ocean, Sun};
pub use look::LookRegistry;
pub use manager::{PlacedRobot, PlacedSolid, PlacedStatic, SimulationManager};
pub use material::MaterialRegistry;
pub use ned::Ned;
