//! Sensor definitions for marine robotics simulation.
//!
//! This crate provides configuration types for the sensors a robot can
//! carry:
//!
//! - [`Imu`] - Inertial measurement unit
//! - [`Dvl`] - Doppler velocity log
//! - [`Gps`] - Satellite positioning receiver (surface only)
//! - [`Pressure`] - Water pressure gauge
//! - [`Odometry`] - Ground-truth odometry
//! - [`Fog`] - Fiber-optic gyroscope
//!
//! Each sensor carries a sample rate (`-1` means "as fast as possible")
//! and a history buffer length (`-1` means unbounded/disabled), plus
//! kind-specific measurement range and noise parameter sets. Range and
//! noise default to wide-open and noise-free respectively; the scenario
//! compiler threads overrides into them via the `set_range`/`set_noise`
//! setters.
//!
//! These types are pure configuration. Noise and range *models* (clamping,
//! random draws) live with the simulation, not here.
//!
//! # Units
//!
//! SI throughout: meters, radians, seconds, pascals.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::should_implement_trait
)]

mod dvl;
mod fog;
mod gps;
mod imu;
mod kind;
mod odometry;
mod pressure;

pub use dvl::{Dvl, DvlNoise, DvlRange};
pub use fog::{Fog, FogNoise};
pub use gps::{Gps, GpsNoise};
pub use imu::{Imu, ImuNoise, ImuRange};
pub use kind::{Sensor, SensorKind};
pub use odometry::{Odometry, OdometryNoise};
pub use pressure::{Pressure, PressureNoise, PressureRange};
