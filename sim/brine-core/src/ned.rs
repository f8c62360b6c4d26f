//! North-east-down geographic reference frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic origin of the simulation's NED world frame.
///
/// Uninitialized until the scenario's environment block is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ned {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    initialized: bool,
}

impl Ned {
    /// Create an uninitialized NED frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the frame origin. Latitude and longitude in degrees,
    /// altitude in meters above the reference ellipsoid.
    pub fn init(&mut self, latitude: f64, longitude: f64, altitude: f64) {
        self.latitude = latitude;
        self.longitude = longitude;
        self.altitude = altitude;
        self.initialized = true;
    }

    /// Check whether the origin has been set.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Origin latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Origin longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Origin altitude in meters.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}
