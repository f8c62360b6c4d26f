//! Ground-truth odometry definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Noise standard deviations of an odometry source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OdometryNoise {
    /// Position noise in m.
    pub position: f64,
    /// Linear velocity noise in m/s.
    pub velocity: f64,
    /// Orientation angle noise in rad.
    pub angle: f64,
    /// Angular velocity noise in rad/s.
    pub angular_velocity: f64,
}

/// A full-state odometry sensor reporting pose and twist of its link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Odometry {
    /// Sensor name.
    pub name: String,
    /// Sample rate in Hz; `-1` means as fast as possible.
    pub rate: f64,
    /// History buffer length in samples; `-1` means unbounded/disabled.
    pub history: i32,
    /// Measurement noise.
    pub noise: OdometryNoise,
}

impl Odometry {
    /// Create an odometry sensor with noise-free measurements.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64, history: i32) -> Self {
        Self {
            name: name.into(),
            rate,
            history,
            noise: OdometryNoise::default(),
        }
    }

    /// Set the measurement noise.
    pub fn set_noise(&mut self, position: f64, velocity: f64, angle: f64, angular_velocity: f64) {
        self.noise = OdometryNoise {
            position,
            velocity,
            angle,
            angular_velocity,
        };
    }
}
