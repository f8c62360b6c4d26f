//! Inertial Measurement Unit (IMU) definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement range of an IMU.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuRange {
    /// Maximum measurable angular velocity magnitude in rad/s.
    pub angular_velocity: f64,
}

impl Default for ImuRange {
    fn default() -> Self {
        Self {
            angular_velocity: f64::INFINITY,
        }
    }
}

/// Noise standard deviations of an IMU.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuNoise {
    /// Orientation angle noise in rad.
    pub angle: f64,
    /// Angular velocity noise in rad/s.
    pub angular_velocity: f64,
}

/// An inertial measurement unit attached to a robot link.
///
/// # Example
///
/// ```
/// use brine_sensor::Imu;
///
/// let mut imu = Imu::new("ahrs", 100.0, -1);
/// imu.set_noise(0.001, 0.01);
/// assert!(imu.noise.angle > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Imu {
    /// Sensor name.
    pub name: String,
    /// Sample rate in Hz; `-1` means as fast as possible.
    pub rate: f64,
    /// History buffer length in samples; `-1` means unbounded/disabled.
    pub history: i32,
    /// Measurement range.
    pub range: ImuRange,
    /// Measurement noise.
    pub noise: ImuNoise,
}

impl Imu {
    /// Create an IMU with default range and noise.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64, history: i32) -> Self {
        Self {
            name: name.into(),
            rate,
            history,
            range: ImuRange::default(),
            noise: ImuNoise::default(),
        }
    }

    /// Set the measurement range.
    pub fn set_range(&mut self, angular_velocity: f64) {
        self.range = ImuRange { angular_velocity };
    }

    /// Set the measurement noise.
    pub fn set_noise(&mut self, angle: f64, angular_velocity: f64) {
        self.noise = ImuNoise {
            angle,
            angular_velocity,
        };
    }
}
