//! Doppler Velocity Log (DVL) definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement range of a DVL.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DvlRange {
    /// Maximum measurable velocity per body axis in m/s: `[x, y, z]`.
    pub velocity: [f64; 3],
    /// Minimum measurable altitude over ground in m.
    pub altitude_min: f64,
    /// Maximum measurable altitude over ground in m.
    pub altitude_max: f64,
}

impl Default for DvlRange {
    fn default() -> Self {
        Self {
            velocity: [f64::INFINITY; 3],
            altitude_min: 0.0,
            altitude_max: f64::INFINITY,
        }
    }
}

/// Noise standard deviations of a DVL.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DvlNoise {
    /// Velocity noise in m/s.
    pub velocity: f64,
    /// Altitude noise in m.
    pub altitude: f64,
}

/// A Doppler velocity log measuring body velocity and altitude over ground.
///
/// The beam half-angle is a fixed property of the transducer head and is
/// required at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dvl {
    /// Sensor name.
    pub name: String,
    /// Beam half-angle in rad.
    pub beam_angle: f64,
    /// Sample rate in Hz; `-1` means as fast as possible.
    pub rate: f64,
    /// History buffer length in samples; `-1` means unbounded/disabled.
    pub history: i32,
    /// Measurement range.
    pub range: DvlRange,
    /// Measurement noise.
    pub noise: DvlNoise,
}

impl Dvl {
    /// Create a DVL with default range and noise.
    #[must_use]
    pub fn new(name: impl Into<String>, beam_angle: f64, rate: f64, history: i32) -> Self {
        Self {
            name: name.into(),
            beam_angle,
            rate,
            history,
            range: DvlRange::default(),
            noise: DvlNoise::default(),
        }
    }

    /// Set the measurement range.
    pub fn set_range(&mut self, velocity: [f64; 3], altitude_min: f64, altitude_max: f64) {
        self.range = DvlRange {
            velocity,
            altitude_min,
            altitude_max,
        };
    }

    /// Set the measurement noise.
    pub fn set_noise(&mut self, velocity: f64, altitude: f64) {
        self.noise = DvlNoise { velocity, altitude };
    }
}
