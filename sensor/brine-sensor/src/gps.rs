//! Satellite positioning receiver definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Noise standard deviations of a GPS receiver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsNoise {
    /// Horizontal position noise in the NED frame, in m.
    pub ned_position: f64,
}

/// A GPS receiver. Produces fixes only when the antenna breaches the
/// water surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gps {
    /// Sensor name.
    pub name: String,
    /// Sample rate in Hz; `-1` means as fast as possible.
    pub rate: f64,
    /// History buffer length in samples; `-1` means unbounded/disabled.
    pub history: i32,
    /// Measurement noise.
    pub noise: GpsNoise,
}

impl Gps {
    /// Create a GPS receiver with noise-free measurements.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64, history: i32) -> Self {
        Self {
            name: name.into(),
            rate,
            history,
            noise: GpsNoise::default(),
        }
    }

    /// Set the measurement noise.
    pub fn set_noise(&mut self, ned_position: f64) {
        self.noise = GpsNoise { ned_position };
    }
}
