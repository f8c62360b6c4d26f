//! Fiber-optic gyroscope definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Noise standard deviations of a fiber-optic gyroscope.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FogNoise {
    /// Heading noise in rad.
    pub heading: f64,
}

/// A fiber-optic gyroscope measuring heading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fog {
    /// Sensor name.
    pub name: String,
    /// Sample rate in Hz; `-1` means as fast as possible.
    pub rate: f64,
    /// History buffer length in samples; `-1` means unbounded/disabled.
    pub history: i32,
    /// Measurement noise.
    pub noise: FogNoise,
}

impl Fog {
    /// Create a gyroscope with noise-free measurements.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64, history: i32) -> Self {
        Self {
            name: name.into(),
            rate,
            history,
            noise: FogNoise::default(),
        }
    }

    /// Set the measurement noise.
    pub fn set_noise(&mut self, heading: f64) {
        self.noise = FogNoise { heading };
    }
}
