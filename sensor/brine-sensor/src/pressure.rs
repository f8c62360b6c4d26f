//! Water pressure gauge definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement range of a pressure gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureRange {
    /// Maximum measurable pressure in Pa.
    pub pressure: f64,
}

impl Default for PressureRange {
    fn default() -> Self {
        Self {
            pressure: f64::INFINITY,
        }
    }
}

/// Noise standard deviations of a pressure gauge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureNoise {
    /// Pressure noise in Pa.
    pub pressure: f64,
}

/// A water pressure gauge, the primary depth reference underwater.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    /// Sensor name.
    pub name: String,
    /// Sample rate in Hz; `-1` means as fast as possible.
    pub rate: f64,
    /// History buffer length in samples; `-1` means unbounded/disabled.
    pub history: i32,
    /// Measurement range.
    pub range: PressureRange,
    /// Measurement noise.
    pub noise: PressureNoise,
}

impl Pressure {
    /// Create a pressure gauge with default range and noise.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64, history: i32) -> Self {
        Self {
            name: name.into(),
            rate,
            history,
            range: PressureRange::default(),
            noise: PressureNoise::default(),
        }
    }

    /// Set the measurement range.
    pub fn set_range(&mut self, pressure: f64) {
        self.range = PressureRange { pressure };
    }

    /// Set the measurement noise.
    pub fn set_noise(&mut self, pressure: f64) {
        self.noise = PressureNoise { pressure };
    }
}
