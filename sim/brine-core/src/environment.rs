//! Atmosphere and ocean environment state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sun position driving scene lighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sun {
    /// Azimuth in degrees, measured clockwise from north.
    pub azimuth: f64,
    /// Elevation above the horizon in degrees.
    pub elevation: f64,
}

impl Sun {
    /// Create a sun position.
    #[must_use]
    pub const fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }
}

/// Ocean state. Present only when the scenario enables the ocean.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ocean {
    /// Wave amplitude factor; `0` gives a flat surface.
    pub waves: f64,
}

impl Ocean {
    /// Create an ocean with the given wave amplitude factor.
    #[must_use]
    pub const fn new(waves: f64) -> Self {
        Self { waves }
    }
}
