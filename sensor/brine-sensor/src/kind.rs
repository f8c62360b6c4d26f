//! Closed set of sensor kinds.

use crate::{Dvl, Fog, Gps, Imu, Odometry, Pressure};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of sensor, as named in scenario documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorKind {
    /// Inertial measurement unit.
    Imu,
    /// Doppler velocity log.
    Dvl,
    /// Satellite positioning receiver.
    Gps,
    /// Water pressure gauge.
    Pressure,
    /// Ground-truth odometry.
    Odometry,
    /// Fiber-optic gyroscope.
    Fog,
}

impl SensorKind {
    /// Parse a sensor kind from its document string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "imu" => Some(Self::Imu),
            "dvl" => Some(Self::Dvl),
            "gps" => Some(Self::Gps),
            "pressure" => Some(Self::Pressure),
            "odometry" => Some(Self::Odometry),
            "fog" => Some(Self::Fog),
            _ => None,
        }
    }

    /// Get the document string for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Imu => "imu",
            Self::Dvl => "dvl",
            Self::Gps => "gps",
            Self::Pressure => "pressure",
            Self::Odometry => "odometry",
            Self::Fog => "fog",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sensor of any supported kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sensor {
    /// Inertial measurement unit.
    Imu(Imu),
    /// Doppler velocity log.
    Dvl(Dvl),
    /// Satellite positioning receiver.
    Gps(Gps),
    /// Water pressure gauge.
    Pressure(Pressure),
    /// Ground-truth odometry.
    Odometry(Odometry),
    /// Fiber-optic gyroscope.
    Fog(Fog),
}

impl Sensor {
    /// Get the sensor name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Imu(s) => &s.name,
            Self::Dvl(s) => &s.name,
            Self::Gps(s) => &s.name,
            Self::Pressure(s) => &s.name,
            Self::Odometry(s) => &s.name,
            Self::Fog(s) => &s.name,
        }
    }

    /// Get the sensor kind.
    #[must_use]
    pub fn kind(&self) -> SensorKind {
        match self {
            Self::Imu(_) => SensorKind::Imu,
            Self::Dvl(_) => SensorKind::Dvl,
            Self::Gps(_) => SensorKind::Gps,
            Self::Pressure(_) => SensorKind::Pressure,
            Self::Odometry(_) => SensorKind::Odometry,
            Self::Fog(_) => SensorKind::Fog,
        }
    }

    /// Get the sample rate in Hz (`-1` means as fast as possible).
    #[must_use]
    pub fn rate(&self) -> f64 {
        match self {
            Self::Imu(s) => s.rate,
            Self::Dvl(s) => s.rate,
            Self::Gps(s) => s.rate,
            Self::Pressure(s) => s.rate,
            Self::Odometry(s) => s.rate,
            Self::Fog(s) => s.rate,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trip() {
        for kind in [
            SensorKind::Imu,
            SensorKind::Dvl,
            SensorKind::Gps,
            SensorKind::Pressure,
            SensorKind::Odometry,
            SensorKind::Fog,
        ] {
            assert_eq!(SensorKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(SensorKind::from_str("sonar"), None);
    }

    #[test]
    fn sensor_dispatch() {
        let sensor = Sensor::Gps(Gps::new("gnss", 1.0, -1));
        assert_eq!(sensor.name(), "gnss");
        assert_eq!(sensor.kind(), SensorKind::Gps);
        assert!((sensor.rate() - 1.0).abs() < f64::EPSILON);
    }
}
