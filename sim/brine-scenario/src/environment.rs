//! Environment configurator.
//!
//! Reads the global geo-reference origin, sun position and ocean settings
//! and pushes them into the simulation manager.

use brine_core::SimulationManager;

use crate::document::Element;
use crate::error::Result;

/// Compile the `environment` block into the manager.
///
/// `ned`, `sun` and `ocean` are all required; `waves` is required only
/// when the ocean is enabled.
pub(crate) fn build_environment(element: &Element, manager: &mut SimulationManager) -> Result<()> {
    let ned = element.require_child("ned")?;
    let sun = element.require_child("sun")?;
    let ocean = element.require_child("ocean")?;

    let latitude = ned.require_f64("latitude")?;
    let longitude = ned.require_f64("longitude")?;
    manager.ned_mut().init(latitude, longitude, 0.0);

    let azimuth = sun.require_f64("azimuth")?;
    let elevation = sun.require_f64("elevation")?;
    manager.setup_sun_position(azimuth, elevation);

    let enabled = ocean.require_bool("enabled")?;
    if enabled {
        let waves = ocean.require_f64("waves")?;
        manager.enable_ocean(waves);
    }

    Ok(())
}
