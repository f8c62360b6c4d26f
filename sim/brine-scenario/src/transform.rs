//! Transform and numeric tuple codec.
//!
//! Scenario documents express vectors as whitespace-separated scalar
//! literals with a fixed expected count; any mismatch is a format error.

use nalgebra::Vector3;

use brine_types::{Color, Transform};

use crate::document::Element;
use crate::error::{Result, ScenarioError};

/// Parse a rigid transform from an element carrying `xyz` and `rpy`
/// attributes, three floats each.
///
/// The orientation composes yaw, then pitch, then roll - see
/// [`Transform::from_xyz_rpy`].
///
/// # Errors
///
/// Returns a structural error if either attribute is absent and a format
/// error if either fails to parse into exactly three floats.
pub fn parse_transform(element: &Element) -> Result<Transform> {
    let xyz = require_vector3(element, "xyz")?;
    let rpy = require_vector3(element, "rpy")?;
    Ok(Transform::from_xyz_rpy(xyz, rpy))
}

/// Parse a required attribute holding exactly three floats.
///
/// # Errors
///
/// Returns [`ScenarioError::MissingAttribute`] if the attribute is absent
/// and [`ScenarioError::InvalidAttribute`] on any token count or parse
/// failure.
pub fn require_vector3(element: &Element, attribute: &'static str) -> Result<Vector3<f64>> {
    let value = element.require_attr(attribute)?;
    let parts = parse_float_tuple(value, 3)
        .map_err(|message| ScenarioError::invalid_attribute(attribute, element.describe(), message))?;
    Ok(Vector3::new(parts[0], parts[1], parts[2]))
}

/// Parse a required color attribute holding exactly three floats.
///
/// # Errors
///
/// Same failure modes as [`require_vector3`].
pub fn require_color(element: &Element, attribute: &'static str) -> Result<Color> {
    let value = element.require_attr(attribute)?;
    let parts = parse_float_tuple(value, 3)
        .map_err(|message| ScenarioError::invalid_attribute(attribute, element.describe(), message))?;
    Ok(Color::rgb(parts[0], parts[1], parts[2]))
}

/// Parse a whitespace-separated float tuple with a fixed expected count.
fn parse_float_tuple(value: &str, expected: usize) -> std::result::Result<Vec<f64>, String> {
    let parts: Vec<f64> = value
        .split_whitespace()
        .map(|p| p.parse::<f64>().map_err(|_| format!("invalid float: {p}")))
        .collect::<std::result::Result<_, _>>()?;

    if parts.len() != expected {
        return Err(format!(
            "expected {expected} values, got {}: {value}",
            parts.len()
        ));
    }

    Ok(parts)
}
