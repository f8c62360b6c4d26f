//! Rigid transforms.
//!
//! A [`Transform`] places an entity in a parent frame using a translation
//! vector and a unit quaternion. Scenario documents express orientation as a
//! roll/pitch/yaw triple; the quaternion is built by composing yaw, then
//! pitch, then roll.

use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position and orientation of an entity relative to a parent frame.
///
/// # Example
///
/// ```
/// use brine_types::Transform;
/// use nalgebra::{Point3, Vector3};
///
/// let t = Transform::from_xyz_rpy(Vector3::new(1.0, 2.0, 3.0), Vector3::zeros());
/// let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(p, Point3::new(2.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Translation in the parent frame.
    pub translation: Vector3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform (no translation, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a transform from translation and rotation.
    #[must_use]
    pub const fn new(translation: Vector3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Create a transform from a translation triple and a roll/pitch/yaw
    /// triple.
    ///
    /// Rotations compose in the fixed order yaw, then pitch, then roll:
    /// `R = Rz(yaw) * Ry(pitch) * Rx(roll)`. The input vector is ordered
    /// `(roll, pitch, yaw)` to match the `rpy` attribute of scenario
    /// documents. Angles are radians; no normalization or range checking
    /// is performed.
    #[must_use]
    pub fn from_xyz_rpy(xyz: Vector3<f64>, rpy: Vector3<f64>) -> Self {
        Self {
            translation: xyz,
            rotation: UnitQuaternion::from_euler_angles(rpy.x, rpy.y, rpy.z),
        }
    }

    /// Create a transform from translation only (identity rotation).
    #[must_use]
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            translation,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a transform from an isometry.
    #[must_use]
    pub fn from_isometry(iso: Isometry3<f64>) -> Self {
        Self {
            translation: iso.translation.vector,
            rotation: iso.rotation,
        }
    }

    /// Convert to an isometry.
    #[must_use]
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(self.translation.into(), self.rotation)
    }

    /// Transform a point from the local frame to the parent frame.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.rotation.transform_point(point) + self.translation
    }

    /// Rotate a vector from the local frame to the parent frame.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.rotation.transform_vector(vector)
    }

    /// Compose with another transform: `other` is expressed in this
    /// transform's local frame.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            translation: self.translation + self.rotation.transform_vector(&other.translation),
            rotation: self.rotation * other.rotation,
        }
    }

    /// Invert the transform.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            translation: -(inv_rotation.transform_vector(&self.translation)),
            rotation: inv_rotation,
        }
    }
}
