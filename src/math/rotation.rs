use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::{Matrix3, Vector3};

/// A rotation quaternion as the embedding application sees it.
///
/// Marshaling copies the four components verbatim; normalization is the
/// caller's concern, exactly as with the core's own accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion {
    /// Real component
    pub w: f32,

    /// First imaginary component
    pub x: f32,

    /// Second imaginary component
    pub y: f32,

    /// Third imaginary component
    pub z: f32,
}

impl Quaternion {
    /// Creates a new quaternion
    #[inline]
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates an identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates a quaternion from an axis-angle representation
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let axis = na::Unit::new_normalize(axis.to_nalgebra());
        Self::from_nalgebra(&na::UnitQuaternion::from_axis_angle(&axis, angle))
    }

    /// Returns a normalized version of the quaternion
    pub fn normalize(&self) -> Self {
        let length = (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if length > crate::math::EPSILON {
            Self {
                w: self.w / length,
                x: self.x / length,
                y: self.y / length,
                z: self.z / length,
            }
        } else {
            *self
        }
    }

    /// Rotates a vector by this quaternion
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        Vector3::from_nalgebra(&(self.to_nalgebra() * v.to_nalgebra()))
    }

    /// Converts to the equivalent rotation matrix
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        Matrix3::from_nalgebra(self.to_nalgebra().to_rotation_matrix().matrix())
    }

    /// Creates a quaternion from a rotation matrix
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        let rotation = na::Rotation3::from_matrix_unchecked(m.to_nalgebra());
        Self::from_nalgebra(&na::UnitQuaternion::from_rotation_matrix(&rotation))
    }

    /// Convert to the simulation core's nalgebra representation
    #[inline]
    pub fn to_nalgebra(&self) -> na::UnitQuaternion<f32> {
        na::Unit::new_unchecked(na::Quaternion::new(self.w, self.x, self.y, self.z))
    }

    /// Convert from the simulation core's nalgebra representation
    #[inline]
    pub fn from_nalgebra(q: &na::UnitQuaternion<f32>) -> Self {
        let q = q.as_ref();
        Self { w: q.w, x: q.i, y: q.j, z: q.k }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}
