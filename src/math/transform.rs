use nalgebra as na;

use crate::math::{Matrix3, Quaternion, Vector3};

/// A world transform as the simulation core stores it: an origin plus a
/// rotation basis. No scale; collision shapes carry their own dimensions.
///
/// The location and rotation setters each touch only their own field, so a
/// caller relocating a body never disturbs its basis and vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub origin: na::Vector3<f32>,
    pub basis: na::UnitQuaternion<f32>,
}

impl Transform {
    /// Creates a new transform from an origin and a basis
    #[inline]
    pub fn new(origin: na::Vector3<f32>, basis: na::UnitQuaternion<f32>) -> Self {
        Self { origin, basis }
    }

    /// Creates an identity transform
    #[inline]
    pub fn identity() -> Self {
        Self {
            origin: na::Vector3::zeros(),
            basis: na::UnitQuaternion::identity(),
        }
    }

    /// Marshals the origin out to the caller's vector type
    #[inline]
    pub fn location(&self) -> Vector3 {
        Vector3::from_nalgebra(&self.origin)
    }

    /// Marshals the basis out in quaternion form
    #[inline]
    pub fn rotation_quat(&self) -> Quaternion {
        Quaternion::from_nalgebra(&self.basis)
    }

    /// Marshals the basis out in matrix form
    #[inline]
    pub fn rotation_matrix(&self) -> Matrix3 {
        Matrix3::from_nalgebra(self.basis.to_rotation_matrix().matrix())
    }

    /// Replaces the origin, leaving the basis untouched
    #[inline]
    pub fn set_location(&mut self, origin: na::Vector3<f32>) {
        self.origin = origin;
    }

    /// Replaces the basis, leaving the origin untouched
    #[inline]
    pub fn set_basis(&mut self, basis: na::UnitQuaternion<f32>) {
        self.basis = basis;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
