use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// A 3x3 rotation basis as the embedding application sees it.
///
/// Row-major, matching the core's basis convention; no sign or axis-order
/// adjustment happens during marshaling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3 {
    pub data: [[f32; 3]; 3],
}

impl Matrix3 {
    /// Creates a new matrix from row-major data
    #[inline]
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    /// Creates an identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self { data: [[0.0; 3]; 3] }
    }

    /// Returns the transpose of the matrix
    pub fn transpose(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;

        Self {
            data: [
                [a, d, g],
                [b, e, h],
                [c, f, i],
            ],
        }
    }

    /// Multiplies the matrix by a vector
    #[inline]
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;

        Vector3::new(
            a * v.x + b * v.y + c * v.z,
            d * v.x + e * v.y + f * v.z,
            g * v.x + h * v.y + i * v.z,
        )
    }

    /// Convert to the simulation core's nalgebra representation
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;

        na::Matrix3::new(
            a, b, c,
            d, e, f,
            g, h, i,
        )
    }

    /// Convert from the simulation core's nalgebra representation
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        Self {
            data: [
                [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
                [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
                [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
            ],
        }
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}
