use nalgebra as na;

use crate::shapes::Shape;

/// An axis-aligned box collision shape, stored as half extents
#[derive(Debug, Clone)]
pub struct BoxShape {
    half_extents: na::Vector3<f32>,
}

impl BoxShape {
    /// Creates a new box from half extents along each axis
    pub fn new(half_x: f32, half_y: f32, half_z: f32) -> Self {
        Self {
            half_extents: na::Vector3::new(half_x.max(0.0), half_y.max(0.0), half_z.max(0.0)),
        }
    }

    /// Returns the half extents of the box
    pub fn get_half_extents(&self) -> na::Vector3<f32> {
        self.half_extents
    }
}

impl Shape for BoxShape {
    fn shape_type(&self) -> &'static str {
        "Box"
    }

    fn local_inertia(&self, mass: f32) -> na::Vector3<f32> {
        if mass == 0.0 {
            return na::Vector3::zeros();
        }

        // I_x = (1/3) * m * (hy^2 + hz^2), likewise for the other axes
        let h = self.half_extents;
        let third = mass / 3.0;
        na::Vector3::new(
            third * (h.y * h.y + h.z * h.z),
            third * (h.x * h.x + h.z * h.z),
            third * (h.x * h.x + h.y * h.y),
        )
    }
}
