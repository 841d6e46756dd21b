use nalgebra as na;

use crate::shapes::Shape;

/// A capsule collision shape aligned with the local Y axis
#[derive(Debug, Clone)]
pub struct Capsule {
    radius: f32,
    /// Height of the cylindrical section, excluding the end caps
    height: f32,
}

impl Capsule {
    /// Creates a new capsule with the given radius and cylinder height
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Returns the radius of the capsule
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the height of the cylindrical section
    pub fn get_height(&self) -> f32 {
        self.height
    }
}

impl Shape for Capsule {
    fn shape_type(&self) -> &'static str {
        "Capsule"
    }

    fn local_inertia(&self, mass: f32) -> na::Vector3<f32> {
        if mass == 0.0 {
            return na::Vector3::zeros();
        }

        // Box approximation over the enclosing half extents
        let h = na::Vector3::new(self.radius, self.radius + self.height * 0.5, self.radius);
        let third = mass / 3.0;
        na::Vector3::new(
            third * (h.y * h.y + h.z * h.z),
            third * (h.x * h.x + h.z * h.z),
            third * (h.x * h.x + h.y * h.y),
        )
    }
}
