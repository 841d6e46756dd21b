use nalgebra as na;

use crate::shapes::Shape;

/// A spherical collision shape
#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// Returns the radius of the sphere
    pub fn get_radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn shape_type(&self) -> &'static str {
        "Sphere"
    }

    fn local_inertia(&self, mass: f32) -> na::Vector3<f32> {
        if mass == 0.0 {
            return na::Vector3::zeros();
        }

        // I = (2/5) * m * r^2 about every axis
        let inertia = 0.4 * mass * self.radius * self.radius;
        na::Vector3::new(inertia, inertia, inertia)
    }
}
