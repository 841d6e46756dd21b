use nalgebra as na;
use std::fmt::Debug;

/// Base trait for collision shapes.
///
/// Shapes are immutable geometry shared between bodies through `Arc`, so a
/// body can never outlive the geometry it references. Only the mass-property
/// contract matters to the bridge; construction of richer shape kinds and
/// compound children is the geometry layer's business.
pub trait Shape: Send + Sync + Debug + 'static {
    /// Returns the type name of the shape
    fn shape_type(&self) -> &'static str;

    /// Returns the diagonal of the local inertia tensor for the given mass.
    ///
    /// Mass zero is the immovable convention and yields zero inertia.
    fn local_inertia(&self, mass: f32) -> na::Vector3<f32>;
}
