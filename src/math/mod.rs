pub mod vector;
pub mod matrix;
pub mod rotation;
pub mod transform;

pub use self::vector::Vector3;
pub use self::matrix::Matrix3;
pub use self::rotation::Quaternion;
pub use self::transform::Transform;

/// Epsilon value for floating point comparisons
pub const EPSILON: f32 = 1e-6;
