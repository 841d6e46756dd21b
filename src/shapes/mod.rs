mod shape;
mod sphere;
mod box_shape;
mod capsule;

pub use self::shape::Shape;
pub use self::sphere::Sphere;
pub use self::box_shape::BoxShape;
pub use self::capsule::Capsule;
