pub mod math;
pub mod core;
pub mod shapes;
pub mod bodies;
pub mod bridge;

/// Re-export common types for easier usage
pub use crate::bridge::PhysicsBridge;
pub use crate::core::{BodyHandle, Handle, ShapeHandle, StateHandle};
pub use crate::bodies::{ActivationState, CollisionFlags, MotionState, RigidBody};
pub use crate::math::{Matrix3, Quaternion, Vector3};

/// Error types for the bridge layer
pub mod error {
    use thiserror::Error;

    /// The single recoverable failure kind: a required handle referenced no
    /// live object. One variant per argument kind so the caller learns which
    /// handle was missing.
    ///
    /// Out-of-range scalars (negative mass, NaN, degenerate shapes) are not
    /// validated here; they propagate into the simulation core's own failure
    /// domain.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BridgeError {
        #[error("The collision object does not exist")]
        ObjectDoesNotExist,

        #[error("The collision shape does not exist")]
        ShapeDoesNotExist,

        #[error("The rigid body does not exist")]
        BodyDoesNotExist,

        #[error("The motion state does not exist")]
        MotionStateDoesNotExist,
    }
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, error::BridgeError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
