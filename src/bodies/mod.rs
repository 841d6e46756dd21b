mod rigid_body;
mod motion_state;

pub use self::rigid_body::RigidBody;
pub use self::motion_state::MotionState;

use bitflags::bitflags;

bitflags! {
    /// Collision-flag bits carried by every collision object
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CollisionFlags: u32 {
        /// Immovable; takes part in collision but never in dynamics
        const STATIC_OBJECT = 0x01;

        /// Driven by externally supplied transforms rather than dynamics
        const KINEMATIC_OBJECT = 0x02;
    }
}

/// Activation bookkeeping for the deactivation (sleeping) machinery.
///
/// `DisableDeactivation` and `DisableSimulation` are sticky: the plain
/// setter refuses to overwrite them, only the forcing setter can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    /// Participating in simulation
    Active,

    /// Quiet long enough that the core wants to put it to sleep
    WantsDeactivation,

    /// Asleep; skipped by the solver until woken
    IslandSleeping,

    /// Never deactivated; kinematic bodies live here
    DisableDeactivation,

    /// Removed from simulation entirely
    DisableSimulation,
}
