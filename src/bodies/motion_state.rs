use crate::math::Transform;

/// The transform cache synchronized between the simulation step and external
/// readers.
///
/// Holds exactly one world transform, no history and no double buffering.
/// The stepping routine is the sole writer for a dynamic body during a step;
/// the embedding application is the sole writer for a kinematic body between
/// steps. The two paths must never run concurrently; see the locking
/// contract on [`crate::bridge::PhysicsBridge`].
#[derive(Debug, Clone, Copy)]
pub struct MotionState {
    world_transform: Transform,
    /// Set by every engine write, cleared by the per-frame pull
    written: bool,
}

impl MotionState {
    /// Creates a motion state initialized to the identity transform.
    ///
    /// Starts flagged as written so the first pull reports the initial pose.
    pub fn new() -> Self {
        Self {
            world_transform: Transform::identity(),
            written: true,
        }
    }

    /// Returns the cached world transform
    pub fn world_transform(&self) -> Transform {
        self.world_transform
    }

    /// Engine write path, invoked after a body has been integrated or a
    /// kinematic transform has been picked up
    pub fn set_world_transform(&mut self, transform: Transform) {
        self.world_transform = transform;
        self.written = true;
    }

    /// Pull side of the protocol: hands out the cached transform together
    /// with whether a write happened since the previous pull
    pub fn apply_transform(&mut self) -> (Transform, bool) {
        let changed = self.written;
        self.written = false;
        (self.world_transform, changed)
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}
