use crate::bodies::MotionState;
use crate::core::{BodyHandle, StateHandle};
use crate::error::BridgeError;
use crate::math::{Matrix3, Quaternion, Transform, Vector3};
use crate::{PhysicsBridge, Result};

/// Motion-state surface: the transform-synchronization protocol between the
/// stepping routine and the embedding application.
impl PhysicsBridge {
    /// Allocates a motion state initialized to the identity transform
    pub fn create_motion_state(&mut self) -> StateHandle {
        self.states.add(MotionState::new())
    }

    /// Destroys a motion state. The handle is dead from here on.
    pub fn destroy_motion_state(&mut self, state: StateHandle) -> Result<()> {
        self.states
            .remove(state)
            .map(|_| ())
            .ok_or(BridgeError::MotionStateDoesNotExist)
    }

    /// Pull side of the protocol, called once per frame after the core has
    /// advanced the simulation.
    ///
    /// Copies the cached transform into the caller-owned outputs and returns
    /// whether a write happened since the previous pull, so the caller can
    /// skip redundant propagation. The outputs are caller-owned precisely so
    /// the per-frame pull allocates nothing.
    pub fn apply_transform(
        &mut self,
        state: StateHandle,
        location: &mut Vector3,
        rotation: &mut Quaternion,
    ) -> Result<bool> {
        let (transform, changed) = self.state_mut(state)?.apply_transform();
        *location = transform.location();
        *rotation = transform.rotation_quat();
        Ok(changed)
    }

    /// Unconditional read of the cached transform's origin
    pub fn get_world_location(&self, state: StateHandle) -> Result<Vector3> {
        Ok(self.state(state)?.world_transform().location())
    }

    /// Unconditional read of the cached transform's basis in matrix form
    pub fn get_world_rotation(&self, state: StateHandle) -> Result<Matrix3> {
        Ok(self.state(state)?.world_transform().rotation_matrix())
    }

    /// Unconditional read of the cached transform's basis in quaternion form
    pub fn get_world_rotation_quat(&self, state: StateHandle) -> Result<Quaternion> {
        Ok(self.state(state)?.world_transform().rotation_quat())
    }

    /// Engine write path: replaces the cached transform wholesale and flags
    /// it for the next pull
    pub fn set_world_transform(
        &mut self,
        state: StateHandle,
        location: &Vector3,
        rotation: &Quaternion,
    ) -> Result<()> {
        let transform = Transform::new(location.to_nalgebra(), rotation.to_nalgebra());
        self.state_mut(state)?.set_world_transform(transform);
        Ok(())
    }

    /// Pushes the body's current world transform into its motion state.
    ///
    /// This is what the stepping routine does after integrating a dynamic
    /// body, and what the kinematic pickup does between steps after the
    /// caller has driven the body through the location/rotation setters.
    pub fn sync_motion_state(&mut self, body: BodyHandle) -> Result<()> {
        let (state, transform) = {
            let body = self.body(body)?;
            (body.get_motion_state(), body.get_transform())
        };
        self.state_mut(state)?.set_world_transform(transform);
        Ok(())
    }
}
