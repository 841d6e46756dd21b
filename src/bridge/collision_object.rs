use crate::bodies::{ActivationState, CollisionFlags};
use crate::core::{BodyHandle, ShapeHandle};
use crate::error::BridgeError;
use crate::{PhysicsBridge, Result};

/// Collision-object surface: shape attachment and collision-flag toggles.
impl PhysicsBridge {
    /// Replaces the object's collision shape reference unconditionally.
    ///
    /// The old reference is dropped, never destroyed; ownership of geometry
    /// stays with the shape registry and whatever bodies still share it.
    pub fn attach_shape(&mut self, object: BodyHandle, shape: ShapeHandle) -> Result<()> {
        if !self.bodies.contains(object) {
            return Err(BridgeError::ObjectDoesNotExist);
        }
        let shape = self
            .shapes
            .get(shape)
            .cloned()
            .ok_or(BridgeError::ShapeDoesNotExist)?;

        self.object_mut(object)?.set_shape(shape);
        Ok(())
    }

    /// Returns the object's collision flags
    pub fn collision_flags(&self, object: BodyHandle) -> Result<CollisionFlags> {
        self.bodies
            .get(object)
            .map(|body| body.get_collision_flags())
            .ok_or(BridgeError::ObjectDoesNotExist)
    }

    /// Toggles the static bit of the object's collision flags
    pub fn set_static(&mut self, body: BodyHandle, flag: bool) -> Result<()> {
        let body = self.body_mut(body)?;
        let mut flags = body.get_collision_flags();
        flags.set(CollisionFlags::STATIC_OBJECT, flag);
        body.set_collision_flags(flags);
        Ok(())
    }

    /// Toggles the kinematic bit and pairs it with the activation state:
    /// a kinematic body never deactivates, clearing the bit restores normal
    /// activation eligibility.
    pub fn set_kinematic(&mut self, body: BodyHandle, flag: bool) -> Result<()> {
        let body = self.body_mut(body)?;
        let mut flags = body.get_collision_flags();
        flags.set(CollisionFlags::KINEMATIC_OBJECT, flag);
        body.set_collision_flags(flags);

        if flag {
            body.force_activation_state(ActivationState::DisableDeactivation);
        } else {
            body.force_activation_state(ActivationState::Active);
        }
        Ok(())
    }
}
