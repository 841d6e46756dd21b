mod collision_object;
mod rigid_body;
mod motion_state;

use std::sync::Arc;

use crate::bodies::{MotionState, RigidBody};
use crate::core::{BodyHandle, Registry, ShapeHandle, StateHandle};
use crate::error::BridgeError;
use crate::shapes::Shape;
use crate::Result;

/// The call surface between the embedding application and the simulation
/// core.
///
/// Every core object is identified by an opaque handle obtained from the
/// corresponding creation operation. A handle is valid from the moment
/// creation returns until the matching destruction operation; every entry
/// point checks its handles first and fails with the per-argument
/// "does not exist" error before any other work. No entry point retains a
/// handle or intermediate beyond the call.
///
/// # Locking contract
///
/// The bridge holds no lock of its own and every operation is a direct,
/// blocking call on the invoking thread. The stepping routine and any bridge
/// call that touches the same body's transform or motion state must be
/// serialized by the caller: either confine both to one thread, or guard the
/// bridge with one mutex held across the step and across any transform read
/// or write. Two unserialized transform writes tear the transform (origin
/// from one write, basis from the other).
pub struct PhysicsBridge {
    shapes: Registry<ShapeHandle, Arc<dyn Shape>>,
    bodies: Registry<BodyHandle, RigidBody>,
    states: Registry<StateHandle, MotionState>,
}

impl PhysicsBridge {
    /// Creates an empty bridge
    pub fn new() -> Self {
        Self {
            shapes: Registry::new(),
            bodies: Registry::new(),
            states: Registry::new(),
        }
    }

    /// Registers a collision shape and returns its handle.
    ///
    /// The registry shares ownership with every body the shape gets attached
    /// to, so destroying the registry entry never frees geometry a body
    /// still references.
    pub fn add_shape(&mut self, shape: Arc<dyn Shape>) -> ShapeHandle {
        self.shapes.add(shape)
    }

    /// Unregisters a collision shape. The handle is dead from here on;
    /// bodies already holding the shape keep it alive.
    pub fn destroy_shape(&mut self, shape: ShapeHandle) -> Result<()> {
        self.shapes
            .remove(shape)
            .map(|_| ())
            .ok_or(BridgeError::ShapeDoesNotExist)
    }

    /// Returns the number of live shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Returns the number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of live motion states
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn shape(&self, handle: ShapeHandle) -> Result<&Arc<dyn Shape>> {
        self.shapes.get(handle).ok_or(BridgeError::ShapeDoesNotExist)
    }

    pub(crate) fn body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get(handle).ok_or(BridgeError::BodyDoesNotExist)
    }

    pub(crate) fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_mut(handle).ok_or(BridgeError::BodyDoesNotExist)
    }

    pub(crate) fn object_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_mut(handle).ok_or(BridgeError::ObjectDoesNotExist)
    }

    pub(crate) fn state(&self, handle: StateHandle) -> Result<&MotionState> {
        self.states
            .get(handle)
            .ok_or(BridgeError::MotionStateDoesNotExist)
    }

    pub(crate) fn state_mut(&mut self, handle: StateHandle) -> Result<&mut MotionState> {
        self.states
            .get_mut(handle)
            .ok_or(BridgeError::MotionStateDoesNotExist)
    }
}

impl Default for PhysicsBridge {
    fn default() -> Self {
        Self::new()
    }
}
