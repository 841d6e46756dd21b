use crate::core::{BodyHandle, ShapeHandle, StateHandle};
use crate::error::BridgeError;
use crate::math::{Matrix3, Quaternion, Vector3};
use crate::bodies::RigidBody;
use crate::shapes::Shape;
use crate::{PhysicsBridge, Result};

/// Rigid-body surface: creation, mass properties, transforms, velocities,
/// forces and the scalar property accessors.
///
/// Every operation marshals its arguments once, delegates to the body, and
/// reports "does not exist" for a null or stale primary handle without
/// attempting partial work.
impl PhysicsBridge {
    /// Creates a rigid body from a mass, a motion state and a shape.
    ///
    /// Local inertia is computed from the `(mass, shape)` pair and the body
    /// starts at the motion state's current transform. Mass zero is the
    /// immovable convention; mass sign and NaN are passed through to the
    /// core's own failure domain.
    pub fn create_rigid_body(
        &mut self,
        mass: f32,
        motion_state: StateHandle,
        shape: ShapeHandle,
    ) -> Result<BodyHandle> {
        let start_transform = self.state(motion_state)?.world_transform();
        let shape = self
            .shapes
            .get(shape)
            .cloned()
            .ok_or(BridgeError::ShapeDoesNotExist)?;

        let local_inertia = shape.local_inertia(mass);
        let body = RigidBody::new(mass, motion_state, shape, local_inertia, start_transform);
        Ok(self.bodies.add(body))
    }

    /// Destroys a rigid body. The handle is dead from here on; a second
    /// destruction reports "does not exist" instead of corrupting anything.
    pub fn destroy_rigid_body(&mut self, body: BodyHandle) -> Result<()> {
        self.bodies
            .remove(body)
            .map(|_| ())
            .ok_or(BridgeError::BodyDoesNotExist)
    }

    /// Recomputes local inertia for the given shape/mass pair and applies it
    /// to the existing body. Identity-preserving: the same handle comes back.
    pub fn update_mass_props(
        &mut self,
        body: BodyHandle,
        shape: ShapeHandle,
        mass: f32,
    ) -> Result<BodyHandle> {
        if !self.bodies.contains(body) {
            return Err(BridgeError::BodyDoesNotExist);
        }
        let local_inertia = self.shape(shape)?.local_inertia(mass);
        self.body_mut(body)?.set_mass_props(mass, local_inertia);
        Ok(body)
    }

    /// Returns the origin of the body's world transform
    pub fn get_physics_location(&self, body: BodyHandle) -> Result<Vector3> {
        Ok(self.body(body)?.get_transform().location())
    }

    /// Replaces the origin of the body's world transform; the basis is
    /// preserved untouched
    pub fn set_physics_location(&mut self, body: BodyHandle, location: &Vector3) -> Result<()> {
        self.body_mut(body)?.set_location(location.to_nalgebra());
        Ok(())
    }

    /// Returns the basis of the body's world transform in quaternion form
    pub fn get_physics_rotation(&self, body: BodyHandle) -> Result<Quaternion> {
        Ok(self.body(body)?.get_transform().rotation_quat())
    }

    /// Returns the basis of the body's world transform in matrix form
    pub fn get_physics_rotation_matrix(&self, body: BodyHandle) -> Result<Matrix3> {
        Ok(self.body(body)?.get_transform().rotation_matrix())
    }

    /// Replaces the basis of the body's world transform from matrix form;
    /// the origin is preserved untouched
    pub fn set_physics_rotation(&mut self, body: BodyHandle, rotation: &Matrix3) -> Result<()> {
        let basis = Quaternion::from_rotation_matrix(rotation).to_nalgebra();
        self.body_mut(body)?.set_basis(basis);
        Ok(())
    }

    /// Replaces the basis of the body's world transform from quaternion
    /// form; the origin is preserved untouched
    pub fn set_physics_rotation_quat(
        &mut self,
        body: BodyHandle,
        rotation: &Quaternion,
    ) -> Result<()> {
        self.body_mut(body)?.set_basis(rotation.to_nalgebra());
        Ok(())
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self, body: BodyHandle) -> Result<Vector3> {
        Ok(Vector3::from_nalgebra(&self.body(body)?.get_linear_velocity()))
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, body: BodyHandle, velocity: &Vector3) -> Result<()> {
        self.body_mut(body)?.set_linear_velocity(velocity.to_nalgebra());
        Ok(())
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self, body: BodyHandle) -> Result<Vector3> {
        Ok(Vector3::from_nalgebra(&self.body(body)?.get_angular_velocity()))
    }

    /// Sets the body's angular velocity
    pub fn set_angular_velocity(&mut self, body: BodyHandle, velocity: &Vector3) -> Result<()> {
        self.body_mut(body)?.set_angular_velocity(velocity.to_nalgebra());
        Ok(())
    }

    /// Accumulates a force applied at an offset from the center of mass
    pub fn apply_force(
        &mut self,
        body: BodyHandle,
        force: &Vector3,
        rel_pos: &Vector3,
    ) -> Result<()> {
        self.body_mut(body)?
            .apply_force(force.to_nalgebra(), rel_pos.to_nalgebra());
        Ok(())
    }

    /// Accumulates a force through the center of mass
    pub fn apply_central_force(&mut self, body: BodyHandle, force: &Vector3) -> Result<()> {
        self.body_mut(body)?.apply_central_force(force.to_nalgebra());
        Ok(())
    }

    /// Accumulates a pure torque
    pub fn apply_torque(&mut self, body: BodyHandle, torque: &Vector3) -> Result<()> {
        self.body_mut(body)?.apply_torque(torque.to_nalgebra());
        Ok(())
    }

    /// Applies an instantaneous velocity change at an offset from the center
    /// of mass
    pub fn apply_impulse(
        &mut self,
        body: BodyHandle,
        impulse: &Vector3,
        rel_pos: &Vector3,
    ) -> Result<()> {
        self.body_mut(body)?
            .apply_impulse(impulse.to_nalgebra(), rel_pos.to_nalgebra());
        Ok(())
    }

    /// Applies an instantaneous angular velocity change
    pub fn apply_torque_impulse(&mut self, body: BodyHandle, torque: &Vector3) -> Result<()> {
        self.body_mut(body)?.apply_torque_impulse(torque.to_nalgebra());
        Ok(())
    }

    /// Zeroes the body's force and torque accumulators
    pub fn clear_forces(&mut self, body: BodyHandle) -> Result<()> {
        self.body_mut(body)?.clear_forces();
        Ok(())
    }

    /// Returns the body's friction coefficient
    pub fn get_friction(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_friction())
    }

    /// Sets the body's friction coefficient
    pub fn set_friction(&mut self, body: BodyHandle, friction: f32) -> Result<()> {
        self.body_mut(body)?.set_friction(friction);
        Ok(())
    }

    /// Returns the body's restitution coefficient
    pub fn get_restitution(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_restitution())
    }

    /// Sets the body's restitution coefficient
    pub fn set_restitution(&mut self, body: BodyHandle, restitution: f32) -> Result<()> {
        self.body_mut(body)?.set_restitution(restitution);
        Ok(())
    }

    /// Sets linear and angular damping together
    pub fn set_damping(&mut self, body: BodyHandle, linear: f32, angular: f32) -> Result<()> {
        self.body_mut(body)?.set_damping(linear, angular);
        Ok(())
    }

    /// Sets linear damping, keeping angular damping as is
    pub fn set_linear_damping(&mut self, body: BodyHandle, linear: f32) -> Result<()> {
        let body = self.body_mut(body)?;
        let angular = body.get_angular_damping();
        body.set_damping(linear, angular);
        Ok(())
    }

    /// Sets angular damping, keeping linear damping as is
    pub fn set_angular_damping(&mut self, body: BodyHandle, angular: f32) -> Result<()> {
        let body = self.body_mut(body)?;
        let linear = body.get_linear_damping();
        body.set_damping(linear, angular);
        Ok(())
    }

    /// Returns the body's linear damping
    pub fn get_linear_damping(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_linear_damping())
    }

    /// Returns the body's angular damping
    pub fn get_angular_damping(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_angular_damping())
    }

    /// Returns the body's gravity acceleration
    pub fn get_gravity(&self, body: BodyHandle) -> Result<Vector3> {
        Ok(Vector3::from_nalgebra(&self.body(body)?.get_gravity()))
    }

    /// Sets the body's gravity acceleration
    pub fn set_gravity(&mut self, body: BodyHandle, gravity: &Vector3) -> Result<()> {
        self.body_mut(body)?.set_gravity(gravity.to_nalgebra());
        Ok(())
    }

    /// Sets linear and angular sleeping thresholds together
    pub fn set_sleeping_thresholds(
        &mut self,
        body: BodyHandle,
        linear: f32,
        angular: f32,
    ) -> Result<()> {
        self.body_mut(body)?.set_sleeping_thresholds(linear, angular);
        Ok(())
    }

    /// Sets the linear sleeping threshold, keeping the angular one as is
    pub fn set_linear_sleeping_threshold(&mut self, body: BodyHandle, value: f32) -> Result<()> {
        let body = self.body_mut(body)?;
        let angular = body.get_angular_sleeping_threshold();
        body.set_sleeping_thresholds(value, angular);
        Ok(())
    }

    /// Sets the angular sleeping threshold, keeping the linear one as is
    pub fn set_angular_sleeping_threshold(&mut self, body: BodyHandle, value: f32) -> Result<()> {
        let body = self.body_mut(body)?;
        let linear = body.get_linear_sleeping_threshold();
        body.set_sleeping_thresholds(linear, value);
        Ok(())
    }

    /// Returns the linear sleeping threshold
    pub fn get_linear_sleeping_threshold(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_linear_sleeping_threshold())
    }

    /// Returns the angular sleeping threshold
    pub fn get_angular_sleeping_threshold(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_angular_sleeping_threshold())
    }

    /// Returns the x component of the angular factor. The surface only
    /// exposes the isotropic case, so all three components agree.
    pub fn get_angular_factor(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_angular_factor().x)
    }

    /// Broadcasts one scalar across all three axes of the angular factor.
    /// The underlying representation is a 3-vector; per-axis control is
    /// deliberately not exposed here.
    pub fn set_angular_factor(&mut self, body: BodyHandle, factor: f32) -> Result<()> {
        self.body_mut(body)?
            .set_angular_factor(nalgebra::Vector3::new(factor, factor, factor));
        Ok(())
    }

    /// Returns the CCD swept-sphere radius
    pub fn get_ccd_swept_sphere_radius(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_ccd_swept_sphere_radius())
    }

    /// Sets the CCD swept-sphere radius
    pub fn set_ccd_swept_sphere_radius(&mut self, body: BodyHandle, radius: f32) -> Result<()> {
        self.body_mut(body)?.set_ccd_swept_sphere_radius(radius);
        Ok(())
    }

    /// Returns the CCD motion threshold
    pub fn get_ccd_motion_threshold(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_ccd_motion_threshold())
    }

    /// Sets the CCD motion threshold
    pub fn set_ccd_motion_threshold(&mut self, body: BodyHandle, threshold: f32) -> Result<()> {
        self.body_mut(body)?.set_ccd_motion_threshold(threshold);
        Ok(())
    }

    /// Returns the squared CCD motion threshold
    pub fn get_ccd_square_motion_threshold(&self, body: BodyHandle) -> Result<f32> {
        Ok(self.body(body)?.get_ccd_square_motion_threshold())
    }

    /// Returns whether the body is registered with a simulation world
    pub fn is_in_world(&self, body: BodyHandle) -> Result<bool> {
        Ok(self.body(body)?.is_in_world())
    }

    /// Returns whether the body takes part in the next solver pass
    pub fn is_active(&self, body: BodyHandle) -> Result<bool> {
        Ok(self.body(body)?.is_active())
    }

    /// Forces the body out of a sleeping state
    pub fn activate(&mut self, body: BodyHandle) -> Result<()> {
        self.body_mut(body)?.activate(false);
        Ok(())
    }
}
