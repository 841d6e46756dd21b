use nalgebra as na;
use std::sync::Arc;

use crate::bodies::{ActivationState, CollisionFlags};
use crate::core::StateHandle;
use crate::math::Transform;
use crate::shapes::Shape;

/// A rigid body as the simulation core sees it.
///
/// All state lives in the core's own `nalgebra` representation; the bridge
/// layer marshals at the boundary. The body references exactly one shape and
/// exactly one motion state for its lifetime unless explicitly replaced.
pub struct RigidBody {
    /// World transform; location and basis are always set independently
    transform: Transform,

    linear_velocity: na::Vector3<f32>,
    angular_velocity: na::Vector3<f32>,

    /// Force accumulator, consumed by the (external) integration step
    total_force: na::Vector3<f32>,

    /// Torque accumulator, consumed by the (external) integration step
    total_torque: na::Vector3<f32>,

    mass: f32,
    inv_mass: f32,

    /// Diagonal of the local inertia tensor, as computed by the shape
    local_inertia: na::Vector3<f32>,
    inv_local_inertia: na::Vector3<f32>,

    linear_damping: f32,
    angular_damping: f32,
    friction: f32,
    restitution: f32,

    linear_sleeping_threshold: f32,
    angular_sleeping_threshold: f32,

    /// Per-axis scaling of angular responses
    angular_factor: na::Vector3<f32>,

    /// Per-body gravity acceleration
    gravity: na::Vector3<f32>,

    ccd_swept_sphere_radius: f32,
    ccd_motion_threshold: f32,

    collision_flags: CollisionFlags,
    activation_state: ActivationState,
    deactivation_time: f32,

    shape: Arc<dyn Shape>,
    motion_state: StateHandle,
    in_world: bool,
}

impl RigidBody {
    /// Creates a rigid body bound to the given motion state and shape.
    ///
    /// `local_inertia` must come from the same `(mass, shape)` pair, and the
    /// starting transform from the motion state the body is bound to. Mass
    /// zero is the immovable convention; mass sign is not validated here.
    pub fn new(
        mass: f32,
        motion_state: StateHandle,
        shape: Arc<dyn Shape>,
        local_inertia: na::Vector3<f32>,
        start_transform: Transform,
    ) -> Self {
        let mut body = Self {
            transform: start_transform,
            linear_velocity: na::Vector3::zeros(),
            angular_velocity: na::Vector3::zeros(),
            total_force: na::Vector3::zeros(),
            total_torque: na::Vector3::zeros(),
            mass: 0.0,
            inv_mass: 0.0,
            local_inertia: na::Vector3::zeros(),
            inv_local_inertia: na::Vector3::zeros(),
            linear_damping: 0.0,
            angular_damping: 0.0,
            friction: 0.5,
            restitution: 0.0,
            linear_sleeping_threshold: 0.8,
            angular_sleeping_threshold: 1.0,
            angular_factor: na::Vector3::new(1.0, 1.0, 1.0),
            gravity: na::Vector3::zeros(),
            ccd_swept_sphere_radius: 0.0,
            ccd_motion_threshold: 0.0,
            collision_flags: CollisionFlags::empty(),
            activation_state: ActivationState::Active,
            deactivation_time: 0.0,
            shape,
            motion_state,
            in_world: false,
        };

        body.set_mass_props(mass, local_inertia);
        body
    }

    /// Returns the body's world transform
    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    /// Replaces the transform's origin, leaving the basis untouched
    pub fn set_location(&mut self, origin: na::Vector3<f32>) {
        self.transform.set_location(origin);
    }

    /// Replaces the transform's basis, leaving the origin untouched
    pub fn set_basis(&mut self, basis: na::UnitQuaternion<f32>) {
        self.transform.set_basis(basis);
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self) -> na::Vector3<f32> {
        self.linear_velocity
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, velocity: na::Vector3<f32>) {
        self.linear_velocity = velocity;
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self) -> na::Vector3<f32> {
        self.angular_velocity
    }

    /// Sets the body's angular velocity
    pub fn set_angular_velocity(&mut self, velocity: na::Vector3<f32>) {
        self.angular_velocity = velocity;
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Returns the body's inverse mass
    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Returns the diagonal of the body's local inertia tensor
    pub fn get_local_inertia(&self) -> na::Vector3<f32> {
        self.local_inertia
    }

    /// Sets mass and local inertia together, keeping the derived inverses
    /// and the static collision flag consistent.
    ///
    /// Must be called whenever mass or shape changes, or reported inertia
    /// silently desynchronizes from the new mass/shape pair.
    pub fn set_mass_props(&mut self, mass: f32, local_inertia: na::Vector3<f32>) {
        self.mass = mass;
        self.local_inertia = local_inertia;

        if mass == 0.0 {
            self.collision_flags.insert(CollisionFlags::STATIC_OBJECT);
            self.inv_mass = 0.0;
        } else {
            self.collision_flags.remove(CollisionFlags::STATIC_OBJECT);
            self.inv_mass = 1.0 / mass;
        }

        self.inv_local_inertia =
            local_inertia.map(|c| if c == 0.0 { 0.0 } else { 1.0 / c });
    }

    /// Returns the inverse inertia tensor rotated into world space
    pub fn inv_inertia_tensor_world(&self) -> na::Matrix3<f32> {
        let basis = self.transform.basis.to_rotation_matrix();
        basis.matrix() * na::Matrix3::from_diagonal(&self.inv_local_inertia)
            * basis.matrix().transpose()
    }

    /// Accumulates a force through the center of mass
    pub fn apply_central_force(&mut self, force: na::Vector3<f32>) {
        self.total_force += force;
    }

    /// Accumulates a force at an offset from the center of mass
    pub fn apply_force(&mut self, force: na::Vector3<f32>, rel_pos: na::Vector3<f32>) {
        self.total_force += force;
        self.total_torque += rel_pos.cross(&force).component_mul(&self.angular_factor);
    }

    /// Accumulates a pure torque
    pub fn apply_torque(&mut self, torque: na::Vector3<f32>) {
        self.total_torque += torque.component_mul(&self.angular_factor);
    }

    /// Applies an instantaneous velocity change through the center of mass
    pub fn apply_central_impulse(&mut self, impulse: na::Vector3<f32>) {
        self.linear_velocity += impulse * self.inv_mass;
    }

    /// Applies an instantaneous angular velocity change
    pub fn apply_torque_impulse(&mut self, torque: na::Vector3<f32>) {
        self.angular_velocity +=
            (self.inv_inertia_tensor_world() * torque).component_mul(&self.angular_factor);
    }

    /// Applies an instantaneous velocity change at an offset from the center
    /// of mass. Immovable bodies (inverse mass zero) ignore it.
    pub fn apply_impulse(&mut self, impulse: na::Vector3<f32>, rel_pos: na::Vector3<f32>) {
        if self.inv_mass != 0.0 {
            self.apply_central_impulse(impulse);
            self.apply_torque_impulse(rel_pos.cross(&impulse));
        }
    }

    /// Zeroes the force and torque accumulators
    pub fn clear_forces(&mut self) {
        self.total_force = na::Vector3::zeros();
        self.total_torque = na::Vector3::zeros();
    }

    /// Returns the accumulated force
    pub fn get_total_force(&self) -> na::Vector3<f32> {
        self.total_force
    }

    /// Returns the accumulated torque
    pub fn get_total_torque(&self) -> na::Vector3<f32> {
        self.total_torque
    }

    /// Returns the body's collision flags
    pub fn get_collision_flags(&self) -> CollisionFlags {
        self.collision_flags
    }

    /// Sets the body's collision flags
    pub fn set_collision_flags(&mut self, flags: CollisionFlags) {
        self.collision_flags = flags;
    }

    /// Returns the body's activation state
    pub fn get_activation_state(&self) -> ActivationState {
        self.activation_state
    }

    /// Sets the activation state unless the current state is sticky
    pub fn set_activation_state(&mut self, state: ActivationState) {
        if self.activation_state != ActivationState::DisableDeactivation
            && self.activation_state != ActivationState::DisableSimulation
        {
            self.activation_state = state;
        }
    }

    /// Sets the activation state unconditionally
    pub fn force_activation_state(&mut self, state: ActivationState) {
        self.activation_state = state;
    }

    /// Forces the body out of a sleeping state. Static and kinematic bodies
    /// only react when `force` is set.
    pub fn activate(&mut self, force: bool) {
        if force
            || !self
                .collision_flags
                .intersects(CollisionFlags::STATIC_OBJECT | CollisionFlags::KINEMATIC_OBJECT)
        {
            self.set_activation_state(ActivationState::Active);
            self.deactivation_time = 0.0;
        }
    }

    /// Returns whether the body takes part in the next solver pass
    pub fn is_active(&self) -> bool {
        self.activation_state != ActivationState::IslandSleeping
            && self.activation_state != ActivationState::DisableSimulation
    }

    /// Returns the time the body has been quiet, maintained by the stepper
    pub fn get_deactivation_time(&self) -> f32 {
        self.deactivation_time
    }

    /// Sets the body's linear and angular damping together
    pub fn set_damping(&mut self, linear: f32, angular: f32) {
        self.linear_damping = linear;
        self.angular_damping = angular;
    }

    /// Returns the body's linear damping
    pub fn get_linear_damping(&self) -> f32 {
        self.linear_damping
    }

    /// Returns the body's angular damping
    pub fn get_angular_damping(&self) -> f32 {
        self.angular_damping
    }

    /// Returns the body's friction coefficient
    pub fn get_friction(&self) -> f32 {
        self.friction
    }

    /// Sets the body's friction coefficient
    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    /// Returns the body's restitution coefficient
    pub fn get_restitution(&self) -> f32 {
        self.restitution
    }

    /// Sets the body's restitution coefficient
    pub fn set_restitution(&mut self, restitution: f32) {
        self.restitution = restitution;
    }

    /// Sets the linear and angular sleeping thresholds together
    pub fn set_sleeping_thresholds(&mut self, linear: f32, angular: f32) {
        self.linear_sleeping_threshold = linear;
        self.angular_sleeping_threshold = angular;
    }

    /// Returns the linear sleeping threshold
    pub fn get_linear_sleeping_threshold(&self) -> f32 {
        self.linear_sleeping_threshold
    }

    /// Returns the angular sleeping threshold
    pub fn get_angular_sleeping_threshold(&self) -> f32 {
        self.angular_sleeping_threshold
    }

    /// Returns the per-axis angular factor
    pub fn get_angular_factor(&self) -> na::Vector3<f32> {
        self.angular_factor
    }

    /// Sets the per-axis angular factor
    pub fn set_angular_factor(&mut self, factor: na::Vector3<f32>) {
        self.angular_factor = factor;
    }

    /// Returns the per-body gravity acceleration
    pub fn get_gravity(&self) -> na::Vector3<f32> {
        self.gravity
    }

    /// Sets the per-body gravity acceleration
    pub fn set_gravity(&mut self, gravity: na::Vector3<f32>) {
        self.gravity = gravity;
    }

    /// Returns the CCD swept-sphere radius
    pub fn get_ccd_swept_sphere_radius(&self) -> f32 {
        self.ccd_swept_sphere_radius
    }

    /// Sets the CCD swept-sphere radius
    pub fn set_ccd_swept_sphere_radius(&mut self, radius: f32) {
        self.ccd_swept_sphere_radius = radius;
    }

    /// Returns the CCD motion threshold
    pub fn get_ccd_motion_threshold(&self) -> f32 {
        self.ccd_motion_threshold
    }

    /// Sets the CCD motion threshold
    pub fn set_ccd_motion_threshold(&mut self, threshold: f32) {
        self.ccd_motion_threshold = threshold;
    }

    /// Returns the squared CCD motion threshold
    pub fn get_ccd_square_motion_threshold(&self) -> f32 {
        self.ccd_motion_threshold * self.ccd_motion_threshold
    }

    /// Returns a reference to the body's collision shape
    pub fn get_shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }

    /// Replaces the body's collision shape reference. The old reference is
    /// dropped; shared ownership keeps the geometry alive for other holders.
    pub fn set_shape(&mut self, shape: Arc<dyn Shape>) {
        self.shape = shape;
    }

    /// Returns the handle of the motion state the body is bound to
    pub fn get_motion_state(&self) -> StateHandle {
        self.motion_state
    }

    /// Returns whether the body is currently registered with a simulation world
    pub fn is_in_world(&self) -> bool {
        self.in_world
    }

    /// Records world membership; called by world management, not by the
    /// property surface
    pub fn set_in_world(&mut self, in_world: bool) {
        self.in_world = in_world;
    }
}
