use std::sync::Arc;

use approx::assert_relative_eq;
use phys_bridge::error::BridgeError;
use phys_bridge::shapes::{BoxShape, Shape, Sphere};
use phys_bridge::{
    ActivationState, BodyHandle, CollisionFlags, Handle, PhysicsBridge, Quaternion, ShapeHandle,
    StateHandle, Vector3,
};

/// A bridge holding one dynamic unit-sphere body of the given mass
fn bridge_with_body(mass: f32) -> (PhysicsBridge, BodyHandle, ShapeHandle, StateHandle) {
    let mut bridge = PhysicsBridge::new();
    let shape = bridge.add_shape(Arc::new(Sphere::new(1.0)));
    let state = bridge.create_motion_state();
    let body = bridge
        .create_rigid_body(mass, state, shape)
        .expect("body creation");
    (bridge, body, shape, state)
}

#[test]
fn test_create_rigid_body_yields_live_handle() {
    let (bridge, body, _, _) = bridge_with_body(1.0);

    assert!(!body.is_null());
    assert_eq!(bridge.body_count(), 1);
    assert!(bridge.is_active(body).unwrap());
    assert!(!bridge.is_in_world(body).unwrap());
}

#[test]
fn test_zero_mass_is_the_immovable_convention() {
    let (mut bridge, body, _, _) = bridge_with_body(0.0);

    let flags = bridge.collision_flags(body).unwrap();
    assert!(flags.contains(CollisionFlags::STATIC_OBJECT));

    // An impulse must not move an immovable body
    bridge
        .apply_impulse(body, &Vector3::new(10.0, 0.0, 0.0), &Vector3::zero())
        .unwrap();
    assert_eq!(bridge.get_linear_velocity(body).unwrap(), Vector3::zero());
}

#[test]
fn test_scalar_property_round_trips() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    bridge.set_friction(body, 0.7).unwrap();
    assert_relative_eq!(bridge.get_friction(body).unwrap(), 0.7);

    bridge.set_restitution(body, 0.3).unwrap();
    assert_relative_eq!(bridge.get_restitution(body).unwrap(), 0.3);

    bridge.set_damping(body, 0.1, 0.2).unwrap();
    assert_relative_eq!(bridge.get_linear_damping(body).unwrap(), 0.1);
    assert_relative_eq!(bridge.get_angular_damping(body).unwrap(), 0.2);

    bridge.set_linear_damping(body, 0.4).unwrap();
    assert_relative_eq!(bridge.get_linear_damping(body).unwrap(), 0.4);
    assert_relative_eq!(bridge.get_angular_damping(body).unwrap(), 0.2);

    bridge.set_angular_damping(body, 0.5).unwrap();
    assert_relative_eq!(bridge.get_linear_damping(body).unwrap(), 0.4);
    assert_relative_eq!(bridge.get_angular_damping(body).unwrap(), 0.5);

    bridge.set_ccd_swept_sphere_radius(body, 0.25).unwrap();
    assert_relative_eq!(bridge.get_ccd_swept_sphere_radius(body).unwrap(), 0.25);

    bridge.set_ccd_motion_threshold(body, 3.0).unwrap();
    assert_relative_eq!(bridge.get_ccd_motion_threshold(body).unwrap(), 3.0);
    assert_relative_eq!(bridge.get_ccd_square_motion_threshold(body).unwrap(), 9.0);

    bridge.set_sleeping_thresholds(body, 0.6, 0.9).unwrap();
    assert_relative_eq!(bridge.get_linear_sleeping_threshold(body).unwrap(), 0.6);
    assert_relative_eq!(bridge.get_angular_sleeping_threshold(body).unwrap(), 0.9);

    bridge.set_linear_sleeping_threshold(body, 0.2).unwrap();
    assert_relative_eq!(bridge.get_linear_sleeping_threshold(body).unwrap(), 0.2);
    assert_relative_eq!(bridge.get_angular_sleeping_threshold(body).unwrap(), 0.9);

    bridge.set_angular_sleeping_threshold(body, 0.1).unwrap();
    assert_relative_eq!(bridge.get_linear_sleeping_threshold(body).unwrap(), 0.2);
    assert_relative_eq!(bridge.get_angular_sleeping_threshold(body).unwrap(), 0.1);

    let gravity = Vector3::new(0.0, -9.81, 0.0);
    bridge.set_gravity(body, &gravity).unwrap();
    assert_eq!(bridge.get_gravity(body).unwrap(), gravity);
}

#[test]
fn test_angular_factor_is_broadcast() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    assert_relative_eq!(bridge.get_angular_factor(body).unwrap(), 1.0);

    bridge.set_angular_factor(body, 0.0).unwrap();
    assert_relative_eq!(bridge.get_angular_factor(body).unwrap(), 0.0);

    // A zero factor suppresses the angular response entirely
    bridge
        .apply_torque_impulse(body, &Vector3::new(0.0, 5.0, 0.0))
        .unwrap();
    assert_eq!(bridge.get_angular_velocity(body).unwrap(), Vector3::zero());
}

#[test]
fn test_location_setter_preserves_basis() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    let rotation = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 0.8);
    bridge.set_physics_rotation_quat(body, &rotation).unwrap();
    let basis_before = bridge.get_physics_rotation(body).unwrap();

    bridge
        .set_physics_location(body, &Vector3::new(5.0, -2.0, 1.0))
        .unwrap();

    assert_eq!(bridge.get_physics_rotation(body).unwrap(), basis_before);
    assert_eq!(
        bridge.get_physics_location(body).unwrap(),
        Vector3::new(5.0, -2.0, 1.0)
    );
}

#[test]
fn test_rotation_setter_preserves_origin() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    let location = Vector3::new(1.0, 2.0, 3.0);
    bridge.set_physics_location(body, &location).unwrap();

    let rotation = Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), 1.1);
    bridge.set_physics_rotation_quat(body, &rotation).unwrap();
    assert_eq!(bridge.get_physics_location(body).unwrap(), location);

    // Same guarantee for the matrix form of the setter
    let matrix = rotation.to_rotation_matrix();
    bridge.set_physics_rotation(body, &matrix).unwrap();
    assert_eq!(bridge.get_physics_location(body).unwrap(), location);

    let round_trip = bridge.get_physics_rotation_matrix(body).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert_relative_eq!(
                round_trip.data[row][col],
                matrix.data[row][col],
                epsilon = 1e-5
            );
        }
    }
}

#[test]
fn test_velocity_round_trips() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    let linear = Vector3::new(1.0, -2.0, 3.0);
    let angular = Vector3::new(0.0, 4.0, 0.5);

    bridge.set_linear_velocity(body, &linear).unwrap();
    bridge.set_angular_velocity(body, &angular).unwrap();

    assert_eq!(bridge.get_linear_velocity(body).unwrap(), linear);
    assert_eq!(bridge.get_angular_velocity(body).unwrap(), angular);
}

#[test]
fn test_central_impulse_changes_velocity_by_inverse_mass() {
    let (mut bridge, body, _, _) = bridge_with_body(2.0);

    bridge
        .apply_impulse(body, &Vector3::new(4.0, 0.0, 0.0), &Vector3::zero())
        .unwrap();

    let velocity = bridge.get_linear_velocity(body).unwrap();
    assert_relative_eq!(velocity.x, 2.0, epsilon = 1e-6);
    assert_relative_eq!(velocity.y, 0.0);
    assert_relative_eq!(velocity.z, 0.0);
}

#[test]
fn test_torque_impulse_uses_local_inertia() {
    // Unit sphere of mass 2.5 has inertia 0.4 * 2.5 * 1 = 1 on every axis,
    // so the angular velocity change equals the applied torque impulse
    let (mut bridge, body, _, _) = bridge_with_body(2.5);

    bridge
        .apply_torque_impulse(body, &Vector3::new(0.0, 3.0, 0.0))
        .unwrap();

    let omega = bridge.get_angular_velocity(body).unwrap();
    assert_relative_eq!(omega.y, 3.0, epsilon = 1e-5);
}

#[test]
fn test_update_mass_props_preserves_identity() {
    let (mut bridge, body, shape, _) = bridge_with_body(0.0);

    assert!(bridge
        .collision_flags(body)
        .unwrap()
        .contains(CollisionFlags::STATIC_OBJECT));

    let returned = bridge.update_mass_props(body, shape, 2.0).unwrap();
    assert_eq!(returned, body);

    // Non-zero mass clears the immovable convention
    assert!(!bridge
        .collision_flags(body)
        .unwrap()
        .contains(CollisionFlags::STATIC_OBJECT));

    bridge
        .apply_impulse(body, &Vector3::new(2.0, 0.0, 0.0), &Vector3::zero())
        .unwrap();
    assert_relative_eq!(bridge.get_linear_velocity(body).unwrap().x, 1.0);
}

#[test]
fn test_attach_shape_replaces_reference() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    let box_geometry = Arc::new(BoxShape::new(1.0, 1.0, 1.0));
    let box_shape = bridge.add_shape(box_geometry.clone());

    // Ours + the registry's
    assert_eq!(Arc::strong_count(&box_geometry), 2);

    bridge.attach_shape(body, box_shape).unwrap();
    assert_eq!(Arc::strong_count(&box_geometry), 3);

    // Attaching again replaces, never accumulates
    bridge.attach_shape(body, box_shape).unwrap();
    assert_eq!(Arc::strong_count(&box_geometry), 3);

    // The registry entry can die while the body keeps the geometry alive
    bridge.destroy_shape(box_shape).unwrap();
    assert_eq!(Arc::strong_count(&box_geometry), 2);

    let sphere = bridge.add_shape(Arc::new(Sphere::new(0.5)));
    bridge.attach_shape(body, sphere).unwrap();
    assert_eq!(Arc::strong_count(&box_geometry), 1);
}

#[test]
fn test_attach_shape_error_order() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    // The object handle is checked first
    assert_eq!(
        bridge.attach_shape(BodyHandle::null(), ShapeHandle::null()),
        Err(BridgeError::ObjectDoesNotExist)
    );
    assert_eq!(
        bridge.attach_shape(body, ShapeHandle::null()),
        Err(BridgeError::ShapeDoesNotExist)
    );
}

#[test]
fn test_kinematic_toggle_pairs_flag_and_activation() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    bridge.set_kinematic(body, true).unwrap();
    assert!(bridge
        .collision_flags(body)
        .unwrap()
        .contains(CollisionFlags::KINEMATIC_OBJECT));
    assert!(bridge.is_active(body).unwrap());

    bridge.set_kinematic(body, false).unwrap();
    assert!(!bridge
        .collision_flags(body)
        .unwrap()
        .contains(CollisionFlags::KINEMATIC_OBJECT));
    assert!(bridge.is_active(body).unwrap());
}

#[test]
fn test_set_static_toggles_flag_bit() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    bridge.set_static(body, true).unwrap();
    assert!(bridge
        .collision_flags(body)
        .unwrap()
        .contains(CollisionFlags::STATIC_OBJECT));

    bridge.set_static(body, false).unwrap();
    assert!(!bridge
        .collision_flags(body)
        .unwrap()
        .contains(CollisionFlags::STATIC_OBJECT));
}

#[test]
fn test_null_handles_fail_fast_and_leave_state_alone() {
    let (mut bridge, body, _, _) = bridge_with_body(1.0);

    bridge.set_friction(body, 0.9).unwrap();

    let null = BodyHandle::null();
    assert_eq!(bridge.get_friction(null), Err(BridgeError::BodyDoesNotExist));
    assert_eq!(
        bridge.set_friction(null, 0.1),
        Err(BridgeError::BodyDoesNotExist)
    );
    assert_eq!(
        bridge.apply_central_force(null, &Vector3::one()),
        Err(BridgeError::BodyDoesNotExist)
    );
    assert_eq!(
        bridge.set_physics_location(null, &Vector3::one()),
        Err(BridgeError::BodyDoesNotExist)
    );
    assert_eq!(
        bridge.update_mass_props(null, ShapeHandle::null(), 1.0),
        Err(BridgeError::BodyDoesNotExist)
    );

    // The failed calls touched nothing else
    assert_relative_eq!(bridge.get_friction(body).unwrap(), 0.9);
}

#[test]
fn test_stale_handles_fail_after_destruction() {
    let (mut bridge, body, _, state) = bridge_with_body(1.0);

    bridge.destroy_rigid_body(body).unwrap();
    assert_eq!(bridge.get_friction(body), Err(BridgeError::BodyDoesNotExist));
    assert_eq!(
        bridge.destroy_rigid_body(body),
        Err(BridgeError::BodyDoesNotExist)
    );

    bridge.destroy_motion_state(state).unwrap();
    assert_eq!(
        bridge.destroy_motion_state(state),
        Err(BridgeError::MotionStateDoesNotExist)
    );

    // Identifiers are never reused, so the old handle stays dead
    let fresh_state = bridge.create_motion_state();
    assert_ne!(fresh_state, state);
    assert_eq!(
        bridge.get_world_location(state),
        Err(BridgeError::MotionStateDoesNotExist)
    );
}

#[test]
fn test_create_rigid_body_checks_both_dependencies() {
    let mut bridge = PhysicsBridge::new();
    let shape = bridge.add_shape(Arc::new(Sphere::new(1.0)));
    let state = bridge.create_motion_state();

    assert_eq!(
        bridge.create_rigid_body(1.0, StateHandle::null(), shape),
        Err(BridgeError::MotionStateDoesNotExist)
    );
    assert_eq!(
        bridge.create_rigid_body(1.0, state, ShapeHandle::null()),
        Err(BridgeError::ShapeDoesNotExist)
    );
    assert_eq!(bridge.body_count(), 0);
}

#[test]
fn test_clear_forces_zeroes_accumulators() {
    use nalgebra as na;
    use phys_bridge::RigidBody;

    let shape: Arc<dyn Shape> = Arc::new(Sphere::new(1.0));
    let inertia = shape.local_inertia(1.0);
    let mut body = RigidBody::new(
        1.0,
        StateHandle::null(),
        shape,
        inertia,
        phys_bridge::math::Transform::identity(),
    );

    body.apply_central_force(na::Vector3::new(1.0, 0.0, 0.0));
    body.apply_force(na::Vector3::new(0.0, 2.0, 0.0), na::Vector3::new(1.0, 0.0, 0.0));
    body.apply_torque(na::Vector3::new(0.0, 0.0, 3.0));

    assert_eq!(body.get_total_force(), na::Vector3::new(1.0, 2.0, 0.0));
    // r x F = (1,0,0) x (0,2,0) = (0,0,2), plus the explicit torque
    assert_eq!(body.get_total_torque(), na::Vector3::new(0.0, 0.0, 5.0));

    body.clear_forces();
    assert_eq!(body.get_total_force(), na::Vector3::zeros());
    assert_eq!(body.get_total_torque(), na::Vector3::zeros());
}

#[test]
fn test_activation_state_machine() {
    use phys_bridge::RigidBody;

    let shape: Arc<dyn Shape> = Arc::new(Sphere::new(1.0));
    let inertia = shape.local_inertia(1.0);
    let mut body = RigidBody::new(
        1.0,
        StateHandle::null(),
        shape.clone(),
        inertia,
        phys_bridge::math::Transform::identity(),
    );

    body.force_activation_state(ActivationState::IslandSleeping);
    assert!(!body.is_active());

    body.activate(false);
    assert!(body.is_active());

    // A static body ignores the non-forcing wake-up
    let mut immovable = RigidBody::new(
        0.0,
        StateHandle::null(),
        shape,
        nalgebra::Vector3::zeros(),
        phys_bridge::math::Transform::identity(),
    );
    immovable.force_activation_state(ActivationState::IslandSleeping);
    immovable.activate(false);
    assert!(!immovable.is_active());
    immovable.activate(true);
    assert!(immovable.is_active());
}

#[test]
fn test_sticky_activation_states_resist_plain_setter() {
    use phys_bridge::RigidBody;

    let shape: Arc<dyn Shape> = Arc::new(Sphere::new(1.0));
    let inertia = shape.local_inertia(1.0);
    let mut body = RigidBody::new(
        1.0,
        StateHandle::null(),
        shape,
        inertia,
        phys_bridge::math::Transform::identity(),
    );

    body.force_activation_state(ActivationState::DisableDeactivation);
    body.set_activation_state(ActivationState::IslandSleeping);
    assert_eq!(
        body.get_activation_state(),
        ActivationState::DisableDeactivation
    );

    body.force_activation_state(ActivationState::Active);
    body.set_activation_state(ActivationState::WantsDeactivation);
    assert_eq!(
        body.get_activation_state(),
        ActivationState::WantsDeactivation
    );
}
