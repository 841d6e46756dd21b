use approx::assert_relative_eq;
use nalgebra as na;
use phys_bridge::math::{Matrix3, Quaternion, Transform, Vector3};
use rand::{Rng, SeedableRng};

#[test]
fn test_vector_basic_ops() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, -5.0, 6.0);

    assert_eq!(a + b, Vector3::new(5.0, -3.0, 9.0));
    assert_eq!(a - b, Vector3::new(-3.0, 7.0, -3.0));
    assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    assert_relative_eq!(a.dot(&b), 12.0);
    assert_eq!(a.cross(&b), Vector3::new(27.0, 6.0, -13.0));
    assert!(Vector3::zero().is_zero());
    assert!(!a.is_zero());
}

#[test]
fn test_vector_normalize() {
    let v = Vector3::new(3.0, 0.0, 4.0).normalize();
    assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);

    // Degenerate input comes back unchanged instead of producing NaN
    let zero = Vector3::zero().normalize();
    assert!(zero.is_zero());
}

#[test]
fn test_vector_nalgebra_round_trip() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let v = Vector3::new(
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
        );

        // Marshaling is a pure field copy, so the round trip is exact
        assert_eq!(Vector3::from_nalgebra(&v.to_nalgebra()), v);
    }
}

#[test]
fn test_matrix_nalgebra_round_trip() {
    let m = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    assert_eq!(Matrix3::from_nalgebra(&m.to_nalgebra()), m);
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_matrix_multiply_vector_matches_nalgebra() {
    let m = Matrix3::new([
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);
    let v = Vector3::new(1.0, 2.0, 3.0);

    let ours = m.multiply_vector(v);
    let theirs = Vector3::from_nalgebra(&(m.to_nalgebra() * v.to_nalgebra()));

    assert_relative_eq!(ours.x, theirs.x, epsilon = 1e-6);
    assert_relative_eq!(ours.y, theirs.y, epsilon = 1e-6);
    assert_relative_eq!(ours.z, theirs.z, epsilon = 1e-6);
}

#[test]
fn test_quaternion_nalgebra_round_trip() {
    let q = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 1.2);
    let back = Quaternion::from_nalgebra(&q.to_nalgebra());

    assert_eq!(back, q);
}

#[test]
fn test_quaternion_matrix_conversion_agrees_on_rotation() {
    let q = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, -0.5), 0.9);
    let m = q.to_rotation_matrix();
    let v = Vector3::new(0.3, -1.7, 2.2);

    let by_quat = q.rotate_vector(v);
    let by_matrix = m.multiply_vector(v);

    assert_relative_eq!(by_quat.x, by_matrix.x, epsilon = 1e-5);
    assert_relative_eq!(by_quat.y, by_matrix.y, epsilon = 1e-5);
    assert_relative_eq!(by_quat.z, by_matrix.z, epsilon = 1e-5);

    // Back through the matrix: same rotation even if the sign flips
    let back = Quaternion::from_rotation_matrix(&m);
    let again = back.rotate_vector(v);
    assert_relative_eq!(again.x, by_quat.x, epsilon = 1e-5);
    assert_relative_eq!(again.y, by_quat.y, epsilon = 1e-5);
    assert_relative_eq!(again.z, by_quat.z, epsilon = 1e-5);
}

#[test]
fn test_quaternion_normalize() {
    let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).normalize();
    assert_relative_eq!(q.w, 1.0, epsilon = 1e-6);
}

#[test]
fn test_transform_sub_component_setters_are_independent() {
    let mut transform = Transform::identity();
    let basis = na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), 0.5);

    transform.set_basis(basis);
    transform.set_location(na::Vector3::new(1.0, 2.0, 3.0));

    // Relocating left the basis alone
    assert_eq!(transform.basis, basis);

    transform.set_basis(na::UnitQuaternion::identity());

    // Re-orienting left the origin alone
    assert_eq!(transform.origin, na::Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_transform_marshal_out() {
    let transform = Transform::new(
        na::Vector3::new(4.0, 5.0, 6.0),
        na::UnitQuaternion::identity(),
    );

    assert_eq!(transform.location(), Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(transform.rotation_quat(), Quaternion::identity());
    assert_eq!(transform.rotation_matrix(), Matrix3::identity());
}
