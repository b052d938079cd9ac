// Host-side tests for forward stepping.

use cubewalk_core::locomotion::move_forward;
use cubewalk_core::*;
use glam::Vec3;

fn assert_vec_close(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
}

#[test]
fn raw_direction_is_negated_before_stepping() {
    // Raw (0,0,-1) negates to (0,0,1); one 1.5 step lands at z = 1.5 * (-1) * (-1).
    let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let fx = move_forward(&mut camera);

    let expected = Vec3::new(0.0, 0.0, FORWARD_STEP * -1.0 * -1.0);
    assert_vec_close(camera.position, expected);
    assert_vec_close(camera.position, Vec3::new(0.0, 0.0, 1.5));
    assert_eq!(fx.as_slice(), &[Effect::MoveCamera { position: camera.position }]);
}

#[test]
fn default_rig_walks_towards_negative_z() {
    let mut camera = Camera::default();
    move_forward(&mut camera);
    assert_vec_close(camera.position, Vec3::new(0.0, 1.6, -1.5));
}

#[test]
fn height_is_never_changed() {
    let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.6, 0.8));
    move_forward(&mut camera);
    assert_vec_close(camera.position, Vec3::new(1.0, 2.0, 3.0 - 1.2));
}

#[test]
fn step_length_ignores_direction_magnitude() {
    let mut camera = Camera::new(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0));
    move_forward(&mut camera);
    assert_vec_close(camera.position, Vec3::new(-1.5, 0.0, 0.0));
}

#[test]
fn zero_direction_stays_put() {
    let mut camera = Camera::new(Vec3::new(2.0, 1.6, 2.0), Vec3::ZERO);
    move_forward(&mut camera);
    assert_vec_close(camera.position, Vec3::new(2.0, 1.6, 2.0));
}
