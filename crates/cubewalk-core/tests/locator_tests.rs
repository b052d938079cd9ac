// Host-side tests for the proximity scan.

use cubewalk_core::locator::find_nearest;
use cubewalk_core::*;
use glam::Vec3;

fn camera() -> Camera {
    Camera::new(Vec3::ZERO, Vec3::Z)
}

fn cube(scene: &mut Scene, x: f32, y: f32, z: f32) -> EntityId {
    scene.spawn(Vec3::new(x, y, z), Rgb::default()).unwrap()
}

#[test]
fn empty_scene_finds_nothing() {
    assert_eq!(find_nearest(&Scene::new(), &camera()), None);
}

#[test]
fn picks_closest_within_radius() {
    let mut scene = Scene::new();
    let _far = cube(&mut scene, 1.8, 0.0, 0.0);
    let near = cube(&mut scene, 0.0, 0.0, 0.9);
    let _mid = cube(&mut scene, -1.2, 0.0, 0.0);

    assert_eq!(find_nearest(&scene, &camera()), Some(near));
}

#[test]
fn radius_is_exclusive() {
    let mut scene = Scene::new();
    cube(&mut scene, 2.0, 0.0, 0.0);
    cube(&mut scene, 0.0, 0.0, -3.5);
    assert_eq!(find_nearest(&scene, &camera()), None);
}

#[test]
fn never_returns_entity_at_or_beyond_radius() {
    let cam = camera();
    for i in 0..40 {
        let mut scene = Scene::new();
        let r = 0.1 * i as f32;
        cube(&mut scene, r * 0.6, 0.0, r * 0.8);
        match find_nearest(&scene, &cam) {
            Some(id) => {
                let d = scene.get(id).unwrap().world_position(&cam).distance(cam.position);
                assert!(d < PICKUP_RADIUS, "returned entity at distance {d}");
            }
            None => assert!(r >= PICKUP_RADIUS - 1e-4, "missed entity at distance {r}"),
        }
    }
}

#[test]
fn equal_distances_keep_first_seen() {
    let mut scene = Scene::new();
    let first = cube(&mut scene, 1.0, 0.0, 0.0);
    let _second = cube(&mut scene, -1.0, 0.0, 0.0);
    assert_eq!(find_nearest(&scene, &camera()), Some(first));
}

#[test]
fn scenery_is_not_a_candidate() {
    let mut scene = Scene::new();
    let id = cube(&mut scene, 0.0, 0.0, 0.5);
    scene.get_mut(id).unwrap().pickupable = false;
    assert_eq!(find_nearest(&scene, &camera()), None);
}

#[test]
fn distance_uses_world_position_of_camera_children() {
    let mut scene = Scene::new();
    let id = cube(&mut scene, 10.0, 0.0, 10.0);
    // Parented to the camera one unit in front: world position is close by.
    let e = scene.get_mut(id).unwrap();
    e.parent = Parent::Camera;
    e.position = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(find_nearest(&scene, &camera()), Some(id));
}
