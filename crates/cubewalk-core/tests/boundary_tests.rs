// Host-side tests for the per-frame boundary monitor.

use cubewalk_core::boundary::tick;
use cubewalk_core::*;
use glam::Vec3;

fn warnings(fx: &Effects) -> usize {
    fx.iter()
        .filter(|e| matches!(e, Effect::PlayCue(Cue::Warning)))
        .count()
}

fn run(state: &mut SceneState, scene: &mut Scene, x: f32, z: f32) -> Effects {
    let camera = Camera::new(Vec3::new(x, 0.0, z), Vec3::Z);
    tick(&Boundary::default(), state, scene, &camera)
}

#[test]
fn origin_is_on_plane() {
    let mut state = SceneState::default();
    let fx = run(&mut state, &mut Scene::new(), 0.0, 0.0);
    assert!(state.on_plane);
    assert_eq!(state.visuals, BoundaryVisuals::INSIDE);
    // Already showing the default palette: nothing to push.
    assert!(fx.is_empty());
}

#[test]
fn edges_are_inclusive() {
    let mut state = SceneState::default();
    let mut scene = Scene::new();
    for (x, z) in [(6.0, 6.0), (-6.0, 6.0), (6.0, -6.0), (-6.0, -6.0)] {
        run(&mut state, &mut scene, x, z);
        assert!(state.on_plane, "({x}, {z}) should be on the plane");
    }
}

#[test]
fn outside_shows_warning_palette() {
    let mut state = SceneState::default();
    let fx = run(&mut state, &mut Scene::new(), 7.0, 0.0);

    assert!(!state.on_plane);
    assert!(state.visuals.warning_visible);
    assert_eq!(state.visuals.sky, Rgb::from_hex(0x8B0000));
    assert_eq!(state.visuals.sky.to_string(), "#8b0000");
    assert_eq!(state.visuals.ground, Rgb::from_hex(0xFFFFFF));
    assert!(fx.contains(&Effect::SetBoundaryVisuals(BoundaryVisuals::OUTSIDE)));
}

#[test]
fn z_axis_is_checked_too() {
    let mut state = SceneState::default();
    run(&mut state, &mut Scene::new(), 0.0, -6.01);
    assert!(!state.on_plane);
}

#[test]
fn warning_plays_once_per_exit() {
    let mut state = SceneState::default();
    let mut scene = Scene::new();

    assert_eq!(warnings(&run(&mut state, &mut scene, 0.0, 0.0)), 0);
    let mut total = 0;
    for _ in 0..5 {
        total += warnings(&run(&mut state, &mut scene, 7.0, 0.0));
    }
    assert_eq!(total, 1);

    // Come back, leave again: one more.
    run(&mut state, &mut scene, 0.0, 0.0);
    assert!(state.on_plane);
    total = 0;
    for _ in 0..3 {
        total += warnings(&run(&mut state, &mut scene, 0.0, 9.0));
    }
    assert_eq!(total, 1);
}

#[test]
fn visuals_are_pushed_only_on_change() {
    let mut state = SceneState::default();
    let mut scene = Scene::new();

    let first = run(&mut state, &mut scene, 8.0, 0.0);
    let second = run(&mut state, &mut scene, 8.5, 0.0);
    let back = run(&mut state, &mut scene, 1.0, 1.0);

    assert!(first.contains(&Effect::SetBoundaryVisuals(BoundaryVisuals::OUTSIDE)));
    assert!(second.is_empty());
    assert_eq!(
        back.as_slice(),
        &[Effect::SetBoundaryVisuals(BoundaryVisuals::INSIDE)]
    );
    assert_eq!(state.visuals.sky.to_string(), "#ddddff");
    assert_eq!(state.visuals.ground.to_string(), "#090980");
}

#[test]
fn leaving_the_plane_forces_a_drop() {
    let mut state = SceneState::default();
    let mut scene = Scene::new();
    let id = scene.spawn(Vec3::new(0.0, 0.5, 0.0), Rgb::default()).unwrap();
    let inside = Camera::new(Vec3::new(0.0, 1.6, 0.0), Vec3::Z);
    interaction::interact(&mut state, &mut scene, &inside);
    assert!(state.is_carrying());

    let fx = run(&mut state, &mut scene, 7.0, 2.0);

    assert!(!state.is_carrying());
    let e = scene.get(id).unwrap();
    assert_eq!(e.parent, Parent::World);
    assert_eq!(e.position, Vec3::new(7.0, 0.5, 2.0));
    assert!(fx.contains(&Effect::PlayCue(Cue::Dropoff)));
    assert_eq!(warnings(&fx), 1);
}
