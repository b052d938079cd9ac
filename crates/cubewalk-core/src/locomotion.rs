use glam::Vec3;

use crate::constants::FORWARD_STEP;
use crate::effects::{Effect, Effects};
use crate::state::Camera;

/// Step the camera [`FORWARD_STEP`] units along the horizontal plane.
///
/// The provider reports the rig's local +Z, which points behind the viewer,
/// so the direction is negated before stepping. Height never changes.
pub fn move_forward(camera: &mut Camera) -> Effects {
    let mut fx = Effects::new();
    let step = (-camera.world_direction).normalize_or_zero() * FORWARD_STEP;
    let position = Vec3::new(
        camera.position.x + step.x,
        camera.position.y,
        camera.position.z + step.z,
    );
    camera.position = position;
    fx.push(Effect::MoveCamera { position });
    fx
}
