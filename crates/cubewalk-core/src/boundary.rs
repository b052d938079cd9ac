use glam::Vec3;

use crate::constants::{BOUNDARY_HALF_X, BOUNDARY_HALF_Z};
use crate::effects::{Cue, Effect, Effects};
use crate::interaction;
use crate::scene::Scene;
use crate::state::{BoundaryVisuals, Camera, SceneState};

/// Axis-aligned walkable rectangle centred on the origin, edges inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub half_x: f32,
    pub half_z: f32,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            half_x: BOUNDARY_HALF_X,
            half_z: BOUNDARY_HALF_Z,
        }
    }
}

impl Boundary {
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_x && p.z.abs() <= self.half_z
    }
}

/// Per-frame check of the camera against the plane edges.
///
/// Leaving the plane forces a drop and plays the warning once per exit;
/// staying outside keeps `on_plane` false without replaying the cue.
pub fn tick(
    boundary: &Boundary,
    state: &mut SceneState,
    scene: &mut Scene,
    camera: &Camera,
) -> Effects {
    let mut fx = Effects::new();
    let visuals = if boundary.contains(camera.position) {
        state.on_plane = true;
        BoundaryVisuals::INSIDE
    } else {
        fx.extend(interaction::drop_carried(state, scene, camera));
        if state.on_plane {
            log::info!("[boundary] left the plane at {:?}", camera.position);
            fx.push(Effect::PlayCue(Cue::Warning));
        }
        state.on_plane = false;
        BoundaryVisuals::OUTSIDE
    };
    if state.visuals != visuals {
        state.visuals = visuals;
        fx.push(Effect::SetBoundaryVisuals(visuals));
    }
    fx
}
