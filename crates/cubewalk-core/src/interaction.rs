//! Pickup / drop / create / destroy.
//!
//! Each function mutates the session state and scene model in place and
//! returns the effects the front-end should apply. Calls that make no sense
//! in the current state (destroy with empty hands, create while holding)
//! return no effects and change nothing.

use rand::Rng;

use crate::color::Rgb;
use crate::constants::{carry_offset_vec3, CARRIED_OPACITY, FLOOR_HEIGHT, RESTING_OPACITY};
use crate::effects::{Cue, Effect, Effects, Instructions};
use crate::locator;
use crate::scene::{Parent, Scene};
use crate::state::{Camera, SceneState};

/// Toggle carry: pick up the nearest cube, or drop the held one.
pub fn interact(state: &mut SceneState, scene: &mut Scene, camera: &Camera) -> Effects {
    if state.is_carrying() {
        return drop_carried(state, scene, camera);
    }
    let mut fx = Effects::new();
    let Some(id) = locator::find_nearest(scene, camera) else {
        return fx;
    };
    let Some(entity) = scene.get_mut(id) else {
        return fx;
    };
    let offset = carry_offset_vec3();
    entity.parent = Parent::Camera;
    entity.position = offset;
    entity.opacity = CARRIED_OPACITY;
    state.carried = Some(id);
    log::debug!("[interact] picked up {:?}", id);

    fx.push(Effect::AttachToCamera {
        id,
        offset,
        opacity: CARRIED_OPACITY,
    });
    fx.push(Effect::PlayCue(Cue::Pickup));
    fx.push(Effect::SetInstructions(Instructions::Carrying));
    fx
}

/// Put the held cube down under the camera. Shared with the boundary monitor.
pub fn drop_carried(state: &mut SceneState, scene: &mut Scene, camera: &Camera) -> Effects {
    let mut fx = Effects::new();
    let Some(id) = state.carried.take() else {
        return fx;
    };
    let Some(entity) = scene.get_mut(id) else {
        // Held cube vanished underneath us; nothing left to put down.
        log::debug!("[interact] carried {:?} no longer in scene", id);
        return fx;
    };
    let position = camera.floor_point(FLOOR_HEIGHT);
    entity.parent = Parent::World;
    entity.position = position;
    entity.opacity = RESTING_OPACITY;
    log::debug!("[interact] dropped {:?}", id);

    fx.push(Effect::DetachToWorld {
        id,
        position,
        opacity: RESTING_OPACITY,
    });
    fx.push(Effect::PlayCue(Cue::Dropoff));
    fx.push(Effect::SetInstructions(Instructions::Idle));
    fx
}

/// Spawn a randomly coloured cube at the player's feet.
pub fn create<R: Rng + ?Sized>(
    state: &SceneState,
    scene: &mut Scene,
    camera: &Camera,
    rng: &mut R,
) -> Effects {
    let mut fx = Effects::new();
    if state.is_carrying() {
        return fx;
    }
    let position = camera.floor_point(FLOOR_HEIGHT);
    let color = Rgb::random(rng);
    let id = match scene.spawn(position, color) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("[interact] create skipped: {}", e);
            return fx;
        }
    };
    log::debug!("[interact] created {:?} color={} at {:?}", id, color, position);

    fx.push(Effect::Spawn {
        id,
        position,
        color,
    });
    fx.push(Effect::PlayCue(Cue::Pickup));
    fx
}

/// Delete the held cube.
pub fn destroy(state: &mut SceneState, scene: &mut Scene) -> Effects {
    let mut fx = Effects::new();
    let Some(id) = state.carried.take() else {
        return fx;
    };
    if scene.remove(id).is_some() {
        fx.push(Effect::Remove { id });
    }
    log::debug!("[interact] destroyed {:?}", id);
    fx.push(Effect::SetInstructions(Instructions::Idle));
    fx.push(Effect::PlayCue(Cue::Destroy));
    fx
}
