use rand::prelude::*;

use crate::boundary::{self, Boundary};
use crate::effects::Effects;
use crate::input::{self, Action};
use crate::interaction;
use crate::locomotion;
use crate::scene::Scene;
use crate::state::{Camera, SceneState};

/// Everything one page session mutates, owned in one place.
pub struct Session {
    pub state: SceneState,
    pub scene: Scene,
    pub camera: Camera,
    pub boundary: Boundary,
    rng: StdRng,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_scene(Scene::new(), Camera::default(), seed)
    }

    pub fn with_scene(scene: Scene, camera: Camera, seed: u64) -> Self {
        Self {
            state: SceneState::default(),
            scene,
            camera,
            boundary: Boundary::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the camera snapshot with the provider's latest transform.
    pub fn sync_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn dispatch(&mut self, action: Action) -> Effects {
        if action.requires_plane() && !self.state.on_plane {
            log::debug!("[session] {:?} ignored off-plane", action);
            return Effects::new();
        }
        match action {
            Action::Interact => {
                interaction::interact(&mut self.state, &mut self.scene, &self.camera)
            }
            Action::Edit => {
                if self.state.is_carrying() {
                    interaction::destroy(&mut self.state, &mut self.scene)
                } else {
                    interaction::create(&self.state, &mut self.scene, &self.camera, &mut self.rng)
                }
            }
            Action::MoveForward => locomotion::move_forward(&mut self.camera),
        }
    }

    pub fn handle_key(&mut self, key: &str) -> Effects {
        match input::action_for_key(key) {
            Some(action) => self.dispatch(action),
            None => Effects::new(),
        }
    }

    pub fn handle_button(&mut self, element_id: &str) -> Effects {
        match input::action_for_button(element_id) {
            Some(action) => self.dispatch(action),
            None => Effects::new(),
        }
    }

    /// Once per rendered frame.
    pub fn tick(&mut self) -> Effects {
        boundary::tick(
            &self.boundary,
            &mut self.state,
            &mut self.scene,
            &self.camera,
        )
    }
}
