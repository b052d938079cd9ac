use cubewalk_core::{BoundaryVisuals, Effect, EntityId, Instructions, Rgb, Scene};
use fnv::FnvHashMap;
use web_sys as web;

use crate::aframe;
use crate::audio;
use crate::constants::{BOUNDARY_MESSAGE_ID, GROUND_ID, PICKUPABLE_SELECTOR, SKY_ID};
use crate::dom;
use crate::overlay;

/// Applies core effects to the live page.
///
/// Keeps the mapping from core entity ids to their `<a-box>` elements.
/// Effects naming an unknown id, or elements missing from the page, are
/// skipped.
pub struct Projector {
    document: web::Document,
    scene_el: web::Element,
    camera_el: web::Element,
    elements: FnvHashMap<EntityId, web::Element>,
}

impl Projector {
    pub fn new(document: web::Document, scene_el: web::Element, camera_el: web::Element) -> Self {
        Self {
            document,
            scene_el,
            camera_el,
            elements: FnvHashMap::default(),
        }
    }

    pub fn camera_el(&self) -> &web::Element {
        &self.camera_el
    }

    /// Register cubes already declared in the page markup.
    pub fn adopt_existing(&mut self, scene: &mut Scene) {
        for el in dom::query_all(&self.document, PICKUPABLE_SELECTOR) {
            let Some(position) = aframe::world_position(&el) else {
                continue;
            };
            let color = aframe::declared_color(&el).unwrap_or_default();
            match scene.spawn(position, color) {
                Ok(id) => {
                    self.elements.insert(id, el);
                }
                Err(e) => log::warn!("[projector] skipping markup cube: {}", e),
            }
        }
        log::info!("[projector] adopted {} cube(s) from markup", self.elements.len());
    }

    pub fn apply<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(&mut self, effect: &Effect) {
        match effect {
            Effect::Spawn {
                id,
                position,
                color,
            } => {
                if let Some(el) =
                    aframe::create_cube(&self.document, &self.scene_el, *position, *color)
                {
                    self.elements.insert(*id, el);
                }
            }
            Effect::AttachToCamera {
                id,
                offset,
                opacity,
            } => {
                if let Some(el) = self.elements.get(id) {
                    aframe::reparent(el, &self.camera_el);
                    aframe::set_position(el, *offset);
                    aframe::set_opacity(el, *opacity);
                }
            }
            Effect::DetachToWorld {
                id,
                position,
                opacity,
            } => {
                if let Some(el) = self.elements.get(id) {
                    aframe::reparent(el, &self.scene_el);
                    aframe::set_position(el, *position);
                    aframe::set_opacity(el, *opacity);
                }
            }
            Effect::Remove { id } => {
                if let Some(el) = self.elements.remove(id) {
                    el.remove();
                }
            }
            Effect::MoveCamera { position } => aframe::set_position(&self.camera_el, *position),
            Effect::SetInstructions(which) => self.set_instructions(*which),
            Effect::SetBoundaryVisuals(visuals) => self.set_boundary_visuals(visuals),
            Effect::PlayCue(cue) => audio::play_cue(*cue),
        }
    }

    fn set_instructions(&self, which: Instructions) {
        overlay::set_instructions(&self.document, which.text());
    }

    fn set_boundary_visuals(&self, visuals: &BoundaryVisuals) {
        if let Some(el) = self.document.get_element_by_id(BOUNDARY_MESSAGE_ID) {
            aframe::set_visible(&el, visuals.warning_visible);
        }
        self.paint(SKY_ID, visuals.sky);
        self.paint(GROUND_ID, visuals.ground);
    }

    fn paint(&self, element_id: &str, color: Rgb) {
        if let Some(el) = self.document.get_element_by_id(element_id) {
            aframe::set_color(&el, color);
        }
    }
}
