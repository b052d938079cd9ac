//! Typed stand-in for the provider's scene graph.
//!
//! Only the cubes the player can interact with are tracked. Entities keep
//! insertion order, which is also the order the proximity scan walks them.

use glam::Vec3;

use crate::color::Rgb;
use crate::constants::RESTING_OPACITY;
use crate::error::SceneError;
use crate::state::Camera;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Which transform an entity's `position` is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parent {
    #[default]
    World,
    Camera,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub position: Vec3,
    pub color: Rgb,
    pub opacity: f32,
    pub pickupable: bool,
    pub parent: Parent,
}

fn check_position(p: Vec3) -> Result<(), SceneError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinitePosition(p.x, p.y, p.z))
    }
}

fn check_opacity(opacity: f32) -> Result<(), SceneError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(SceneError::InvalidOpacity(opacity))
    }
}

impl Entity {
    pub fn new(
        id: EntityId,
        position: Vec3,
        color: Rgb,
        opacity: f32,
    ) -> Result<Self, SceneError> {
        check_position(position)?;
        check_opacity(opacity)?;
        Ok(Self {
            id,
            position,
            color,
            opacity,
            pickupable: true,
            parent: Parent::World,
        })
    }

    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), SceneError> {
        check_opacity(opacity)?;
        self.opacity = opacity;
        Ok(())
    }

    pub fn set_position(&mut self, position: Vec3) -> Result<(), SceneError> {
        check_position(position)?;
        self.position = position;
        Ok(())
    }

    pub fn world_position(&self, camera: &Camera) -> Vec3 {
        match self.parent {
            Parent::World => self.position,
            Parent::Camera => camera.local_to_world(self.position),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Add a fully opaque, pickupable cube in world space.
    pub fn spawn(&mut self, position: Vec3, color: Rgb) -> Result<EntityId, SceneError> {
        let id = self.alloc_id();
        let entity = Entity::new(id, position, color, RESTING_OPACITY)?;
        self.entities.push(entity);
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn pickupable(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.pickupable)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
