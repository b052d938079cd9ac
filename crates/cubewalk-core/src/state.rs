//! Session state and the camera snapshot read from the scene provider.
//!
//! Nothing here talks to the DOM. The web front-end copies the live camera
//! transform into [`Camera`] before each action or frame and applies the
//! effects the controllers return.

use glam::{Quat, Vec3};

use crate::color::Rgb;
use crate::constants::{GROUND_DEFAULT, GROUND_WARNING, SKY_DEFAULT, SKY_WARNING};
use crate::scene::EntityId;

/// Camera position plus the raw world direction reported by the provider.
///
/// `world_direction` follows three.js `Object3D::getWorldDirection`, which
/// yields the object's local +Z axis in world space. For a first-person
/// camera rig that axis points *behind* the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub world_direction: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        // Default rig: eye height 1.6, looking down -Z so local +Z is world +Z.
        Self {
            position: Vec3::new(0.0, 1.6, 0.0),
            world_direction: Vec3::Z,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, world_direction: Vec3) -> Self {
        Self {
            position,
            world_direction,
        }
    }

    /// Rotation taking local +Z onto the reported world direction.
    pub fn orientation(&self) -> Quat {
        let dir = self.world_direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Z, dir)
        }
    }

    /// Map a camera-local offset into world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation() * local
    }

    /// Where a cube lands when dropped or spawned under the camera.
    pub fn floor_point(&self, height: f32) -> Vec3 {
        Vec3::new(self.position.x, height, self.position.z)
    }
}

/// Warning message visibility and the sky/ground colours last pushed to the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryVisuals {
    pub warning_visible: bool,
    pub sky: Rgb,
    pub ground: Rgb,
}

impl BoundaryVisuals {
    pub const INSIDE: Self = Self {
        warning_visible: false,
        sky: SKY_DEFAULT,
        ground: GROUND_DEFAULT,
    };
    pub const OUTSIDE: Self = Self {
        warning_visible: true,
        sky: SKY_WARNING,
        ground: GROUND_WARNING,
    };
}

impl Default for BoundaryVisuals {
    fn default() -> Self {
        Self::INSIDE
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    /// Handle of the held entity. Acts as a weak reference: the entity may
    /// have vanished from the scene without this being cleared.
    pub carried: Option<EntityId>,
    pub on_plane: bool,
    pub visuals: BoundaryVisuals,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            carried: None,
            on_plane: true,
            visuals: BoundaryVisuals::INSIDE,
        }
    }
}

impl SceneState {
    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carried.is_some()
    }
}
