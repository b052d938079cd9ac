//! Side effects requested by the controllers.
//!
//! State transitions happen in the core; everything the player can see or
//! hear is described here and left to the front-end to apply (or ignore).

use glam::Vec3;
use smallvec::SmallVec;

use crate::color::Rgb;
use crate::scene::EntityId;
use crate::state::BoundaryVisuals;

/// Sound cue; the file names are a contract with the static bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Pickup,
    Dropoff,
    Destroy,
    Warning,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Pickup, Cue::Dropoff, Cue::Destroy, Cue::Warning];

    pub fn file_name(self) -> &'static str {
        match self {
            Cue::Pickup => "pickup.mp3",
            Cue::Dropoff => "dropoff.mp3",
            Cue::Destroy => "destroy.mp3",
            Cue::Warning => "warning.mp3",
        }
    }
}

/// The two tutorial lines shown in the `instructions` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instructions {
    Idle,
    Carrying,
}

impl Instructions {
    pub fn text(self) -> &'static str {
        match self {
            Instructions::Idle => "Press 'E' to PICKUP a cube! Press 'Q' to CREATE a cube!",
            Instructions::Carrying => "Press 'E' to DROP a cube! Press 'Q' to DELETE a held cube!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// New cube in world space.
    Spawn {
        id: EntityId,
        position: Vec3,
        color: Rgb,
    },
    /// Reparent under the camera at a camera-local offset.
    AttachToCamera {
        id: EntityId,
        offset: Vec3,
        opacity: f32,
    },
    /// Reparent under the scene root at a world position.
    DetachToWorld {
        id: EntityId,
        position: Vec3,
        opacity: f32,
    },
    Remove {
        id: EntityId,
    },
    MoveCamera {
        position: Vec3,
    },
    SetInstructions(Instructions),
    SetBoundaryVisuals(BoundaryVisuals),
    PlayCue(Cue),
}

pub type Effects = SmallVec<[Effect; 4]>;
