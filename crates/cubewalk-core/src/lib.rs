pub mod boundary;
pub mod color;
pub mod constants;
pub mod effects;
pub mod error;
pub mod input;
pub mod interaction;
pub mod locator;
pub mod locomotion;
pub mod scene;
pub mod session;
pub mod state;

pub use boundary::Boundary;
pub use color::Rgb;
pub use constants::*;
pub use effects::{Cue, Effect, Effects, Instructions};
pub use error::SceneError;
pub use input::Action;
pub use scene::{Entity, EntityId, Parent, Scene};
pub use session::Session;
pub use state::{BoundaryVisuals, Camera, SceneState};
