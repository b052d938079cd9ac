use thiserror::Error;

/// Rejected entity construction or attribute update.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("opacity {0} outside [0, 1]")]
    InvalidOpacity(f32),
    #[error("position ({0}, {1}, {2}) is not finite")]
    NonFinitePosition(f32, f32, f32),
}
