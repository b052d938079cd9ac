//! Input-to-action dispatch table.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Pick up the nearest cube or drop the held one.
    Interact,
    /// Create a cube when empty-handed, otherwise delete the held one.
    Edit,
    MoveForward,
}

impl Action {
    /// Whether the action is ignored while the camera is off the plane.
    #[inline]
    pub fn requires_plane(self) -> bool {
        matches!(self, Action::Interact | Action::Edit)
    }
}

pub const KEY_BINDINGS: &[(&str, Action)] = &[
    ("E", Action::Interact),
    ("e", Action::Interact),
    ("Q", Action::Edit),
    ("q", Action::Edit),
];

// Keyed by DOM element id.
pub const BUTTON_BINDINGS: &[(&str, Action)] = &[
    ("interact", Action::Interact),
    ("edit", Action::Edit),
    ("moveForward", Action::MoveForward),
];

#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, a)| *a)
}

#[inline]
pub fn action_for_button(element_id: &str) -> Option<Action> {
    BUTTON_BINDINGS
        .iter()
        .find(|(id, _)| *id == element_id)
        .map(|(_, a)| *a)
}
