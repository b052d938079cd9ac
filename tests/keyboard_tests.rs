// Host-side tests for the key and button dispatch used by the web front-end.

use cubewalk_core::input::{action_for_button, action_for_key, KEY_BINDINGS};
use cubewalk_core::{Action, Effect, Instructions, Session};

#[test]
fn bound_keys_cover_both_cases() {
    for (key, action) in KEY_BINDINGS {
        let other = if key.chars().all(|c| c.is_ascii_uppercase()) {
            key.to_ascii_lowercase()
        } else {
            key.to_ascii_uppercase()
        };
        assert_eq!(action_for_key(&other), Some(*action), "{key} vs {other}");
    }
}

#[test]
fn unbound_keys_are_ignored() {
    for key in ["w", "a", "s", "d", " ", "Enter", "Escape", "ArrowUp", "1"] {
        assert_eq!(action_for_key(key), None, "{key:?} should be unbound");
    }
}

#[test]
fn movement_has_no_key() {
    assert!(KEY_BINDINGS.iter().all(|(_, a)| *a != Action::MoveForward));
    assert_eq!(action_for_button("moveForward"), Some(Action::MoveForward));
}

#[test]
fn key_and_button_paths_agree() {
    let mut by_key = Session::new(3);
    let mut by_button = Session::new(3);

    let a: Vec<Effect> = by_key.handle_key("q").into_iter().collect();
    let b: Vec<Effect> = by_button.handle_button("edit").into_iter().collect();
    assert_eq!(a, b);

    let a: Vec<Effect> = by_key.handle_key("e").into_iter().collect();
    let b: Vec<Effect> = by_button.handle_button("interact").into_iter().collect();
    assert_eq!(a, b);
    assert!(a.contains(&Effect::SetInstructions(Instructions::Carrying)));
}

#[test]
fn held_q_creates_on_every_keydown() {
    let mut session = Session::new(9);
    for n in 1..=4 {
        let fx = session.handle_key("q");
        assert!(fx.iter().any(|e| matches!(e, Effect::Spawn { .. })));
        assert_eq!(session.scene.len(), n);
    }
}

#[test]
fn held_e_toggles_on_every_keydown() {
    let mut session = Session::new(9);
    session.handle_key("q");
    for _ in 0..3 {
        session.handle_key("e");
        assert!(session.state.is_carrying());
        session.handle_key("e");
        assert!(!session.state.is_carrying());
    }
}
