pub mod buttons;
pub mod keyboard;

pub use buttons::wire_buttons;
pub use keyboard::wire_global_keydown;
