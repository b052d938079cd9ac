// DOM contract with `public/index.html`.

// UI overlay
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const INTERACT_BUTTON_ID: &str = "interact";
pub const EDIT_BUTTON_ID: &str = "edit";
pub const MOVE_FORWARD_BUTTON_ID: &str = "moveForward";
pub const BUTTON_IDS: [&str; 3] = [INTERACT_BUTTON_ID, EDIT_BUTTON_ID, MOVE_FORWARD_BUTTON_ID];

// Scene entities
pub const BOUNDARY_MESSAGE_ID: &str = "boundaryMessage"; // a-text, toggled via `visible`
pub const SKY_ID: &str = "sky";
pub const GROUND_ID: &str = "ground";

// Selectors
pub const SCENE_SELECTOR: &str = "a-scene";
pub const CAMERA_SELECTOR: &str = "[camera]";
pub const PICKUPABLE_SELECTOR: &str = "[pickupable]";
pub const PICKUPABLE_ATTR: &str = "pickupable";

// Spawned cubes
pub const CUBE_TAG: &str = "a-box";

// Audio cues are resolved relative to the page
pub const AUDIO_BASE_PATH: &str = "";
