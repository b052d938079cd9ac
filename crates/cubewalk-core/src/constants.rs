use glam::Vec3;

use crate::color::Rgb;

// Interaction tuning shared by the web front-end and host tests.

// Pickup
pub const PICKUP_RADIUS: f32 = 2.0; // an entity must be strictly closer than this
pub const PICKUP_SCAN_CUTOFF: f32 = 4.0; // initial "shortest distance" for the scan
pub const CARRY_OFFSET: [f32; 3] = [0.0, 0.0, -2.0]; // camera-local slot for the held cube

// Opacity
pub const CARRIED_OPACITY: f32 = 0.35;
pub const RESTING_OPACITY: f32 = 1.0;

// Cubes are dropped/spawned at this height regardless of camera height
pub const FLOOR_HEIGHT: f32 = 0.5;

// Plane boundary (12x12 centred on the origin)
pub const BOUNDARY_HALF_X: f32 = 6.0;
pub const BOUNDARY_HALF_Z: f32 = 6.0;

// Locomotion
pub const FORWARD_STEP: f32 = 1.5;

// Sky/ground palette
pub const SKY_DEFAULT: Rgb = Rgb::from_hex(0xDDDDFF);
pub const GROUND_DEFAULT: Rgb = Rgb::from_hex(0x090980);
pub const SKY_WARNING: Rgb = Rgb::from_hex(0x8B0000);
pub const GROUND_WARNING: Rgb = Rgb::from_hex(0xFFFFFF);

#[inline]
pub fn carry_offset_vec3() -> Vec3 {
    Vec3::from_array(CARRY_OFFSET)
}
