use crate::constants::{PICKUP_RADIUS, PICKUP_SCAN_CUTOFF};
use crate::scene::{EntityId, Scene};
use crate::state::Camera;

/// Nearest pickupable entity strictly inside [`PICKUP_RADIUS`] of the camera.
///
/// Walks the scene in insertion order; on equal distances the first one
/// seen is kept.
pub fn find_nearest(scene: &Scene, camera: &Camera) -> Option<EntityId> {
    let mut nearest = None;
    let mut shortest = PICKUP_SCAN_CUTOFF;
    for entity in scene.pickupable() {
        let distance = entity.world_position(camera).distance(camera.position);
        if distance < PICKUP_RADIUS && distance < shortest {
            shortest = distance;
            nearest = Some(entity.id);
        }
    }
    nearest
}
