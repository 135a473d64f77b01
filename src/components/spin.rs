use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Fixed rotation step (radians) added to an entity's rotation every frame.
///
/// The step is per frame, not per second, so the apparent speed follows the
/// display refresh rate.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    pub step: Vector3,
}

impl Spin {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            step: Vector3::new(x, y, z),
        }
    }
}
