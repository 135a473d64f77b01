//! Camera and orbit-target markers.
//!
//! The camera and the point it orbits are separate entities so that both can
//! carry a [`TweenTranslation`](super::tween::TweenTranslation) independently.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Marker for the single scene camera.
#[derive(Component, Clone, Copy, Debug)]
pub struct MainCamera;

/// Marker for the point the orbit controls revolve around.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitTarget;

/// Projection and orientation of the main camera.
///
/// `look_at` is only rewritten by the orbit controls, when they are told to
/// update. Moving the camera alone does not re-aim it.
#[derive(Component, Clone, Copy, Debug)]
pub struct CameraLens {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub up: Vector3,
    pub look_at: Vector3,
}

impl CameraLens {
    pub fn new(fovy: f32) -> Self {
        Self {
            fovy,
            up: Vector3::new(0.0, 1.0, 0.0),
            look_at: Vector3::zero(),
        }
    }
}
