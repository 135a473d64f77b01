//! Orbit controls resource.
//!
//! Keeps the camera aimed at a movable target and lets the user revolve and
//! dolly around it. The controls only re-aim the camera when something asks
//! them to: user input, or [`OrbitControls::request_update`], which the
//! orbit-target follower calls on every frame the target moves.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Vector2, Vector3};

#[derive(Resource, Debug, Clone)]
pub struct OrbitControls {
    pub target: Vector3,
    /// Radians of rotation per pixel of drag, before scaling by viewport height.
    pub rotate_speed: f32,
    /// Fraction of the distance removed per wheel notch.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    update_requested: bool,
    rotate_delta: Vector2,
    zoom_delta: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vector3::zero(),
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            min_distance: 0.5,
            max_distance: 50.0,
            update_requested: false,
            rotate_delta: Vector2::zero(),
            zoom_delta: 0.0,
        }
    }
}

impl OrbitControls {
    pub fn request_update(&mut self) {
        self.update_requested = true;
    }

    /// Queue a drag in pixels, applied on the next update.
    pub fn push_rotate(&mut self, pixels: Vector2) {
        self.rotate_delta.x += pixels.x;
        self.rotate_delta.y += pixels.y;
    }

    /// Queue wheel notches; positive moves the camera closer.
    pub fn push_zoom(&mut self, notches: f32) {
        self.zoom_delta += notches;
    }

    pub(crate) fn take_pending(&mut self) -> Option<(Vector2, f32)> {
        let has_input = self.rotate_delta.x != 0.0 || self.rotate_delta.y != 0.0 || self.zoom_delta != 0.0;
        if !has_input && !self.update_requested {
            return None;
        }
        let pending = (self.rotate_delta, self.zoom_delta);
        self.rotate_delta = Vector2::zero();
        self.zoom_delta = 0.0;
        self.update_requested = false;
        Some(pending)
    }
}
