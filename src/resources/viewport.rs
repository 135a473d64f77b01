//! Viewport size resource.
//!
//! Tracks the window's drawable size in pixels. Picking uses it to normalize
//! pointer coordinates and the renderer derives the camera aspect ratio from
//! it. Updated by the [`WindowResized`](crate::events::resize::WindowResized)
//! observer.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct Viewport {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Viewport {
    /// Width over height. A zero-height viewport (minimized window) reports 1.0.
    pub fn aspect(&self) -> f32 {
        if self.h <= 0 {
            1.0
        } else {
            self.w as f32 / self.h as f32
        }
    }
}
