//! Window resize notifications.
//!
//! The input system triggers [`WindowResized`] when raylib reports a new
//! window size. The observer updates [`Viewport`], which both picking and the
//! renderer read to derive the aspect ratio. Activation state is untouched.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::viewport::Viewport;

#[derive(Event, Debug, Clone, Copy)]
pub struct WindowResized {
    pub w: i32,
    pub h: i32,
}

pub fn window_resized_observer(trigger: On<WindowResized>, mut viewport: ResMut<Viewport>) {
    let event = trigger.event();
    viewport.w = event.w;
    viewport.h = event.h;
    debug!(
        "Viewport resized to {}x{} (aspect {:.3})",
        event.w,
        event.h,
        viewport.aspect()
    );
}
