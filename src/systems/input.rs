//! Input polling.
//!
//! [`poll_input`] reads hardware input from Raylib once per frame and turns it
//! into viewer events:
//! - a left click (press and release without dragging) triggers
//!   [`PointerClick`](crate::events::pointer::PointerClick)
//! - a left drag and the mouse wheel feed the
//!   [`OrbitControls`](crate::resources::orbitcontrols::OrbitControls)
//! - a window resize triggers [`WindowResized`](crate::events::resize::WindowResized)
//! - F11 toggles debug mode via
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;
use raylib::ffi::{KeyboardKey, MouseButton};
use raylib::prelude::Vector2;

use crate::events::pointer::PointerClick;
use crate::events::resize::WindowResized;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::orbitcontrols::OrbitControls;

/// Pixels the pointer may travel while pressed and still count as a click.
pub const CLICK_SLOP: f32 = 4.0;

/// Tracks the left button between press and release.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragTracker {
    pressed_at: Option<Vector2>,
    dragging: bool,
}

impl DragTracker {
    pub fn press(&mut self, at: Vector2) {
        self.pressed_at = Some(at);
        self.dragging = false;
    }

    /// Record pointer movement while held. Returns true once the movement
    /// has turned the press into a drag.
    pub fn moved(&mut self, to: Vector2) -> bool {
        if let Some(start) = self.pressed_at
            && !self.dragging
        {
            let dx = to.x - start.x;
            let dy = to.y - start.y;
            self.dragging = dx * dx + dy * dy > CLICK_SLOP * CLICK_SLOP;
        }
        self.dragging
    }

    /// Returns true if the release completes a click.
    pub fn release(&mut self) -> bool {
        let click = self.pressed_at.is_some() && !self.dragging;
        self.pressed_at = None;
        self.dragging = false;
        click
    }
}

/// Poll Raylib for pointer, wheel, keyboard and window input.
pub fn poll_input(world: &mut World, rl: &RaylibHandle, drag: &mut DragTracker) {
    if rl.is_window_resized() {
        world.trigger(WindowResized {
            w: rl.get_screen_width(),
            h: rl.get_screen_height(),
        });
    }

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        world.trigger(SwitchDebugEvent {});
    }

    let mouse = rl.get_mouse_position();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        drag.press(mouse);
    } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) && drag.moved(mouse) {
        let delta = rl.get_mouse_delta();
        world.resource_mut::<OrbitControls>().push_rotate(delta);
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) && drag.release() {
        world.trigger(PointerClick {
            x: mouse.x,
            y: mouse.y,
        });
    }

    let wheel = rl.get_mouse_wheel_move();
    if wheel != 0.0 {
        world.resource_mut::<OrbitControls>().push_zoom(wheel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_in_place_is_a_click() {
        let mut drag = DragTracker::default();
        drag.press(Vector2 { x: 10.0, y: 10.0 });
        assert!(!drag.moved(Vector2 { x: 12.0, y: 11.0 }));
        assert!(drag.release());
    }

    #[test]
    fn drag_is_not_a_click() {
        let mut drag = DragTracker::default();
        drag.press(Vector2 { x: 10.0, y: 10.0 });
        assert!(drag.moved(Vector2 { x: 30.0, y: 10.0 }));
        // stays a drag even if the pointer comes back
        assert!(drag.moved(Vector2 { x: 10.0, y: 10.0 }));
        assert!(!drag.release());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut drag = DragTracker::default();
        assert!(!drag.release());
    }
}
