//! Hotspot components.
//!
//! A hotspot is a named world-space point the user can pick. It is made of two
//! entities:
//! - the hotspot entity: [`Hotspot`] + [`IndicatorLight`] +
//!   [`Transform3D`](super::transform3d::Transform3D) at the anchor
//! - a child proxy entity: [`PickProxy`] + `ChildOf(hotspot)`
//!
//! Picking only ever tests proxies and resolves the owner through the parent
//! link, so no separate name lookup is needed on the hot path.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector3};

/// Identity and destinations of an interactive hotspot.
#[derive(Component, Clone, Debug)]
pub struct Hotspot {
    /// Display name. Intended unique, but duplicates are accepted.
    pub name: String,
    /// Point the orbit target flies to (before the vertical framing offset).
    pub anchor: Vector3,
    /// Point the camera flies to.
    pub camera_destination: Vector3,
    /// Orientation hint in degrees. Carried for tooling, not used by transitions.
    pub camera_orientation: Option<Vector3>,
    /// Overlay revealed when this hotspot becomes active.
    pub reveal_overlay: Option<String>,
}

/// Light marker drawn at the hotspot anchor.
///
/// There is no stored intensity: the renderer asks
/// [`ActivationState::indicator_intensity`](crate::resources::activation::ActivationState::indicator_intensity).
#[derive(Component, Clone, Copy, Debug)]
pub struct IndicatorLight {
    pub color: Color,
    pub radius: f32,
}

impl Default for IndicatorLight {
    fn default() -> Self {
        Self {
            color: Color::new(255, 220, 120, 255),
            radius: 0.06,
        }
    }
}

/// Invisible sphere tested by the picking system.
#[derive(Component, Clone, Copy, Debug)]
pub struct PickProxy {
    pub radius: f32,
}
