//! Overlay reveal.
//!
//! [`RevealOverlay`] fades the named [`Overlay`] in over
//! [`OVERLAY_REVEAL_SECONDS`], starting from its current opacity.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::overlay::Overlay;
use crate::components::tween::TweenOpacity;

pub const OVERLAY_REVEAL_SECONDS: f32 = 3.0;

#[derive(Event, Debug, Clone)]
pub struct RevealOverlay {
    pub name: String,
}

pub fn reveal_overlay_observer(
    trigger: On<RevealOverlay>,
    overlays: Query<(Entity, &Overlay)>,
    mut commands: Commands,
) {
    let name = trigger.event().name.as_str();
    let mut revealed = false;
    for (entity, overlay) in overlays.iter().filter(|(_, o)| o.name == name) {
        commands.entity(entity).insert(TweenOpacity::new(
            overlay.opacity,
            1.0,
            OVERLAY_REVEAL_SECONDS,
        ));
        revealed = true;
    }
    if revealed {
        info!("Revealing overlay '{}'", name);
    } else {
        debug!("No overlay named '{}' to reveal", name);
    }
}
