//! Hotspot activation events and observers.
//!
//! [`HotspotPicked`] feeds the [`ActivationState`] machine. Depending on the
//! transition taken, the observer issues camera/target moves and announces
//! the change with [`HotspotActivated`] or [`HotspotDeactivated`].
//!
//! | state          | pick of `H` | new state   | orbit target          | camera                  |
//! |----------------|-------------|-------------|-----------------------|-------------------------|
//! | `Inactive`     | `H`         | `Active(H)` | `H.anchor + offset`   | `H.camera_destination`  |
//! | `Active(G)`    | `H`         | `Active(H)` | `H.anchor + offset`   | `H.camera_destination`  |
//! | `Active(H)`    | `H`         | `Inactive`  | origin                | default camera position |

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector3;

use crate::components::hotspot::Hotspot;
use crate::events::overlay::RevealOverlay;
use crate::events::transition::{MoveCamera, MoveTarget};
use crate::resources::activation::{ActivationChange, ActivationState};
use crate::resources::viewerconfig::ViewerConfig;

/// A hotspot was resolved from a pointer pick.
#[derive(Event, Debug, Clone, Copy)]
pub struct HotspotPicked {
    pub hotspot: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct HotspotActivated {
    pub hotspot: Entity,
    /// Hotspot that was active before, now implicitly off.
    pub previous: Option<Entity>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct HotspotDeactivated {
    pub hotspot: Entity,
}

pub fn hotspot_activation_observer(
    trigger: On<HotspotPicked>,
    mut state: ResMut<ActivationState>,
    config: Res<ViewerConfig>,
    hotspots: Query<&Hotspot>,
    mut commands: Commands,
) {
    let picked = trigger.event().hotspot;
    let Ok(hotspot) = hotspots.get(picked) else {
        warn!("Picked entity {:?} is not a hotspot", picked);
        return;
    };

    match state.apply_pick(picked) {
        ActivationChange::Activated { hotspot: e, previous } => {
            info!("Hotspot '{}' activated", hotspot.name);
            let anchor = hotspot.anchor;
            commands.trigger(MoveTarget {
                destination: Vector3::new(anchor.x, anchor.y + config.target_offset, anchor.z),
            });
            commands.trigger(MoveCamera {
                destination: hotspot.camera_destination,
            });
            commands.trigger(HotspotActivated {
                hotspot: e,
                previous,
            });
        }
        ActivationChange::Deactivated { hotspot: e } => {
            info!("Hotspot '{}' deactivated", hotspot.name);
            commands.trigger(MoveTarget {
                destination: Vector3::zero(),
            });
            commands.trigger(MoveCamera {
                destination: config.default_camera_position,
            });
            commands.trigger(HotspotDeactivated { hotspot: e });
        }
    }
}

/// Reveal the overlay a hotspot names, if any, when it becomes active.
pub fn reveal_on_activation_observer(
    trigger: On<HotspotActivated>,
    hotspots: Query<&Hotspot>,
    mut commands: Commands,
) {
    let Ok(hotspot) = hotspots.get(trigger.event().hotspot) else {
        return;
    };
    if let Some(name) = &hotspot.reveal_overlay {
        commands.trigger(RevealOverlay { name: name.clone() });
    }
}
