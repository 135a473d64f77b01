//! Pointer click handling.
//!
//! A [`PointerClick`] carries window-relative pixel coordinates. The observer
//! casts a ray from the main camera through that pixel, intersects it with
//! every proxy in the [`PickSet`], and forwards the nearest hit's owning
//! hotspot as a [`HotspotPicked`]. A click that hits nothing does nothing.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::camera::{CameraLens, MainCamera};
use crate::components::hotspot::PickProxy;
use crate::components::transform3d::Transform3D;
use crate::events::hotspot::HotspotPicked;
use crate::resources::hotspotregistry::PickSet;
use crate::resources::viewport::Viewport;
use crate::systems::picking::{PickCandidate, pick_nearest, screen_ray};

#[derive(Event, Debug, Clone, Copy)]
pub struct PointerClick {
    pub x: f32,
    pub y: f32,
}

pub fn pointer_click_observer(
    trigger: On<PointerClick>,
    viewport: Res<Viewport>,
    pick_set: Res<PickSet>,
    camera: Query<(&Transform3D, &CameraLens), With<MainCamera>>,
    proxies: Query<(&PickProxy, &Transform3D, &ChildOf)>,
    parents: Query<&Transform3D>,
    mut commands: Commands,
) {
    let click = trigger.event();
    let Ok((camera_transform, lens)) = camera.single() else {
        return;
    };
    let ray = screen_ray(
        Vector2 {
            x: click.x,
            y: click.y,
        },
        &viewport,
        camera_transform.translation,
        lens,
    );

    let candidates = pick_set.proxies.iter().filter_map(|&proxy| {
        let (pick, local, child_of) = proxies.get(proxy).ok()?;
        let hotspot = child_of.parent();
        let parent = parents.get(hotspot).ok()?;
        Some(PickCandidate {
            proxy,
            hotspot,
            center: parent.translation + local.translation,
            radius: pick.radius,
        })
    });

    match pick_nearest(&ray, candidates) {
        Some(hit) => {
            debug!(
                "Pick at ({:.0}, {:.0}) hit {:?} at distance {:.3}",
                click.x, click.y, hit.hotspot, hit.distance
            );
            commands.trigger(HotspotPicked {
                hotspot: hit.hotspot,
            });
        }
        None => debug!("Pick at ({:.0}, {:.0}) hit nothing", click.x, click.y),
    }
}
