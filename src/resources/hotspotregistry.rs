//! Hotspot registry and the shared pick set.
//!
//! [`register_hotspot`] is the only way hotspots enter the scene. It spawns the
//! hotspot entity, parents a [`PickProxy`] under it, and records both in the
//! ordered [`HotspotRegistry`] and the [`PickSet`] searched by picking.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::components::hotspot::{Hotspot, IndicatorLight, PickProxy};
use crate::components::transform3d::Transform3D;
use crate::resources::scenedesc::{HotspotDescriptor, to_vector3};

/// Hotspot entities in registration order.
#[derive(Resource, Default, Debug)]
pub struct HotspotRegistry {
    order: Vec<Entity>,
    by_name: FxHashMap<String, Entity>,
}

impl HotspotRegistry {
    /// Record a hotspot. Returns `false` if the name was already taken; the
    /// hotspot is recorded anyway and name lookups keep the first one.
    pub fn insert(&mut self, name: &str, hotspot: Entity) -> bool {
        self.order.push(hotspot);
        if self.by_name.contains_key(name) {
            return false;
        }
        self.by_name.insert(name.to_string(), hotspot);
        true
    }

    /// First hotspot registered under `name`.
    pub fn find(&self, name: &str) -> Option<Entity> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Proxy entities searched by the picking system.
#[derive(Resource, Default, Debug)]
pub struct PickSet {
    pub proxies: Vec<Entity>,
}

/// Spawn a hotspot and its pick proxy. Returns the hotspot entity.
///
/// Duplicate names are accepted with a warning. Exclusivity still holds
/// because activation is keyed by entity, not by name.
pub fn register_hotspot(
    world: &mut World,
    descriptor: &HotspotDescriptor,
    proxy_radius: f32,
) -> Entity {
    let anchor = to_vector3(descriptor.anchor);
    let hotspot = world
        .spawn((
            Hotspot {
                name: descriptor.name.clone(),
                anchor,
                camera_destination: to_vector3(descriptor.camera_destination),
                camera_orientation: descriptor.camera_orientation.map(to_vector3),
                reveal_overlay: descriptor.reveal_overlay.clone(),
            },
            IndicatorLight::default(),
            Transform3D::from_translation(anchor),
        ))
        .id();

    let proxy = world
        .spawn((
            PickProxy {
                radius: proxy_radius,
            },
            Transform3D::default(),
            ChildOf(hotspot),
        ))
        .id();

    world.get_resource_or_insert_with(PickSet::default).proxies.push(proxy);
    let unique = world
        .get_resource_or_insert_with(HotspotRegistry::default)
        .insert(&descriptor.name, hotspot);
    if !unique {
        warn!(
            "Hotspot name '{}' is already registered; lookups by name keep the first one",
            descriptor.name
        );
    }
    info!(
        "Registered hotspot '{}' at ({:.3}, {:.3}, {:.3})",
        descriptor.name, anchor.x, anchor.y, anchor.z
    );
    hotspot
}
