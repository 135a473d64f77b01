//! Scene setup and schedule wiring.
//!
//! [`build_world`] is the single entry point used by the binary and the
//! integration tests: it inserts the resources, registers every observer and
//! spawns the scene described by a [`SceneDescription`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::common_conditions::resource_exists;
use log::{info, warn};
use raylib::prelude::Color;

use crate::components::camera::{CameraLens, MainCamera, OrbitTarget};
use crate::components::meshshape::{MeshShape, ShapeKind};
use crate::components::overlay::Overlay;
use crate::components::spin::Spin;
use crate::components::transform3d::Transform3D;
use crate::events::assets::{AssetCmd, AssetMessage};
use crate::events::hotspot::{hotspot_activation_observer, reveal_on_activation_observer};
use crate::events::model::unload_model_observer;
use crate::events::overlay::reveal_overlay_observer;
use crate::events::pointer::pointer_click_observer;
use crate::events::resize::window_resized_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::transition::{move_camera_observer, move_target_observer};
use crate::resources::activation::ActivationState;
use crate::resources::assetloader::AssetBridge;
use crate::resources::hotspotregistry::{HotspotRegistry, PickSet, register_hotspot};
use crate::resources::mixerset::MixerSet;
use crate::resources::orbitcontrols::OrbitControls;
use crate::resources::scenedesc::{SceneDescription, ShapeDescriptor, to_vector3};
use crate::resources::viewerconfig::ViewerConfig;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;
use crate::systems::assets::{
    attach_loaded_models, forward_asset_cmds, poll_asset_messages, update_asset_cmds,
    update_asset_messages,
};
use crate::systems::mixer::advance_mixers;
use crate::systems::orbit::{follow_orbit_target, orbit_controls_system};
use crate::systems::spin::spin_system;
use crate::systems::tween::{tween_opacity_system, tween_translation_system};

/// Insert every resource the systems and observers expect.
pub fn init_resources(world: &mut World, config: ViewerConfig) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(Viewport {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(ActivationState::default());
    world.insert_resource(MixerSet::new());
    world.insert_resource(OrbitControls::default());
    world.insert_resource(HotspotRegistry::default());
    world.insert_resource(PickSet::default());
    world.insert_resource(config);
}

pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(pointer_click_observer));
    world.spawn(Observer::new(hotspot_activation_observer));
    world.spawn(Observer::new(reveal_on_activation_observer));
    world.spawn(Observer::new(move_target_observer));
    world.spawn(Observer::new(move_camera_observer));
    world.spawn(Observer::new(reveal_overlay_observer));
    world.spawn(Observer::new(unload_model_observer));
    world.spawn(Observer::new(window_resized_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

fn color_from(rgb: [u8; 3]) -> Color {
    Color::new(rgb[0], rgb[1], rgb[2], 255)
}

/// Spawn camera, orbit target, meshes, overlays and hotspots, and queue the
/// model loads.
pub fn setup_scene(world: &mut World, scene: &SceneDescription) {
    let config = world.resource::<ViewerConfig>().clone();

    world.spawn((
        MainCamera,
        Transform3D::from_translation(config.default_camera_position),
        CameraLens::new(config.fovy),
    ));
    world.spawn((OrbitTarget, Transform3D::default()));

    for mesh in &scene.meshes {
        let kind = match mesh.shape {
            ShapeDescriptor::Cube { size } => ShapeKind::Cube { size },
            ShapeDescriptor::Sphere { radius } => ShapeKind::Sphere { radius },
        };
        let mut entity = world.spawn((
            MeshShape {
                name: mesh.name.clone(),
                kind,
                color: color_from(mesh.color),
                wireframe: mesh.wireframe,
            },
            Transform3D::from_translation(to_vector3(mesh.position)),
        ));
        if mesh.spin != [0.0, 0.0, 0.0] {
            entity.insert(Spin::new(mesh.spin[0], mesh.spin[1], mesh.spin[2]));
        }
    }

    for overlay in &scene.overlays {
        world.spawn(Overlay::new(overlay.name.clone(), overlay.text.clone()));
    }

    for hotspot in &scene.hotspots {
        register_hotspot(world, hotspot, config.proxy_radius);
    }

    if world.contains_resource::<Messages<AssetCmd>>() {
        for model in &scene.models {
            world.write_message(AssetCmd::LoadModel {
                name: model.name.clone(),
                url: model.url.clone(),
                scale: to_vector3(model.scale),
            });
        }
    } else if !scene.models.is_empty() {
        warn!(
            "No asset loader running; {} model(s) will not be loaded",
            scene.models.len()
        );
    }

    world.flush();
    info!(
        "Scene ready: {} hotspot(s), {} mesh(es), {} overlay(s), {} model(s) requested",
        scene.hotspots.len(),
        scene.meshes.len(),
        scene.overlays.len(),
        scene.models.len()
    );
}

/// Resources, observers and scene in one go.
pub fn build_world(config: ViewerConfig, scene: &SceneDescription) -> World {
    let mut world = World::new();
    init_resources(&mut world, config);
    register_observers(&mut world);
    setup_scene(&mut world, scene);
    world
}

/// Per-frame update schedule.
///
/// Order: spin meshes, advance mixers, advance tweens, follow the orbit target
/// and apply orbit controls. Loader bridge systems only run when a loader is
/// set up.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            spin_system,
            advance_mixers,
            tween_translation_system,
            tween_opacity_system,
            follow_orbit_target,
            orbit_controls_system,
        )
            .chain(),
    );
    update.add_systems(
        // loader bridge systems must be together
        (update_asset_cmds, forward_asset_cmds, poll_asset_messages)
            .chain()
            .run_if(resource_exists::<AssetBridge>),
    );
    update.add_systems(
        (update_asset_messages, attach_loaded_models)
            .chain()
            .run_if(resource_exists::<Messages<AssetMessage>>)
            .after(poll_asset_messages)
            .before(advance_mixers),
    );
    update
}
