//! Frame loop tests: ordering, mixers, spin, transitions and model lifecycle.
//!
//! Frames are driven with a [`FixedClock`] and a renderer that only records
//! what it saw, so no window is needed.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use hotspot_viewer::components::animatedmodel::{AnimatedModel, MixerHandle};
use hotspot_viewer::components::camera::{CameraLens, MainCamera, OrbitTarget};
use hotspot_viewer::components::meshshape::MeshShape;
use hotspot_viewer::components::transform3d::Transform3D;
use hotspot_viewer::components::tween::TweenTranslation;
use hotspot_viewer::events::assets::AssetMessage;
use hotspot_viewer::events::hotspot::HotspotPicked;
use hotspot_viewer::events::model::UnloadModel;
use hotspot_viewer::frameloop::{FixedClock, FrameLoop, FrameRenderer};
use hotspot_viewer::game::{build_update_schedule, build_world};
use hotspot_viewer::resources::hotspotregistry::HotspotRegistry;
use hotspot_viewer::resources::mixerset::{AnimationMixer, ClipInfo, MixerSet};
use hotspot_viewer::resources::scenedesc::SceneDescription;
use hotspot_viewer::resources::viewerconfig::ViewerConfig;
use hotspot_viewer::resources::worldtime::WorldTime;

const EPSILON: f32 = 1e-4;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Records the frame counter seen at each render call.
#[derive(Default)]
struct RecordingRenderer {
    frames: Arc<Mutex<Vec<u64>>>,
}

impl FrameRenderer for RecordingRenderer {
    fn render(&mut self, world: &mut World) {
        let frame = world.resource::<WorldTime>().frame_count;
        self.frames.lock().unwrap().push(frame);
    }
}

fn demo_world() -> World {
    let mut scene = SceneDescription::default_scene();
    scene.models.clear();
    build_world(ViewerConfig::new(), &scene)
}

fn run(world: &mut World, frames: usize, dt: f32) -> RecordingRenderer {
    let mut frame_loop = FrameLoop::new(build_update_schedule());
    let mut clock = FixedClock::new(dt);
    let mut renderer = RecordingRenderer::default();
    for _ in 0..frames {
        frame_loop.run_frame(world, &mut clock, &mut renderer);
    }
    assert_eq!(frame_loop.frames(), frames as u64);
    renderer
}

fn camera_position(world: &mut World) -> Vector3 {
    let mut q = world.query_filtered::<&Transform3D, With<MainCamera>>();
    q.single(world).unwrap().translation
}

fn target_position(world: &mut World) -> Vector3 {
    let mut q = world.query_filtered::<&Transform3D, With<OrbitTarget>>();
    q.single(world).unwrap().translation
}

fn look_at(world: &mut World) -> Vector3 {
    let mut q = world.query_filtered::<&CameraLens, With<MainCamera>>();
    q.single(world).unwrap().look_at
}

fn pick(world: &mut World, name: &str) {
    let hotspot = world.resource::<HotspotRegistry>().find(name).unwrap();
    world.trigger(HotspotPicked { hotspot });
}

// =============================================================================
// Loop ordering
// =============================================================================

#[test]
fn renderer_runs_once_per_frame_after_time_update() {
    let mut world = demo_world();
    let renderer = run(&mut world, 5, DT);
    assert_eq!(*renderer.frames.lock().unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn renderer_runs_even_with_an_empty_world() {
    let mut world = build_world(ViewerConfig::new(), &SceneDescription::default());
    let renderer = run(&mut world, 3, 0.0);
    assert_eq!(renderer.frames.lock().unwrap().len(), 3);
}

#[test]
fn negative_clock_is_clamped() {
    let mut world = demo_world();
    run(&mut world, 2, -0.5);
    let wt = world.resource::<WorldTime>();
    assert_eq!(wt.delta, 0.0);
    assert_eq!(wt.elapsed, 0.0);
}

// =============================================================================
// Mixers
// =============================================================================

#[test]
fn every_mixer_advances_exactly_once_per_frame() {
    let mut world = demo_world();
    let clip = ClipInfo {
        name: "open".into(),
        duration: 1.0,
    };
    let keys = {
        let mut mixers = world.resource_mut::<MixerSet>();
        [
            mixers.insert(AnimationMixer::playing_all(std::slice::from_ref(&clip))),
            mixers.insert(AnimationMixer::new()),
        ]
    };

    run(&mut world, 10, DT);

    let mixers = world.resource::<MixerSet>();
    for key in keys {
        let mixer = mixers.get(key).unwrap();
        assert_eq!(mixer.advance_count, 10);
        assert!(approx_eq(mixer.elapsed, 10.0 * DT));
    }
}

#[test]
fn mixers_never_receive_negative_delta() {
    let mut world = demo_world();
    let key = world
        .resource_mut::<MixerSet>()
        .insert(AnimationMixer::new());
    run(&mut world, 3, -1.0);
    let mixer = world.resource::<MixerSet>().get(key).unwrap().clone();
    assert_eq!(mixer.advance_count, 3);
    assert_eq!(mixer.elapsed, 0.0);
}

// =============================================================================
// Spin
// =============================================================================

#[test]
fn meshes_spin_by_fixed_step_regardless_of_delta() {
    let mut world = demo_world();
    run(&mut world, 5, 0.5);
    let mut q = world.query::<(&MeshShape, &Transform3D)>();
    let rows: Vec<_> = q.iter(&world).collect();
    assert_eq!(rows.len(), 2);
    for (_, transform) in rows {
        assert!(approx_eq(transform.rotation.x, 0.05));
        assert!(approx_eq(transform.rotation.y, 0.0));
        assert!(approx_eq(transform.rotation.z, 0.05));
    }
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn transition_lands_exactly_after_two_seconds() {
    let mut world = demo_world();
    pick(&mut world, "tagLatches");

    run(&mut world, 130, DT);

    let cam = camera_position(&mut world);
    assert_eq!((cam.x, cam.y, cam.z), (2.354, 1.927, -1.717));
    let target = target_position(&mut world);
    assert_eq!((target.x, target.y, target.z), (1.108, 1.443 - 1.0, -0.916));
    let look = look_at(&mut world);
    assert_eq!((look.x, look.y, look.z), (target.x, target.y, target.z));
}

#[test]
fn transition_is_halfway_at_one_second() {
    let mut world = demo_world();
    pick(&mut world, "tagLatches");

    run(&mut world, 4, 0.25);

    // symmetric ease-in-out: exactly half the distance at half the duration
    let cam = camera_position(&mut world);
    assert!(approx_eq(cam.x, 2.354 / 2.0));
    assert!(approx_eq(cam.z, (5.0 - 1.717) / 2.0));
}

#[test]
fn camera_tracks_moving_target_every_frame() {
    let mut world = demo_world();
    pick(&mut world, "tagTop");

    for _ in 0..6 {
        run(&mut world, 5, DT);
        let target = target_position(&mut world);
        let look = look_at(&mut world);
        assert!(approx_eq(look.x, target.x));
        assert!(approx_eq(look.y, target.y));
        assert!(approx_eq(look.z, target.z));
    }
    assert!(!approx_eq(target_position(&mut world).x, 0.0));
}

#[test]
fn redirect_starts_from_current_position_without_snap() {
    let mut world = demo_world();
    pick(&mut world, "tagLatches");
    run(&mut world, 30, DT);
    let mid = camera_position(&mut world);

    pick(&mut world, "tagTop");
    {
        let mut q = world.query_filtered::<&TweenTranslation, With<MainCamera>>();
        let tw = q.single(&world).unwrap();
        assert_eq!((tw.from.x, tw.from.y, tw.from.z), (mid.x, mid.y, mid.z));
        assert!(approx_eq(tw.to.x, 1.747));
    }

    run(&mut world, 1, DT);
    let next = camera_position(&mut world);
    let jump = ((next.x - mid.x).powi(2) + (next.y - mid.y).powi(2) + (next.z - mid.z).powi(2)).sqrt();
    assert!(jump < 1e-3, "camera jumped {jump}");
}

#[test]
fn deactivation_flies_back_to_rest() {
    let mut world = demo_world();
    pick(&mut world, "tagLatches");
    run(&mut world, 60, DT);
    pick(&mut world, "tagLatches");
    run(&mut world, 130, DT);

    let cam = camera_position(&mut world);
    assert_eq!((cam.x, cam.y, cam.z), (0.0, 0.0, 5.0));
    let target = target_position(&mut world);
    assert_eq!((target.x, target.y, target.z), (0.0, 0.0, 0.0));
}

// =============================================================================
// Model lifecycle
// =============================================================================

#[test]
fn loaded_model_is_attached_then_unloaded() {
    let mut world = demo_world();
    world.init_resource::<Messages<AssetMessage>>();
    world.write_message(AssetMessage::ModelLoaded {
        name: "mag".into(),
        url: "assets/AKmag.glb".into(),
        scale: Vector3::new(0.1, 0.1, 0.1),
        clips: vec![ClipInfo {
            name: "open".into(),
            duration: 2.0,
        }],
    });

    run(&mut world, 3, DT);

    let (entity, key) = {
        let mut q = world.query::<(Entity, &AnimatedModel, &MixerHandle)>();
        let (entity, model, handle) = q.single(&world).unwrap();
        assert_eq!(model.name, "mag");
        (entity, handle.0)
    };
    {
        let mixers = world.resource::<MixerSet>();
        assert_eq!(mixers.len(), 1);
        let mixer = mixers.get(key).unwrap();
        // attached and advanced in the first frame
        assert_eq!(mixer.advance_count, 3);
        assert!(approx_eq(mixer.actions()[0].time, 3.0 * DT));
    }

    world.trigger(UnloadModel { entity });

    assert!(world.resource::<MixerSet>().is_empty());
    assert!(world.get_entity(entity).is_err());
    run(&mut world, 2, DT);
    assert!(world.resource::<MixerSet>().is_empty());
}

#[test]
fn failed_load_leaves_no_model() {
    let mut world = demo_world();
    world.init_resource::<Messages<AssetMessage>>();
    world.write_message(AssetMessage::ModelLoadFailed {
        name: "mag".into(),
        error: "file not found".into(),
    });

    run(&mut world, 2, DT);

    let mut q = world.query::<&AnimatedModel>();
    assert_eq!(q.iter(&world).count(), 0);
    assert!(world.resource::<MixerSet>().is_empty());
}
