//! Raylib-backed rendering.
//!
//! [`RaylibRenderer`] is the production [`FrameRenderer`]: it uploads attached
//! models, poses them from their mixers, then draws the 3D pass, overlays and
//! the debug panel.
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::*;

use crate::components::animatedmodel::{AnimatedModel, MixerHandle};
use crate::components::camera::{CameraLens, MainCamera};
use crate::components::hotspot::{Hotspot, IndicatorLight, PickProxy};
use crate::components::meshshape::{MeshShape, ShapeKind};
use crate::components::overlay::Overlay;
use crate::components::transform3d::Transform3D;
use crate::frameloop::FrameRenderer;
use crate::resources::activation::ActivationState;
use crate::resources::debugmode::DebugMode;
use crate::resources::mixerset::MixerSet;
use crate::resources::modelstore::{LoadedModel, ModelStore};
use crate::resources::viewport::Viewport;
use crate::systems::input::{DragTracker, poll_input};

/// Owns the window, the GPU-side models and pointer tracking.
///
/// The raylib handle never enters the ECS world; systems talk to it only
/// through [`poll_input`] and [`FrameRenderer::render`].
pub struct RaylibRenderer {
    pub rl: RaylibHandle,
    pub thread: RaylibThread,
    pub models: ModelStore,
    pub drag: DragTracker,
}

impl RaylibRenderer {
    pub fn new(rl: RaylibHandle, thread: RaylibThread) -> Self {
        Self {
            rl,
            thread,
            models: ModelStore::new(),
            drag: DragTracker::default(),
        }
    }

    pub fn window_should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    pub fn poll_input(&mut self, world: &mut World) {
        poll_input(world, &self.rl, &mut self.drag);
    }
}

impl FrameRenderer for RaylibRenderer {
    fn render(&mut self, world: &mut World) {
        sync_models(world, &mut self.rl, &self.thread, &mut self.models);

        let camera = main_camera(world);
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::new(30, 30, 36, 255));
        if let Some(camera) = camera {
            let mut d3 = d.begin_mode3D(camera);
            render_pass(world, &mut d3, &self.models);
        }
        render_overlays(world, &mut d);
        render_debug_ui(world, &mut d);
    }
}

fn main_camera(world: &mut World) -> Option<Camera3D> {
    let mut q = world.query_filtered::<(&Transform3D, &CameraLens), With<MainCamera>>();
    let (transform, lens) = q.single(world).ok()?;
    Some(Camera3D::perspective(
        transform.translation,
        lens.look_at,
        lens.up,
        lens.fovy,
    ))
}

/// Upload newly attached models to the GPU and pose them from their mixers.
///
/// Clip `i` of a mixer drives raylib animation `i` of the same file. When
/// several clips touch the same bones the later one wins.
pub fn sync_models(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    store: &mut ModelStore,
) {
    let attached: Vec<(String, Option<MixerHandle>)> = {
        let mut q = world.query::<(&AnimatedModel, Option<&MixerHandle>)>();
        q.iter(world)
            .map(|(m, h)| (m.source_url.clone(), h.copied()))
            .collect()
    };

    for url in store.evict_unused(attached.iter().map(|(url, _)| url.as_str())) {
        debug!("Released {}", url);
    }

    for (url, _) in attached.iter() {
        if store.map.contains_key(url) || store.failed.contains(url) {
            continue;
        }
        match rl.load_model(thread, url) {
            Ok(model) => {
                let animations = rl.load_model_animations(thread, url).unwrap_or_default();
                debug!("Uploaded {} ({} animations)", url, animations.len());
                store.map.insert(url.clone(), LoadedModel { model, animations });
            }
            Err(e) => {
                warn!("Renderer could not load {}: {}", url, e);
                store.failed.insert(url.clone());
            }
        }
    }

    let mixers = world.resource::<MixerSet>();
    for (url, handle) in attached.iter() {
        let Some(MixerHandle(key)) = handle else {
            continue;
        };
        let (Some(mixer), Some(loaded)) = (mixers.get(*key), store.map.get_mut(url)) else {
            continue;
        };
        for (action, anim) in mixer.actions().iter().zip(loaded.animations.iter()) {
            let duration = action.clip().duration;
            let frames = anim.frameCount.max(1);
            let frame = if duration > 0.0 {
                ((action.time / duration) * frames as f32) as i32
            } else {
                0
            };
            rl.update_model_animation(thread, &mut loaded.model, anim, frame.clamp(0, frames - 1));
        }
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Draw the 3D scene: grid, decorative meshes, models and hotspot indicators.
pub fn render_pass(
    world: &mut World,
    d3: &mut RaylibMode3D<RaylibDrawHandle>,
    models: &ModelStore,
) {
    d3.draw_grid(20, 0.5);

    let mut meshes = world.query::<(&MeshShape, &Transform3D)>();
    for (mesh, transform) in meshes.iter(world) {
        let t = transform.translation;
        let r = transform.rotation;
        // SAFETY: balanced push/pop inside an active 3D mode.
        unsafe {
            raylib::ffi::rlPushMatrix();
            raylib::ffi::rlTranslatef(t.x, t.y, t.z);
            raylib::ffi::rlRotatef(r.z.to_degrees(), 0.0, 0.0, 1.0);
            raylib::ffi::rlRotatef(r.y.to_degrees(), 0.0, 1.0, 0.0);
            raylib::ffi::rlRotatef(r.x.to_degrees(), 1.0, 0.0, 0.0);
            raylib::ffi::rlScalef(transform.scale.x, transform.scale.y, transform.scale.z);
        }
        let origin = Vector3::zero();
        match (mesh.kind, mesh.wireframe) {
            (ShapeKind::Cube { size }, false) => d3.draw_cube(origin, size, size, size, mesh.color),
            (ShapeKind::Cube { size }, true) => {
                d3.draw_cube_wires(origin, size, size, size, mesh.color)
            }
            (ShapeKind::Sphere { radius }, false) => d3.draw_sphere(origin, radius, mesh.color),
            (ShapeKind::Sphere { radius }, true) => {
                d3.draw_sphere_wires(origin, radius, 12, 12, mesh.color)
            }
        }
        unsafe {
            raylib::ffi::rlPopMatrix();
        }
    }

    let mut animated = world.query::<(&AnimatedModel, &Transform3D)>();
    for (model, transform) in animated.iter(world) {
        if let Some(loaded) = models.map.get(&model.source_url) {
            d3.draw_model_ex(
                &loaded.model,
                transform.translation,
                Vector3::new(0.0, 1.0, 0.0),
                0.0,
                transform.scale,
                Color::WHITE,
            );
        }
    }

    let activation = *world.resource::<ActivationState>();
    let mut lights = world.query::<(Entity, &IndicatorLight, &Transform3D)>();
    for (entity, light, transform) in lights.iter(world) {
        let intensity = activation.indicator_intensity(entity);
        if intensity > 0.0 {
            d3.draw_sphere(
                transform.translation,
                light.radius,
                with_alpha(light.color, intensity),
            );
        } else {
            d3.draw_sphere_wires(
                transform.translation,
                light.radius,
                6,
                6,
                with_alpha(light.color, 0.35),
            );
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut proxies = world.query::<(&PickProxy, &Transform3D, &ChildOf)>();
        let mut parents = world.query::<&Transform3D>();
        for (proxy, local, child_of) in proxies.iter(world) {
            if let Ok(parent) = parents.get(world, child_of.parent()) {
                d3.draw_sphere_wires(
                    parent.translation + local.translation,
                    proxy.radius,
                    8,
                    8,
                    Color::RED,
                );
            }
        }
    }
}

/// Draw visible overlays stacked from the bottom-left corner.
pub fn render_overlays(world: &mut World, d: &mut RaylibDrawHandle) {
    let viewport = *world.resource::<Viewport>();
    let mut y = viewport.h - 40;
    let mut overlays = world.query::<&Overlay>();
    for overlay in overlays.iter(world) {
        if overlay.opacity <= 0.0 {
            continue;
        }
        d.draw_text(
            &overlay.text,
            20,
            y,
            20,
            with_alpha(Color::RAYWHITE, overlay.opacity),
        );
        y -= 28;
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }

    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps());
    d.draw_text(&text, 10, 10, 10, Color::LIGHTGRAY);

    let active = world
        .resource::<ActivationState>()
        .active()
        .and_then(|e| world.get::<Hotspot>(e))
        .map(|h| h.name.clone())
        .unwrap_or_else(|| "none".to_string());
    d.draw_text(&format!("Active hotspot: {}", active), 10, 30, 10, Color::LIGHTGRAY);

    let mixers = world.resource::<MixerSet>();
    let (advances, seconds) = mixers
        .iter()
        .map(|(_, m)| (m.advance_count, m.elapsed))
        .max_by_key(|(count, _)| *count)
        .unwrap_or((0, 0.0));
    let mixer_text = format!(
        "Mixers: {} | most advanced: {} frames, {:.2}s",
        mixers.len(),
        advances,
        seconds
    );
    d.draw_text(&mixer_text, 10, 50, 10, Color::LIGHTGRAY);

    let mut cameras = world.query_filtered::<(&Transform3D, &CameraLens), With<MainCamera>>();
    if let Ok((transform, lens)) = cameras.single(world) {
        let p = transform.translation;
        let l = lens.look_at;
        let cam_text = format!(
            "Camera: ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2})",
            p.x, p.y, p.z, l.x, l.y, l.z
        );
        d.draw_text(&cam_text, 10, 70, 10, Color::LIGHTGRAY);
    }
}
