//! Tween animation systems.
//!
//! These systems update entity properties over time based on tween components:
//! - [`tween_translation_system`] – animates [`Transform3D::translation`](crate::components::transform3d::Transform3D)
//! - [`tween_opacity_system`] – animates [`Overlay::opacity`](crate::components::overlay::Overlay)
//!
//! Tweens are one-shot: time only moves forward, is clamped to the duration,
//! and the tween stops on its end value. The systems read delta time from
//! [`WorldTime`](crate::resources::worldtime::WorldTime). A tween with a
//! non-positive duration jumps straight to its end value.

use crate::components::overlay::Overlay;
use crate::components::transform3d::Transform3D;
use crate::components::tween::{Easing, TweenOpacity, TweenTranslation};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector3;

/// Apply an easing function to a normalized time value clamped to [0, 1].
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuartInOut => {
            if t < 0.5 {
                8.0 * t * t * t * t
            } else {
                let p = -2.0 * t + 2.0;
                1.0 - p * p * p * p / 2.0
            }
        }
    }
}

pub(crate) fn lerp_v3(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    Vector3 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Step a one-shot tween clock and return the eased progress in [0, 1].
///
/// `None` means the tween already finished and the property must be left alone.
fn step(time: &mut f32, duration: f32, playing: &mut bool, easing: Easing, dt: f32) -> Option<f32> {
    if !*playing {
        return None;
    }
    if duration <= 0.0 {
        *playing = false;
        *time = 0.0;
        return Some(1.0);
    }
    *time = (*time + dt).min(duration);
    if *time >= duration {
        *playing = false;
        return Some(1.0);
    }
    Some(ease(easing, *time / duration))
}

/// Animate entity translations based on [`TweenTranslation`] components.
pub fn tween_translation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Transform3D, &mut TweenTranslation)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut transform, mut tw) in query.iter_mut() {
        let tw = &mut *tw;
        let Some(progress) = step(&mut tw.time, tw.duration, &mut tw.playing, tw.easing, dt) else {
            continue;
        };
        // land exactly on the end point
        transform.translation = if progress >= 1.0 {
            tw.to
        } else {
            lerp_v3(tw.from, tw.to, progress)
        };
    }
}

/// Animate overlay opacity based on [`TweenOpacity`] components.
pub fn tween_opacity_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Overlay, &mut TweenOpacity)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut overlay, mut tw) in query.iter_mut() {
        let tw = &mut *tw;
        let Some(progress) = step(&mut tw.time, tw.duration, &mut tw.playing, tw.easing, dt) else {
            continue;
        };
        overlay.opacity = lerp_f32(tw.from, tw.to, progress).clamp(0.0, 1.0);
    }
}
