//! Camera and orbit-target transitions.
//!
//! [`MoveTarget`] and [`MoveCamera`] start a [`TweenTranslation`] on the
//! orbit-target or camera entity. The tween always starts from the entity's
//! current translation, so a transition issued while another is still running
//! redirects it without a jump.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector3;

use crate::components::camera::{MainCamera, OrbitTarget};
use crate::components::transform3d::Transform3D;
use crate::components::tween::{Easing, TweenTranslation};
use crate::resources::viewerconfig::ViewerConfig;

/// Easing shared by all fly-to transitions.
pub const TRANSITION_EASING: Easing = Easing::QuartInOut;

/// Move the orbit target to `destination`.
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveTarget {
    pub destination: Vector3,
}

/// Move the camera to `destination`.
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveCamera {
    pub destination: Vector3,
}

fn start_transition(
    commands: &mut Commands,
    entity: Entity,
    from: Vector3,
    to: Vector3,
    duration: f32,
) {
    commands
        .entity(entity)
        .insert(TweenTranslation::new(from, to, duration).with_easing(TRANSITION_EASING));
}

pub fn move_target_observer(
    trigger: On<MoveTarget>,
    config: Res<ViewerConfig>,
    targets: Query<(Entity, &Transform3D), With<OrbitTarget>>,
    mut commands: Commands,
) {
    let to = trigger.event().destination;
    for (entity, transform) in targets.iter() {
        debug!(
            "Orbit target -> ({:.3}, {:.3}, {:.3}) over {}s",
            to.x, to.y, to.z, config.transition_duration
        );
        start_transition(
            &mut commands,
            entity,
            transform.translation,
            to,
            config.transition_duration,
        );
    }
}

pub fn move_camera_observer(
    trigger: On<MoveCamera>,
    config: Res<ViewerConfig>,
    cameras: Query<(Entity, &Transform3D), With<MainCamera>>,
    mut commands: Commands,
) {
    let to = trigger.event().destination;
    for (entity, transform) in cameras.iter() {
        debug!(
            "Camera -> ({:.3}, {:.3}, {:.3}) over {}s",
            to.x, to.y, to.z, config.transition_duration
        );
        start_transition(
            &mut commands,
            entity,
            transform.translation,
            to,
            config.transition_duration,
        );
    }
}
