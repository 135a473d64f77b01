//! Orbit controls.
//!
//! [`follow_orbit_target`] mirrors the orbit-target entity's position into
//! [`OrbitControls`] and asks for an update whenever it moves, which is every
//! frame of a target transition. [`orbit_controls_system`] then applies any
//! queued drag/zoom and re-aims the camera at the target.

use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::Vector3;

use crate::components::camera::{CameraLens, MainCamera, OrbitTarget};
use crate::components::transform3d::Transform3D;
use crate::resources::orbitcontrols::OrbitControls;
use crate::resources::viewport::Viewport;

const MIN_POLAR: f32 = 1e-3;

pub fn follow_orbit_target(
    targets: Query<&Transform3D, (With<OrbitTarget>, Changed<Transform3D>)>,
    mut controls: ResMut<OrbitControls>,
) {
    for transform in targets.iter() {
        controls.target = transform.translation;
        controls.request_update();
    }
}

pub fn orbit_controls_system(
    mut controls: ResMut<OrbitControls>,
    viewport: Res<Viewport>,
    mut camera: Query<(&mut Transform3D, &mut CameraLens), With<MainCamera>>,
) {
    let Some((rotate, zoom)) = controls.take_pending() else {
        return;
    };
    let Ok((mut transform, mut lens)) = camera.single_mut() else {
        return;
    };
    let target = controls.target;

    if rotate.x != 0.0 || rotate.y != 0.0 || zoom != 0.0 {
        let offset = transform.translation - target;
        let mut radius = offset.length();
        if radius <= f32::EPSILON {
            radius = controls.min_distance;
        }
        // polar angle measured from +Y, azimuth around Y from +Z
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let mut azimuth = offset.x.atan2(offset.z);

        let h = viewport.h.max(1) as f32;
        azimuth -= std::f32::consts::TAU * rotate.x / h * controls.rotate_speed;
        polar -= std::f32::consts::TAU * rotate.y / h * controls.rotate_speed;
        polar = polar.clamp(MIN_POLAR, std::f32::consts::PI - MIN_POLAR);

        radius *= (1.0 - controls.zoom_speed).powf(zoom);
        radius = radius.clamp(controls.min_distance, controls.max_distance);

        let sin_polar = polar.sin();
        transform.translation = target
            + Vector3::new(
                radius * sin_polar * azimuth.sin(),
                radius * polar.cos(),
                radius * sin_polar * azimuth.cos(),
            );
        trace!("Orbit radius {:.3}", radius);
    }

    lens.look_at = target;
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn setup() -> (World, Entity, Entity, Schedule) {
        let mut world = World::new();
        world.insert_resource(OrbitControls::default());
        world.insert_resource(Viewport { w: 800, h: 600 });
        let camera = world
            .spawn((
                MainCamera,
                Transform3D::from_translation(Vector3::new(0.0, 0.0, 5.0)),
                CameraLens::new(75.0),
            ))
            .id();
        let target = world
            .spawn((OrbitTarget, Transform3D::default()))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems((follow_orbit_target, orbit_controls_system).chain());
        (world, camera, target, schedule)
    }

    #[test]
    fn moving_target_reaims_camera_without_moving_it() {
        let (mut world, camera, target, mut schedule) = setup();
        schedule.run(&mut world);

        world.get_mut::<Transform3D>(target).unwrap().translation = Vector3::new(1.0, 0.5, 0.0);
        schedule.run(&mut world);

        let lens = world.get::<CameraLens>(camera).unwrap();
        assert!(approx_eq(lens.look_at.x, 1.0));
        assert!(approx_eq(lens.look_at.y, 0.5));
        let pos = world.get::<Transform3D>(camera).unwrap().translation;
        assert!(approx_eq(pos.z, 5.0));
    }

    #[test]
    fn zoom_moves_camera_closer_and_keeps_limits() {
        let (mut world, camera, _, mut schedule) = setup();
        world.resource_mut::<OrbitControls>().push_zoom(1.0);
        schedule.run(&mut world);
        let pos = world.get::<Transform3D>(camera).unwrap().translation;
        assert!(approx_eq(pos.length(), 4.75));

        world.resource_mut::<OrbitControls>().push_zoom(1000.0);
        schedule.run(&mut world);
        let pos = world.get::<Transform3D>(camera).unwrap().translation;
        assert!(approx_eq(pos.length(), 0.5));
    }

    #[test]
    fn horizontal_drag_keeps_distance() {
        let (mut world, camera, _, mut schedule) = setup();
        world
            .resource_mut::<OrbitControls>()
            .push_rotate(Vector2 { x: 150.0, y: 0.0 });
        schedule.run(&mut world);
        let pos = world.get::<Transform3D>(camera).unwrap().translation;
        assert!(approx_eq(pos.length(), 5.0));
        assert!(approx_eq(pos.y, 0.0));
        assert!(pos.x.abs() > 0.1);
    }

    #[test]
    fn idle_controls_do_nothing() {
        let (mut world, camera, _, mut schedule) = setup();
        schedule.run(&mut world);
        world.get_mut::<CameraLens>(camera).unwrap().look_at = Vector3::new(9.0, 9.0, 9.0);
        schedule.run(&mut world);
        assert!(approx_eq(
            world.get::<CameraLens>(camera).unwrap().look_at.x,
            9.0
        ));
    }
}
