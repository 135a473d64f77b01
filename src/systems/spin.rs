//! Per-frame rotation of decorative meshes.
use bevy_ecs::prelude::*;

use crate::components::spin::Spin;
use crate::components::transform3d::Transform3D;

/// Add each entity's [`Spin`] step to its rotation. Runs once per frame and
/// ignores the time delta.
pub fn spin_system(mut query: Query<(&mut Transform3D, &Spin)>) {
    for (mut transform, spin) in query.iter_mut() {
        transform.rotation.x += spin.step.x;
        transform.rotation.y += spin.step.y;
        transform.rotation.z += spin.step.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_grows_by_step_each_run() {
        let mut world = World::new();
        let e = world
            .spawn((Transform3D::default(), Spin::new(0.01, 0.0, 0.01)))
            .id();
        let still = world.spawn(Transform3D::default()).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(spin_system);
        for _ in 0..3 {
            schedule.run(&mut world);
        }

        let rot = world.get::<Transform3D>(e).unwrap().rotation;
        assert!((rot.x - 0.03).abs() < 1e-6);
        assert_eq!(rot.y, 0.0);
        assert!((rot.z - 0.03).abs() < 1e-6);
        assert_eq!(world.get::<Transform3D>(still).unwrap().rotation.x, 0.0);
    }
}
