//! Ray picking against hotspot proxies.
//!
//! Pointer pixels are normalized to device coordinates (`x` right, `y` up,
//! both in [-1, 1]), turned into a world-space ray from the camera, and
//! intersected with each proxy sphere. Hits are ordered nearest first; only
//! the nearest one is acted upon.
//!
//! Everything here is pure math over plain values so it can be exercised
//! without a window or GPU.

use bevy_ecs::prelude::Entity;
use raylib::prelude::{Vector2, Vector3};
use smallvec::SmallVec;

use crate::components::camera::CameraLens;
use crate::resources::viewport::Viewport;

/// World-space ray. `direction` is unit length.
#[derive(Clone, Copy, Debug)]
pub struct PickRay {
    pub origin: Vector3,
    pub direction: Vector3,
}

/// A proxy sphere to test, already resolved to world space.
#[derive(Clone, Copy, Debug)]
pub struct PickCandidate {
    pub proxy: Entity,
    /// Owning hotspot (the proxy's parent).
    pub hotspot: Entity,
    pub center: Vector3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub proxy: Entity,
    pub hotspot: Entity,
    /// Distance along the ray to the first intersection.
    pub distance: f32,
}

pub type PickHits = SmallVec<[PickHit; 4]>;

/// Map window pixels to normalized device coordinates.
pub fn pointer_to_ndc(pointer: Vector2, viewport: &Viewport) -> Vector2 {
    let w = viewport.w.max(1) as f32;
    let h = viewport.h.max(1) as f32;
    Vector2 {
        x: (pointer.x / w) * 2.0 - 1.0,
        y: -(pointer.y / h) * 2.0 + 1.0,
    }
}

/// Ray from a perspective camera at `position` through pixel `pointer`.
pub fn screen_ray(
    pointer: Vector2,
    viewport: &Viewport,
    position: Vector3,
    lens: &CameraLens,
) -> PickRay {
    let ndc = pointer_to_ndc(pointer, viewport);

    let mut forward = lens.look_at - position;
    if forward.length() <= f32::EPSILON {
        forward = Vector3::new(0.0, 0.0, -1.0);
    }
    let forward = forward.normalized();
    let mut right = forward.cross(lens.up);
    if right.length() <= f32::EPSILON {
        // looking straight along `up`
        right = Vector3::new(1.0, 0.0, 0.0);
    }
    let right = right.normalized();
    let up = right.cross(forward);

    let tan_half = (lens.fovy.to_radians() * 0.5).tan();
    let direction = forward
        + right * (ndc.x * tan_half * viewport.aspect())
        + up * (ndc.y * tan_half);

    PickRay {
        origin: position,
        direction: direction.normalized(),
    }
}

/// Distance along `ray` to the first point on the sphere, if any.
///
/// A ray starting inside the sphere hits at distance 0. Spheres entirely
/// behind the origin are missed.
pub fn ray_sphere_distance(ray: &PickRay, center: Vector3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Every candidate the ray hits, nearest first.
pub fn pick_all(ray: &PickRay, candidates: impl IntoIterator<Item = PickCandidate>) -> PickHits {
    let mut hits: PickHits = candidates
        .into_iter()
        .filter_map(|c| {
            ray_sphere_distance(ray, c.center, c.radius).map(|distance| PickHit {
                proxy: c.proxy,
                hotspot: c.hotspot,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

pub fn pick_nearest(
    ray: &PickRay,
    candidates: impl IntoIterator<Item = PickCandidate>,
) -> Option<PickHit> {
    pick_all(ray, candidates).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn viewport() -> Viewport {
        Viewport { w: 800, h: 600 }
    }

    fn candidate(world: &mut World, center: Vector3, radius: f32) -> PickCandidate {
        let hotspot = world.spawn_empty().id();
        let proxy = world.spawn_empty().id();
        PickCandidate {
            proxy,
            hotspot,
            center,
            radius,
        }
    }

    #[test]
    fn ndc_corners_and_center() {
        let vp = viewport();
        let c = pointer_to_ndc(Vector2 { x: 400.0, y: 300.0 }, &vp);
        assert!(approx_eq(c.x, 0.0) && approx_eq(c.y, 0.0));
        let tl = pointer_to_ndc(Vector2 { x: 0.0, y: 0.0 }, &vp);
        assert!(approx_eq(tl.x, -1.0) && approx_eq(tl.y, 1.0));
        let br = pointer_to_ndc(Vector2 { x: 800.0, y: 600.0 }, &vp);
        assert!(approx_eq(br.x, 1.0) && approx_eq(br.y, -1.0));
    }

    #[test]
    fn center_pixel_ray_points_at_look_at() {
        let lens = CameraLens::new(75.0);
        let ray = screen_ray(
            Vector2 { x: 400.0, y: 300.0 },
            &viewport(),
            Vector3::new(0.0, 0.0, 5.0),
            &lens,
        );
        assert!(approx_eq(ray.direction.x, 0.0));
        assert!(approx_eq(ray.direction.y, 0.0));
        assert!(approx_eq(ray.direction.z, -1.0));
    }

    #[test]
    fn upper_pixels_ray_points_up() {
        let lens = CameraLens::new(75.0);
        let ray = screen_ray(
            Vector2 { x: 400.0, y: 0.0 },
            &viewport(),
            Vector3::new(0.0, 0.0, 5.0),
            &lens,
        );
        assert!(ray.direction.y > 0.0);
        // top edge sits at half the vertical fov
        let angle = ray.direction.y.atan2(-ray.direction.z).to_degrees();
        assert!((angle - 37.5).abs() < 1e-3);
    }

    #[test]
    fn sphere_behind_camera_is_missed() {
        let ray = PickRay {
            origin: Vector3::zero(),
            direction: Vector3::new(0.0, 0.0, -1.0),
        };
        assert!(ray_sphere_distance(&ray, Vector3::new(0.0, 0.0, 3.0), 0.5).is_none());
        let d = ray_sphere_distance(&ray, Vector3::new(0.0, 0.0, -3.0), 0.5).unwrap();
        assert!(approx_eq(d, 2.5));
    }

    #[test]
    fn origin_inside_sphere_hits_at_zero() {
        let ray = PickRay {
            origin: Vector3::zero(),
            direction: Vector3::new(1.0, 0.0, 0.0),
        };
        assert_eq!(ray_sphere_distance(&ray, Vector3::zero(), 1.0), Some(0.0));
    }

    #[test]
    fn hits_are_sorted_nearest_first() {
        let mut world = World::new();
        let far = candidate(&mut world, Vector3::new(0.0, 0.0, -8.0), 0.5);
        let near = candidate(&mut world, Vector3::new(0.0, 0.0, -2.0), 0.5);
        let off_axis = candidate(&mut world, Vector3::new(5.0, 0.0, -2.0), 0.5);
        let ray = PickRay {
            origin: Vector3::zero(),
            direction: Vector3::new(0.0, 0.0, -1.0),
        };

        let hits = pick_all(&ray, [far, off_axis, near]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].hotspot, near.hotspot);
        assert_eq!(hits[1].hotspot, far.hotspot);
        assert_eq!(
            pick_nearest(&ray, [far, near]).map(|h| h.proxy),
            Some(near.proxy)
        );
    }

    #[test]
    fn empty_scene_picks_nothing() {
        let ray = PickRay {
            origin: Vector3::zero(),
            direction: Vector3::new(0.0, 0.0, -1.0),
        };
        assert!(pick_nearest(&ray, std::iter::empty()).is_none());
    }
}
