//! Decorative primitive meshes.
//!
//! These are drawn by the renderer and rotated by [`Spin`](super::spin::Spin);
//! they never take part in picking.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    /// Axis-aligned cube with the given edge length.
    Cube { size: f32 },
    Sphere { radius: f32 },
}

#[derive(Component, Clone, Debug)]
pub struct MeshShape {
    pub name: String,
    pub kind: ShapeKind,
    pub color: Color,
    pub wireframe: bool,
}
