//! World-space placement of an entity in the 3D scene.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Translation, Euler rotation (radians, applied X then Y then Z) and scale.
///
/// Hotspots, pick proxies, decorative meshes, loaded models, the camera and the
/// orbit target all carry one. Pick proxies store their offset from the parent
/// hotspot here instead of a world position.
#[derive(Component, Clone, Copy, Debug)]
pub struct Transform3D {
    pub translation: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Transform3D {
    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let t = Transform3D::default();
        assert_eq!(t.translation.x, 0.0);
        assert_eq!(t.rotation.z, 0.0);
        assert_eq!(t.scale.y, 1.0);
    }

    #[test]
    fn from_translation_keeps_unit_scale() {
        let t = Transform3D::from_translation(Vector3::new(1.0, 2.0, 3.0))
            .with_scale(Vector3::new(0.1, 0.1, 0.1));
        assert_eq!(t.translation.y, 2.0);
        assert_eq!(t.scale.x, 0.1);
    }
}
