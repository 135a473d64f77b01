//! One-shot tween components.
//!
//! - [`TweenTranslation`] – animate [`Transform3D::translation`](super::transform3d::Transform3D)
//! - [`TweenOpacity`] – animate [`Overlay::opacity`](super::overlay::Overlay)
//!
//! Camera fly-to transitions are `TweenTranslation`s on the camera and orbit
//! target entities. A tween stops once it reaches its end value; inserting a
//! new one on the same entity replaces it. See [`crate::systems::tween`] for
//! the update systems.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Curve applied to normalized tween progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end (quartic). Used by camera fly-to transitions.
    QuartInOut,
}

/// Moves an entity's translation from `from` to `to` over `duration` seconds.
#[derive(Component, Clone, Debug)]
pub struct TweenTranslation {
    pub from: Vector3,
    pub to: Vector3,
    /// Duration in seconds. Non-positive means jump to `to` on the next frame.
    pub duration: f32,
    pub easing: Easing,
    /// Cleared once `to` has been reached.
    pub playing: bool,
    /// Seconds elapsed, clamped to `duration`.
    pub time: f32,
}

impl TweenTranslation {
    pub fn new(from: Vector3, to: Vector3, duration: f32) -> Self {
        TweenTranslation {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Fades an overlay's opacity between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenOpacity {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub easing: Easing,
    pub playing: bool,
    pub time: f32,
}

impl TweenOpacity {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenOpacity {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_tween_starts_playing_from_zero() {
        let from = Vector3::new(0.0, 0.0, 5.0);
        let to = Vector3::new(2.354, 1.927, -1.717);
        let tw = TweenTranslation::new(from, to, 2.0).with_easing(Easing::QuartInOut);

        assert_eq!(tw.from, from);
        assert_eq!(tw.to, to);
        assert_eq!(tw.duration, 2.0);
        assert_eq!(tw.easing, Easing::QuartInOut);
        assert!(tw.playing);
        assert_eq!(tw.time, 0.0);
    }

    #[test]
    fn opacity_tween_defaults_to_linear() {
        let tw = TweenOpacity::new(0.0, 1.0, 3.0);
        assert_eq!(tw.easing, Easing::Linear);
        assert!(tw.playing);
        assert_eq!(tw.time, 0.0);
    }
}
