use bevy_ecs::prelude::Component;

/// Screen-space text overlay revealed by fading its opacity in.
///
/// Overlays start hidden (`opacity == 0.0`) and are animated by
/// [`TweenOpacity`](super::tween::TweenOpacity).
#[derive(Component, Clone, Debug)]
pub struct Overlay {
    pub name: String,
    pub text: String,
    pub opacity: f32,
}

impl Overlay {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            opacity: 0.0,
        }
    }
}
