use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

use crate::resources::mixerset::MixerKey;

/// A model whose asset finished loading and is attached to the scene.
///
/// Entities with this component only exist after the loader thread reported
/// success; there is no placeholder while a load is in flight.
#[derive(Component, Clone, Debug)]
pub struct AnimatedModel {
    pub name: String,
    pub source_url: String,
    pub scale: Vector3,
}

/// Key of the model's mixer inside [`MixerSet`](crate::resources::mixerset::MixerSet).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixerHandle(pub MixerKey);
