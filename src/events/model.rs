//! Model teardown.
//!
//! Despawning an [`AnimatedModel`](crate::components::animatedmodel::AnimatedModel)
//! through [`UnloadModel`] also drops its mixer from the [`MixerSet`], so the
//! frame loop stops advancing it.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::animatedmodel::{AnimatedModel, MixerHandle};
use crate::resources::mixerset::MixerSet;

#[derive(Event, Debug, Clone, Copy)]
pub struct UnloadModel {
    pub entity: Entity,
}

pub fn unload_model_observer(
    trigger: On<UnloadModel>,
    models: Query<(&AnimatedModel, Option<&MixerHandle>)>,
    mut mixers: ResMut<MixerSet>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok((model, handle)) = models.get(entity) else {
        warn!("UnloadModel: {:?} is not a loaded model", entity);
        return;
    };
    if let Some(MixerHandle(key)) = handle {
        mixers.remove(*key);
    }
    info!("Unloaded model '{}'", model.name);
    commands.entity(entity).despawn();
}
