//! Animation mixer update.
use bevy_ecs::prelude::*;

use crate::resources::mixerset::MixerSet;
use crate::resources::worldtime::WorldTime;

/// Advance every registered mixer by this frame's delta.
pub fn advance_mixers(world_time: Res<WorldTime>, mut mixers: ResMut<MixerSet>) {
    mixers.advance_all(world_time.delta);
}
