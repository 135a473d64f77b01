//! Animation playback state for loaded models.
//!
//! Every [`AnimatedModel`](crate::components::animatedmodel::AnimatedModel)
//! owns one [`AnimationMixer`] stored in the [`MixerSet`] arena. The frame loop
//! advances every mixer exactly once per frame; unloading a model removes its
//! mixer so no update work leaks.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle of a mixer inside [`MixerSet`].
    pub struct MixerKey;
}

/// What an action does when its cursor reaches either end of the clip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Restart from the beginning when finished.
    Loop,
    /// Reverse direction when reaching either end.
    PingPong,
}

/// Name and length of one animation clip found in a model file.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipInfo {
    pub name: String,
    /// Length in seconds.
    pub duration: f32,
}

/// Playback cursor for a single clip.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<ClipInfo>,

    pub time: f32,
    pub time_scale: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<ClipInfo>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<ClipInfo> {
        &self.clip
    }

    /// Advance the cursor by `dt` seconds, honoring the loop mode.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    self.time = duration + (self.time % duration);
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut t = self.time % double_duration;
                if t < 0.0 {
                    t += double_duration;
                }
                if t > duration {
                    t = double_duration - t;
                }
                self.time = t;
            }
        }
    }
}

/// Per-model playback state: one action per clip.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
    // Diagnostics only, shown in the debug panel.
    /// Total seconds this mixer has been advanced by.
    pub elapsed: f32,
    /// Number of `advance` calls received.
    pub advance_count: u64,
}

impl AnimationMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mixer that loops every clip from the start.
    pub fn playing_all(clips: &[ClipInfo]) -> Self {
        let mut mixer = Self::new();
        for clip in clips {
            mixer.add_action(AnimationAction::new(Arc::new(clip.clone())));
        }
        mixer
    }

    pub fn add_action(&mut self, action: AnimationAction) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    pub fn advance(&mut self, dt: f32) {
        for action in &mut self.actions {
            action.update(dt);
        }
        self.elapsed += dt;
        self.advance_count += 1;
    }
}

/// Arena of all live mixers.
#[derive(Resource, Default)]
pub struct MixerSet {
    mixers: SlotMap<MixerKey, AnimationMixer>,
}

impl MixerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mixer: AnimationMixer) -> MixerKey {
        self.mixers.insert(mixer)
    }

    pub fn remove(&mut self, key: MixerKey) -> Option<AnimationMixer> {
        self.mixers.remove(key)
    }

    pub fn get(&self, key: MixerKey) -> Option<&AnimationMixer> {
        self.mixers.get(key)
    }

    pub fn get_mut(&mut self, key: MixerKey) -> Option<&mut AnimationMixer> {
        self.mixers.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.mixers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mixers.is_empty()
    }

    /// Advance every mixer by `dt`. Negative deltas are treated as zero.
    pub fn advance_all(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        for (_key, mixer) in self.mixers.iter_mut() {
            mixer.advance(dt);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MixerKey, &AnimationMixer)> {
        self.mixers.iter()
    }
}
