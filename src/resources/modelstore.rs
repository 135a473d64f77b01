//! GPU-side models keyed by their source path.
//!
//! Raylib models own GPU buffers, so the store is a plain field of the
//! renderer and never enters the world. Entries are created on the main
//! thread the first time an
//! [`AnimatedModel`](crate::components::animatedmodel::AnimatedModel) using
//! the path is drawn, and dropped once no `AnimatedModel` uses it.

use raylib::prelude::{Model, ModelAnimation};
use rustc_hash::{FxHashMap, FxHashSet};

pub struct LoadedModel {
    pub model: Model,
    pub animations: Vec<ModelAnimation>,
}

pub struct ModelStore<T = LoadedModel> {
    pub map: FxHashMap<String, T>,
    /// Paths raylib already failed to load; not retried.
    pub failed: FxHashSet<String>,
}

impl<T> Default for ModelStore<T> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
            failed: FxHashSet::default(),
        }
    }
}

impl<T> ModelStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every loaded entry whose path is not in `live`. Returns the
    /// evicted paths.
    pub fn evict_unused<'a>(&mut self, live: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let live: FxHashSet<&str> = live.into_iter().collect();
        let stale: Vec<String> = self
            .map
            .keys()
            .filter(|path| !live.contains(path.as_str()))
            .cloned()
            .collect();
        for path in &stale {
            self.map.remove(path);
        }
        stale
    }
}
