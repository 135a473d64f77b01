//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems and observers: activation state, timing, the mixer
//! arena, configuration and the loader bridge. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `activation` – which hotspot (if any) is active, and derived intensities
//! - `assetloader` – bridge and channels for the background model loader
//! - `debugmode` – presence toggles optional debug overlays
//! - `hotspotregistry` – ordered hotspots, the pick set, and `register_hotspot`
//! - `mixerset` – arena of per-model animation mixers
//! - `modelstore` – raylib models, owned by the main thread
//! - `orbitcontrols` – orbit target and pending user orbit input
//! - `scenedesc` – JSON scene description
//! - `viewerconfig` – INI-backed viewer settings
//! - `viewport` – current window size in pixels
//! - `worldtime` – simulation time and delta
pub mod activation;
pub mod assetloader;
pub mod debugmode;
pub mod hotspotregistry;
pub mod mixerset;
pub mod modelstore;
pub mod orbitcontrols;
pub mod scenedesc;
pub mod viewerconfig;
pub mod viewport;
pub mod worldtime;
