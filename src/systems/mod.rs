//! Viewer systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`assets`] – loader thread and the bridge systems that attach loaded models
//! - [`input`] – read hardware input and turn it into viewer events
//! - [`mixer`] – advance every animation mixer by the frame delta
//! - [`orbit`] – follow the orbit target and re-aim the camera
//! - [`picking`] – pointer-to-ray math and proxy intersection
//! - [`render`] – draw the scene, overlays and debug panel using Raylib
//! - [`spin`] – fixed per-frame rotation of decorative meshes
//! - [`time`] – update simulation time and delta
//! - [`tween`] – animate translation and opacity over time

pub mod assets;
pub mod input;
pub mod mixer;
pub mod orbit;
pub mod picking;
pub mod render;
pub mod spin;
pub mod time;
pub mod tween;
