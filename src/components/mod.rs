//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene world.
//!
//! Submodules overview:
//! - [`animatedmodel`] – a loaded model and the handle of its animation mixer
//! - [`camera`] – main camera lens plus camera/orbit-target markers
//! - [`hotspot`] – hotspot identity, indicator light and pick proxy
//! - [`meshshape`] – decorative primitive meshes
//! - [`overlay`] – screen-space text overlays revealed by fading in
//! - [`spin`] – fixed per-frame rotation step
//! - [`transform3d`] – translation, rotation and scale in world space
//! - [`tween`] – animated interpolation of translation and opacity

pub mod animatedmodel;
pub mod camera;
pub mod hotspot;
pub mod meshshape;
pub mod overlay;
pub mod spin;
pub mod transform3d;
pub mod tween;
