//! Event types and observers used by the viewer.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Picking, activation and camera
//! transitions form a chain: a [`pointer::PointerClick`] resolves to a
//! [`hotspot::HotspotPicked`], which drives the activation state and issues
//! [`transition::MoveTarget`] / [`transition::MoveCamera`].
//!
//! Submodules:
//! - [`assets`] – commands and messages for the background model loader
//! - [`hotspot`] – hotspot pick/activation notifications
//! - [`model`] – model teardown
//! - [`overlay`] – fade-in of named overlays
//! - [`pointer`] – pointer clicks and ray picking
//! - [`resize`] – window size changes
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
//! - [`transition`] – camera and orbit-target fly-to tweens
pub mod assets;
pub mod hotspot;
pub mod model;
pub mod overlay;
pub mod pointer;
pub mod resize;
pub mod switchdebug;
pub mod transition;
