//! Background model loading.
//!
//! This module hosts the loader thread and the systems that bridge it with the
//! ECS world:
//! - [`asset_loader_thread`] runs on its own OS thread, reads model files and
//!   extracts their animation clips, replying with
//!   [`AssetMessage`](crate::events::assets::AssetMessage)s.
//! - [`poll_asset_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue each frame; [`update_asset_messages`] advances it.
//! - [`forward_asset_cmds`] / [`update_asset_cmds`] do the same for commands
//!   written through `MessageWriter<AssetCmd>`.
//! - [`attach_loaded_models`] turns successful loads into
//!   [`AnimatedModel`] entities with a playing mixer.
//!
//! A failed load is logged and otherwise ignored; the viewer keeps running
//! without that model. GPU upload happens later, on the main thread, when the
//! renderer first draws the model.
//!
//! See also: [`crate::events::assets`] and [`crate::resources::assetloader`].

use std::path::Path;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};

use crate::components::animatedmodel::{AnimatedModel, MixerHandle};
use crate::components::transform3d::Transform3D;
use crate::error::{Result, ViewerError};
use crate::events::assets::{AssetCmd, AssetMessage};
use crate::resources::assetloader::AssetBridge;
use crate::resources::mixerset::{AnimationMixer, ClipInfo, MixerSet};

/// Drain pending replies from the loader thread into `Messages<AssetMessage>`.
pub fn poll_asset_messages(bridge: Res<AssetBridge>, mut writer: MessageWriter<AssetMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AssetMessage`].
pub fn update_asset_messages(mut msgs: ResMut<Messages<AssetMessage>>) {
    msgs.update();
}

/// Forward ECS [`AssetCmd`] messages to the loader thread.
pub fn forward_asset_cmds(bridge: Res<AssetBridge>, mut reader: MessageReader<AssetCmd>) {
    for cmd in reader.read() {
        // the thread may already be gone during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

pub fn update_asset_cmds(mut msgs: ResMut<Messages<AssetCmd>>) {
    msgs.update();
}

/// Spawn an [`AnimatedModel`] for every model the loader finished.
///
/// Every clip found in the file is played in a loop from the start.
pub fn attach_loaded_models(
    mut reader: MessageReader<AssetMessage>,
    mut mixers: ResMut<MixerSet>,
    mut commands: Commands,
) {
    for msg in reader.read() {
        match msg {
            AssetMessage::ModelLoaded {
                name,
                url,
                scale,
                clips,
            } => {
                let key = mixers.insert(AnimationMixer::playing_all(clips));
                commands.spawn((
                    AnimatedModel {
                        name: name.clone(),
                        source_url: url.clone(),
                        scale: *scale,
                    },
                    Transform3D::default().with_scale(*scale),
                    MixerHandle(key),
                ));
                info!(
                    "Model '{}' attached with {} clip(s)",
                    name,
                    clips.len()
                );
            }
            AssetMessage::ModelLoadFailed { name, error } => {
                warn!("Model '{}' failed to load: {}", name, error);
            }
        }
    }
}

fn clip_duration(animation: &gltf::Animation) -> f32 {
    animation
        .samplers()
        .filter_map(|sampler| sampler.input().max())
        .filter_map(|max| max.as_array()?.first()?.as_f64())
        .fold(0.0_f32, |acc, t| acc.max(t as f32))
}

/// Animation clips declared by a glTF/GLB document.
///
/// A clip's duration is the largest keyframe time among its samplers.
/// Unnamed clips are called `clip<index>`.
pub fn clips_from_bytes(url: &str, bytes: &[u8]) -> Result<Vec<ClipInfo>> {
    let gltf = gltf::Gltf::from_slice(bytes).map_err(|source| ViewerError::ModelParse {
        url: url.to_string(),
        source,
    })?;
    Ok(gltf
        .animations()
        .map(|animation| ClipInfo {
            name: animation
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("clip{}", animation.index())),
            duration: clip_duration(&animation),
        })
        .collect())
}

pub fn read_clips(url: &str) -> Result<Vec<ClipInfo>> {
    let bytes = std::fs::read(Path::new(url)).map_err(|source| ViewerError::ModelRead {
        url: url.to_string(),
        source,
    })?;
    clips_from_bytes(url, &bytes)
}

/// Entry point of the loader thread.
///
/// Blocks on the command channel and handles one load at a time, in request
/// order. Returns on [`AssetCmd::Shutdown`] or when every sender is dropped.
pub fn asset_loader_thread(rx_cmd: Receiver<AssetCmd>, tx_msg: Sender<AssetMessage>) {
    debug!(
        "Asset loader thread starting (id={:?})",
        std::thread::current().id()
    );

    for cmd in rx_cmd.iter() {
        match cmd {
            AssetCmd::LoadModel { name, url, scale } => {
                let reply = match read_clips(&url) {
                    Ok(clips) => {
                        info!("Loaded '{}' from {} ({} clips)", name, url, clips.len());
                        AssetMessage::ModelLoaded {
                            name,
                            url,
                            scale,
                            clips,
                        }
                    }
                    Err(e) => AssetMessage::ModelLoadFailed {
                        name,
                        error: e.to_string(),
                    },
                };
                if tx_msg.send(reply).is_err() {
                    break;
                }
            }
            AssetCmd::Shutdown => break,
        }
    }

    debug!("Asset loader thread exiting");
}
