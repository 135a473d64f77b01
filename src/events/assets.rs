//! Messages exchanged with the background asset loader thread.

use bevy_ecs::message::Message;
use raylib::prelude::Vector3;

use crate::resources::mixerset::ClipInfo;

/// Commands sent *to* the loader thread.
#[derive(Message, Debug, Clone)]
pub enum AssetCmd {
    LoadModel {
        name: String,
        url: String,
        scale: Vector3,
    },
    Shutdown,
}

/// Results sent *back* from the loader thread.
#[derive(Message, Debug, Clone)]
pub enum AssetMessage {
    ModelLoaded {
        name: String,
        url: String,
        scale: Vector3,
        clips: Vec<ClipInfo>,
    },
    ModelLoadFailed {
        name: String,
        error: String,
    },
}
