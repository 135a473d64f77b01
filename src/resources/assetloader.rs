//! ECS resources that bridge the main thread with the background asset loader.
//!
//! Use [`setup_asset_loader`] once during initialization to spawn the loader
//! thread and insert the [`AssetBridge`] and message resources. Call
//! [`shutdown_asset_loader`] during teardown to stop and join the thread.

use crate::events::assets::{AssetCmd, AssetMessage};
use crate::systems::assets::asset_loader_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Shared bridge between the ECS world and the loader thread.
///
/// Systems send commands via [`AssetBridge::tx_cmd`] and poll results via
/// [`AssetBridge::rx_msg`].
#[derive(Resource)]
pub struct AssetBridge {
    /// Sender for [`AssetCmd`] messages (ECS -> loader thread).
    pub tx_cmd: Sender<AssetCmd>,
    /// Receiver for [`AssetMessage`] messages (loader thread -> ECS).
    pub rx_msg: Receiver<AssetMessage>,
    /// Join handle for the background loader thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the loader thread and register bridge resources.
pub fn setup_asset_loader(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AssetCmd>();
    let (tx_msg, rx_msg) = unbounded::<AssetMessage>();

    let handle = std::thread::spawn(move || asset_loader_thread(rx_cmd, tx_msg));

    world.insert_resource(AssetBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<AssetMessage>::default());
    world.insert_resource(Messages::<AssetCmd>::default());
}

/// Request shutdown of the loader thread and join it.
///
/// Loads still queued behind the shutdown command are dropped.
pub fn shutdown_asset_loader(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AssetBridge>() {
        let _ = bridge.tx_cmd.send(AssetCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
