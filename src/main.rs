#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use hotspot_viewer::frameloop::{FrameLoop, RaylibClock};
use hotspot_viewer::game;
use hotspot_viewer::resources::assetloader::{setup_asset_loader, shutdown_asset_loader};
use hotspot_viewer::resources::scenedesc::SceneDescription;
use hotspot_viewer::resources::viewerconfig::ViewerConfig;
use hotspot_viewer::systems::render::RaylibRenderer;
use log::{info, warn};

#[derive(Parser)]
#[command(version, about = "Interactive 3D hotspot viewer")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON scene description. Overrides `[scene] path` from the config.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_default_config: bool,

    /// Write the built-in demo scene to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_default_scene: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.write_default_config {
        let config = ViewerConfig::with_path(&cli.config);
        match config.save_to_file() {
            Ok(()) => println!("Default config written to {}", cli.config.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(path) = cli.write_default_scene {
        match SceneDescription::default_scene().save_to_file(&path) {
            Ok(()) => println!("Default scene written to {}", path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut config = ViewerConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using default configuration");
    }
    if let Some(scene_path) = cli.scene {
        config.scene_path = scene_path;
    }

    let scene = match SceneDescription::load_from_file(&config.scene_path) {
        Ok(scene) => scene,
        Err(e) => {
            warn!("{e}; using the built-in demo scene");
            SceneDescription::default_scene()
        }
    };

    let (width, height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(width as i32, height as i32)
        .resizable()
        .title("Hotspot Viewer");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let mut world = bevy_ecs::world::World::new();
    game::init_resources(&mut world, config);
    game::register_observers(&mut world);
    setup_asset_loader(&mut world);
    game::setup_scene(&mut world, &scene);

    let mut frame_loop = FrameLoop::new(game::build_update_schedule());
    let mut clock = RaylibClock;
    let mut renderer = RaylibRenderer::new(rl, thread);

    info!("Entering main loop");
    while !renderer.window_should_close() {
        renderer.poll_input(&mut world);
        frame_loop.run_frame(&mut world, &mut clock, &mut renderer);
    }

    info!("Shutting down after {} frames", frame_loop.frames());
    shutdown_asset_loader(&mut world);
}
