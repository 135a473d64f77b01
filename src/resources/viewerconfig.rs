//! Viewer configuration resource.
//!
//! Manages viewer settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//!
//! [camera]
//! fovy = 75
//! default_x = 0
//! default_y = 0
//! default_z = 5
//!
//! [transition]
//! duration = 2.0
//! target_offset = -1.0
//!
//! [picking]
//! proxy_radius = 0.15
//!
//! [scene]
//! path = ./assets/scene.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::Vector3;
use std::path::PathBuf;

use crate::error::{Result, ViewerError};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FOVY: f32 = 75.0;
const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 5.0];
const DEFAULT_TRANSITION_DURATION: f32 = 2.0;
const DEFAULT_TARGET_OFFSET: f32 = -1.0;
const DEFAULT_PROXY_RADIUS: f32 = 0.15;
const DEFAULT_SCENE_PATH: &str = "./assets/scene.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Viewer configuration resource.
///
/// Stores window settings, the camera rest pose, transition timing and the
/// scene file location.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Where the camera rests when no hotspot is active.
    pub default_camera_position: Vector3,
    /// Seconds a camera or target transition takes.
    pub transition_duration: f32,
    /// Vertical offset added to a hotspot anchor to frame it slightly from above.
    pub target_offset: f32,
    /// Radius of the invisible pick sphere around each hotspot.
    pub proxy_radius: f32,
    /// Path to the JSON scene description.
    pub scene_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fovy: DEFAULT_FOVY,
            default_camera_position: Vector3::new(
                DEFAULT_CAMERA_POSITION[0],
                DEFAULT_CAMERA_POSITION[1],
                DEFAULT_CAMERA_POSITION[2],
            ),
            transition_duration: DEFAULT_TRANSITION_DURATION,
            target_offset: DEFAULT_TARGET_OFFSET,
            proxy_radius: DEFAULT_PROXY_RADIUS,
            scene_path: PathBuf::from(DEFAULT_SCENE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    fn config_error(&self, reason: String) -> ViewerError {
        ViewerError::Config {
            path: self.config_path.clone(),
            reason,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| self.config_error(e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, fovy={}, transition={}s",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fovy,
            self.transition_duration
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, contents: &str) -> Result<()> {
        let mut config = Ini::new();
        config.read(contents.to_string()).map_err(|e| self.config_error(e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [camera] section
        if let Some(fovy) = config.getfloat("camera", "fovy").ok().flatten() {
            self.fovy = fovy as f32;
        }
        if let Some(x) = config.getfloat("camera", "default_x").ok().flatten() {
            self.default_camera_position.x = x as f32;
        }
        if let Some(y) = config.getfloat("camera", "default_y").ok().flatten() {
            self.default_camera_position.y = y as f32;
        }
        if let Some(z) = config.getfloat("camera", "default_z").ok().flatten() {
            self.default_camera_position.z = z as f32;
        }

        // [transition] section
        if let Some(duration) = config.getfloat("transition", "duration").ok().flatten() {
            self.transition_duration = duration as f32;
        }
        if let Some(offset) = config.getfloat("transition", "target_offset").ok().flatten() {
            self.target_offset = offset as f32;
        }

        // [picking] section
        if let Some(radius) = config.getfloat("picking", "proxy_radius").ok().flatten() {
            self.proxy_radius = radius as f32;
        }

        // [scene] section
        if let Some(path) = config.get("scene", "path") {
            self.scene_path = PathBuf::from(path);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [camera] section
        config.set("camera", "fovy", Some(self.fovy.to_string()));
        config.set(
            "camera",
            "default_x",
            Some(self.default_camera_position.x.to_string()),
        );
        config.set(
            "camera",
            "default_y",
            Some(self.default_camera_position.y.to_string()),
        );
        config.set(
            "camera",
            "default_z",
            Some(self.default_camera_position.z.to_string()),
        );

        // [transition] section
        config.set(
            "transition",
            "duration",
            Some(self.transition_duration.to_string()),
        );
        config.set(
            "transition",
            "target_offset",
            Some(self.target_offset.to_string()),
        );

        // [picking] section
        config.set("picking", "proxy_radius", Some(self.proxy_radius.to_string()));

        // [scene] section
        config.set(
            "scene",
            "path",
            Some(self.scene_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| self.config_error(e.to_string()))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
