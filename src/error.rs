//! Error types shared by configuration, scene and asset loading.
//!
//! None of these errors are fatal to the frame loop: the binary logs them and
//! falls back to defaults, and the asset loader reports them as messages.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    /// The INI configuration file could not be loaded or written.
    #[error("config file {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("failed to read scene file {path:?}: {source}")]
    SceneRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write scene file {path:?}: {source}")]
    SceneWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene description: {0}")]
    SceneParse(#[from] serde_json::Error),

    #[error("failed to read model {url}: {source}")]
    ModelRead {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model {url}: {source}")]
    ModelParse {
        url: String,
        #[source]
        source: gltf::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
