//! Data-driven scene description.
//!
//! The viewer builds its world from a JSON file listing hotspots, animated
//! models, decorative meshes and overlays. Vectors are plain `[x, y, z]`
//! arrays and colours `[r, g, b]`.
//!
//! ```json
//! {
//!   "hotspots": [
//!     { "name": "tagLatches",
//!       "anchor": [1.108, 1.443, -0.916],
//!       "camera_destination": [2.354, 1.927, -1.717] }
//!   ],
//!   "models": [ { "name": "mag", "url": "assets/AKmag.glb", "scale": [0.1, 0.1, 0.1] } ],
//!   "meshes": [
//!     { "name": "default", "shape": { "kind": "cube", "size": 1.0 },
//!       "position": [-2.0, 0.0, 0.0], "color": [200, 80, 80], "spin": [0.01, 0.0, 0.01] }
//!   ],
//!   "overlays": [ { "name": "top", "text": "Top cover" } ]
//! }
//! ```

use std::path::Path;

use raylib::prelude::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

pub fn to_vector3(v: [f32; 3]) -> Vector3 {
    Vector3::new(v[0], v[1], v[2])
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HotspotDescriptor {
    pub name: String,
    pub anchor: [f32; 3],
    pub camera_destination: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_orientation: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_overlay: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    pub name: String,
    pub url: String,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    Cube { size: f32 },
    Sphere { radius: f32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeshDescriptor {
    pub name: String,
    pub shape: ShapeDescriptor,
    #[serde(default)]
    pub position: [f32; 3],
    pub color: [u8; 3],
    #[serde(default)]
    pub wireframe: bool,
    /// Per-frame rotation step in radians.
    #[serde(default)]
    pub spin: [f32; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverlayDescriptor {
    pub name: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SceneDescription {
    #[serde(default)]
    pub hotspots: Vec<HotspotDescriptor>,
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
    #[serde(default)]
    pub meshes: Vec<MeshDescriptor>,
    #[serde(default)]
    pub overlays: Vec<OverlayDescriptor>,
}

impl SceneDescription {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ViewerError::SceneRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ViewerError::SceneWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The magazine demo scene: two hotspots, one model, two spinning cubes.
    pub fn default_scene() -> Self {
        Self {
            hotspots: vec![
                HotspotDescriptor {
                    name: "tagLatches".to_string(),
                    anchor: [1.108, 1.443, -0.916],
                    camera_destination: [2.354, 1.927, -1.717],
                    camera_orientation: None,
                    reveal_overlay: None,
                },
                HotspotDescriptor {
                    name: "tagTop".to_string(),
                    anchor: [0.379, 2.218, -0.163],
                    camera_destination: [1.747, 3.573, 0.688],
                    camera_orientation: Some([-62.16, 58.25, 36.02]),
                    reveal_overlay: Some("top".to_string()),
                },
            ],
            models: vec![ModelDescriptor {
                name: "mag".to_string(),
                url: "assets/AKmag.glb".to_string(),
                scale: [0.1, 0.1, 0.1],
            }],
            meshes: vec![
                MeshDescriptor {
                    name: "default".to_string(),
                    shape: ShapeDescriptor::Cube { size: 1.0 },
                    position: [-2.5, 0.0, 0.0],
                    color: [120, 160, 255],
                    wireframe: true,
                    spin: [0.01, 0.0, 0.01],
                },
                MeshDescriptor {
                    name: "standard".to_string(),
                    shape: ShapeDescriptor::Cube { size: 1.0 },
                    position: [2.5, 0.0, 0.0],
                    color: [230, 120, 90],
                    wireframe: false,
                    spin: [0.01, 0.0, 0.01],
                },
            ],
            overlays: vec![OverlayDescriptor {
                name: "top".to_string(),
                text: "Top cover: press to release the follower".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scene_uses_defaults() {
        let scene = SceneDescription::from_json_str(
            r#"{ "hotspots": [ { "name": "a", "anchor": [1, 2, 3], "camera_destination": [4, 5, 6] } ] }"#,
        )
        .unwrap();
        assert_eq!(scene.hotspots.len(), 1);
        assert!(scene.hotspots[0].camera_orientation.is_none());
        assert!(scene.models.is_empty());
        assert!(scene.meshes.is_empty());
    }

    #[test]
    fn model_scale_defaults_to_one() {
        let scene = SceneDescription::from_json_str(
            r#"{ "models": [ { "name": "m", "url": "m.glb" } ] }"#,
        )
        .unwrap();
        assert_eq!(scene.models[0].scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn shape_is_tagged_by_kind() {
        let scene = SceneDescription::from_json_str(
            r#"{ "meshes": [ { "name": "s", "shape": { "kind": "sphere", "radius": 0.5 }, "color": [1, 2, 3] } ] }"#,
        )
        .unwrap();
        assert_eq!(scene.meshes[0].shape, ShapeDescriptor::Sphere { radius: 0.5 });
        assert_eq!(scene.meshes[0].spin, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SceneDescription::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ViewerError::SceneParse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SceneDescription::load_from_file("./definitely/missing/scene.json").unwrap_err();
        assert!(matches!(err, ViewerError::SceneRead { .. }));
    }

    #[test]
    fn default_scene_survives_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "hotspot_viewer_scene_{}.json",
            std::process::id()
        ));
        let scene = SceneDescription::default_scene();
        scene.save_to_file(&path).unwrap();
        let loaded = SceneDescription::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, scene);
    }
}
