use serde::{Deserialize, Serialize};

/// Asset manifest describing every image the host must load, plus the
/// rotation of full-surface backdrop images and an optional music track.
/// Decoding and caching are the host's job; the manifest only names
/// files and their frame geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Sprite images, in index order (`SpriteInstance::image` refers here).
    pub images: Vec<ImageDescriptor>,
    /// Names (from `images`) of backdrops, in cycling order.
    #[serde(default)]
    pub backdrops: Vec<String>,
    /// Optional looping music track path.
    #[serde(default)]
    pub music: Option<String>,
}

/// Describes a single source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Lookup name (e.g., "jupiter").
    pub name: String,
    /// Relative path to the image file.
    pub path: String,
    /// Source frame width in pixels.
    pub frame_width: f32,
    /// Source frame height in pixels.
    pub frame_height: f32,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "images": [
                { "name": "sun", "path": "images/sun.png",
                  "frame_width": 547, "frame_height": 558 }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.images.len(), 1);
        assert_eq!(manifest.images[0].frame_width, 547.0);
        assert!(manifest.backdrops.is_empty());
        assert!(manifest.music.is_none());
    }

    #[test]
    fn parse_backdrops_and_music() {
        let json = r#"{
            "images": [
                { "name": "galaxy", "path": "images/galaxy.png",
                  "frame_width": 1920, "frame_height": 1080 }
            ],
            "backdrops": ["galaxy"],
            "music": "audio/orbit.mp3"
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.backdrops, vec!["galaxy"]);
        assert_eq!(manifest.music.as_deref(), Some("audio/orbit.mp3"));
    }

    #[test]
    fn json_round_trip() {
        let manifest = AssetManifest {
            images: vec![ImageDescriptor {
                name: "earth".into(),
                path: "images/earth.png".into(),
                frame_width: 1600.0,
                frame_height: 1600.0,
            }],
            backdrops: vec![],
            music: None,
        };
        let json = manifest.to_json().unwrap();
        let back = AssetManifest::from_json(&json).unwrap();
        assert_eq!(back.images[0].name, "earth");
    }
}
