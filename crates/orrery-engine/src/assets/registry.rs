use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;

/// One resolved image: its buffer index plus source frame geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFrame {
    /// Index into the manifest's image list.
    pub index: u32,
    pub frame_width: f32,
    pub frame_height: f32,
}

/// Name-based image lookup built from an AssetManifest.
pub struct ImageRegistry {
    frames: HashMap<String, ImageFrame>,
    backdrops: Vec<ImageFrame>,
}

impl ImageRegistry {
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut frames = HashMap::with_capacity(manifest.images.len());
        for (index, image) in manifest.images.iter().enumerate() {
            frames.insert(
                image.name.clone(),
                ImageFrame {
                    index: index as u32,
                    frame_width: image.frame_width,
                    frame_height: image.frame_height,
                },
            );
        }

        // Unknown backdrop names degrade to a shorter rotation.
        let backdrops = manifest
            .backdrops
            .iter()
            .filter_map(|name| {
                let frame = frames.get(name).copied();
                if frame.is_none() {
                    log::warn!("backdrop {name:?} is not in the image list; skipping");
                }
                frame
            })
            .collect();

        Self { frames, backdrops }
    }

    /// Look up an image by name.
    pub fn get(&self, name: &str) -> Option<ImageFrame> {
        self.frames.get(name).copied()
    }

    /// Backdrop frames in cycling order.
    pub fn backdrops(&self) -> &[ImageFrame] {
        &self.backdrops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::ImageDescriptor;

    fn manifest() -> AssetManifest {
        AssetManifest {
            images: vec![
                ImageDescriptor {
                    name: "galaxy".into(),
                    path: "images/galaxy.png".into(),
                    frame_width: 1920.0,
                    frame_height: 1080.0,
                },
                ImageDescriptor {
                    name: "sun".into(),
                    path: "images/sun.png".into(),
                    frame_width: 547.0,
                    frame_height: 558.0,
                },
            ],
            backdrops: vec!["galaxy".into(), "nebula".into()],
            music: None,
        }
    }

    #[test]
    fn lookup_by_name() {
        let reg = ImageRegistry::from_manifest(&manifest());
        let sun = reg.get("sun").expect("sun registered");
        assert_eq!(sun.index, 1);
        assert_eq!(sun.frame_height, 558.0);
        assert!(reg.get("mars").is_none());
    }

    #[test]
    fn unknown_backdrops_are_skipped() {
        let reg = ImageRegistry::from_manifest(&manifest());
        assert_eq!(reg.backdrops().len(), 1);
        assert_eq!(reg.backdrops()[0].index, 0);
    }
}
