//! The spawnable body catalog and the default asset set.

use orrery_engine::{AssetManifest, ImageDescriptor};
use serde::{Deserialize, Serialize};

/// Every kind of body that can orbit the sun. The kind names the sprite
/// image and carries the snapshot identity of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Earth,
    Jupiter,
    Moon,
    DeathStar,
    Mars,
    Saturn,
    Pluto,
    Vulcan,
    BlackHole,
}

impl BodyKind {
    pub const ALL: [BodyKind; 9] = [
        BodyKind::Earth,
        BodyKind::Jupiter,
        BodyKind::Moon,
        BodyKind::DeathStar,
        BodyKind::Mars,
        BodyKind::Saturn,
        BodyKind::Pluto,
        BodyKind::Vulcan,
        BodyKind::BlackHole,
    ];

    /// Kinds the god-mode spawn button draws from (everything but the
    /// starter Earth).
    pub const SPAWNABLE: [BodyKind; 8] = [
        BodyKind::Jupiter,
        BodyKind::Moon,
        BodyKind::DeathStar,
        BodyKind::Mars,
        BodyKind::Saturn,
        BodyKind::Pluto,
        BodyKind::Vulcan,
        BodyKind::BlackHole,
    ];

    /// Image name in the asset manifest.
    pub fn image_name(self) -> &'static str {
        match self {
            BodyKind::Earth => "earth",
            BodyKind::Jupiter => "jupiter",
            BodyKind::Moon => "moon",
            BodyKind::DeathStar => "deathstar",
            BodyKind::Mars => "mars",
            BodyKind::Saturn => "saturn",
            BodyKind::Pluto => "pluto",
            BodyKind::Vulcan => "vulcan",
            BodyKind::BlackHole => "blackhole",
        }
    }
}

/// Per-kind spawn defaults.
#[derive(Debug, Clone, Copy)]
pub struct BodyDefaults {
    /// Sprite scale relative to the source image.
    pub sprite_scale: f32,
    /// Default on-screen orbit radius in pixels.
    pub orbit_radius_px: f64,
}

pub fn defaults(kind: BodyKind) -> BodyDefaults {
    match kind {
        BodyKind::Earth => BodyDefaults {
            sprite_scale: 0.02,
            orbit_radius_px: 300.0,
        },
        BodyKind::Jupiter => BodyDefaults {
            sprite_scale: 0.13,
            orbit_radius_px: 200.0,
        },
        BodyKind::Moon => BodyDefaults {
            sprite_scale: 0.02,
            orbit_radius_px: 200.0,
        },
        BodyKind::DeathStar => BodyDefaults {
            sprite_scale: 0.08,
            orbit_radius_px: 200.0,
        },
        BodyKind::Mars => BodyDefaults {
            sprite_scale: 0.01,
            orbit_radius_px: 200.0,
        },
        BodyKind::Saturn => BodyDefaults {
            sprite_scale: 0.15,
            orbit_radius_px: 200.0,
        },
        BodyKind::Pluto => BodyDefaults {
            sprite_scale: 0.15,
            orbit_radius_px: 200.0,
        },
        BodyKind::Vulcan => BodyDefaults {
            sprite_scale: 0.15,
            orbit_radius_px: 200.0,
        },
        BodyKind::BlackHole => BodyDefaults {
            sprite_scale: 0.25,
            orbit_radius_px: 200.0,
        },
    }
}

fn image(name: &str, path: &str, w: f32, h: f32) -> ImageDescriptor {
    ImageDescriptor {
        name: name.into(),
        path: path.into(),
        frame_width: w,
        frame_height: h,
    }
}

/// The built-in asset set: galaxy backdrops, the sun, and one image per
/// body kind, with source frame geometry the host needs for layout.
pub fn default_manifest() -> AssetManifest {
    AssetManifest {
        images: vec![
            image("galaxy", "images/galaxy.png", 1920.0, 1080.0),
            image("galaxy_alt", "images/galaxy.jpg", 1920.0, 1080.0),
            image("galaxy2", "images/galaxy2.jpg", 1920.0, 1080.0),
            image("galaxy3", "images/galaxy3.jpg", 1920.0, 1080.0),
            image("galaxy4", "images/galaxy4.jpg", 1920.0, 1080.0),
            image("galaxy5", "images/galaxy5.jpg", 1920.0, 1080.0),
            image("galaxy6", "images/galaxy6.jpg", 1920.0, 1080.0),
            image("sun", "images/sun.png", 547.0, 558.0),
            image("earth", "images/earth.png", 1600.0, 1600.0),
            image("jupiter", "images/jupiter.png", 800.0, 800.0),
            image("moon", "images/moon.png", 850.0, 688.0),
            image("deathstar", "images/deathstar.png", 1024.0, 819.0),
            image("mars", "images/mars.png", 2260.0, 2260.0),
            image("saturn", "images/saturn.png", 900.0, 434.0),
            image("pluto", "images/pluto.png", 512.0, 512.0),
            image("vulcan", "images/vulcan.png", 300.0, 300.0),
            image("blackhole", "images/blackhole.png", 256.0, 256.0),
        ],
        backdrops: vec![
            "galaxy".into(),
            "galaxy_alt".into(),
            "galaxy2".into(),
            "galaxy3".into(),
            "galaxy4".into(),
            "galaxy5".into(),
            "galaxy6".into(),
        ],
        music: Some("audio/orbit.mp3".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::ImageRegistry;

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&BodyKind::DeathStar).unwrap();
        assert_eq!(json, r#""death_star""#);
        let back: BodyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BodyKind::DeathStar);
    }

    #[test]
    fn every_kind_has_an_image_in_the_default_manifest() {
        let registry = ImageRegistry::from_manifest(&default_manifest());
        for kind in BodyKind::ALL {
            assert!(
                registry.get(kind.image_name()).is_some(),
                "missing image for {kind:?}"
            );
        }
        assert!(registry.get("sun").is_some());
        assert_eq!(registry.backdrops().len(), 7);
    }

    #[test]
    fn spawnable_excludes_the_starter_earth() {
        assert!(!BodyKind::SPAWNABLE.contains(&BodyKind::Earth));
        assert_eq!(BodyKind::SPAWNABLE.len(), BodyKind::ALL.len() - 1);
    }

    #[test]
    fn defaults_are_positive() {
        for kind in BodyKind::ALL {
            let d = defaults(kind);
            assert!(d.sprite_scale > 0.0);
            assert!(d.orbit_radius_px > 0.0);
        }
    }
}
