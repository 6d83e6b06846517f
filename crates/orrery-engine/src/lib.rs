pub mod api;
pub mod assets;
pub mod core;
pub mod input;
pub mod render;
pub mod runner;

// Re-export key types at crate root for convenience
pub use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use crate::api::types::{EntityId, GameEvent};
pub use crate::assets::manifest::{AssetManifest, ImageDescriptor};
pub use crate::assets::registry::{ImageFrame, ImageRegistry};
pub use crate::core::clock::FrameClock;
pub use crate::core::rng::Rng;
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::render::instance::{SpriteBuffer, SpriteInstance};
pub use crate::runner::GameRunner;

#[cfg(feature = "vectors")]
pub use crate::render::vector::{VectorColor, VectorState, VectorVertex};
