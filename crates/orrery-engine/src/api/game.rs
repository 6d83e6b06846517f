use crate::api::types::GameEvent;
use crate::input::queue::InputQueue;
use crate::render::instance::SpriteBuffer;
#[cfg(feature = "vectors")]
use crate::render::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Drawing surface width in pixels.
    pub surface_width: f32,
    /// Drawing surface height in pixels.
    pub surface_height: f32,
    /// Maximum number of sprite instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of vector vertices (default: 16384).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            surface_width: 1600.0,
            surface_height: 900.0,
            max_instances: 256,
            max_vector_vertices: 16384,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Consume input, advance the world state.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only draw pass. The runner clears the buffers in `rctx`
    /// before this is called; the game fills them in draw order.
    fn render(&self, rctx: &mut RenderContext<'_>);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    /// Events emitted this frame, forwarded to the host.
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    pub fn with_capacity(max_events: usize) -> Self {
        Self {
            events: Vec::with_capacity(max_events),
        }
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The draw surface handed to `Game::render`.
pub struct RenderContext<'a> {
    pub sprites: &'a mut SpriteBuffer,
    #[cfg(feature = "vectors")]
    pub vectors: &'a mut VectorState,
}
