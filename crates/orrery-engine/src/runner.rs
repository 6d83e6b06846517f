use crate::api::game::{EngineContext, Game, RenderContext};
use crate::core::clock::FrameClock;
use crate::input::queue::{InputEvent, InputQueue};
use crate::render::instance::SpriteBuffer;
#[cfg(feature = "vectors")]
use crate::render::vector::VectorState;

/// Generic frame driver wiring up the engine loop for one game.
///
/// Single-threaded by construction: the host calls `tick` once per
/// display frame; the fixed-step updates and the draw pass run to
/// completion inside that call, so nothing observes mid-tick state.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    sprites: SpriteBuffer,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
    clock: FrameClock,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::with_capacity(config.max_events),
            input: InputQueue::new(),
            sprites: SpriteBuffer::with_capacity(config.max_instances),
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            clock: FrameClock::new(config.fixed_dt),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue. Host-side, between frames.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fixed-step updates, then the draw pass over the
    /// (possibly shrunk) world. Update always precedes draw.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.clock.advance(frame_dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Input is consumed once per frame, after the update pass.
        self.input.drain();

        // Clear the draw surface once, then draw everything in order.
        self.sprites.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();

        let mut rctx = RenderContext {
            sprites: &mut self.sprites,
            #[cfg(feature = "vectors")]
            vectors: &mut self.vectors,
        };
        self.game.render(&mut rctx);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    // ---- Buffer accessors for the host ----

    pub fn sprites(&self) -> &SpriteBuffer {
        &self.sprites
    }

    pub fn sprite_count(&self) -> u32 {
        self.sprites.len() as u32
    }

    pub fn sprites_ptr(&self) -> *const f32 {
        self.sprites.as_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vectors_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn events(&self) -> &[crate::api::types::GameEvent] {
        &self.ctx.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::api::types::GameEvent;
    use crate::render::instance::SpriteInstance;

    /// Counts lifecycle calls and draws one sprite per render pass.
    struct Probe {
        updates: u32,
        inited: bool,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            GameConfig::default()
        }

        fn init(&mut self, _ctx: &mut EngineContext) {
            self.inited = true;
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            if !input.is_empty() {
                ctx.emit(GameEvent::new(9.0, input.len() as f32, 0.0, 0.0));
            }
        }

        fn render(&self, rctx: &mut RenderContext<'_>) {
            rctx.sprites.push(SpriteInstance::default());
        }
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = GameRunner::new(Probe {
            updates: 0,
            inited: false,
        });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().updates, 0);
        assert_eq!(runner.sprite_count(), 0);
    }

    #[test]
    fn update_runs_before_draw_and_buffers_reset() {
        let mut runner = GameRunner::new(Probe {
            updates: 0,
            inited: false,
        });
        runner.init();
        assert!(runner.game().inited);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().updates, 1);
        // One render pass per tick, buffer cleared in between.
        assert_eq!(runner.sprite_count(), 1);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.sprite_count(), 1);
    }

    #[test]
    fn input_is_visible_during_update_then_drained() {
        let mut runner = GameRunner::new(Probe {
            updates: 0,
            inited: false,
        });
        runner.init();
        runner.push_input(InputEvent::Custom {
            kind: 1,
            a: 0.5,
            b: 0.0,
            c: 0.0,
        });

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.events().len(), 1);

        runner.tick(1.0 / 60.0);
        assert!(runner.events().is_empty());
    }
}
