//! The `Game` implementation gluing host input to the world and the
//! world to the host buffers.

use orrery_engine::{
    AssetManifest, EngineContext, Game, GameConfig, GameEvent, ImageRegistry, InputEvent,
    InputQueue, RenderContext,
};

use crate::bodies::default_manifest;
use crate::error::SnapshotError;
use crate::snapshot::WorldSnapshot;
use crate::world::{Controls, World};

const SURFACE_W: f32 = 1600.0;
const SURFACE_H: f32 = 900.0;

/// Custom input kinds the host UI sends.
pub mod custom {
    /// `a` = sun mass factor.
    pub const SET_SUN_MASS: u32 = 1;
    /// `a` = sun scale factor.
    pub const SET_SUN_SCALE: u32 = 2;
    pub const TOGGLE_ORBITS: u32 = 3;
    pub const SPAWN_BODY: u32 = 4;
    pub const CYCLE_BACKDROP: u32 = 5;
    pub const RESET_ORBITS: u32 = 6;
}

/// Game event kinds sent back to the host.
pub mod events {
    /// `a/b` = sun center, `c` = collision radius.
    pub const SUN_STATE: f32 = 1.0;
    /// `a` = body count, `b` = surface fade, `c` = orbit-trails flag.
    pub const WORLD_STATE: f32 = 2.0;
    /// `a` = removed entity id.
    pub const BODY_REMOVED: f32 = 3.0;
}

/// The orrery game: one world, one control block, one asset registry.
pub struct Orrery {
    seed: u64,
    manifest: AssetManifest,
    registry: ImageRegistry,
    controls: Controls,
    world: Option<World>,
}

impl Orrery {
    pub fn new(seed: u64) -> Self {
        let manifest = default_manifest();
        let registry = ImageRegistry::from_manifest(&manifest);
        Self {
            seed,
            manifest,
            registry,
            controls: Controls::default(),
            world: None,
        }
    }

    /// The asset manifest the host should load images from.
    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Serialize the current world for the host's save transport.
    pub fn snapshot_json(&self) -> Result<String, SnapshotError> {
        match &self.world {
            Some(world) => world.snapshot(&self.controls).to_json(),
            None => WorldSnapshot {
                show_orbit: false,
                sun: crate::snapshot::SunSnapshot {
                    scale_factor: 1.0,
                    mass_factor: 1.0,
                },
                bodies: Vec::new(),
            }
            .to_json(),
        }
    }

    /// Rebuild the world from a payload produced by `snapshot_json`.
    pub fn load_snapshot_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        let snapshot = WorldSnapshot::from_json(json)?;
        if let Some(world) = &mut self.world {
            self.controls = world.restore(&snapshot, &self.registry);
        }
        Ok(())
    }

    fn apply_input(&mut self, event: &InputEvent) {
        let InputEvent::Custom { kind, a, .. } = event else {
            return;
        };
        let Some(world) = &mut self.world else {
            return;
        };
        match *kind {
            custom::SET_SUN_MASS => {
                self.controls.mass_factor = (*a as f64).max(0.0);
            }
            custom::SET_SUN_SCALE => {
                self.controls.scale_factor = a.max(0.0);
            }
            custom::TOGGLE_ORBITS => {
                self.controls.show_orbit = !self.controls.show_orbit;
            }
            custom::SPAWN_BODY => {
                if let Err(err) = world.spawn_random(&self.registry) {
                    log::warn!("spawn request ignored: {err}");
                }
            }
            custom::CYCLE_BACKDROP => world.cycle_backdrop(),
            custom::RESET_ORBITS => world.reset_orbits(),
            other => log::debug!("unknown input kind {other}"),
        }
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            surface_width: SURFACE_W,
            surface_height: SURFACE_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        match World::new(self.seed, SURFACE_W, SURFACE_H, &self.registry) {
            Ok(world) => {
                log::info!("orrery initialized ({} entities)", world.entity_count());
                self.world = Some(world);
            }
            Err(err) => log::warn!("world init failed: {err}"),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // Input lands strictly before the world advances, so nothing
        // reads the sun mid-mutation.
        for event in input.iter() {
            self.apply_input(event);
        }

        let Some(world) = &mut self.world else {
            return;
        };
        let removed = world.tick(&self.controls);

        if let Some(sun) = world.sun() {
            ctx.emit(GameEvent::new(
                events::SUN_STATE,
                sun.center().x,
                sun.center().y,
                sun.collision_radius(),
            ));
        }
        ctx.emit(GameEvent::new(
            events::WORLD_STATE,
            world.planet_count() as f32,
            world.fade(),
            if self.controls.show_orbit { 1.0 } else { 0.0 },
        ));
        if let Some(id) = removed {
            ctx.emit(GameEvent::new(events::BODY_REMOVED, id.as_f32(), 0.0, 0.0));
        }
    }

    fn render(&self, rctx: &mut RenderContext<'_>) {
        if let Some(world) = &self.world {
            world.draw(rctx);
        }
    }
}
