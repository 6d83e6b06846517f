//! The entity registry and its per-tick lifecycle:
//! apply controls → update all → scan for destroyed → remove at most
//! one → (the caller then draws everything that is left, in order).

use glam::Vec2;
use orrery_engine::{
    EntityId, ImageRegistry, RenderContext, Rng, SpriteInstance, VectorColor,
};

use crate::backdrop::Backdrop;
use crate::bodies::{self, BodyKind};
use crate::error::SpawnError;
use crate::orbit::EARTH_SUN_DISTANCE_M;
use crate::planet::Planet;
use crate::sun::Sun;

/// God-mode orbit radius draw, in pixels.
pub const SPAWN_RADIUS_MIN_PX: i32 = 100;
pub const SPAWN_RADIUS_MAX_PX: i32 = 800;
/// Per-body astronomical unit draw, in meters.
pub const SPAWN_AU_MIN_M: f64 = 1.1e11;
pub const SPAWN_AU_MAX_M: f64 = 1.9e11;

/// Surface alpha right after a body is swallowed, and the per-tick ramp
/// back to fully opaque.
const FADE_FLOOR: f32 = 0.5;
const FADE_STEP: f32 = 0.01;

const TRAIL_DASH_PX: f32 = 0.5;
const TRAIL_GAP_PX: f32 = 20.0;
const TRAIL_WIDTH_PX: f32 = 2.0;
const TRAIL_COLOR: VectorColor = VectorColor::AMBER;
const ORBIT_GUIDE_ALPHA: f32 = 0.15;
const HALO_ALPHA: f32 = 0.12;

/// Live user inputs, written only by the input-mapping layer and read
/// by the world at the top of each tick.
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub mass_factor: f64,
    pub scale_factor: f32,
    pub show_orbit: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            mass_factor: 1.0,
            scale_factor: 1.0,
            show_orbit: false,
        }
    }
}

/// Everything that can live in the registry. Matching on the variant is
/// the only way entities are told apart.
#[derive(Debug, Clone)]
pub enum Entity {
    Backdrop(Backdrop),
    Sun(Sun),
    Planet(Planet),
}

impl Entity {
    pub fn id(&self) -> Option<EntityId> {
        match self {
            Entity::Backdrop(b) => Some(b.id),
            Entity::Sun(_) => None,
            Entity::Planet(p) => Some(p.id),
        }
    }

    pub fn destroyed(&self) -> bool {
        match self {
            Entity::Planet(p) => p.destroyed,
            _ => false,
        }
    }
}

/// The world: an insertion-ordered entity list (order is draw layering)
/// plus the seeded RNG every randomized spawn draws from.
pub struct World {
    entities: Vec<Entity>,
    rng: Rng,
    next_id: u32,
    surface: Vec2,
    fade: f32,
}

impl World {
    /// Build the starting scene: backdrop, sun, and one Earth on the
    /// canonical orbit. The default scene never draws from the RNG, so
    /// it is identical for every seed.
    pub fn new(
        seed: u64,
        surface_width: f32,
        surface_height: f32,
        registry: &ImageRegistry,
    ) -> Result<Self, SpawnError> {
        let sun_frame = registry.get("sun").ok_or(SpawnError::MissingImage("sun"))?;

        let mut world = Self {
            entities: Vec::new(),
            rng: Rng::new(seed),
            next_id: 1,
            surface: Vec2::new(surface_width, surface_height),
            fade: 1.0,
        };

        let backdrop_id = world.alloc_id();
        world.entities.push(Entity::Backdrop(Backdrop::new(
            backdrop_id,
            registry.backdrops().to_vec(),
        )));
        world
            .entities
            .push(Entity::Sun(Sun::new(surface_width, surface_height, sun_frame)));

        let earth = bodies::defaults(BodyKind::Earth);
        world.spawn_body(
            registry,
            BodyKind::Earth,
            earth.orbit_radius_px,
            earth.sprite_scale,
            EARTH_SUN_DISTANCE_M,
        )?;

        log::info!("world initialized with {} entities", world.entities.len());
        Ok(world)
    }

    pub(crate) fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a body with explicit geometry. Invalid requests leave the
    /// world untouched.
    pub fn spawn_body(
        &mut self,
        registry: &ImageRegistry,
        kind: BodyKind,
        orbit_radius_px: f64,
        sprite_scale: f32,
        astronomical_unit_m: f64,
    ) -> Result<EntityId, SpawnError> {
        let frame = registry
            .get(kind.image_name())
            .ok_or(SpawnError::MissingImage(kind.image_name()))?;
        let sun = self.sun().ok_or(SpawnError::MissingCentralBody)?.state();

        let id = self.alloc_id();
        let planet = Planet::spawn(
            id,
            kind,
            frame,
            sprite_scale,
            orbit_radius_px,
            astronomical_unit_m,
            &sun,
        )?;
        self.entities.push(Entity::Planet(planet));
        log::info!("spawned {kind:?} as {id:?} at {orbit_radius_px} px");
        Ok(id)
    }

    /// God-mode spawn: random kind, random orbit radius, random
    /// astronomical unit, all drawn from the world's seeded RNG.
    pub fn spawn_random(&mut self, registry: &ImageRegistry) -> Result<EntityId, SpawnError> {
        let kind = BodyKind::SPAWNABLE[self.rng.pick(BodyKind::SPAWNABLE.len() as u32) as usize];
        let orbit_radius_px =
            self.rng.range_i32(SPAWN_RADIUS_MIN_PX, SPAWN_RADIUS_MAX_PX) as f64;
        let astronomical_unit_m = self.rng.range_f64(SPAWN_AU_MIN_M, SPAWN_AU_MAX_M);
        let sprite_scale = bodies::defaults(kind).sprite_scale;
        self.spawn_body(registry, kind, orbit_radius_px, sprite_scale, astronomical_unit_m)
    }

    /// One simulation tick. Returns the id of the entity removed this
    /// tick, if any.
    pub fn tick(&mut self, controls: &Controls) -> Option<EntityId> {
        // Controls land on the sun first; every body reads the result
        // through the state captured below.
        for entity in &mut self.entities {
            if let Entity::Sun(sun) = entity {
                sun.set_scale_factor(controls.scale_factor);
                sun.set_mass_factor(controls.mass_factor);
            }
        }
        let sun = self.sun()?.state();

        for entity in &mut self.entities {
            if let Entity::Planet(planet) = entity {
                planet.update(&sun, controls.show_orbit);
            }
        }

        // Forward scan; the last destroyed entity found wins, and only
        // that one is removed this tick. Further casualties wait for
        // the next pass.
        let mut doomed = None;
        for entity in &self.entities {
            if entity.destroyed() {
                doomed = entity.id();
            }
        }
        let removed = doomed.filter(|id| self.despawn(*id));

        if removed.is_some() {
            self.fade = FADE_FLOOR;
        } else if self.fade < 1.0 {
            self.fade = (self.fade + FADE_STEP).min(1.0);
        }
        removed
    }

    /// Remove an entity by id. Removing an id that is not present is a
    /// no-op, never an error.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        if let Some(index) = self.entities.iter().position(|e| e.id() == Some(id)) {
            let entity = self.entities.remove(index);
            if let Entity::Planet(planet) = &entity {
                log::info!("removed {:?} body {:?}", planet.kind, id);
            }
            true
        } else {
            false
        }
    }

    /// Emit this frame's draw list in entity order. The caller has
    /// already cleared the buffers.
    pub fn draw(&self, rctx: &mut RenderContext<'_>) {
        let sun_center = self.sun().map(Sun::center);

        for entity in &self.entities {
            match entity {
                Entity::Backdrop(backdrop) => {
                    if let Some(frame) = backdrop.current() {
                        rctx.sprites.push(SpriteInstance {
                            x: self.surface.x / 2.0,
                            y: self.surface.y / 2.0,
                            image: frame.index as f32,
                            alpha: 1.0,
                            half_w: self.surface.x / 2.0,
                            half_h: self.surface.y / 2.0,
                            ..Default::default()
                        });
                    }
                }
                Entity::Sun(sun) => {
                    let center = sun.center();
                    rctx.vectors.fill_circle(
                        center,
                        sun.collision_radius() * 1.2,
                        VectorColor::YELLOW.with_alpha(HALO_ALPHA),
                    );
                    let half = sun.half_extents();
                    rctx.sprites.push(SpriteInstance {
                        x: center.x,
                        y: center.y,
                        image: sun.frame().index as f32,
                        alpha: 1.0,
                        half_w: half.x,
                        half_h: half.y,
                        ..Default::default()
                    });
                }
                Entity::Planet(planet) => {
                    if planet.show_orbit {
                        if let Some(center) = sun_center {
                            rctx.vectors.stroke_circle(
                                center,
                                planet.scaled_distance() as f32,
                                1.0,
                                VectorColor::WHITE.with_alpha(ORBIT_GUIDE_ALPHA),
                            );
                        }
                        rctx.vectors.dashed_segment(
                            planet.prev_pos,
                            planet.pos,
                            TRAIL_DASH_PX,
                            TRAIL_GAP_PX,
                            TRAIL_WIDTH_PX,
                            TRAIL_COLOR,
                        );
                    }
                    let half = planet.half_extents();
                    rctx.sprites.push(SpriteInstance {
                        x: planet.pos.x,
                        y: planet.pos.y,
                        image: planet.frame().index as f32,
                        alpha: 1.0,
                        half_w: half.x,
                        half_h: half.y,
                        ..Default::default()
                    });
                }
            }
        }
    }

    /// Put every body back on its spawn orbit.
    pub fn reset_orbits(&mut self) {
        for entity in &mut self.entities {
            if let Entity::Planet(planet) = entity {
                planet.reset_orbit();
            }
        }
    }

    /// Rotate the backdrop image.
    pub fn cycle_backdrop(&mut self) {
        for entity in &mut self.entities {
            if let Entity::Backdrop(backdrop) = entity {
                backdrop.cycle();
            }
        }
    }

    pub fn sun(&self) -> Option<&Sun> {
        self.entities.iter().find_map(|e| match e {
            Entity::Sun(sun) => Some(sun),
            _ => None,
        })
    }

    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Planet(planet) => Some(planet),
            _ => None,
        })
    }

    pub fn planet_count(&self) -> usize {
        self.planets().count()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Surface opacity the host applies this frame (dips after a body
    /// is swallowed, then recovers).
    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub(crate) fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }
}
