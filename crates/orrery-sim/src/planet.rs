//! An orbiting body: one orbital state, one distance scale, one sprite.

use glam::Vec2;
use orrery_engine::{EntityId, ImageFrame};

use crate::bodies::BodyKind;
use crate::error::SpawnError;
use crate::orbit::{InitialConditions, OrbitalState, Polar};
use crate::scaling::OrbitScale;
use crate::sun::SunState;

/// A planet in orbit around the sun. Holds its polar state plus the
/// screen-space pair (current and previous position) the trail renderer
/// consumes. The `destroyed` flag is set here; removal belongs to the
/// world.
#[derive(Debug, Clone)]
pub struct Planet {
    pub id: EntityId,
    pub kind: BodyKind,
    frame: ImageFrame,
    sprite_scale: f32,
    scale: OrbitScale,
    initial: InitialConditions,
    state: OrbitalState,
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub destroyed: bool,
    pub show_orbit: bool,
}

impl Planet {
    /// Spawn a body on a fresh near-circular orbit. Fails when the
    /// requested geometry cannot produce a valid scale.
    pub fn spawn(
        id: EntityId,
        kind: BodyKind,
        frame: ImageFrame,
        sprite_scale: f32,
        orbit_radius_px: f64,
        astronomical_unit_m: f64,
        sun: &SunState,
    ) -> Result<Self, SpawnError> {
        let initial = InitialConditions::circular(astronomical_unit_m);
        let state = OrbitalState::from_initial(&initial);
        Self::assemble(id, kind, frame, sprite_scale, orbit_radius_px, initial, state, sun)
    }

    /// Rebuild a body from persisted orbital state, without drawing any
    /// randomness.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EntityId,
        kind: BodyKind,
        frame: ImageFrame,
        sprite_scale: f32,
        orbit_radius_px: f64,
        astronomical_unit_m: f64,
        distance: Polar,
        angle: Polar,
        sun: &SunState,
    ) -> Result<Self, SpawnError> {
        let initial = InitialConditions::circular(astronomical_unit_m);
        let mut state = OrbitalState::from_initial(&initial);
        state.distance = distance;
        state.angle = angle;
        Self::assemble(id, kind, frame, sprite_scale, orbit_radius_px, initial, state, sun)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        id: EntityId,
        kind: BodyKind,
        frame: ImageFrame,
        sprite_scale: f32,
        orbit_radius_px: f64,
        initial: InitialConditions,
        state: OrbitalState,
        sun: &SunState,
    ) -> Result<Self, SpawnError> {
        let scale = OrbitScale::new(initial.distance.value, orbit_radius_px)?;
        let mut planet = Self {
            id,
            kind,
            frame,
            sprite_scale,
            scale,
            initial,
            state,
            pos: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            destroyed: false,
            show_orbit: false,
        };
        planet.pos = planet.screen_position(sun);
        planet.prev_pos = planet.pos;
        Ok(planet)
    }

    /// One visual tick: refresh the central mass from the sun, run the
    /// sub-stepped integration, derive the new screen position, and flag
    /// destruction on sun contact or a collapsed orbit.
    pub fn update(&mut self, sun: &SunState, show_orbit: bool) {
        if self.destroyed {
            return;
        }
        self.show_orbit = show_orbit;
        self.state.set_central_mass_factor(sun.mass_factor);
        self.prev_pos = self.pos;

        if !self.state.advance_day() {
            log::warn!("{:?} orbit collapsed, destroying body {:?}", self.kind, self.id);
            self.destroyed = true;
            return;
        }

        self.pos = self.screen_position(sun);
        if self.pos.distance(sun.center) < sun.collision_radius {
            self.destroyed = true;
        }
    }

    /// Screen position from the polar state. The angle is negated on
    /// the y axis because screen y grows downward.
    fn screen_position(&self, sun: &SunState) -> Vec2 {
        let distance_px = self.scaled_distance() as f32;
        let theta = self.state.angle.value;
        Vec2::new(
            theta.cos() as f32 * distance_px + sun.center.x,
            (-theta).sin() as f32 * distance_px + sun.center.y,
        )
    }

    /// Current orbital distance in pixels.
    pub fn scaled_distance(&self) -> f64 {
        self.scale.to_pixels(self.state.distance.value)
    }

    /// Put the body back on its spawn orbit.
    pub fn reset_orbit(&mut self) {
        self.state.reset(&self.initial);
    }

    pub fn state(&self) -> &OrbitalState {
        &self.state
    }

    pub fn initial(&self) -> &InitialConditions {
        &self.initial
    }

    pub fn orbit_scale(&self) -> OrbitScale {
        self.scale
    }

    pub fn sprite_scale(&self) -> f32 {
        self.sprite_scale
    }

    pub fn frame(&self) -> ImageFrame {
        self.frame
    }

    /// Scaled sprite half-extents for drawing.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.frame.frame_width, self.frame.frame_height) * self.sprite_scale * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::EARTH_SUN_DISTANCE_M;

    fn frame() -> ImageFrame {
        ImageFrame {
            index: 8,
            frame_width: 1600.0,
            frame_height: 1600.0,
        }
    }

    fn sun() -> SunState {
        SunState {
            center: Vec2::new(800.0, 450.0),
            collision_radius: 82.5,
            mass_factor: 1.0,
        }
    }

    fn earth(orbit_radius_px: f64) -> Planet {
        Planet::spawn(
            EntityId(1),
            BodyKind::Earth,
            frame(),
            0.02,
            orbit_radius_px,
            EARTH_SUN_DISTANCE_M,
            &sun(),
        )
        .unwrap()
    }

    #[test]
    fn spawn_rejects_bad_geometry() {
        let err = Planet::spawn(
            EntityId(1),
            BodyKind::Moon,
            frame(),
            0.02,
            0.0,
            EARTH_SUN_DISTANCE_M,
            &sun(),
        );
        assert_eq!(err.unwrap_err(), SpawnError::OrbitRadius(0.0));

        let err = Planet::spawn(EntityId(1), BodyKind::Moon, frame(), 0.02, 300.0, -1.0, &sun());
        assert_eq!(err.unwrap_err(), SpawnError::AstronomicalUnit(-1.0));
    }

    #[test]
    fn spawn_position_sits_on_the_orbit_circle() {
        let planet = earth(300.0);
        let radius = planet.pos.distance(sun().center);
        assert!((radius - 300.0).abs() < 0.5, "spawn radius {radius}");
        assert_eq!(planet.pos, planet.prev_pos);
    }

    #[test]
    fn update_moves_the_body_and_keeps_the_trail_pair() {
        let mut planet = earth(300.0);
        let spawn_pos = planet.pos;
        planet.update(&sun(), true);

        assert!(planet.show_orbit);
        assert!(!planet.destroyed);
        assert_eq!(planet.prev_pos, spawn_pos);
        assert_ne!(planet.pos, spawn_pos);
    }

    #[test]
    fn body_inside_the_sun_is_flagged_not_removed() {
        // 50 px orbit is well inside the 82.5 px collision radius.
        let mut planet = earth(50.0);
        planet.update(&sun(), false);
        assert!(planet.destroyed);

        // A destroyed body no longer advances.
        let frozen = planet.pos;
        planet.update(&sun(), false);
        assert_eq!(planet.pos, frozen);
    }

    #[test]
    fn reset_returns_to_spawn_conditions() {
        let mut planet = earth(300.0);
        for _ in 0..5 {
            planet.update(&sun(), false);
        }
        planet.reset_orbit();
        assert_eq!(planet.state().distance, planet.initial().distance);
        assert_eq!(planet.state().angle, planet.initial().angle);
    }
}
