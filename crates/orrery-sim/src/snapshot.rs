//! The persisted world payload: enough per-body state to rebuild the
//! simulation without re-randomizing anything. The transport that
//! carries the JSON lives on the host side.

use orrery_engine::ImageRegistry;
use serde::{Deserialize, Serialize};

use crate::bodies::BodyKind;
use crate::error::SnapshotError;
use crate::orbit::Polar;
use crate::planet::Planet;
use crate::world::{Controls, Entity, World};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarSnapshot {
    pub value: f64,
    pub speed: f64,
}

impl From<Polar> for PolarSnapshot {
    fn from(polar: Polar) -> Self {
        Self {
            value: polar.value,
            speed: polar.speed,
        }
    }
}

impl From<PolarSnapshot> for Polar {
    fn from(snap: PolarSnapshot) -> Self {
        Polar::new(snap.value, snap.speed)
    }
}

/// One orbiting body: identity, scaling constants, orbital state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub kind: BodyKind,
    pub sprite_scale: f32,
    pub orbit_radius_px: f64,
    pub astronomical_unit_m: f64,
    pub distance: PolarSnapshot,
    pub angle: PolarSnapshot,
}

/// The sun persists as its control factors, not derived values; restore
/// re-applies them through the usual invariants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SunSnapshot {
    pub scale_factor: f32,
    pub mass_factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub show_orbit: bool,
    pub sun: SunSnapshot,
    pub bodies: Vec<BodySnapshot>,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl World {
    /// Capture the restartable state of the simulation.
    pub fn snapshot(&self, controls: &Controls) -> WorldSnapshot {
        WorldSnapshot {
            show_orbit: controls.show_orbit,
            sun: SunSnapshot {
                scale_factor: controls.scale_factor,
                mass_factor: controls.mass_factor,
            },
            bodies: self
                .planets()
                .map(|planet| BodySnapshot {
                    kind: planet.kind,
                    sprite_scale: planet.sprite_scale(),
                    orbit_radius_px: planet.orbit_scale().pixel_orbit_radius(),
                    astronomical_unit_m: planet.orbit_scale().astronomical_unit_m(),
                    distance: planet.state().distance.into(),
                    angle: planet.state().angle.into(),
                })
                .collect(),
        }
    }

    /// Replace the orbiting bodies with the snapshot's, keeping the
    /// backdrop and sun entities. Bodies that fail to rebuild are
    /// skipped with a warning instead of failing the whole restore.
    /// Returns the control state persisted alongside the bodies.
    pub fn restore(&mut self, snapshot: &WorldSnapshot, registry: &ImageRegistry) -> Controls {
        let controls = Controls {
            mass_factor: snapshot.sun.mass_factor,
            scale_factor: snapshot.sun.scale_factor,
            show_orbit: snapshot.show_orbit,
        };

        self.entities_mut()
            .retain(|entity| !matches!(entity, Entity::Planet(_)));

        // The sun must reflect the restored factors before bodies are
        // placed against it.
        if let Some(sun) = self.entities_mut().iter_mut().find_map(|e| match e {
            Entity::Sun(sun) => Some(sun),
            _ => None,
        }) {
            sun.set_scale_factor(controls.scale_factor);
            sun.set_mass_factor(controls.mass_factor);
        }
        let Some(sun_state) = self.sun().map(|s| s.state()) else {
            log::warn!("restore found no central body; bodies dropped");
            return controls;
        };

        for body in &snapshot.bodies {
            let Some(frame) = registry.get(body.kind.image_name()) else {
                log::warn!("skipping restored body {:?}: no image", body.kind);
                continue;
            };
            let id = self.alloc_id();
            match Planet::restore(
                id,
                body.kind,
                frame,
                body.sprite_scale,
                body.orbit_radius_px,
                body.astronomical_unit_m,
                body.distance.into(),
                body.angle.into(),
                &sun_state,
            ) {
                Ok(mut planet) => {
                    planet.show_orbit = controls.show_orbit;
                    self.entities_mut().push(Entity::Planet(planet));
                }
                Err(err) => log::warn!("skipping restored body {:?}: {err}", body.kind),
            }
        }

        log::info!("restored {} bodies from snapshot", self.planet_count());
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::default_manifest;
    use crate::orbit::EARTH_SUN_DISTANCE_M;

    fn registry() -> ImageRegistry {
        ImageRegistry::from_manifest(&default_manifest())
    }

    fn controls() -> Controls {
        Controls {
            mass_factor: 1.6,
            scale_factor: 0.8,
            show_orbit: true,
        }
    }

    #[test]
    fn snapshot_round_trip_preserves_every_body() {
        let registry = registry();
        let mut world = World::new(21, 1600.0, 900.0, &registry).unwrap();
        for _ in 0..3 {
            world.spawn_random(&registry).unwrap();
        }
        for _ in 0..10 {
            world.tick(&controls());
        }

        let snapshot = world.snapshot(&controls());
        let json = snapshot.to_json().unwrap();
        let decoded = WorldSnapshot::from_json(&json).unwrap();

        let mut fresh = World::new(99, 1600.0, 900.0, &registry).unwrap();
        let restored_controls = fresh.restore(&decoded, &registry);

        assert_eq!(restored_controls.mass_factor, 1.6);
        assert_eq!(restored_controls.scale_factor, 0.8);
        assert!(restored_controls.show_orbit);
        assert_eq!(fresh.planet_count(), world.planet_count());

        for (original, restored) in world.planets().zip(fresh.planets()) {
            assert_eq!(original.kind, restored.kind);
            assert_eq!(original.orbit_scale(), restored.orbit_scale());
            assert_eq!(original.state().distance, restored.state().distance);
            assert_eq!(original.state().angle, restored.state().angle);
            assert!(restored.show_orbit);
        }
    }

    #[test]
    fn invalid_bodies_are_skipped_not_fatal() {
        let registry = registry();
        let mut world = World::new(5, 1600.0, 900.0, &registry).unwrap();

        let snapshot = WorldSnapshot {
            show_orbit: false,
            sun: SunSnapshot {
                scale_factor: 1.0,
                mass_factor: 1.0,
            },
            bodies: vec![
                BodySnapshot {
                    kind: BodyKind::Mars,
                    sprite_scale: 0.01,
                    orbit_radius_px: -40.0, // invalid
                    astronomical_unit_m: EARTH_SUN_DISTANCE_M,
                    distance: PolarSnapshot {
                        value: EARTH_SUN_DISTANCE_M,
                        speed: 0.0,
                    },
                    angle: PolarSnapshot {
                        value: 0.4,
                        speed: 1.99e-7,
                    },
                },
                BodySnapshot {
                    kind: BodyKind::Saturn,
                    sprite_scale: 0.15,
                    orbit_radius_px: 420.0,
                    astronomical_unit_m: EARTH_SUN_DISTANCE_M,
                    distance: PolarSnapshot {
                        value: EARTH_SUN_DISTANCE_M,
                        speed: 0.0,
                    },
                    angle: PolarSnapshot {
                        value: 0.4,
                        speed: 1.99e-7,
                    },
                },
            ],
        };

        world.restore(&snapshot, &registry);
        assert_eq!(world.planet_count(), 1);
        assert_eq!(world.planets().next().unwrap().kind, BodyKind::Saturn);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(WorldSnapshot::from_json("{not json").is_err());
    }
}
