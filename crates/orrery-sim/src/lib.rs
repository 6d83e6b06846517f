//! An interactive orrery: one sun whose mass and size track a live user
//! control, plus any number of spawnable planets, each advanced by a
//! sub-stepped polar Euler integrator and destroyed when it falls into
//! the sun. Headless: rendering, input capture and persistence
//! transport live on the host side of the `orrery-engine` buffers.

pub mod backdrop;
pub mod bodies;
pub mod error;
pub mod game;
pub mod orbit;
pub mod planet;
pub mod scaling;
pub mod snapshot;
pub mod sun;
pub mod world;

pub use error::{SnapshotError, SpawnError};
pub use game::Orrery;
pub use orbit::{InitialConditions, OrbitalState, Polar};
pub use planet::Planet;
pub use scaling::OrbitScale;
pub use snapshot::WorldSnapshot;
pub use sun::{Sun, SunState};
pub use world::{Controls, Entity, World};
