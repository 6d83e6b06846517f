//! Error types for the simulation crate.
//!
//! Nothing here ever reaches an end user as text: a rejected spawn is
//! logged and ignored, a malformed snapshot leaves the world as it was.

use thiserror::Error;

/// A body construction request that cannot produce a valid orbit.
#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    #[error("pixel orbit radius must be positive (got {0})")]
    OrbitRadius(f64),

    #[error("astronomical unit must be positive (got {0})")]
    AstronomicalUnit(f64),

    #[error("no image frame registered for {0:?}")]
    MissingImage(&'static str),

    #[error("world has no central body")]
    MissingCentralBody,
}

/// A persisted world payload that cannot be decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
