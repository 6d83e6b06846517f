//! Conversion between physical orbit distances and on-screen pixels.

use crate::error::SpawnError;

/// Per-body distance scale, fixed at spawn: the body's physical orbit
/// unit mapped onto its configured on-screen orbit radius. Pure data
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitScale {
    astronomical_unit_m: f64,
    pixel_orbit_radius: f64,
    meters_per_pixel: f64,
}

impl OrbitScale {
    /// Build the scale, rejecting configurations that would divide by
    /// zero or flip signs downstream.
    pub fn new(astronomical_unit_m: f64, pixel_orbit_radius: f64) -> Result<Self, SpawnError> {
        if !(pixel_orbit_radius > 0.0) {
            return Err(SpawnError::OrbitRadius(pixel_orbit_radius));
        }
        if !(astronomical_unit_m > 0.0) {
            return Err(SpawnError::AstronomicalUnit(astronomical_unit_m));
        }
        Ok(Self {
            astronomical_unit_m,
            pixel_orbit_radius,
            meters_per_pixel: astronomical_unit_m / pixel_orbit_radius,
        })
    }

    /// Physical meters to screen pixels.
    pub fn to_pixels(&self, meters: f64) -> f64 {
        meters / self.meters_per_pixel
    }

    pub fn astronomical_unit_m(&self) -> f64 {
        self.astronomical_unit_m
    }

    pub fn pixel_orbit_radius(&self) -> f64 {
        self.pixel_orbit_radius
    }
}
