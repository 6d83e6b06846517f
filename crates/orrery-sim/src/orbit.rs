//! Polar two-body orbital state and its Euler integrator. Pure math,
//! no engine dependencies.
//!
//! A body is a test mass in the field of one central mass. Its state is
//! the radial distance and the angle around the sun, each with a first
//! derivative, evolved by the pair of equations of motion
//!
//! ```text
//! r̈ = r·ω² − G·M/r²
//! θ̈ = −2·ṙ·ω / r
//! ```
//!
//! integrated with a fixed-step explicit Euler scheme, sub-stepped one
//! thousand times per simulated day. f64 throughout; screen-space
//! conversion happens elsewhere.

use std::f64::consts::{FRAC_PI_6, TAU};

pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;
/// Reference solar mass; the live mass factor multiplies this.
pub const SUN_MASS_KG: f64 = 1.98855e30;
/// One astronomical unit, the canonical starting radius.
pub const EARTH_SUN_DISTANCE_M: f64 = 1.496e11;
/// Angular speed of a one-year circular orbit at one AU, rad/s.
pub const EARTH_ANGULAR_SPEED: f64 = 1.990986e-7;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Euler sub-steps per simulated day. One visual tick advances one day;
/// the small `Δt = SECONDS_PER_DAY / SUBSTEPS_PER_TICK` is what keeps
/// the non-conservative explicit scheme stable at orbital speeds.
pub const SUBSTEPS_PER_TICK: u32 = 1_000;

/// One polar coordinate and its first time derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub value: f64,
    pub speed: f64,
}

impl Polar {
    pub const fn new(value: f64, speed: f64) -> Self {
        Self { value, speed }
    }
}

/// The state a body starts from, and returns to on an orbit reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub distance: Polar,
    pub angle: Polar,
}

impl InitialConditions {
    /// A near-circular orbit at the given radius: no radial speed, the
    /// reference angular speed, and an arbitrary starting angle.
    pub fn circular(distance_m: f64) -> Self {
        Self {
            distance: Polar::new(distance_m, 0.0),
            angle: Polar::new(FRAC_PI_6, EARTH_ANGULAR_SPEED),
        }
    }
}

/// Live orbital state of one body. `central_mass_kg` is refreshed from
/// the sun's mass factor before every tick, so user input feeds the very
/// next acceleration with no smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    pub distance: Polar,
    pub angle: Polar,
    pub central_mass_kg: f64,
}

impl OrbitalState {
    pub fn from_initial(initial: &InitialConditions) -> Self {
        Self {
            distance: initial.distance,
            angle: initial.angle,
            central_mass_kg: SUN_MASS_KG,
        }
    }

    /// Copy the initial conditions back in, exactly.
    pub fn reset(&mut self, initial: &InitialConditions) {
        self.distance = initial.distance;
        self.angle = initial.angle;
    }

    pub fn set_central_mass_factor(&mut self, factor: f64) {
        self.central_mass_kg = SUN_MASS_KG * factor;
    }

    /// Second time derivative of the distance: centrifugal term minus
    /// gravitational attraction.
    pub fn distance_acceleration(&self) -> f64 {
        let r = self.distance.value;
        r * self.angle.speed * self.angle.speed
            - GRAVITATIONAL_CONSTANT * self.central_mass_kg / (r * r)
    }

    /// Second time derivative of the angle (angular momentum exchange
    /// with the changing radius).
    pub fn angle_acceleration(&self) -> f64 {
        -2.0 * self.distance.speed * self.angle.speed / self.distance.value
    }

    /// One Euler sub-step. The order is fixed: distance first, then
    /// angle computed against the already-updated radial state.
    pub fn step(&mut self, dt: f64) {
        let radial = self.distance_acceleration();
        self.distance.speed += dt * radial;
        self.distance.value += dt * self.distance.speed;

        let angular = self.angle_acceleration();
        self.angle.speed += dt * angular;
        self.angle.value += dt * self.angle.speed;

        // Keep the angle in [0, 2π) for either orbit direction.
        self.angle.value = self.angle.value.rem_euclid(TAU);
    }

    /// Advance one simulated day in `SUBSTEPS_PER_TICK` sub-steps.
    ///
    /// Returns `false` when the radius collapses to zero, negative or
    /// non-finite: the accelerations divide by `r`, so that state is
    /// terminal for the body rather than a numeric fault.
    pub fn advance_day(&mut self) -> bool {
        let dt = SECONDS_PER_DAY / SUBSTEPS_PER_TICK as f64;
        for _ in 0..SUBSTEPS_PER_TICK {
            if !(self.distance.value > 0.0) {
                return false;
            }
            self.step(dt);
        }
        self.distance.value > 0.0
    }
}
