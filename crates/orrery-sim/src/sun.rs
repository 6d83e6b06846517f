//! The central body. Created once at world start, never destroyed;
//! its scale and mass factors track live user input between ticks.

use glam::Vec2;
use orrery_engine::ImageFrame;

const BASE_SCALE: f32 = 0.3;
const BASE_RADIUS_PX: f32 = 275.0;

/// The sun. Visual scale and gravitational mass are both expressed as
/// factors over fixed bases, adjustable independently of each other.
#[derive(Debug, Clone)]
pub struct Sun {
    center: Vec2,
    frame: ImageFrame,
    base_scale: f32,
    scale: f32,
    base_radius_px: f32,
    radius_px: f32,
    mass_factor: f64,
}

impl Sun {
    /// A sun centered on the drawing surface.
    pub fn new(surface_width: f32, surface_height: f32, frame: ImageFrame) -> Self {
        Self {
            center: Vec2::new(surface_width / 2.0, surface_height / 2.0),
            frame,
            base_scale: BASE_SCALE,
            scale: BASE_SCALE,
            base_radius_px: BASE_RADIUS_PX,
            radius_px: BASE_RADIUS_PX,
            mass_factor: 1.0,
        }
    }

    /// Apply a visual scale factor: both the sprite scale and the
    /// surface radius derive from it.
    pub fn set_scale_factor(&mut self, factor: f32) {
        self.scale = factor * self.base_scale;
        self.radius_px = factor * self.base_radius_px;
    }

    /// The mass factor is independent of the visual scale.
    pub fn set_mass_factor(&mut self, factor: f64) {
        self.mass_factor = factor;
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn radius_px(&self) -> f32 {
        self.radius_px
    }

    pub fn mass_factor(&self) -> f64 {
        self.mass_factor
    }

    pub fn frame(&self) -> ImageFrame {
        self.frame
    }

    /// Radius of the surface a body dies on when it crosses.
    pub fn collision_radius(&self) -> f32 {
        self.radius_px * self.scale
    }

    /// Scaled sprite half-extents for drawing.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.frame.frame_width, self.frame.frame_height) * self.scale * 0.5
    }

    /// Immutable per-tick view handed to every orbiting body.
    pub fn state(&self) -> SunState {
        SunState {
            center: self.center,
            collision_radius: self.collision_radius(),
            mass_factor: self.mass_factor,
        }
    }
}

/// The slice of sun state a body needs for one update: where it is, how
/// big its death surface is, and how heavy it currently is.
#[derive(Debug, Clone, Copy)]
pub struct SunState {
    pub center: Vec2,
    pub collision_radius: f32,
    pub mass_factor: f64,
}
