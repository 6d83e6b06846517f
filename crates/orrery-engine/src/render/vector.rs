//! Lyon-based vector drawing for orbit trails and halos.
//!
//! CPU-side tessellation of circles, polylines and dashed segments into
//! a flat triangle-list vertex buffer the host renders directly.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Per-vertex data for vector rendering. 6 floats = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 0.9, 0.4);
    pub const AMBER: Self = Self::rgb(0.93, 0.62, 0.06);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

struct FillCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

struct StrokeCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Holds the tessellators and the per-frame output vertex buffer.
/// Cleared by the runner before each render pass.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer for host copies.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer
                .extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate and fill a circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(
            point(center.x, center.y),
            radius,
            lyon::path::Winding::Positive,
        );
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillCtor { color }),
        );
        if result.is_ok() {
            self.flush_geometry();
        }
    }

    /// Tessellate a stroked circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(
            point(center.x, center.y),
            radius,
            lyon::path::Winding::Positive,
        );
        self.stroke_built(builder.build(), width, color);
    }

    /// Tessellate a dashed line segment with the given on/off pixel
    /// pattern. Each dash becomes its own open subpath.
    pub fn dashed_segment(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: f32,
        gap: f32,
        width: f32,
        color: VectorColor,
    ) {
        let delta = to - from;
        let len = delta.length();
        if len <= f32::EPSILON || dash <= 0.0 {
            return;
        }
        let dir = delta / len;
        let period = dash + gap.max(0.0);

        let mut builder = Path::builder();
        let mut t = 0.0;
        while t < len {
            let end = (t + dash).min(len);
            builder.begin(point(from.x + dir.x * t, from.y + dir.y * t));
            builder.line_to(point(from.x + dir.x * end, from.y + dir.y * end));
            builder.end(false);
            t += period;
        }
        self.stroke_built(builder.build(), width, color);
    }

    fn stroke_built(&mut self, path: Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            &path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeCtor { color }),
        );
        if result.is_ok() {
            self.flush_geometry();
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn fill_circle_produces_triangles() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::new(50.0, 50.0), 25.0, VectorColor::YELLOW);
        assert!(state.vertex_count() > 0);
        assert_eq!(state.vertex_count() % 3, 0);
    }

    #[test]
    fn stroke_circle_produces_triangles() {
        let mut state = VectorState::new();
        state.stroke_circle(Vec2::new(0.0, 0.0), 40.0, 1.5, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
    }

    #[test]
    fn degenerate_circle_is_skipped() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::WHITE);
        state.stroke_circle(Vec2::ZERO, -1.0, 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn dashed_segment_draws_multiple_dashes() {
        let mut one_dash = VectorState::new();
        one_dash.dashed_segment(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            20.0,
            0.0,
            2.0,
            VectorColor::AMBER,
        );

        let mut many = VectorState::new();
        many.dashed_segment(
            Vec2::ZERO,
            Vec2::new(200.0, 0.0),
            0.5,
            20.0,
            2.0,
            VectorColor::AMBER,
        );

        assert!(one_dash.vertex_count() > 0);
        // 200 px at a 20.5 px period is ~10 dashes against a single one.
        assert!(many.vertex_count() > one_dash.vertex_count());
    }

    #[test]
    fn zero_length_segment_is_skipped() {
        let mut state = VectorState::new();
        state.dashed_segment(Vec2::ONE, Vec2::ONE, 1.0, 1.0, 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::ZERO, 10.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
    }
}
