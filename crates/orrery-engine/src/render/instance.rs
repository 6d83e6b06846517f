use bytemuck::{Pod, Zeroable};

/// Per-sprite render data read by the host renderer as a flat float
/// buffer. Must keep an 8-float = 32-byte stride.
///
/// Sprites are anchored at their center; `half_w`/`half_h` are the
/// scaled frame half-extents the host uses to place the quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Center x in surface pixels.
    pub x: f32,
    /// Center y in surface pixels.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Image index into the asset manifest's image list.
    pub image: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Scaled frame half-width in pixels.
    pub half_w: f32,
    /// Scaled frame half-height in pixels.
    pub half_h: f32,
    /// Keeps the stride at 8 floats; unused.
    pub reserved: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Ordered sprite list for one frame. Order is draw order: earlier
/// instances render underneath later ones.
pub struct SpriteBuffer {
    instances: Vec<SpriteInstance>,
}

impl SpriteBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SpriteInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn as_slice(&self) -> &[SpriteInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for host buffer copies.
    pub fn as_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for SpriteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
        assert_eq!(SpriteInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn buffer_keeps_push_order() {
        let mut buf = SpriteBuffer::new();
        buf.push(SpriteInstance {
            image: 3.0,
            ..Default::default()
        });
        buf.push(SpriteInstance {
            image: 1.0,
            ..Default::default()
        });
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_slice()[0].image, 3.0);
        assert_eq!(buf.as_slice()[1].image, 1.0);

        buf.clear();
        assert!(buf.is_empty());
    }
}
