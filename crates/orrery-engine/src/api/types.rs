use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Raw id as a float, for event payloads.
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

/// A game event communicated to the host each frame.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Pod so the host can read the event list as a flat float buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), 16);
        assert_eq!(GameEvent::FLOATS, 4);
    }

    #[test]
    fn entity_id_payload() {
        assert_eq!(EntityId(7).as_f32(), 7.0);
    }
}
