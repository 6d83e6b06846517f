/// Input event types the engine understands.
/// Generic, with no game-specific semantics; UI controls (sliders,
/// buttons) arrive as `Custom` events whose `kind` the game defines.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A click/touch began at surface coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A click/touch ended at surface coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// The cursor moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A host-UI event; `kind` identifies it, `a/b/c` carry payload.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events. The host writes between frames; the game
/// reads during its update pass, and the runner drains afterwards, so
/// no input mutation is ever observed mid-tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called by the host bridge).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_iter_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom {
            kind: 1,
            a: 1.5,
            b: 0.0,
            c: 0.0,
        });
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        assert_eq!(q.iter().count(), 2);

        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_payload_round_trip() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom {
            kind: 4,
            a: 2.0,
            b: 3.0,
            c: 4.0,
        });
        match q.drain()[0] {
            InputEvent::Custom { kind, a, b, c } => {
                assert_eq!((kind, a, b, c), (4, 2.0, 3.0, 4.0));
            }
            _ => panic!("expected Custom event"),
        }
    }
}
