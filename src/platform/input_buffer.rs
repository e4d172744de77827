//=========================================================================
// Input Buffer
//=========================================================================
//
// Holds input between two redraws on the platform thread.
//
// Architecture:
//   push_discrete()   → Vec<InputEvent>      (order kept)
//   push_continuous() → HashSet<InputEvent>  (latest per kind wins)
//   drain()           → Some((discrete, continuous)) or None when empty
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    /// Appends a key or button transition. An exact repeat of the previous
    /// event is dropped.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Stores a continuous event, replacing any earlier one of its kind.
    /// `MouseMoved` compares equal regardless of position.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Takes everything buffered since the last drain.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.discrete.capacity();
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(capacity));
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers, MouseButton};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn discrete_keeps_order_and_drops_exact_repeats() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::Space));
        buffer.push_discrete(key_down(KeyCode::Space));
        buffer.push_discrete(key_up(KeyCode::Space));
        buffer.push_discrete(key_down(KeyCode::Space));

        let drained = buffer.drain();
        assert!(drained.is_some());
        if let Some((discrete, continuous)) = drained {
            assert_eq!(
                discrete,
                vec![key_down(KeyCode::Space), key_up(KeyCode::Space), key_down(KeyCode::Space)]
            );
            assert!(continuous.is_empty());
        }
    }

    #[test]
    fn cursor_motion_coalesces_to_latest() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(InputEvent::MouseMoved { x: 1.0, y: 1.0 });
        buffer.push_continuous(InputEvent::MouseMoved { x: 20.0, y: 30.0 });
        assert_eq!(buffer.len(), 1);

        match buffer.drain() {
            Some((_, continuous)) => match continuous.as_slice() {
                [InputEvent::MouseMoved { x, y }] => assert_eq!((*x, *y), (20.0, 30.0)),
                other => panic!("expected one MouseMoved, got {:?}", other),
            },
            None => panic!("expected buffered motion"),
        }
    }

    #[test]
    fn drain_empties_but_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for i in 0..100 {
            let button = if i % 2 == 0 { MouseButton::Left } else { MouseButton::Right };
            buffer.push_discrete(InputEvent::MouseButtonDown { button, modifiers: Modifiers::NONE });
        }
        let capacity = buffer.discrete.capacity();

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.discrete.capacity() >= capacity);
    }
}
