//=========================================================================
// Transition Queue
//=========================================================================
//
// Scene transitions requested during a tick.
//
// Scenes (and QTE callbacks running on their behalf) push here; the
// scene manager takes the whole queue at the tick boundary, so requests
// made while transitions are being applied wait for the next tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SceneKey, SceneTransition};

//=== TransitionQueue =====================================================

#[derive(Debug)]
pub struct TransitionQueue<S: SceneKey> {
    queue: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition. `Empty` requests are dropped.
    pub fn push(&mut self, transition: SceneTransition<S>) {
        if transition != SceneTransition::Empty {
            self.queue.push(transition);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneTransition<S>> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes every queued transition, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
