//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. This allows scenes to maintain state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::globals::GlobalContext;

//=== Scene Transition ====================================================

/// Scene stack operations, applied at the tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a new scene to the top of the stack.
    Push(K),

    /// Removes a specific scene from the stack by key.
    Remove(K),

    /// Replaces a specific scene with another scene, in place.
    Replace(K, K),

    /// Clears all scenes from the stack.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Stack of active scenes over a registry of every known scene.
///
/// The topmost opaque scene and every transparent scene above it are
/// updated each tick.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    stack: Vec<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene. Registering the same key twice replaces the
    /// earlier scene.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and puts it on the stack as the initial scene.
    ///
    /// Its `on_enter` runs when the engine starts.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default and added to stack", key);
            self.stack.push(key);
        }
    }

    /// Enters every scene already on the stack, bottom first.
    pub fn start(&mut self, context: &mut GlobalContext<S>) {
        if self.stack.is_empty() {
            warn!("Scene manager started with an empty stack");
            return;
        }

        for &key in &self.stack {
            debug!("Entering initial scene {:?}", key);
            match self.scenes.get_mut(&key) {
                Some(scene) => scene.on_enter(context),
                None => warn!("Initial scene {:?} not registered", key),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    /// Topmost scene on the stack.
    pub fn current(&self) -> Option<S> {
        self.stack.last().copied()
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the topmost opaque scene and every transparent scene above it.
    pub fn update(&mut self, context: &mut GlobalContext<S>) {
        if self.stack.is_empty() {
            return;
        }

        for key in self.collect_active_scenes() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies every transition queued on the context, in FIFO order.
    ///
    /// Transitions queued by `on_enter`/`on_exit` while this runs are
    /// applied on the next call.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S>) {
        for transition in context.scene_transitions.take() {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
                SceneTransition::Empty => {}
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GlobalContext<S>) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!("Attempted to push unregistered scene {:?}", key);
            return;
        };

        debug!("Pushing scene {:?} onto stack", key);
        self.stack.push(key);
        scene.on_enter(context);
    }

    fn remove_internal(&mut self, key: S, context: &mut GlobalContext<S>) {
        let Some(pos) = self.stack.iter().position(|&k| k == key) else {
            debug!("Scene {:?} not found in stack, skipping removal", key);
            return;
        };

        debug!("Removing scene {:?} from stack at position {}", key, pos);
        self.stack.remove(pos);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_exit(context);
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GlobalContext<S>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!("Scene {:?} not found in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!("Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!("Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        debug!("Replacing scene {:?} with {:?} at position {}", old_key, new_key, pos);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.on_exit(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.on_enter(context);
        }
    }

    fn clear_internal(&mut self, context: &mut GlobalContext<S>) {
        debug!("Clearing all scenes from stack");

        // Top of the stack exits first.
        for key in std::mem::take(&mut self.stack).into_iter().rev() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        // Walk top-down, stopping at the first opaque scene.
        for &key in self.stack.iter().rev() {
            active.push(key);

            let transparent = self
                .scenes
                .get(&key)
                .is_some_and(|scene| scene.is_transparent());
            if !transparent {
                break;
            }
        }

        active.reverse();
        active
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    type Log = Arc<Mutex<Vec<(TestScene, &'static str)>>>;

    struct Recorder {
        key: TestScene,
        transparent: bool,
        log: Log,
    }

    impl Recorder {
        fn record(&self, event: &'static str) {
            if let Ok(mut log) = self.log.lock() {
                log.push((self.key, event));
            }
        }
    }

    impl Scene<TestScene> for Recorder {
        fn on_enter(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.record("enter");
        }

        fn on_exit(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.record("exit");
        }

        fn update(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.record("update");
        }

        fn is_transparent(&self) -> bool {
            self.transparent
        }
    }

    fn manager_with(transparent_c: bool) -> (SceneManager<TestScene>, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = SceneManager::new();
        for (key, transparent) in [
            (TestScene::A, false),
            (TestScene::B, false),
            (TestScene::C, transparent_c),
        ] {
            manager.register_scene(
                key,
                Recorder {
                    key,
                    transparent,
                    log: Arc::clone(&log),
                },
            );
        }
        (manager, log)
    }

    fn drain(log: &Log) -> Vec<(TestScene, &'static str)> {
        log.lock().map(|mut log| std::mem::take(&mut *log)).unwrap_or_default()
    }

    //--- SceneTransition --------------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- SceneManager -----------------------------------------------------

    #[test]
    fn start_enters_default_scene() {
        let (mut manager, log) = manager_with(false);
        let mut context = GlobalContext::new();
        manager.register_default(TestScene::A, Recorder {
            key: TestScene::A,
            transparent: false,
            log: Arc::clone(&log),
        });

        manager.start(&mut context);

        assert_eq!(manager.current(), Some(TestScene::A));
        assert_eq!(drain(&log), vec![(TestScene::A, "enter")]);
    }

    #[test]
    fn replace_exits_old_then_enters_new() {
        let (mut manager, log) = manager_with(false);
        let mut context = GlobalContext::new();

        context.transition(SceneTransition::Push(TestScene::A));
        manager.process_transitions(&mut context);
        drain(&log);

        context.transition(SceneTransition::Replace(TestScene::A, TestScene::B));
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[TestScene::B]);
        assert_eq!(drain(&log), vec![(TestScene::A, "exit"), (TestScene::B, "enter")]);
        assert!(context.scene_transitions.is_empty());
    }

    #[test]
    fn invalid_transitions_are_skipped() {
        let (mut manager, log) = manager_with(false);
        let mut context = GlobalContext::new();

        context.transition(SceneTransition::Push(TestScene::A));
        context.transition(SceneTransition::Push(TestScene::A));
        context.transition(SceneTransition::Replace(TestScene::B, TestScene::C));
        context.transition(SceneTransition::Remove(TestScene::C));
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[TestScene::A]);
        assert_eq!(drain(&log), vec![(TestScene::A, "enter")]);
    }

    #[test]
    fn opaque_scene_blocks_updates_below() {
        let (mut manager, log) = manager_with(false);
        let mut context = GlobalContext::new();
        context.transition(SceneTransition::Push(TestScene::A));
        context.transition(SceneTransition::Push(TestScene::C));
        manager.process_transitions(&mut context);
        drain(&log);

        manager.update(&mut context);
        assert_eq!(drain(&log), vec![(TestScene::C, "update")]);
    }

    #[test]
    fn transparent_scene_lets_lower_scene_update() {
        let (mut manager, log) = manager_with(true);
        let mut context = GlobalContext::new();
        context.transition(SceneTransition::Push(TestScene::A));
        context.transition(SceneTransition::Push(TestScene::C));
        manager.process_transitions(&mut context);
        drain(&log);

        manager.update(&mut context);
        assert_eq!(
            drain(&log),
            vec![(TestScene::A, "update"), (TestScene::C, "update")]
        );
    }

    #[test]
    fn clear_exits_top_down() {
        let (mut manager, log) = manager_with(false);
        let mut context = GlobalContext::new();
        context.transition(SceneTransition::Push(TestScene::A));
        context.transition(SceneTransition::Push(TestScene::B));
        manager.process_transitions(&mut context);
        drain(&log);

        context.transition(SceneTransition::Clear);
        manager.process_transitions(&mut context);

        assert!(manager.stack().is_empty());
        assert_eq!(drain(&log), vec![(TestScene::B, "exit"), (TestScene::A, "exit")]);
    }
}
