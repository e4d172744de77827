//=========================================================================
// Boot Scene
//=========================================================================
//
// Shows a loading label for one tick, then hands over to the title.
//
//=========================================================================

use log::debug;

use crate::core::display::{Color, DrawSurface, TextSpec, VisualHandle};
use crate::core::globals::GlobalContext;
use crate::core::scene::{Scene, SceneTransition};

use super::config::{GAME_HEIGHT, GAME_WIDTH};
use super::GameScene;

#[derive(Debug, Default)]
pub struct BootScene {
    loading: Option<VisualHandle>,
}

impl BootScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene<GameScene> for BootScene {
    fn on_enter(&mut self, context: &mut GlobalContext<GameScene>) {
        let label = TextSpec::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0 - 50.0, "Loading...")
            .with_font_size(20)
            .with_color(Color::WHITE)
            .fixed();
        self.loading = Some(context.create_text(label));
    }

    fn on_exit(&mut self, context: &mut GlobalContext<GameScene>) {
        if let Some(handle) = self.loading.take() {
            context.destroy(handle);
        }
    }

    fn update(&mut self, context: &mut GlobalContext<GameScene>) {
        debug!("Boot complete");
        context.transition(SceneTransition::Replace(GameScene::Boot, GameScene::Title));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Visual;

    #[test]
    fn shows_loading_until_exit() {
        let mut context = GlobalContext::new();
        let mut boot = BootScene::new();

        boot.on_enter(&mut context);
        let handle = boot.loading;
        assert!(matches!(
            handle.and_then(|h| context.display.get(h)),
            Some(Visual::Text(text)) if text.content == "Loading..."
        ));

        boot.update(&mut context);
        assert_eq!(
            context.scene_transitions.iter().collect::<Vec<_>>(),
            vec![&SceneTransition::Replace(GameScene::Boot, GameScene::Title)]
        );

        boot.on_exit(&mut context);
        assert!(context.display.is_empty());
    }
}
