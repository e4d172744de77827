//=========================================================================
// Title Scene
//=========================================================================
//
// Title block plus NEW GAME / CONTINUE buttons.
//
// NEW GAME is gated by a quick-time event: press SPACE within two seconds
// to start playing. Missing it shows a short "Too slow!" notice and the
// player can click again.
//
//=========================================================================

use log::{debug, info};

use crate::core::display::{DrawSurface, Origin, RectSpec, TextSpec, VisualHandle};
use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::qte::{QteChallenge, QteManager};
use crate::core::scene::{Scene, SceneTransition};
use crate::core::timing::Clock;

use super::config::{
    qte_style, ACCENT, BACKGROUND, FAIL_NOTICE_MS, GAME_HEIGHT, GAME_WIDTH, PANEL,
    QTE_COLOR_FAIL, QTE_DEFAULT_DURATION,
};
use super::widgets::Button;
use super::GameScene;

//=== Layout ==============================================================

const TITLE_BLOCK_Y: f32 = 140.0;
const TITLE_BLOCK_SIZE: (f32, f32) = (560.0, 110.0);

const BUTTON_SIZE: (f32, f32) = (240.0, 64.0);
const BUTTON_Y: f32 = 320.0;
const BUTTON_GAP: f32 = 30.0;

/// Above the QTE overlay, bar and prompt.
const NOTICE_DEPTH: i32 = 1004;

//=== TitleScene ==========================================================

type Context = GlobalContext<GameScene>;

pub struct TitleScene {
    qte: QteManager<Context>,
    visuals: Vec<VisualHandle>,
    new_game: Option<Button>,
    continue_game: Option<Button>,
}

impl TitleScene {
    pub fn new() -> Self {
        Self {
            qte: QteManager::with_style(qte_style()),
            visuals: Vec::new(),
            new_game: None,
            continue_game: None,
        }
    }

    fn start_new_game(&mut self, context: &mut Context) {
        if self.qte.is_active() {
            return;
        }

        info!("NEW GAME: arming start challenge");
        let challenge = QteChallenge::builder(KeyCode::Space)
            .with_label("SPACE")
            .with_prompt("Press SPACE to begin!")
            .with_duration(QTE_DEFAULT_DURATION)
            .on_success(|context: &mut Context| {
                context.transition(SceneTransition::Replace(GameScene::Title, GameScene::Play));
            })
            .on_fail(show_fail_notice)
            .build();

        self.qte.start(context, challenge);
    }

    fn buttons_mut(&mut self) -> impl Iterator<Item = &mut Button> {
        self.new_game.iter_mut().chain(self.continue_game.iter_mut())
    }
}

impl Default for TitleScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Red notice under the prompt that removes itself after a moment.
fn show_fail_notice(context: &mut Context) {
    let notice = context.create_text(
        TextSpec::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0 + 80.0, "Too slow! Try again.")
            .with_font_size(18)
            .with_color(QTE_COLOR_FAIL)
            .monospace()
            .with_depth(NOTICE_DEPTH)
            .fixed(),
    );
    let expires_at = context.now_ms() + FAIL_NOTICE_MS;
    context.display.destroy_at(notice, expires_at);
}

//=== Scene Lifecycle =====================================================

impl Scene<GameScene> for TitleScene {
    fn on_enter(&mut self, context: &mut Context) {
        let cx = GAME_WIDTH / 2.0;
        let (block_w, block_h) = TITLE_BLOCK_SIZE;

        self.visuals = vec![
            context.create_rect(
                RectSpec::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT)
                    .with_origin(Origin::TOP_LEFT)
                    .with_fill(BACKGROUND)
                    .with_depth(-10)
                    .fixed(),
            ),
            context.create_rect(
                RectSpec::new(cx, TITLE_BLOCK_Y, block_w + 4.0, block_h + 4.0)
                    .with_fill(ACCENT)
                    .fixed(),
            ),
            context.create_rect(
                RectSpec::new(cx, TITLE_BLOCK_Y, block_w, block_h)
                    .with_fill(PANEL)
                    .fixed(),
            ),
            context.create_text(
                TextSpec::new(cx, TITLE_BLOCK_Y, "WHIPLASH")
                    .with_font_size(64)
                    .with_color(ACCENT)
                    .bold()
                    .monospace()
                    .with_depth(1)
                    .fixed(),
            ),
        ];

        let offset = BUTTON_SIZE.0 / 2.0 + BUTTON_GAP / 2.0;
        self.new_game = Some(Button::spawn(
            &mut context.display,
            cx - offset,
            BUTTON_Y,
            BUTTON_SIZE,
            "NEW GAME",
            22,
            0,
        ));
        self.continue_game = Some(Button::spawn(
            &mut context.display,
            cx + offset,
            BUTTON_Y,
            BUTTON_SIZE,
            "CONTINUE",
            22,
            0,
        ));
    }

    fn on_exit(&mut self, context: &mut Context) {
        self.qte.cancel(context);

        for handle in self.visuals.drain(..) {
            context.destroy(handle);
        }
        for button in self.new_game.take().into_iter().chain(self.continue_game.take()) {
            button.destroy(&mut context.display);
        }
    }

    fn update(&mut self, context: &mut Context) {
        for notification in context.notifications() {
            if let Some(resolution) = self.qte.handle(context, &notification) {
                debug!("Start challenge resolved: {:?}", resolution);
            }
        }

        let cursor = context.input_state.mouse_position();
        for button in self.buttons_mut() {
            button.update_hover(&mut context.display, cursor);
        }

        // CONTINUE has nothing to load yet.
        let new_game_clicked = self
            .new_game
            .as_ref()
            .is_some_and(|button| button.clicked(&context.input_state));
        if new_game_clicked {
            self.start_new_game(context);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Visual;
    use crate::core::globals::GlobalSystems;
    use crate::core::input::{InputEvent, Modifiers, MouseButton};
    use crate::game::play::PlayScene;
    use crate::game::GameAction;

    const NEW_GAME: (f32, f32) = (265.0, 320.0);

    struct Harness {
        systems: GlobalSystems<GameScene, GameAction>,
        context: Context,
    }

    impl Harness {
        fn new() -> Self {
            let mut systems = GlobalSystems::new();
            let mut context = GlobalContext::new();
            systems
                .scene_manager
                .register_default(GameScene::Title, TitleScene::new());
            systems.scene_manager.register_scene(GameScene::Play, PlayScene::new());
            systems.scene_manager.start(&mut context);
            Self { systems, context }
        }

        fn tick(&mut self, at_ms: u64, events: Vec<InputEvent>) {
            self.context.clock.set(at_ms);
            if !events.is_empty() {
                self.context.frame_input_events = vec![events];
            }
            self.systems.tick(&mut self.context);
        }

        fn click(&mut self, at_ms: u64, (x, y): (f32, f32)) {
            self.tick(
                at_ms,
                vec![
                    InputEvent::MouseMoved { x, y },
                    InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE },
                ],
            );
            self.tick(
                at_ms,
                vec![InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE }],
            );
        }

        fn press(&mut self, at_ms: u64, key: KeyCode) {
            self.tick(at_ms, vec![InputEvent::KeyDown { key, modifiers: Modifiers::NONE }]);
        }

        fn texts(&self) -> Vec<String> {
            self.context
                .display
                .iter_by_depth()
                .into_iter()
                .filter_map(|(_, visual)| match visual {
                    Visual::Text(text) => Some(text.content.clone()),
                    Visual::Rect(_) => None,
                })
                .collect()
        }

        fn shows(&self, content: &str) -> bool {
            self.texts().iter().any(|text| text == content)
        }

        fn current(&self) -> Option<GameScene> {
            self.systems.scene_manager.current()
        }
    }

    #[test]
    fn enter_builds_title_and_buttons() {
        let harness = Harness::new();
        assert!(harness.shows("WHIPLASH"));
        assert!(harness.shows("NEW GAME"));
        assert!(harness.shows("CONTINUE"));
    }

    #[test]
    fn space_in_time_starts_play() {
        let mut harness = Harness::new();

        harness.click(0, NEW_GAME);
        assert!(harness.shows("Press SPACE to begin!"));

        harness.press(500, KeyCode::Space);

        assert_eq!(harness.current(), Some(GameScene::Play));
        assert!(!harness.shows("Press SPACE to begin!"));
        assert!(!harness.shows("WHIPLASH"));
    }

    #[test]
    fn timeout_shows_notice_that_expires() {
        let mut harness = Harness::new();
        harness.click(0, NEW_GAME);

        harness.tick(1990, vec![]);
        assert!(harness.shows("Press SPACE to begin!"));

        // The countdown is checked on its 16 ms tick, so the miss lands on
        // the first tick at or past 2000 ms.
        let missed_at = 1990 + 16;
        harness.tick(missed_at, vec![]);
        assert_eq!(harness.current(), Some(GameScene::Title));
        assert!(!harness.shows("Press SPACE to begin!"));
        assert!(harness.shows("Too slow! Try again."));

        let notice_depth = harness.context.display.iter_by_depth().into_iter().find_map(
            |(_, visual)| match visual {
                Visual::Text(text) if text.content == "Too slow! Try again." => Some(text.depth),
                _ => None,
            },
        );
        assert_eq!(notice_depth, Some(NOTICE_DEPTH));

        harness.tick(missed_at + FAIL_NOTICE_MS - 1, vec![]);
        assert!(harness.shows("Too slow! Try again."));
        harness.tick(missed_at + FAIL_NOTICE_MS, vec![]);
        assert!(!harness.shows("Too slow! Try again."));
    }

    #[test]
    fn wrong_key_fails_and_allows_retry() {
        let mut harness = Harness::new();
        harness.click(0, NEW_GAME);

        harness.press(300, KeyCode::KeyE);
        assert!(harness.shows("Too slow! Try again."));
        assert!(!harness.shows("Press SPACE to begin!"));

        harness.click(400, NEW_GAME);
        assert!(harness.shows("Press SPACE to begin!"));
        harness.press(600, KeyCode::Space);
        assert_eq!(harness.current(), Some(GameScene::Play));
    }

    #[test]
    fn new_game_is_ignored_while_armed() {
        let mut harness = Harness::new();
        harness.click(0, NEW_GAME);
        let visuals = harness.context.display.len();

        harness.click(100, NEW_GAME);

        assert_eq!(harness.context.display.len(), visuals);
        let prompts = harness
            .texts()
            .into_iter()
            .filter(|text| text == "Press SPACE to begin!")
            .count();
        assert_eq!(prompts, 1);
    }

    #[test]
    fn continue_does_nothing() {
        let mut harness = Harness::new();
        let visuals = harness.context.display.len();

        harness.click(0, (535.0, 320.0));

        assert_eq!(harness.context.display.len(), visuals);
        assert_eq!(harness.current(), Some(GameScene::Title));
    }

    #[test]
    fn leaving_title_cancels_armed_challenge() {
        let mut harness = Harness::new();
        harness.click(0, NEW_GAME);
        assert!(!harness.context.key_subscriptions.is_empty());

        harness
            .context
            .transition(SceneTransition::Replace(GameScene::Title, GameScene::Play));
        harness.tick(100, vec![]);

        assert_eq!(harness.current(), Some(GameScene::Play));
        assert!(harness.context.key_subscriptions.is_empty());
        assert!(harness.context.timers.is_empty());
        assert!(!harness.shows("Too slow! Try again."));
    }
}
