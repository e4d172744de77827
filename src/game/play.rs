//=========================================================================
// Play Scene
//=========================================================================
//
// Tile floor, a player block moved with arrows / WASD, a follow camera
// and an ESC pause menu.
//
// Horizontal and vertical input are read independently; when opposite
// keys are both held, left and up win. Diagonals are not normalized.
//
//=========================================================================

use log::{debug, info};

use crate::core::display::{Color, DrawSurface, Origin, RectSpec, TextSpec, VisualHandle};
use crate::core::globals::GlobalContext;
use crate::core::input::{KeyCode, StateTracker};
use crate::core::scene::{Scene, SceneTransition};

use super::camera::Camera;
use super::config::{
    ACCENT, CAMERA_LERP, GAME_HEIGHT, GAME_WIDTH, GRASS, GRASS_EDGE, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_WIDTH, TILE_SIZE, WORLD_HEIGHT, WORLD_WIDTH,
};
use super::widgets::Button;
use super::{GameAction, GameScene};

type Context = GlobalContext<GameScene>;

//=== Movement ============================================================

const LEFT: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
const UP: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const DOWN: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];

/// Unit direction per axis from the held keys.
fn direction(input: &StateTracker) -> (f32, f32) {
    let axis = |negative: &[KeyCode], positive: &[KeyCode]| {
        if input.any_key_down(negative) {
            -1.0
        } else if input.any_key_down(positive) {
            1.0
        } else {
            0.0
        }
    };
    (axis(&LEFT, &RIGHT), axis(&UP, &DOWN))
}

/// Moves `position` by `direction * speed * dt`, keeping the whole
/// player inside the world.
fn step(position: (f32, f32), direction: (f32, f32), dt: f32) -> (f32, f32) {
    let half_w = PLAYER_WIDTH / 2.0;
    let half_h = PLAYER_HEIGHT / 2.0;
    (
        (position.0 + direction.0 * PLAYER_SPEED * dt).clamp(half_w, WORLD_WIDTH - half_w),
        (position.1 + direction.1 * PLAYER_SPEED * dt).clamp(half_h, WORLD_HEIGHT - half_h),
    )
}

//=== Pause Menu ==========================================================

const PAUSE_DEPTH: i32 = 900;
const PAUSE_BUTTON_SIZE: (f32, f32) = (220.0, 50.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PauseChoice {
    Resume,
    ExitToTitle,
}

struct PauseMenu {
    overlay: VisualHandle,
    heading: VisualHandle,
    resume: Button,
    exit: Button,
}

impl PauseMenu {
    fn show(context: &mut Context) -> Self {
        let cx = GAME_WIDTH / 2.0;
        let cy = GAME_HEIGHT / 2.0;

        let overlay = context.create_rect(
            RectSpec::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT)
                .with_origin(Origin::TOP_LEFT)
                .with_fill(Color::BLACK)
                .with_alpha(0.7)
                .with_depth(PAUSE_DEPTH)
                .fixed(),
        );
        let heading = context.create_text(
            TextSpec::new(cx, cy - 60.0, "PAUSED")
                .with_font_size(48)
                .with_color(ACCENT)
                .bold()
                .monospace()
                .with_depth(PAUSE_DEPTH + 1)
                .fixed(),
        );
        let resume = Button::spawn(
            &mut context.display,
            cx,
            cy - 35.0,
            PAUSE_BUTTON_SIZE,
            "RESUME",
            20,
            PAUSE_DEPTH + 1,
        );
        let exit = Button::spawn(
            &mut context.display,
            cx,
            cy + 35.0,
            PAUSE_BUTTON_SIZE,
            "EXIT TO TITLE",
            20,
            PAUSE_DEPTH + 1,
        );

        Self {
            overlay,
            heading,
            resume,
            exit,
        }
    }

    fn update(&mut self, context: &mut Context) -> Option<PauseChoice> {
        let cursor = context.input_state.mouse_position();
        self.resume.update_hover(&mut context.display, cursor);
        self.exit.update_hover(&mut context.display, cursor);

        if self.resume.clicked(&context.input_state) {
            Some(PauseChoice::Resume)
        } else if self.exit.clicked(&context.input_state) {
            Some(PauseChoice::ExitToTitle)
        } else {
            None
        }
    }

    fn hide(self, context: &mut Context) {
        context.destroy(self.overlay);
        context.destroy(self.heading);
        self.resume.destroy(&mut context.display);
        self.exit.destroy(&mut context.display);
    }
}

//=== PlayScene ===========================================================

pub struct PlayScene {
    floor: Vec<VisualHandle>,
    help: Option<VisualHandle>,
    player: Option<VisualHandle>,
    position: (f32, f32),
    camera: Camera,
    pause_menu: Option<PauseMenu>,
}

impl PlayScene {
    pub fn new() -> Self {
        Self {
            floor: Vec::new(),
            help: None,
            player: None,
            position: (WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
            camera: Camera::new((GAME_WIDTH, GAME_HEIGHT), (WORLD_WIDTH, WORLD_HEIGHT), CAMERA_LERP),
            pause_menu: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_menu.is_some()
    }

    /// Player centre in world pixels.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    fn toggle_pause(&mut self, context: &mut Context) {
        match self.pause_menu.take() {
            Some(menu) => {
                debug!("Resumed");
                menu.hide(context);
            }
            None => {
                debug!("Paused");
                self.pause_menu = Some(PauseMenu::show(context));
            }
        }
    }

    fn build_floor(&mut self, context: &mut Context) {
        let cols = (WORLD_WIDTH / TILE_SIZE).ceil() as u32 + 2;
        let rows = (WORLD_HEIGHT / TILE_SIZE).ceil() as u32 + 2;

        // One dark backdrop shows through the 1 px gaps as grid lines.
        self.floor.push(
            context.create_rect(
                RectSpec::new(0.0, 0.0, cols as f32 * TILE_SIZE, rows as f32 * TILE_SIZE)
                    .with_origin(Origin::TOP_LEFT)
                    .with_fill(GRASS_EDGE)
                    .with_depth(-1),
            ),
        );
        for row in 0..rows {
            for col in 0..cols {
                let tile = RectSpec::new(
                    col as f32 * TILE_SIZE,
                    row as f32 * TILE_SIZE,
                    TILE_SIZE - 1.0,
                    TILE_SIZE - 1.0,
                )
                .with_origin(Origin::TOP_LEFT)
                .with_fill(GRASS);
                self.floor.push(context.create_rect(tile));
            }
        }
    }
}

impl Default for PlayScene {
    fn default() -> Self {
        Self::new()
    }
}

//=== Scene Lifecycle =====================================================

impl Scene<GameScene> for PlayScene {
    fn on_enter(&mut self, context: &mut Context) {
        info!("Entering play");
        self.build_floor(context);

        self.position = (WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        self.player = Some(
            context.create_rect(
                RectSpec::new(self.position.0, self.position.1, PLAYER_WIDTH, PLAYER_HEIGHT)
                    .with_fill(ACCENT)
                    .with_depth(10),
            ),
        );

        self.camera.snap_to(self.position);
        let (sx, sy) = self.camera.scroll();
        context.display.set_scroll(sx, sy);

        self.help = Some(
            context.create_text(
                TextSpec::new(8.0, 8.0, "Whiplash - Arrow keys or WASD to move | ESC to pause")
                    .with_font_size(14)
                    .with_origin(Origin::TOP_LEFT)
                    .with_depth(100)
                    .fixed(),
            ),
        );
    }

    fn on_exit(&mut self, context: &mut Context) {
        if let Some(menu) = self.pause_menu.take() {
            menu.hide(context);
        }
        for handle in self.floor.drain(..).chain(self.player.take()).chain(self.help.take()) {
            context.destroy(handle);
        }
        context.display.set_scroll(0.0, 0.0);
    }

    fn update(&mut self, context: &mut Context) {
        let toggles = context
            .actions::<GameAction>()
            .iter()
            .filter(|action| **action == GameAction::Pause)
            .count();
        for _ in 0..toggles {
            self.toggle_pause(context);
        }

        if let Some(menu) = &mut self.pause_menu {
            match menu.update(context) {
                Some(PauseChoice::Resume) => self.toggle_pause(context),
                Some(PauseChoice::ExitToTitle) => {
                    context.transition(SceneTransition::Replace(GameScene::Play, GameScene::Title));
                }
                None => {}
            }
            return;
        }

        self.position = step(self.position, direction(&context.input_state), context.delta_secs());
        if let Some(player) = self.player {
            context.set_position(player, self.position.0, self.position.1);
        }

        let (sx, sy) = self.camera.follow(self.position);
        context.display.set_scroll(sx, sy);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
