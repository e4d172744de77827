use env_logger::Env;
use whiplash::game::{self, config, GameAction, GameScene};
use whiplash::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    EngineBuilder::<GameScene, GameAction>::new()
        .with_title(config::TITLE)
        .with_window_size(config::GAME_WIDTH as u32, config::GAME_HEIGHT as u32)
        .build()
        .init(game::install)
        .run();
}
