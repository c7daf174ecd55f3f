//! Shared utilities for CLI commands.

use mills::evaluate::GameEnding;
use mills::game::engine::EngineConfig;
use mills::game::game_loop::GameLoop;
use mills::game::input_source::InputSource;
use mills::game::renderer::GameRenderer;
use mills::game::Variant;
use mills::searcher::SearchConfig;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = match GameLoop::new(input_source, renderer, config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to start the game: {}", err);
            std::process::exit(1);
        }
    };
    match game.run() {
        Some(GameEnding::Win(color)) => println!("{} wins!", color),
        Some(GameEnding::Draw) => println!("Draw!"),
        None => println!("Game abandoned."),
    }
}

pub(crate) fn create_config(variant: Variant, depth: u8, parallel: bool) -> EngineConfig {
    EngineConfig {
        variant,
        search: SearchConfig {
            depth,
            parallel,
            ..Default::default()
        },
    }
}
