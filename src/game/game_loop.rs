use log::info;

use crate::evaluate::{game_ending, GameEnding};
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::input_handler::{InputError, PlayerCommand};

use super::input_source::InputSource;
use super::renderer::GameRenderer;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::with_engine(input_source, renderer, Engine::with_config(config)?))
    }

    pub fn with_engine(input_source: I, renderer: R, engine: Engine) -> Self {
        Self {
            engine,
            input_source,
            renderer,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs until the game ends or the player quits. Returns how the game
    /// ended, if it did.
    pub fn run(&mut self) -> Option<GameEnding> {
        loop {
            self.renderer.render(&self.engine);

            if let Some(ending) = game_ending(self.engine.tick()) {
                info!("game over after {} plies", self.engine.tick().tick_n());
                return Some(ending);
            }

            let command = match self.input_source.get_command(self.engine.turn()) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(InputError::Closed) => return None,
                Err(error) => {
                    println!("error: {}", error);
                    return None;
                }
            };

            let result = match command {
                PlayerCommand::Quit => return None,
                PlayerCommand::ListMoves => {
                    let moves = self.engine.get_valid_moves();
                    let listed: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
                    println!("{}", listed.join(", "));
                    continue;
                }
                PlayerCommand::Play(mv) => self.engine.make_move(mv).map(|_| ()),
                PlayerCommand::UseEngine => self.engine.make_best_move().map(|_| ()),
                PlayerCommand::Undo => self.engine.undo(),
                PlayerCommand::Redo => self.engine.redo(),
            };

            match result {
                Ok(()) => {
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(error) => println!("error: {}", error),
            }
        }
    }
}
