//! Parsing of the lines a player types during a game.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::moves::{Move, MoveParseError};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("input closed")]
    Closed,
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("{error}")]
    InvalidMove { error: MoveParseError },
}

/// What a player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Play(Move),
    /// Let the engine choose the move.
    UseEngine,
    Undo,
    Redo,
    ListMoves,
    Quit,
}

impl FromStr for PlayerCommand {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Err(InputError::InvalidInput {
                input: input.to_string(),
            }),
            "u" | "undo" => Ok(PlayerCommand::Undo),
            "r" | "redo" => Ok(PlayerCommand::Redo),
            "go" | "hint" => Ok(PlayerCommand::UseEngine),
            "?" | "moves" => Ok(PlayerCommand::ListMoves),
            "q" | "quit" | "exit" => Ok(PlayerCommand::Quit),
            _ => trimmed
                .parse::<Move>()
                .map(PlayerCommand::Play)
                .map_err(|error| InputError::InvalidMove { error }),
        }
    }
}

/// Prompts on stdout and reads one command from stdin.
pub fn read_command(prompt: &str) -> Result<PlayerCommand, InputError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| InputError::IOError {
            error: e.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::Closed);
    }
    line.parse()
}
