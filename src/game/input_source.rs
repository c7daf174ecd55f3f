use crate::board::color::Color;
use crate::input_handler::{read_command, InputError, PlayerCommand};

pub trait InputSource {
    fn get_command(&self, current_turn: Color) -> Result<Option<PlayerCommand>, InputError>;
}

fn read_human_command() -> Result<Option<PlayerCommand>, InputError> {
    match read_command("> ") {
        Ok(command) => Ok(Some(command)),
        Err(error @ (InputError::Closed | InputError::IOError { .. })) => Err(error),
        Err(error) => {
            println!("{}", error);
            Ok(None)
        }
    }
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_command(&self, _current_turn: Color) -> Result<Option<PlayerCommand>, InputError> {
        read_human_command()
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_command(&self, _current_turn: Color) -> Result<Option<PlayerCommand>, InputError> {
        Ok(Some(PlayerCommand::UseEngine))
    }
}

pub struct ConditionalInput {
    pub human_color: Color,
}

impl InputSource for ConditionalInput {
    fn get_command(&self, current_turn: Color) -> Result<Option<PlayerCommand>, InputError> {
        if current_turn == self.human_color {
            read_human_command()
        } else {
            Ok(Some(PlayerCommand::UseEngine))
        }
    }
}
