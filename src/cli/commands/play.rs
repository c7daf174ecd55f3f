//! Play command - play a game against the computer.

use mills::board::color::Color;
use mills::game::input_source::ConditionalInput;
use mills::game::renderer::ConditionalStatsRenderer;
use mills::game::Variant;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "nine")]
    pub variant: Variant,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(long, help = "Search the computer's candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.variant, self.depth, self.parallel);
        println!("You play {} in {}.", self.color, self.variant.config().name);
        run_game_loop(
            ConditionalInput {
                human_color: self.color,
            },
            ConditionalStatsRenderer {
                human_color: self.color,
            },
            config,
        );
    }
}
