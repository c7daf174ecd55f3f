//! Watch command - watch the computer play against itself.

use std::time::Duration;

use mills::game::input_source::EngineInput;
use mills::game::renderer::StatsRenderer;
use mills::game::Variant;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "nine")]
    pub variant: Variant,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, help = "Search candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.variant, self.depth, self.parallel);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
