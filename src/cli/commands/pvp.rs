//! PvP command - play a game against another human.

use mills::game::input_source::HumanInput;
use mills::game::renderer::SimpleRenderer;
use mills::game::Variant;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "nine")]
    pub variant: Variant,
}

impl Command for PvpArgs {
    fn execute(self) {
        // the search only runs when a player types `go`
        let config = create_config(self.variant, 2, false);
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
