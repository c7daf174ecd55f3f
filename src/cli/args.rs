//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, variants::VariantsArgs,
    watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "mills",
    about = "A rules engine and minimax player for the morris family of games"
)]
pub enum Mills {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move with minimax at the given `--depth` (default: 2). Your color will be chosen at random unless you specify with `--color`. Pick the game with `--variant` (default: nine)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Pick the game with `--variant` (default: nine)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 2)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Determine the best move after a comma-separated list of moves given with `--moves`, e.g. `--moves \"P W a1, P B d2\"`. The depth of the search can be set with `--depth` (default: 2)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(name = "variants", about = "List the available game variants.")]
    Variants(VariantsArgs),
}

impl crate::cli::commands::Command for Mills {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
            Variants(cmd),
        }
    }
}
