//! Best move command - determine the best move after a sequence of moves.

use mills::game::engine::Engine;
use mills::game::Variant;
use mills::moves::notation::parse_move_list;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "nine")]
    pub variant: Variant,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short, long, default_value = "")]
    pub moves: String,
    #[structopt(long, help = "Print the move as JSON")]
    pub json: bool,
    #[structopt(long, help = "Print the whole search tree")]
    pub tree: bool,
    #[structopt(long, help = "Search candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let moves = match parse_move_list(&self.moves) {
            Ok(moves) => moves,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };

        let config = create_config(self.variant, self.depth, self.parallel);
        let search = config.search.clone();
        let mut engine = match Engine::with_config(config) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("Failed to start the game: {}", err);
                std::process::exit(1);
            }
        };
        if let Err(err) = engine.make_moves(&moves) {
            eprintln!("{}", err);
            std::process::exit(1);
        }

        if engine.get_valid_moves().is_empty() || engine.check_game_over() {
            eprintln!("There are no valid moves in the given position.");
            eprintln!("{}", engine.message());
            return;
        }

        if self.tree {
            match mills::searcher::search(engine.rules(), engine.tick(), &search) {
                Ok(result) => print!("{}", result.tree),
                Err(err) => eprintln!("Failed to calculate best move: {}", err),
            }
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) if self.json => match best_move.to_json() {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Failed to encode move: {}", err),
            },
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
