//! Variants command - list the games the engine knows.

use mills::game::Variant;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct VariantsArgs {}

impl Command for VariantsArgs {
    fn execute(self) {
        for variant in Variant::ALL {
            let config = variant.config();
            let flying = config
                .flying_threshold
                .map_or_else(|| "no".to_string(), |n| format!("at {}", n));
            let goal = if config.first_mill_wins() {
                "first mill wins"
            } else {
                "mills capture"
            };
            println!(
                "{:<8} {:<20} {:>2} points, {:>2} pieces each, flying {}, {}",
                variant.cli_name(),
                config.name,
                config.topology.num_points(),
                config.num_morris_per_player,
                flying,
                goal
            );
        }
    }
}
