use std::time::Duration;

use crate::board::color::Color;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, engine: &Engine);
    fn frame_delay(&self) -> Option<Duration>;
}

fn render_tick(engine: &Engine) {
    if let Some(mv) = engine.last_move() {
        println!("Last move: {}", mv);
    }
    println!("{}", engine.tick());
}

fn stats_display(engine: &Engine) -> String {
    match engine.get_search_stats() {
        Some(stats) => format!(
            "* Score: {}\n* Nodes searched: {} ({} leaves, depth: {})\n* Move took: {:?}{}",
            stats.score,
            stats.nodes,
            stats.leaves,
            stats.depth,
            stats.elapsed,
            if stats.budget_exhausted {
                "\n* Search budget exhausted"
            } else {
                ""
            }
        ),
        None => format!(
            "* Score: -\n* Nodes searched: - (depth: {})\n* Move took: -",
            engine.search_config().depth
        ),
    }
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, engine: &Engine) {
        render_tick(engine);
        if !engine.check_game_over() {
            println!("Enter your move (`moves` lists them, `undo`, `redo`, `quit`):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, engine: &Engine) {
        render_tick(engine);
        println!("{}", stats_display(engine));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_color: Color,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, engine: &Engine) {
        render_tick(engine);
        println!("{}", stats_display(engine));
        if engine.turn() == self.human_color && !engine.check_game_over() {
            println!("Enter your move (`moves` lists them, `go` lets the engine play):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
