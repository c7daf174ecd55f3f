//! Depth-bounded minimax over game ticks.
//!
//! The search builds an explicit tree: every node holds the tick it stands
//! for and the move that led there. Leaves are scored with the evaluation
//! heuristic from the root mover's point of view, and scores are backed up
//! by max or min depending on who moves at each node. Ties keep the child
//! that was enumerated first, so results are stable.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::board::color::Color;
use crate::evaluate::{self, EvaluationWeights};
use crate::game::tick::{tick, GameTick, TickError};
use crate::move_generator::generate_moves;
use crate::moves::Move;
use crate::rules::Rules;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("the game is already over")]
    GameOver,
    #[error("search depth must be at least 1")]
    InvalidDepth,
    #[error("tick error during search: {error}")]
    Tick { error: TickError },
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub depth: u8,
    pub weights: EvaluationWeights,
    /// Once this many nodes exist, unexpanded nodes become leaves.
    pub max_nodes: Option<usize>,
    /// Once this much time has passed, unexpanded nodes become leaves.
    pub time_limit: Option<Duration>,
    /// Build the root's subtrees on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            weights: EvaluationWeights::default(),
            max_nodes: None,
            time_limit: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Node,
    Leaf,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Aim {
    Max,
    Min,
}

#[derive(Clone, Debug)]
pub struct SearchNode {
    pub kind: NodeKind,
    /// Whether the side to move here maximizes or minimizes the root score.
    pub aim: Aim,
    /// Plies left below this node.
    pub depth: u8,
    pub tick: GameTick,
    /// `None` only at the root.
    pub move_played: Option<Move>,
    pub children: Vec<SearchNode>,
    pub score: i32,
    pub best_child_move: Option<Move>,
}

impl SearchNode {
    fn leaf(tick: GameTick, move_played: Move, aim: Aim, depth: u8, score: i32) -> Self {
        Self {
            kind: NodeKind::Leaf,
            aim,
            depth,
            tick,
            move_played: Some(move_played),
            children: Vec::new(),
            score,
            best_child_move: None,
        }
    }

    fn node(
        tick: GameTick,
        move_played: Option<Move>,
        aim: Aim,
        depth: u8,
        children: Vec<SearchNode>,
    ) -> Self {
        let mut best: Option<&SearchNode> = None;
        for child in &children {
            let better = match (best, aim) {
                (None, _) => true,
                (Some(current), Aim::Max) => child.score > current.score,
                (Some(current), Aim::Min) => child.score < current.score,
            };
            if better {
                best = Some(child);
            }
        }
        let score = best.map_or(0, |child| child.score);
        let best_child_move = best.and_then(|child| child.move_played);
        Self {
            kind: NodeKind::Node,
            aim,
            depth,
            tick,
            move_played,
            children,
            score,
            best_child_move,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Number of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::size).sum::<usize>()
    }

    /// The line of best moves starting below this node.
    pub fn principal_variation(&self) -> Vec<Move> {
        let mut line = Vec::new();
        let mut node = self;
        while let Some(best) = node.best_child_move {
            line.push(best);
            match node.children.iter().find(|child| child.move_played == Some(best)) {
                Some(child) => node = child,
                None => break,
            }
        }
        line
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let label = self
            .move_played
            .map_or_else(|| "root".to_string(), |mv| mv.to_string());
        let aim = match self.aim {
            Aim::Max => "max",
            Aim::Min => "min",
        };
        write!(f, "{:indent$}{} [{} {}]", "", label, aim, self.score, indent = indent)?;
        if let Some(best) = self.best_child_move {
            write!(f, " best {}", best)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, indent + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: usize,
    pub leaves: usize,
    pub elapsed: Duration,
    pub budget_exhausted: bool,
    pub score: i32,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub tree: SearchNode,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn best_move(&self) -> Option<Move> {
        self.tree.best_child_move
    }
}

/// Shared state of one search; safe to use from several rayon workers.
struct SearchContext<'a> {
    rules: &'a Rules,
    config: &'a SearchConfig,
    root_color: Color,
    started: Instant,
    nodes: AtomicUsize,
    leaves: AtomicUsize,
    exhausted: AtomicBool,
}

impl<'a> SearchContext<'a> {
    fn aim_for(&self, turn: Color) -> Aim {
        if turn == self.root_color {
            Aim::Max
        } else {
            Aim::Min
        }
    }

    fn out_of_budget(&self) -> bool {
        if self.exhausted.load(Ordering::Relaxed) {
            return true;
        }
        let over_nodes = self
            .config
            .max_nodes
            .map_or(false, |max| self.nodes.load(Ordering::Relaxed) >= max);
        let over_time = self
            .config
            .time_limit
            .map_or(false, |limit| self.started.elapsed() >= limit);
        if (over_nodes || over_time) && !self.exhausted.swap(true, Ordering::Relaxed) {
            warn!(
                "search budget exhausted after {} nodes in {:?}",
                self.nodes.load(Ordering::Relaxed),
                self.started.elapsed()
            );
        }
        over_nodes || over_time
    }

    fn build(&self, parent: &GameTick, mv: Move, depth: u8) -> Result<SearchNode, SearchError> {
        let child = tick(self.rules, parent, &mv).map_err(|error| SearchError::Tick { error })?;
        self.nodes.fetch_add(1, Ordering::Relaxed);
        let aim = self.aim_for(child.turn());

        if depth == 0 || child.is_game_over() || self.out_of_budget() {
            return Ok(self.leaf(child, mv, aim, depth));
        }

        let moves = generate_moves(child.game(), child.turn());
        if moves.is_empty() {
            return Ok(self.leaf(child, mv, aim, depth));
        }
        let children = moves
            .iter()
            .map(|&next| self.build(&child, next, depth - 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SearchNode::node(child, Some(mv), aim, depth, children))
    }

    fn leaf(&self, tick: GameTick, mv: Move, aim: Aim, depth: u8) -> SearchNode {
        self.leaves.fetch_add(1, Ordering::Relaxed);
        let score = evaluate::score(&tick, self.root_color, &self.config.weights);
        SearchNode::leaf(tick, mv, aim, depth, score)
    }
}

/// Builds the search tree below `root` and backs up its scores.
pub fn search(
    rules: &Rules,
    root: &GameTick,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    if config.depth == 0 {
        return Err(SearchError::InvalidDepth);
    }
    if root.is_game_over() {
        return Err(SearchError::GameOver);
    }
    let root_color = root.turn();
    let moves = generate_moves(root.game(), root_color);
    if moves.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let context = SearchContext {
        rules,
        config,
        root_color,
        started: Instant::now(),
        nodes: AtomicUsize::new(1),
        leaves: AtomicUsize::new(0),
        exhausted: AtomicBool::new(false),
    };
    let child_depth = config.depth - 1;
    // collecting in enumeration order keeps the parallel result identical
    let children = if config.parallel {
        moves
            .as_slice()
            .par_iter()
            .map(|&mv| context.build(root, mv, child_depth))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        moves
            .iter()
            .map(|&mv| context.build(root, mv, child_depth))
            .collect::<Result<Vec<_>, _>>()?
    };
    let tree = SearchNode::node(root.clone(), None, Aim::Max, config.depth, children);

    let stats = SearchStats {
        depth: config.depth,
        nodes: context.nodes.load(Ordering::Relaxed),
        leaves: context.leaves.load(Ordering::Relaxed),
        elapsed: context.started.elapsed(),
        budget_exhausted: context.exhausted.load(Ordering::Relaxed),
        score: tree.score,
    };
    if let Some(best) = tree.best_child_move {
        debug!("best move for {}: {}", root_color, best);
    }
    info!(
        "searched {} nodes ({} leaves) at depth {} in {:?}, score {}",
        stats.nodes, stats.leaves, stats.depth, stats.elapsed, stats.score
    );
    Ok(SearchResult { tree, stats })
}

/// Runs searches with a fixed configuration and remembers the statistics of
/// the last one.
pub struct Searcher {
    config: SearchConfig,
    last_stats: Option<SearchStats>,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            last_stats: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    pub fn search(&mut self, rules: &Rules, root: &GameTick) -> Result<SearchResult, SearchError> {
        let result = search(rules, root, &self.config)?;
        self.last_stats = Some(result.stats.clone());
        Ok(result)
    }

    pub fn best_move(&mut self, rules: &Rules, root: &GameTick) -> Result<Move, SearchError> {
        self.search(rules, root)?
            .best_move()
            .ok_or(SearchError::NoAvailableMoves)
    }
}
