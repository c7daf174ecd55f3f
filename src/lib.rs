pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod moves;
pub mod prelude;
pub mod rules;
pub mod searcher;
