// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod heuristic;
pub mod moves;
pub mod solver;

mod data;
mod fs;
mod parser;
mod state;
mod vec2d;

use std::error::Error;

pub use crate::data::{Dir, Pos, DIRECTIONS};
pub use crate::parser::ParserErr;
pub use crate::state::{State, StateErr, Tile, BLANK};

use crate::config::Config;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>>;
}

pub trait Solve {
    /// `Ok` with no moves means the goal is unreachable from this state.
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr>;
}
