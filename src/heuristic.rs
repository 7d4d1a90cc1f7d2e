//! Estimates of how far a state is from the goal.
//!
//! Any `Fn(&State) -> u32` is a heuristic. Both estimates here are admissible
//! (they never exceed the real number of moves left) so A* using them finds
//! shortest solutions.

use crate::data::Pos;
use crate::solver::node::SearchNode;
use crate::state::{State, BLANK};

pub trait Heuristic {
    /// Estimated number of moves left (h).
    fn estimate(&self, state: &State) -> u32;

    /// Moves made so far plus the estimate (f = g + h), less is better.
    fn evaluate(&self, node: &SearchNode<'_>) -> u32 {
        node.depth + self.estimate(&node.state)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&State) -> u32,
{
    fn estimate(&self, state: &State) -> u32 {
        self(state)
    }
}

/// Number of tiles not on their goal cell, the blank doesn't count.
pub fn misplaced_tiles(state: &State) -> u32 {
    let misplaced = state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(i, &tile)| tile != BLANK && tile as usize != i + 1)
        .count();
    misplaced as u32
}

/// Sum of distances of tiles from their goal cells, the blank doesn't count.
pub fn manhattan_distance(state: &State) -> u32 {
    let cols = state.cols();
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(i, &tile)| {
            Pos::new(i / cols, i % cols).dist(state.goal_pos(tile))
        })
        .sum()
}
