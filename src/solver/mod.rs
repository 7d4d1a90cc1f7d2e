pub mod frontier;
pub mod heap;
pub mod node;
pub mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::config::{Config, Method};
use crate::data::DIRECTIONS;
use crate::heuristic::{manhattan_distance, misplaced_tiles};
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

use self::frontier::{Fifo, Frontier, Lifo, PriorityFrontier};
use self::node::NodeArena;
use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// Expanded this many states without reaching the goal or running out of states.
    NodeLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NodeLimit(limit) => write!(
                f,
                "Gave up after expanding {} states without finding a solution",
                limit
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if the goal can't be reached.
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.method, moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for State {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(self, config)
    }
}

fn solve(initial: &State, config: &Config) -> Result<SolverOk, SolverErr> {
    debug!(
        "Solving {}x{} puzzle using {}, solvable by parity: {}",
        initial.rows(),
        initial.cols(),
        config.method,
        initial.is_solvable()
    );

    let arena = NodeArena::new();
    match config.method {
        Method::BreadthFirst => search(&arena, initial, Fifo::new(), config),
        Method::DepthFirst => search(&arena, initial, Lifo::new(), config),
        Method::AStarMisplaced => search(
            &arena,
            initial,
            PriorityFrontier::new(misplaced_tiles),
            config,
        ),
        Method::AStarManhattan => search(
            &arena,
            initial,
            PriorityFrontier::new(manhattan_distance),
            config,
        ),
    }
}

fn search<'a, F>(
    arena: &'a NodeArena<'a>,
    initial: &State,
    mut frontier: F,
    config: &Config,
) -> Result<SolverOk, SolverErr>
where
    F: Frontier<'a>,
{
    debug!("Search called");

    let mut stats = Stats::new();
    let mut explored: FnvHashSet<&'a State> = FnvHashSet::default();

    let start = arena.alloc_root(initial.clone());
    stats.add_created(start);
    frontier.push(start);

    while let Some(cur_node) = frontier.pop() {
        // the frontier can hold several nodes with the same state,
        // popped duplicates are counted and skipped
        if explored.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node);
            continue;
        }
        if stats.add_unique_visited(cur_node) && config.print_status {
            println!("Visited new depth: {}", cur_node.depth);
            println!("{:?}", stats);
        }

        if cur_node.is_goal() {
            debug!("Solved, reconstructing path");
            return Ok(SolverOk::new(Some(cur_node.path()), stats, config.method));
        }

        if let Some(limit) = config.node_limit {
            if stats.total_expanded() >= limit {
                info!("Node limit of {} reached", limit);
                return Err(SolverErr::NodeLimit(limit));
            }
        }

        explored.insert(&cur_node.state);
        stats.add_expanded();

        let mut successors = cur_node.state.successors();
        for (&dir, slot) in DIRECTIONS.iter().zip(successors.iter_mut()) {
            if let Some(next_state) = slot.take() {
                if explored.contains(&next_state) {
                    continue;
                }
                let next_node = arena.alloc_child(cur_node, dir, next_state);
                stats.add_created(next_node);
                frontier.push(next_node);
            }
        }
    }

    debug!("Frontier exhausted, no solution");
    Ok(SolverOk::new(None, stats, config.method))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METHODS: [Method; 4] = [
        Method::BreadthFirst,
        Method::DepthFirst,
        Method::AStarMisplaced,
        Method::AStarManhattan,
    ];

    const OPTIMAL_METHODS: [Method; 3] = [
        Method::BreadthFirst,
        Method::AStarMisplaced,
        Method::AStarManhattan,
    ];

    fn state(s: &str) -> State {
        s.parse().unwrap()
    }

    fn solve_with(start: &State, method: Method) -> SolverOk {
        start.solve(&Config::new(method)).unwrap()
    }

    fn solution_len(start: &State, method: Method) -> Option<usize> {
        solve_with(start, method).moves.map(|moves| moves.len())
    }

    #[test]
    fn one_move() {
        let start = state("1 2 3\n4 5 6\n7 . 8");
        for &method in &OPTIMAL_METHODS {
            let solution = solve_with(&start, method);
            assert_eq!(solution.moves.unwrap().to_string(), "R");
            assert_eq!(solution.method, method);
        }
    }

    #[test]
    fn already_solved() {
        let start = State::solved(3, 3).unwrap();
        for &method in &ALL_METHODS {
            let solution = solve_with(&start, method);
            assert_eq!(solution.moves.unwrap().to_string(), "");
            assert_eq!(solution.stats.total_expanded(), 0);
            assert_eq!(solution.stats.total_created(), 1);
        }
    }

    #[test]
    fn unsolvable_2x2() {
        let start = state("2 1\n3 .");
        for &method in &ALL_METHODS {
            let solution = solve_with(&start, method);
            assert!(solution.moves.is_none());
            // half of the 4! permutations are reachable
            assert_eq!(solution.stats.total_expanded(), 12);
        }
    }

    #[test]
    fn unsolvable_3x3() {
        let start = state("8 1 2\n. 4 3\n7 6 5");
        assert!(!start.is_solvable());
        let solution = solve_with(&start, Method::BreadthFirst);
        assert!(solution.moves.is_none());
        assert_eq!(solution.stats.total_expanded(), 181_440);
    }

    #[test]
    fn optimal_methods_agree() {
        let puzzles = [
            ("1 2 3\n4 5 6\n. 7 8", 2),
            ("1 2 3\n. 4 6\n7 5 8", 3),
            ("4 1 3\n. 2 6\n7 5 8", 5),
            ("1 2 3\n4 5 6\n7 8 .", 0),
            ("8 6 7\n2 5 4\n3 . 1", 31),
            ("1 2 3 4\n5 6 7 8\n. 9 10 12\n13 14 11 15", 4),
            ("1 . 2\n4 5 3", 2),
        ];
        for &(puzzle, expected) in &puzzles {
            let start = state(puzzle);
            for &method in &OPTIMAL_METHODS {
                assert_eq!(
                    solution_len(&start, method),
                    Some(expected),
                    "{} using {}",
                    puzzle,
                    method
                );
            }
        }
    }

    #[test]
    fn solutions_replay_to_goal() {
        let start = state("4 1 3\n. 2 6\n7 5 8");
        for &method in &ALL_METHODS {
            let moves = solve_with(&start, method).moves.unwrap();
            let end = moves.replay(&start).unwrap();
            assert!(end.is_solved(), "{} using {}", moves, method);
        }
    }

    #[test]
    fn depth_first_is_never_shorter() {
        let puzzles = ["1 . 2\n4 5 3", "4 1 3\n. 2 6\n7 5 8", "4 1 2\n5 . 3"];
        for &puzzle in &puzzles {
            let start = state(puzzle);
            let dfs = solution_len(&start, Method::DepthFirst).unwrap();
            let bfs = solution_len(&start, Method::BreadthFirst).unwrap();
            let a_star = solution_len(&start, Method::AStarManhattan).unwrap();
            assert_eq!(bfs, a_star);
            assert!(a_star <= dfs);
        }
    }

    #[test]
    fn non_square_grids() {
        // the whole 2x3 state space has 360 reachable states
        let start = state("4 1 2\n5 . 3");
        assert_eq!(solution_len(&start, Method::BreadthFirst), Some(5));

        let unsolvable = state("2 1 3\n4 5 .");
        let solution = solve_with(&unsolvable, Method::BreadthFirst);
        assert!(solution.moves.is_none());
        assert_eq!(solution.stats.total_expanded(), 360);
    }

    #[test]
    fn node_limit() {
        let start = state("8 6 7\n2 5 4\n3 . 1");
        let config = Config {
            node_limit: Some(100),
            ..Config::new(Method::BreadthFirst)
        };
        assert_eq!(start.solve(&config).unwrap_err(), SolverErr::NodeLimit(100));

        // the limit doesn't matter when the goal is close
        let start = state("1 2 3\n4 5 6\n7 . 8");
        let config = Config {
            node_limit: Some(5),
            ..Config::new(Method::BreadthFirst)
        };
        assert_eq!(start.solve(&config).unwrap().moves.unwrap().len(), 1);
    }

    #[test]
    fn stats_add_up() {
        let start = state("4 1 3\n. 2 6\n7 5 8");
        for &method in &ALL_METHODS {
            let stats = solve_with(&start, method).stats;
            // the goal is visited but not expanded
            assert_eq!(stats.total_unique_visited(), stats.total_expanded() + 1);
            assert!(
                stats.total_created()
                    >= stats.total_unique_visited() + stats.total_reached_duplicates()
            );
        }
    }

    #[test]
    fn repeated_solves_are_independent() {
        let start = state("4 1 3\n. 2 6\n7 5 8");
        let first = solve_with(&start, Method::AStarManhattan);
        let second = solve_with(&start, Method::AStarManhattan);
        assert_eq!(first.moves, second.moves);
        assert!(first.stats == second.stats);
    }
}
