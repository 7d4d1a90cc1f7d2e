use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::vec2d::Vec2d;

pub type Tile = u32;

pub const BLANK: Tile = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateErr {
    TooSmall { rows: usize, cols: usize },
    NotRectangular(usize),
    NoBlank,
    MultipleBlanks,
    InvalidTile(Tile),
    DuplicateTile(Tile),
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::TooSmall { rows, cols } => {
                write!(f, "Puzzle is {}x{}, needs at least 2x2", rows, cols)
            }
            StateErr::NotRectangular(r) => write!(f, "Row {} has a different length", r),
            StateErr::NoBlank => write!(f, "No blank"),
            StateErr::MultipleBlanks => write!(f, "More than one blank"),
            StateErr::InvalidTile(t) => write!(f, "Tile {} is out of range", t),
            StateErr::DuplicateTile(t) => write!(f, "Tile {} appears more than once", t),
        }
    }
}

impl Error for StateErr {}

/// One configuration of the puzzle.
///
/// Immutable - moving the blank creates a new state.
/// Equality and hashing only look at the grid (including its shape),
/// the blank position is derived from it.
#[derive(Clone)]
pub struct State {
    grid: Vec2d<Tile>,
    blank: Pos,
}

impl State {
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<State, StateErr> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height < 2 || width < 2 {
            return Err(StateErr::TooSmall { rows: height, cols: width });
        }
        if let Some(r) = rows.iter().position(|row| row.len() != width) {
            return Err(StateErr::NotRectangular(r));
        }

        let grid = Vec2d::from_rows(rows);
        let tile_cnt = grid.as_slice().len();
        let mut seen = vec![false; tile_cnt];
        let mut blank = None;
        for (pos, &tile) in grid.iter() {
            if tile == BLANK {
                if blank.is_some() {
                    return Err(StateErr::MultipleBlanks);
                }
                blank = Some(pos);
            } else if tile as usize >= tile_cnt {
                return Err(StateErr::InvalidTile(tile));
            } else if seen[tile as usize] {
                return Err(StateErr::DuplicateTile(tile));
            } else {
                seen[tile as usize] = true;
            }
        }
        let blank = blank.ok_or(StateErr::NoBlank)?;

        Ok(State { grid, blank })
    }

    /// The goal: tiles in row-major order with the blank last.
    pub fn solved(rows: usize, cols: usize) -> Result<State, StateErr> {
        let grid = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| ((r * cols + c + 1) % (rows * cols)) as Tile)
                    .collect()
            })
            .collect();
        State::new(grid)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn tile(&self, pos: Pos) -> Tile {
        self.grid[pos]
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        self.grid.as_slice()
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.grid.row_slices().map(<[Tile]>::to_vec).collect()
    }

    /// The state after moving the blank in `dir`, `None` if the blank would leave the grid.
    pub fn neighbor(&self, dir: Dir) -> Option<State> {
        let new_blank = self.blank.step(dir, self.rows(), self.cols())?;
        let mut grid = self.grid.clone();
        grid.swap(self.blank, new_blank);
        Some(State { grid, blank: new_blank })
    }

    /// One slot per direction in `DIRECTIONS` order, empty where the move is impossible.
    pub fn successors(&self) -> [Option<State>; 4] {
        [
            self.neighbor(DIRECTIONS[0]),
            self.neighbor(DIRECTIONS[1]),
            self.neighbor(DIRECTIONS[2]),
            self.neighbor(DIRECTIONS[3]),
        ]
    }

    pub fn is_solved(&self) -> bool {
        let tiles = self.tiles();
        let last = tiles.len() - 1;
        tiles[last] == BLANK
            && tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &tile)| tile as usize == i + 1)
    }

    /// Where `tile` is in the solved state.
    pub fn goal_pos(&self, tile: Tile) -> Pos {
        let cols = self.cols();
        if tile == BLANK {
            Pos::new(self.rows() - 1, cols - 1)
        } else {
            let i = tile as usize - 1;
            Pos::new(i / cols, i % cols)
        }
    }

    /// Whether the solved state is reachable at all, decided by permutation parity.
    ///
    /// With an odd width every move keeps the inversion count's parity.
    /// With an even width a vertical move flips it and also changes the blank's row,
    /// so the sum of inversions and the blank's distance from the bottom row is kept instead.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<Tile> = self.tiles().iter().cloned().filter(|&t| t != BLANK).collect();
        let mut inversions = 0;
        for (i, &a) in tiles.iter().enumerate() {
            inversions += tiles[i + 1..].iter().filter(|&&b| b < a).count();
        }
        if self.cols() % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_from_bottom = self.rows() - 1 - self.blank.r;
            (inversions + blank_from_bottom) % 2 == 0
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &State) -> bool {
        self.grid == other.grid
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.grid.row_slices() {
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "\t")?;
                }
                if tile == BLANK {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
