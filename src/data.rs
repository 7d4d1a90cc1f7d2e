use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos { r, c }
    }

    /// The neighbor in `dir` or `None` if it would be outside a `rows` x `cols` grid.
    pub fn step(self, dir: Dir, rows: usize, cols: usize) -> Option<Pos> {
        match dir {
            Dir::Up if self.r > 0 => Some(Pos::new(self.r - 1, self.c)),
            Dir::Down if self.r + 1 < rows => Some(Pos::new(self.r + 1, self.c)),
            Dir::Left if self.c > 0 => Some(Pos::new(self.r, self.c - 1)),
            Dir::Right if self.c + 1 < cols => Some(Pos::new(self.r, self.c + 1)),
            _ => None,
        }
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = if self.r > other.r { self.r - other.r } else { other.r - self.r };
        let dc = if self.c > other.c { self.c - other.c } else { other.c - self.c };
        (dr + dc) as u32
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn from_char(c: char) -> Option<Dir> {
        match c {
            'U' => Some(Dir::Up),
            'D' => Some(Dir::Down),
            'L' => Some(Dir::Left),
            'R' => Some(Dir::Right),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'U',
            Dir::Down => 'D',
            Dir::Left => 'L',
            Dir::Right => 'R',
        };
        write!(f, "{}", c)
    }
}
