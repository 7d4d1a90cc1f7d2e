use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::Dir;
use crate::state::State;

/// Moves of the blank from the start to the goal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// Applies the moves one by one, `None` if any of them would move the blank off the grid.
    pub fn replay(&self, start: &State) -> Option<State> {
        let mut state = start.clone();
        for &dir in self {
            state = state.neighbor(dir)?;
        }
        Some(state)
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMove(pub char);

impl Display for InvalidMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid move: '{}'", self.0)
    }
}

impl Error for InvalidMove {}

impl FromStr for Moves {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| Dir::from_char(c).ok_or(InvalidMove(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_and_parsing() {
        let moves = Moves::new(vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left]);
        assert_eq!(moves.to_string(), "URDL");
        assert_eq!(format!("{:?}", moves), "URDL");
        assert_eq!("URDL".parse::<Moves>().unwrap(), moves);
        assert_eq!("".parse::<Moves>().unwrap(), Moves::default());
        assert_eq!("UxD".parse::<Moves>().unwrap_err(), InvalidMove('x'));
    }

    #[test]
    fn replaying() {
        let start: State = "1 2 3\n4 5 6\n7 . 8".parse().unwrap();
        let goal = State::solved(3, 3).unwrap();

        let moves: Moves = "R".parse().unwrap();
        assert_eq!(moves.replay(&start), Some(goal.clone()));

        let moves: Moves = "LRR".parse().unwrap();
        assert_eq!(moves.replay(&start), Some(goal));

        // the blank is in the bottom row
        let moves: Moves = "D".parse().unwrap();
        assert_eq!(moves.replay(&start), None);
    }

    #[test]
    fn iterating() {
        let v = vec![Dir::Up, Dir::Down, Dir::Left, Dir::Right];
        let moves = Moves::new(v.clone());
        assert_eq!(moves.len(), 4);
        assert!(!moves.is_empty());

        let mut v2 = Vec::new();
        for &m in &moves {
            v2.push(m);
        }
        for &m in moves.iter() {
            v2.push(m);
        }
        for m in moves {
            v2.push(m);
        }
        assert_eq!(v2.len(), 12);
        for chunk in v2.chunks(4) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
