use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::state::{State, StateErr, Tile, BLANK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    Token(usize, usize),
    LineLength(usize),
    State(StateErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No tiles"),
            ParserErr::Token(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParserErr::LineLength(r) => write!(f, "Wrong line length on line {}", r),
            ParserErr::State(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<StateErr> for ParserErr {
    fn from(err: StateErr) -> Self {
        ParserErr::State(err)
    }
}

impl FromStr for State {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One row per line, tiles separated by whitespace, `.` or `0` is the blank.
pub(crate) fn parse(puzzle: &str) -> Result<State, ParserErr> {
    // trim so we can specify puzzles using raw strings more easily
    let puzzle = puzzle.trim_matches(|c: char| c == '\n' || c == '\r').trim_end();

    let mut rows: Vec<Vec<Tile>> = Vec::new();
    for (r, line) in puzzle.lines().enumerate() {
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| parse_tile(token).ok_or(ParserErr::Token(r, c)))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(ParserErr::LineLength(r));
            }
        }
        rows.push(row);
    }
    if rows.first().map_or(true, Vec::is_empty) {
        return Err(ParserErr::Empty);
    }

    Ok(State::new(rows)?)
}

fn parse_tile(token: &str) -> Option<Tile> {
    if token == "." {
        Some(BLANK)
    } else {
        token.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_blank_forms() {
        let dots: State = r"
1 2 3
4 5 6
7 8 .
"
        .parse()
        .unwrap();
        let zeros: State = "1\t2\t3\n4 5  6\n7 8 0\n".parse().unwrap();
        assert_eq!(dots, zeros);
        assert!(dots.is_solved());
    }

    #[test]
    fn parsing_non_square() {
        let s: State = "1 2 3 4\n5 6 . 7".parse().unwrap();
        assert_eq!(s.rows(), 2);
        assert_eq!(s.cols(), 4);
        assert_eq!(s.tiles(), &[1, 2, 3, 4, 5, 6, 0, 7]);
    }

    #[test]
    fn parsing_errors() {
        assert_eq!("".parse::<State>().unwrap_err(), ParserErr::Empty);
        assert_eq!("\n\n".parse::<State>().unwrap_err(), ParserErr::Empty);
        assert_eq!(
            "1 2\n3 x".parse::<State>().unwrap_err(),
            ParserErr::Token(1, 1)
        );
        assert_eq!(
            "1 2 3\n4 .".parse::<State>().unwrap_err(),
            ParserErr::LineLength(1)
        );
        assert_eq!(
            "1 2\n3 4".parse::<State>().unwrap_err(),
            ParserErr::State(StateErr::InvalidTile(4))
        );
        assert_eq!(
            "1 2\n3 1".parse::<State>().unwrap_err(),
            ParserErr::State(StateErr::DuplicateTile(1))
        );
        assert_eq!(
            "-1 2\n3 .".parse::<State>().unwrap_err(),
            ParserErr::Token(0, 0)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::Token(2, 3).to_string(),
            "Invalid tile at pos: [2, 3]"
        );
        assert_eq!(
            ParserErr::State(StateErr::NoBlank).to_string(),
            "No blank"
        );
    }
}
