use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    BreadthFirst,
    DepthFirst,
    AStarMisplaced,
    AStarManhattan,
}

impl Default for Method {
    fn default() -> Self {
        Method::AStarManhattan
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::BreadthFirst => write!(f, "breadth-first"),
            Method::DepthFirst => write!(f, "depth-first"),
            Method::AStarMisplaced => write!(f, "a-star-misplaced"),
            Method::AStarManhattan => write!(f, "a-star-manhattan"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub method: Method,
    /// Print stats every time the search reaches a new depth.
    pub print_status: bool,
    /// Give up after expanding this many states.
    pub node_limit: Option<usize>,
}

impl Config {
    pub fn new(method: Method) -> Self {
        Config {
            method,
            ..Config::default()
        }
    }
}
