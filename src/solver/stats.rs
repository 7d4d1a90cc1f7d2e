use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::solver::node::SearchNode;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<usize>,
    unique_visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    expanded: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.unique_visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// States whose successors were generated.
    pub fn total_expanded(&self) -> usize {
        self.expanded
    }

    /// Deepest depth any node was created at.
    pub fn max_depth(&self) -> usize {
        self.created_states.len().saturating_sub(1)
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    /// Returns true if this is the first node visited at its depth.
    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.unique_visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    pub(crate) fn add_expanded(&mut self) {
        self.expanded += 1;
    }

    fn add(counts: &mut Vec<usize>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because depths can be skipped when a whole level is duplicates
        while node.depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.depth as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f, "Expanded total: {}", self.expanded.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        // created_states is the longest vec - nothing is visited before it's created
        for depth in 0..self.created_states.len() {
            let at = |counts: &Vec<usize>| counts.get(depth).cloned().unwrap_or(0);
            let created = self.created_states[depth];
            let visited = at(&self.unique_visited_states);
            let duplicates = at(&self.duplicate_states);
            let left = created - visited - duplicates;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&left.separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}
