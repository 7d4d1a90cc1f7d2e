use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

use typed_arena::Arena;

use crate::data::Dir;
use crate::moves::Moves;
use crate::state::State;

/// Stable handle of a node within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A state plus how the search got there.
///
/// Nodes form a tree through `prev`, a node's parent is always allocated before it.
pub struct SearchNode<'a> {
    pub id: NodeId,
    pub state: State,
    pub prev: Option<&'a SearchNode<'a>>,
    /// Direction the blank moved in to get here from `prev`.
    pub action: Option<Dir>,
    /// Moves made so far.
    pub depth: u32,
}

impl<'a> SearchNode<'a> {
    pub fn is_goal(&self) -> bool {
        self.state.is_solved()
    }

    /// Actions from the root to this node.
    pub fn path(&self) -> Moves {
        let mut moves = Moves::default();
        let mut cur = self;
        while let (Some(action), Some(prev)) = (cur.action, cur.prev) {
            moves.add(action);
            cur = prev;
        }
        moves.reverse();
        moves
    }
}

impl<'a> Debug for SearchNode<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("depth", &self.depth)
            .field("prev", &self.prev.map(|p| p.id))
            .finish()
    }
}

/// Owns all nodes of one search, they're freed together when it's dropped.
pub struct NodeArena<'a> {
    nodes: Arena<SearchNode<'a>>,
    next_id: Cell<usize>,
}

impl<'a> NodeArena<'a> {
    pub fn new() -> Self {
        NodeArena {
            nodes: Arena::new(),
            next_id: Cell::new(0),
        }
    }

    pub fn alloc_root(&'a self, state: State) -> &'a SearchNode<'a> {
        self.alloc(SearchNode {
            id: self.next_id(),
            state,
            prev: None,
            action: None,
            depth: 0,
        })
    }

    pub fn alloc_child(
        &'a self,
        prev: &'a SearchNode<'a>,
        action: Dir,
        state: State,
    ) -> &'a SearchNode<'a> {
        self.alloc(SearchNode {
            id: self.next_id(),
            state,
            prev: Some(prev),
            action: Some(action),
            depth: prev.depth + 1,
        })
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.next_id.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn alloc(&'a self, node: SearchNode<'a>) -> &'a SearchNode<'a> {
        self.nodes.alloc(node)
    }

    fn next_id(&self) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeId(id)
    }
}

impl<'a> Default for NodeArena<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Debug for NodeArena<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeArena({} nodes)", self.len())
    }
}
