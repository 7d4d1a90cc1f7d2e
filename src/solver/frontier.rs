use std::collections::VecDeque;

use crate::heuristic::Heuristic;
use crate::solver::heap::IndexedHeap;
use crate::solver::node::SearchNode;

/// Nodes discovered but not expanded yet.
///
/// The order in which they're popped decides the kind of search.
pub trait Frontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>);

    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Breadth-first - the earliest pushed node goes first.
#[derive(Debug, Default)]
pub struct Fifo<'a>(VecDeque<&'a SearchNode<'a>>);

impl<'a> Fifo<'a> {
    pub fn new() -> Self {
        Fifo(VecDeque::new())
    }
}

impl<'a> Frontier<'a> for Fifo<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Depth-first - the latest pushed node goes first.
#[derive(Debug, Default)]
pub struct Lifo<'a>(Vec<&'a SearchNode<'a>>);

impl<'a> Lifo<'a> {
    pub fn new() -> Self {
        Lifo(Vec::new())
    }
}

impl<'a> Frontier<'a> for Lifo<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Best-first - the node with the lowest heuristic score goes first.
#[derive(Debug)]
pub struct PriorityFrontier<'a, H> {
    heap: IndexedHeap<&'a SearchNode<'a>>,
    heuristic: H,
}

impl<'a, H: Heuristic> PriorityFrontier<'a, H> {
    pub fn new(heuristic: H) -> Self {
        PriorityFrontier {
            heap: IndexedHeap::new(),
            heuristic,
        }
    }
}

impl<'a, H: Heuristic> Frontier<'a> for PriorityFrontier<'a, H> {
    /// Every node is a fresh allocation so the heap never sees the same one twice.
    fn push(&mut self, node: &'a SearchNode<'a>) {
        let score = self.heuristic.evaluate(node);
        self.heap.push(node, score);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.heap.pop().map(|(_, node)| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
