use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Rectangular grid stored row-major in a single `Vec`.
///
/// Dimensions are part of equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// Rows must all have the same length, the caller checks that.
    pub(crate) fn from_rows(grid: Vec<Vec<T>>) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            debug_assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let a = self.index_of(a);
        let b = self.index_of(b);
        self.data.swap(a, b);
    }

    /// Cells in row-major order together with their positions.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Pos::new(i / cols, i % cols), cell))
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.cols)
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(pos.r < self.rows && pos.c < self.cols);
        pos.r * self.cols + pos.c
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
