//! Rectangular grids and the transforms defined over them
//!
//! [`Grid`] is a row-major rectangular grid with checked construction (ragged
//! input is rejected). The submodules provide the grid algorithms: concentric
//! ring rotation in [`ring`] and the matrix lab transforms in [`transforms`].

pub mod ring;
pub mod transforms;

pub use ring::{rings, rotate_ring, rotate_rings, rotate_secret, Ring};
pub use transforms::{
    arena_score, column_deltas, compress, rotate_rows_down, seat_rotation_steps, zigzag_walk,
    ArenaOutcome, SURVIVAL_THRESHOLD,
};

use crate::error::{AlgolabError, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Row-major rectangular grid
///
/// # Examples
///
/// ```rust
/// use algolab::grid::Grid;
///
/// let grid = Grid::from_rows(vec![
///     vec![1, 2],
///     vec![3, 4],
/// ])?;
/// assert_eq!(grid[(1, 0)], 3);
/// assert!(grid.is_square());
/// # Ok::<(), algolab::AlgolabError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row vectors, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(AlgolabError::invalid_input("grid must have at least one cell"));
        }
        let cols = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(AlgolabError::invalid_input(format!(
                "ragged grid: row {} has {} cells, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { rows: row_count, cols, cells })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(AlgolabError::invalid_input("grid must have at least one cell"));
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether the grid is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow the cell at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Mutably borrow the cell at `(row, col)`, if in bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow row `row` as a slice
    pub fn row(&self, row: usize) -> Result<&[T]> {
        crate::error::check_bounds(row, self.rows)?;
        Ok(&self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate all cells row by row, left to right
    pub fn iter_row_major(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Position of the first cell equal to `value`, in row-major order
    pub fn find(&self, value: &T) -> Option<(usize, usize)>
    where
        T: PartialEq,
    {
        self.cells
            .iter()
            .position(|cell| cell == value)
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Consume the grid back into row vectors
    pub fn to_rows(mut self) -> Vec<Vec<T>> {
        let mut rows = Vec::with_capacity(self.rows);
        for _ in 0..self.rows {
            let rest = self.cells.split_off(self.cols.min(self.cells.len()));
            rows.push(std::mem::replace(&mut self.cells, rest));
        }
        rows
    }

    pub(crate) fn rotate_cells_right(&mut self, by: usize) {
        self.cells.rotate_right(by);
    }
}

impl<T: Clone> Grid<T> {
    /// Build a grid with every cell set to `fill`
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| fill.clone())
    }
}

impl Grid<char> {
    /// Concatenate all cells in row-major order into a message string
    pub fn message(&self) -> String {
        self.cells.iter().collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Bordered rows with left-aligned cells: `| U  | V  | W  |`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(|cell| cell.to_string()).collect();
        let width = rendered.iter().map(String::len).max().unwrap_or(1);
        for row in rendered.chunks(self.cols) {
            for cell in row {
                write!(f, "| {:<width$} ", cell, width = width)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
