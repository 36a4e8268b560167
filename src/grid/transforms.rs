//! Matrix lab transforms: row rotation, block compression, zigzag walk,
//! column deltas, and arena scoring
//!
//! Each transform is an independent operation over a [`Grid`]; none of them
//! share state. Malformed input (odd dimensions for compression, too few
//! columns for deltas) is rejected up front.

use crate::error::{AlgolabError, Result};
use crate::grid::Grid;

/// Points a team must reach to survive the arena game
pub const SURVIVAL_THRESHOLD: i64 = 10;

/// Cyclically shift all rows down by `steps`
///
/// Each single shift moves the last row to the top. `steps` is taken modulo
/// the row count, so a full cycle is a no-op.
pub fn rotate_rows_down<T>(grid: &mut Grid<T>, steps: usize) {
    let rows = grid.rows();
    let cols = grid.cols();
    grid.rotate_cells_right((steps % rows) * cols);
}

/// Number of downward shifts the seat-rotation policy performs
///
/// The lab policy rotates once per week remaining before the exam: with
/// `rows` seat rows and the exam in week `exam_week`, the seating has been
/// shifted `rows - exam_week - 1` times (zero when the exam is this week or
/// past), wrapped to the row count.
pub fn seat_rotation_steps(rows: usize, exam_week: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    rows.saturating_sub(exam_week).saturating_sub(1) % rows
}

/// Compress a grid by summing disjoint 2x2 blocks
///
/// Both dimensions must be even; the result has half the rows and columns.
pub fn compress(grid: &Grid<i64>) -> Result<Grid<i64>> {
    if grid.rows() % 2 != 0 || grid.cols() % 2 != 0 {
        return Err(AlgolabError::invalid_input(format!(
            "compression needs even dimensions, got {}x{}",
            grid.rows(),
            grid.cols()
        )));
    }
    Grid::from_fn(grid.rows() / 2, grid.cols() / 2, |r, c| {
        let (top, left) = (2 * r, 2 * c);
        grid[(top, left)] + grid[(top, left + 1)] + grid[(top + 1, left)] + grid[(top + 1, left + 1)]
    })
}

/// Walk the grid column by column in the lab's zigzag pattern
///
/// Even columns are read top-down on even row indices (0, 2, 4, ...). Odd
/// columns are read bottom-up with the same stride, starting from the last
/// row when the row count is even and the second-to-last row otherwise.
/// Returns one vector per column.
pub fn zigzag_walk<T: Clone>(grid: &Grid<T>) -> Vec<Vec<T>> {
    let rows = grid.rows();
    let mut walks = Vec::with_capacity(grid.cols());
    for col in 0..grid.cols() {
        let mut walk = Vec::new();
        if col % 2 == 0 {
            for row in (0..rows).step_by(2) {
                walk.push(grid[(row, col)].clone());
            }
        } else {
            // Bottom-up start skips the last row when the row count is odd; a
            // single-row grid has no odd-column cells to visit
            let top = if rows % 2 == 0 { Some(rows - 1) } else { rows.checked_sub(2) };
            if let Some(top) = top {
                for row in (0..=top).rev().step_by(2) {
                    walk.push(grid[(row, col)].clone());
                }
            }
        }
        walks.push(walk);
    }
    walks
}

/// Differences between adjacent column sums
///
/// Sums every column, then returns `sum[j + 1] - sum[j]` for each adjacent
/// pair; a grid with fewer than two columns has no deltas to take.
pub fn column_deltas(grid: &Grid<i64>) -> Result<Vec<i64>> {
    if grid.cols() < 2 {
        return Err(AlgolabError::invalid_input(
            "column deltas need at least two columns",
        ));
    }
    let mut sums = vec![0i64; grid.cols()];
    for row in 0..grid.rows() {
        for (col, sum) in sums.iter_mut().enumerate() {
            *sum += grid[(row, col)];
        }
    }
    Ok(sums.windows(2).map(|pair| pair[1] - pair[0]).collect())
}

/// Outcome of scoring an arena grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaOutcome {
    /// Total points gained by all players
    pub points: i64,
    /// Whether the team reached [`SURVIVAL_THRESHOLD`]
    pub survived: bool,
}

/// Score the arena game
///
/// Players are cells holding a positive multiple of 50. Each orthogonal
/// neighbor cell equal to 2 is worth 2 points. The team survives when the
/// total reaches [`SURVIVAL_THRESHOLD`].
pub fn arena_score(grid: &Grid<i64>) -> ArenaOutcome {
    let mut points = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = grid[(row, col)];
            if cell <= 0 || cell % 50 != 0 {
                continue;
            }
            let neighbors = [
                row.checked_sub(1).map(|r| (r, col)),
                Some((row + 1, col)),
                col.checked_sub(1).map(|c| (row, c)),
                Some((row, col + 1)),
            ];
            for (r, c) in neighbors.into_iter().flatten() {
                if grid.get(r, c) == Some(&2) {
                    points += 2;
                }
            }
        }
    }
    ArenaOutcome { points, survived: points >= SURVIVAL_THRESHOLD }
}
