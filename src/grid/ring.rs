//! Clockwise rotation of concentric square rings
//!
//! An N×N grid decomposes into `floor(N/2)` concentric square rings, ring 0
//! outermost. Each ring is read in clockwise order starting at its top-left
//! corner, shifted forward by a ring-specific step count, and written back
//! along the same traversal. Rings are disjoint, so each rotates
//! independently.
//!
//! The step count for ring `layer` is `(total_layers - layer) mod perimeter`:
//! outer rings get larger nominal steps, and a step that is a multiple of the
//! ring's own perimeter leaves it unchanged.

use crate::error::{AlgolabError, Result};
use crate::grid::Grid;

/// Descriptor for one concentric ring of an N×N grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    /// Layer index, 0 = outermost
    pub layer: usize,
    /// First row/column of the ring
    pub start: usize,
    /// Last row/column of the ring
    pub end: usize,
}

impl Ring {
    /// Side length minus one: the stride between ring corners
    pub fn side_len(&self) -> usize {
        self.end - self.start
    }

    /// Number of cells on the ring: `4 * side_len`
    pub fn perimeter(&self) -> usize {
        4 * self.side_len()
    }

    /// A ring of zero or one cell, which rotation leaves untouched
    pub fn is_degenerate(&self) -> bool {
        self.side_len() == 0
    }

    /// Clockwise traversal coordinates, starting at the top-left corner
    ///
    /// Top row left to right, right column top to bottom, bottom row right to
    /// left, left column bottom to top; each corner appears exactly once. The
    /// result has `perimeter()` entries.
    pub fn coordinates(&self) -> Vec<(usize, usize)> {
        let (start, end) = (self.start, self.end);
        let mut coords = Vec::with_capacity(self.perimeter());
        for col in start..end {
            coords.push((start, col));
        }
        for row in start..end {
            coords.push((row, end));
        }
        for col in ((start + 1)..=end).rev() {
            coords.push((end, col));
        }
        for row in ((start + 1)..=end).rev() {
            coords.push((row, start));
        }
        coords
    }
}

/// Ring descriptors of an N×N grid, outermost first
pub fn rings(n: usize) -> impl Iterator<Item = Ring> {
    (0..n / 2).map(move |layer| Ring {
        layer,
        start: layer,
        end: n - 1 - layer,
    })
}

/// Rotate one ring of a square grid clockwise by `steps` cells
///
/// Reading the ring as a clockwise sequence `c[0..p]`, the rotated ring
/// satisfies `out[(i + steps) % p] = c[i]`: every cell moves `steps` positions
/// forward along the traversal, wrapping around. Steps that are multiples of
/// the perimeter are no-ops.
pub fn rotate_ring<T: Clone>(grid: &mut Grid<T>, layer: usize, steps: usize) -> Result<()> {
    if !grid.is_square() {
        return Err(AlgolabError::non_square(grid.rows(), grid.cols()));
    }
    let n = grid.rows();
    // Layers up to the center are addressable; an odd grid's center cell is a
    // degenerate ring that rotation leaves untouched
    crate::error::check_bounds(layer, (n + 1) / 2)?;

    let ring = Ring { layer, start: layer, end: n - 1 - layer };
    if ring.is_degenerate() {
        return Ok(());
    }
    let perimeter = ring.perimeter();
    let steps = steps % perimeter;
    if steps == 0 {
        return Ok(());
    }

    let coords = ring.coordinates();
    let cells: Vec<T> = coords.iter().map(|&(r, c)| grid[(r, c)].clone()).collect();
    for (i, &(r, c)) in coords.iter().enumerate() {
        grid[(r, c)] = cells[(i + perimeter - steps) % perimeter].clone();
    }
    Ok(())
}

/// Rotate every ring of a square grid by its layer-dependent step count
///
/// Ring `layer` rotates clockwise by `(total_layers - layer) mod perimeter`
/// where `total_layers = floor(N/2)`. Rings are processed outermost first;
/// their coordinate sets are disjoint, so the order does not matter.
pub fn rotate_rings<T: Clone>(grid: &mut Grid<T>) -> Result<()> {
    if !grid.is_square() {
        return Err(AlgolabError::non_square(grid.rows(), grid.cols()));
    }
    let total_layers = grid.rows() / 2;
    for ring in rings(grid.rows()) {
        if ring.is_degenerate() {
            continue;
        }
        let steps = (total_layers - ring.layer) % ring.perimeter();
        rotate_ring(grid, ring.layer, steps)?;
    }
    Ok(())
}

/// Rotate all rings of a character grid and read out the hidden message
///
/// Applies [`rotate_rings`] and returns the mutated grid's cells concatenated
/// in row-major order.
///
/// # Examples
///
/// ```rust
/// use algolab::grid::{rotate_secret, Grid};
///
/// let mut board = Grid::from_rows(vec![
///     vec!['T', 'A', 'U', 'S'],
///     vec!['A', 'R', 'I', '.'],
///     vec!['D', 'T', 'T', 'N'],
///     vec!['S', 'C', 'F', 'U'],
/// ])?;
/// assert_eq!(rotate_secret(&mut board)?, "DATASTRUCTISFUN.");
/// # Ok::<(), algolab::AlgolabError>(())
/// ```
pub fn rotate_secret(grid: &mut Grid<char>) -> Result<String> {
    rotate_rings(grid)?;
    Ok(grid.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_grid(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|row| row.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_ring_decomposition() {
        let layers: Vec<Ring> = rings(6).collect();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0], Ring { layer: 0, start: 0, end: 5 });
        assert_eq!(layers[2], Ring { layer: 2, start: 2, end: 3 });

        assert_eq!(rings(1).count(), 0);
        assert_eq!(rings(5).count(), 2);
    }

    #[test]
    fn test_ring_perimeter() {
        let outer = Ring { layer: 0, start: 0, end: 3 };
        assert_eq!(outer.side_len(), 3);
        assert_eq!(outer.perimeter(), 12);
        assert!(!outer.is_degenerate());

        let center = Ring { layer: 1, start: 1, end: 1 };
        assert_eq!(center.perimeter(), 0);
        assert!(center.is_degenerate());
    }

    #[test]
    fn test_coordinates_clockwise_order() {
        let ring = Ring { layer: 0, start: 0, end: 2 };
        assert_eq!(
            ring.coordinates(),
            vec![
                (0, 0), (0, 1),          // top row
                (0, 2), (1, 2),          // right column
                (2, 2), (2, 1),          // bottom row
                (2, 0), (1, 0),          // left column
            ]
        );
    }

    #[test]
    fn test_coordinates_are_disjoint_across_rings() {
        let mut seen = std::collections::HashSet::new();
        for ring in rings(6) {
            for coord in ring.coordinates() {
                assert!(seen.insert(coord), "{:?} appears in two rings", coord);
            }
        }
        // 3 rings of a 6x6 grid cover all 36 cells
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn test_rotate_ring_single_step() {
        let mut grid = char_grid(&["ab", "dc"]);
        // Perimeter abcd clockwise; one step moves each cell forward
        rotate_ring(&mut grid, 0, 1).unwrap();
        assert_eq!(grid.message(), "dacb");
    }

    #[test]
    fn test_rotate_ring_full_perimeter_is_noop() {
        let mut grid = char_grid(&["TAUS", "ARI.", "DTTN", "SCFU"]);
        let original = grid.clone();
        rotate_ring(&mut grid, 0, 12).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_rotate_ring_rejects_bad_input() {
        let mut rect = Grid::from_rows(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]).unwrap();
        assert!(rotate_ring(&mut rect, 0, 1).is_err());

        let mut square = char_grid(&["ab", "cd"]);
        assert!(rotate_ring(&mut square, 1, 1).is_err()); // only layer 0 exists
    }

    #[test]
    fn test_rotate_single_cell_grid() {
        let mut grid = char_grid(&["x"]);
        rotate_ring(&mut grid, 0, 5).unwrap();
        assert_eq!(rotate_secret(&mut grid).unwrap(), "x");
    }

    #[test]
    fn test_rotate_secret_4x4() {
        let mut board = char_grid(&["TAUS", "ARI.", "DTTN", "SCFU"]);
        let message = rotate_secret(&mut board).unwrap();
        assert_eq!(message, "DATASTRUCTISFUN.");
        assert_eq!(
            board,
            char_grid(&["DATA", "STRU", "CTIS", "FUN."])
        );
    }

    #[test]
    fn test_rotate_secret_6x6() {
        let mut board = char_grid(&[
            "ORIRNP", "GSAALR", "LMNONY", "AHUOOP", "TFCTHS", "EDYOCK",
        ]);
        let message = rotate_secret(&mut board).unwrap();
        assert_eq!(message, "ALGORITHMSAREFUNANDCOOLPYTHONROCKSPY");
        assert_eq!(
            board,
            char_grid(&["ALGORI", "THMSAR", "EFUNAN", "DCOOLP", "YTHONR", "OCKSPY"])
        );
    }

    #[test]
    fn test_rotate_secret_odd_size_keeps_center() {
        let mut board = char_grid(&["abc", "hXd", "gfe"]);
        rotate_secret(&mut board).unwrap();
        assert_eq!(board[(1, 1)], 'X');
    }
}
