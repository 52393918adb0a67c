//! Board representation.

/// Minimum grid size that supports the merge mechanic.
pub(crate) const MIN_GRID_SIZE: usize = 2;

/// A square grid of tile values stored in row-major order.
///
/// Cells hold `0` for empty or a power of two for a tile. The cell
/// sequence has exactly `size * size` entries for the lifetime of the
/// board; `index = row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length of the square grid.
    size: usize,
    /// Cell values in row-major order.
    cells: Vec<u32>,
}

impl Board {
    /// Create an empty board with the given side length.
    ///
    /// Returns `None` if `size` is below the minimum of 2; a smaller
    /// grid cannot hold two tiles to merge.
    #[must_use]
    pub fn new(size: usize) -> Option<Self> {
        if size < MIN_GRID_SIZE {
            return None;
        }

        Some(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Get the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Get the total number of cells (`size * size`).
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Get a reference to the raw cell slice for efficient iteration.
    ///
    /// Cells are in row-major order; use this when the caller does its
    /// own row/column arithmetic.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Get a mutable reference to the raw cell slice.
    #[must_use]
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    /// Get the value at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// Get the value at a row/column position.
    #[must_use]
    pub fn get_at(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Set the value at a flat index.
    ///
    /// Returns `false` if the index is out of bounds.
    pub fn set(&mut self, index: usize, value: u32) -> bool {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
            true
        } else {
            false
        }
    }

    /// Check whether every cell holds a tile.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Get the largest tile value on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Count the tiles (non-zero cells) on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all cell values.
    #[must_use]
    pub fn value_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Collect the flat indices of all empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Build a board from an explicit cell sequence.
    ///
    /// Returns `None` unless `cells` has a square length of at least
    /// `MIN_GRID_SIZE * MIN_GRID_SIZE` cells.
    #[must_use]
    pub fn from_cells(cells: Vec<u32>) -> Option<Self> {
        let mut size = MIN_GRID_SIZE;
        while size * size < cells.len() {
            size += 1;
        }
        if size * size != cells.len() {
            return None;
        }

        Some(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell_count(), 16);
        assert!(board.cells().iter().all(|&v| v == 0));
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.max_tile(), 0);
    }

    #[test]
    fn test_new_rejects_degenerate_size() {
        assert!(Board::new(0).is_none());
        assert!(Board::new(1).is_none());
        assert!(Board::new(2).is_some());
    }

    #[test]
    fn test_get_set_flat_index() {
        let mut board = Board::new(4).unwrap();
        assert!(board.set(5, 8));
        assert_eq!(board.get(5), Some(8));
        assert_eq!(board.get_at(1, 1), Some(8));
        assert!(!board.set(16, 2));
        assert_eq!(board.get(16), None);
    }

    #[test]
    fn test_is_full_and_empty_cells() {
        let mut board = Board::new(2).unwrap();
        assert!(!board.is_full());
        assert_eq!(board.empty_cells(), vec![0, 1, 2, 3]);

        for i in 0..4 {
            board.set(i, 2);
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_from_cells_square_lengths() {
        let board = Board::from_cells(vec![2, 0, 0, 4]).unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.get_at(1, 1), Some(4));

        // 5 cells is not a square length
        assert!(Board::from_cells(vec![0; 5]).is_none());
        // 1x1 is below the minimum grid size
        assert!(Board::from_cells(vec![2]).is_none());
    }

    #[test]
    fn test_value_sum() {
        let board = Board::from_cells(vec![2, 4, 0, 8]).unwrap();
        assert_eq!(board.value_sum(), 14);
    }
}
