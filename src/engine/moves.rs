//! Directional compaction and merging.
//!
//! All four directions share one algorithm parameterized by axis
//! (row or column) and edge preference (low or high indices first).
//! The merge pass runs over the flattened board with a per-axis
//! stride, which reproduces the reference behavior of merging the
//! last cell of a row with the first cell of the next on horizontal
//! moves (see DESIGN.md).

use crate::engine::Board;

/// A logical move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slide tiles toward the top edge.
    Up,
    /// Slide tiles toward the bottom edge.
    Down,
    /// Slide tiles toward the left edge.
    Left,
    /// Slide tiles toward the right edge.
    Right,
}

/// Axis a move operates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Left/Right moves compact each row.
    Row,
    /// Up/Down moves compact each column.
    Column,
}

impl Direction {
    /// Get all four directions.
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Axis this direction compacts along.
    const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Column,
            Direction::Left | Direction::Right => Axis::Row,
        }
    }

    /// Whether tiles pack toward the low-index end of a lane.
    const fn packs_low(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

/// Flat index of the `offset`-th cell in a lane.
///
/// For rows, `lane` is the row and `offset` the column; for columns
/// the reverse.
const fn lane_cell(axis: Axis, size: usize, lane: usize, offset: usize) -> usize {
    match axis {
        Axis::Row => lane * size + offset,
        Axis::Column => offset * size + lane,
    }
}

/// Slide all tiles toward the direction's edge, closing gaps.
///
/// Each row (Left/Right) or column (Up/Down) is compacted
/// independently: non-zero values keep their relative order, zeros
/// collect at the opposite edge. Idempotent.
pub fn compact(board: &mut Board, direction: Direction) {
    let size = board.size();
    let axis = direction.axis();
    let mut tiles = Vec::with_capacity(size);

    for lane in 0..size {
        tiles.clear();
        for offset in 0..size {
            let value = board.cells()[lane_cell(axis, size, lane, offset)];
            if value != 0 {
                tiles.push(value);
            }
        }

        let zeros = size - tiles.len();
        let cells = board.cells_mut();
        for offset in 0..size {
            let value = if direction.packs_low() {
                if offset < tiles.len() { tiles[offset] } else { 0 }
            } else if offset < zeros {
                0
            } else {
                tiles[offset - zeros]
            };
            cells[lane_cell(axis, size, lane, offset)] = value;
        }
    }
}

/// Combine adjacent equal tiles along the move axis.
///
/// Scans the flattened board in index order, comparing cell `i` with
/// cell `i + stride` (stride 1 for horizontal moves, the grid size
/// for vertical ones). When both are non-zero and equal, the earlier
/// cell takes the sum and the later becomes 0. A single forward pass
/// means each cell participates in at most one merge.
///
/// Returns the total points earned (the sum of all merged values).
pub fn merge(board: &mut Board, direction: Direction) -> u32 {
    let stride = match direction.axis() {
        Axis::Row => 1,
        Axis::Column => board.size(),
    };

    let cells = board.cells_mut();
    let mut points = 0u32;

    let mut i = 0;
    while i + stride < cells.len() {
        let a = cells[i];
        let b = cells[i + stride];
        if a != 0 && a == b {
            let sum = a.saturating_add(b);
            cells[i] = sum;
            cells[i + stride] = 0;
            points = points.saturating_add(sum);
        }
        i += 1;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[u32]) -> Board {
        Board::from_cells(cells.to_vec()).unwrap()
    }

    #[test]
    fn test_compact_left() {
        let mut b = board(&[0, 2, 0, 4, 0, 0, 8, 0, 2, 0, 0, 2, 0, 0, 0, 0]);
        compact(&mut b, Direction::Left);
        assert_eq!(
            b.cells(),
            &[2, 4, 0, 0, 8, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_compact_right() {
        let mut b = board(&[0, 2, 0, 4, 0, 0, 8, 0, 2, 0, 0, 2, 0, 0, 0, 0]);
        compact(&mut b, Direction::Right);
        assert_eq!(
            b.cells(),
            &[0, 0, 2, 4, 0, 0, 0, 8, 0, 0, 2, 2, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_compact_up() {
        let mut b = board(&[0, 0, 0, 2, 4, 0, 0, 0, 0, 0, 2, 0, 4, 0, 0, 2]);
        compact(&mut b, Direction::Up);
        assert_eq!(
            b.cells(),
            &[4, 0, 2, 2, 4, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_compact_down() {
        let mut b = board(&[0, 0, 0, 2, 4, 0, 0, 0, 0, 0, 2, 0, 4, 0, 0, 2]);
        compact(&mut b, Direction::Down);
        assert_eq!(
            b.cells(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 2, 4, 0, 2, 2]
        );
    }

    #[test]
    fn test_compact_preserves_tile_order() {
        let mut b = board(&[0, 8, 2, 4]);
        compact(&mut b, Direction::Left);
        // Row 0: [0, 8] -> [8, 0]; row 1: [2, 4] unchanged
        assert_eq!(b.cells(), &[8, 0, 2, 4]);
    }

    #[test]
    fn test_compact_idempotent() {
        let mut b = board(&[0, 2, 0, 4, 0, 0, 8, 0, 2, 0, 0, 2, 0, 0, 0, 0]);
        for direction in Direction::all() {
            compact(&mut b, direction);
            let once = b.clone();
            compact(&mut b, direction);
            assert_eq!(b, once);
        }
    }

    #[test]
    fn test_merge_row_pair() {
        let mut b = board(&[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Left);
        assert_eq!(points, 4);
        assert_eq!(b.get(0), Some(4));
        assert_eq!(b.get(1), Some(0));
    }

    #[test]
    fn test_merge_no_cascade_in_one_pass() {
        // Four equal tiles in one row merge into two pairs, never one
        let mut b = board(&[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Left);
        assert_eq!(points, 8);
        assert_eq!(&b.cells()[..4], &[4, 0, 4, 0]);
    }

    #[test]
    fn test_merge_result_never_remerges() {
        // [4, 2, 2] merges the pair into 4 but not the two 4s
        let mut b = board(&[4, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Left);
        assert_eq!(points, 4);
        assert_eq!(&b.cells()[..4], &[4, 4, 0, 0]);
    }

    #[test]
    fn test_merge_column_stride() {
        let mut b = board(&[2, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Up);
        assert_eq!(points, 4);
        assert_eq!(b.get_at(0, 0), Some(4));
        assert_eq!(b.get_at(1, 0), Some(0));
        assert_eq!(b.get_at(2, 0), Some(4));
    }

    #[test]
    fn test_merge_left_crosses_row_boundary() {
        // Reference quirk: linear scan merges the last cell of row 0
        // with the first cell of row 1 on horizontal moves
        let mut b = board(&[0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Left);
        assert_eq!(points, 4);
        assert_eq!(b.get(3), Some(4));
        assert_eq!(b.get(4), Some(0));
    }

    #[test]
    fn test_merge_vertical_stays_in_column() {
        // Stride-size scan never pairs cells from different columns
        let mut b = board(&[0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Up);
        assert_eq!(points, 0);
        assert_eq!(b.get(3), Some(2));
        assert_eq!(b.get(4), Some(2));
    }

    #[test]
    fn test_merge_ignores_unequal_and_empty() {
        let mut b = board(&[2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let points = merge(&mut b, Direction::Left);
        assert_eq!(points, 0);
        assert_eq!(&b.cells()[..2], &[2, 4]);
    }
}
