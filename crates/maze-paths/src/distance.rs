use maze_core::Cell;

/// Manhattan (L1) distance between two cells. No 4-connected route between
/// them can take fewer steps.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> usize {
    a.row.abs_diff(b.row) + a.column.abs_diff(b.column)
}
