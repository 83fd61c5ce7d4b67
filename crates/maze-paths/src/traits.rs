use maze_core::{Cell, Grid};

/// What a route search needs to know about the maze it walks.
pub trait Maze {
    /// Whether `cell` exists in the maze.
    fn in_bounds(&self, cell: Cell) -> bool;

    /// Whether `cell` blocks movement. Only asked for in-bounds cells.
    fn is_wall(&self, cell: Cell) -> bool;

    /// In bounds and not a wall.
    fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }
}

impl Maze for Grid {
    #[inline]
    fn in_bounds(&self, cell: Cell) -> bool {
        Grid::in_bounds(self, cell)
    }

    #[inline]
    fn is_wall(&self, cell: Cell) -> bool {
        Grid::is_wall(self, cell)
    }
}
