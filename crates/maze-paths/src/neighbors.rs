use maze_core::{Cell, Direction};

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a cell in [`Direction::ALL`] order,
/// filtered by a predicate. Neighbors that would have a negative coordinate
/// are never offered to the predicate.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbors of `c`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for d in Direction::ALL {
            let Some(n) = c.step(d) else {
                continue;
            };
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
