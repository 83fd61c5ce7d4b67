use maze_core::{Grid, GridError};

use crate::enumerate::enumerate;
use crate::solutions::Outcome;

/// Parse `text`, locate its start and goal markers and report the fewest
/// steps between them.
pub fn solve(text: &str) -> Result<Outcome, GridError> {
    let grid = Grid::parse(text)?;
    let (start, goal) = grid.locate_endpoints()?;
    Ok(enumerate(&grid, start, goal).outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable() {
        assert_eq!(solve("S.\n.G"), Ok(Outcome::Steps(2)));
    }

    #[test]
    fn unreachable_is_not_an_error() {
        assert_eq!(solve("S#G"), Ok(Outcome::Unreachable));
    }

    #[test]
    fn grid_errors_propagate() {
        assert!(matches!(solve("\n \n"), Err(GridError::Malformed { .. })));
        assert_eq!(solve("S.."), Err(GridError::MarkerNotFound('G')));
        assert_eq!(solve("..G"), Err(GridError::MarkerNotFound('S')));
    }
}
