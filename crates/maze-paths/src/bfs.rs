use std::collections::{HashMap, VecDeque};

use maze_core::Cell;

use crate::neighbors::Neighbors;
use crate::traits::Maze;

/// Fewest steps from `start` to `goal` by plain breadth-first search.
///
/// Cells are marked when first discovered and each is expanded at most once,
/// so this runs in time linear in the number of open cells. Its answer is an
/// independent check of the minimum reported by
/// [`enumerate`](fn@crate::enumerate). Returns `None` if `goal` cannot be
/// reached.
pub fn bfs_distance<M: Maze>(maze: &M, start: Cell, goal: Cell) -> Option<usize> {
    if start == goal {
        return Some(0);
    }

    let mut dist: HashMap<Cell, usize> = HashMap::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    let mut neighbors = Neighbors::new();

    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let nd = dist[&current] + 1;
        for &n in neighbors.cardinal(current, |n| maze.is_open(n) && !dist.contains_key(&n)) {
            if n == goal {
                return Some(nd);
            }
            dist.insert(n, nd);
            queue.push_back(n);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Grid;

    fn distance(text: &str) -> Option<usize> {
        let grid = Grid::parse(text).unwrap();
        let (start, goal) = grid.locate_endpoints().unwrap();
        bfs_distance(&grid, start, goal)
    }

    #[test]
    fn straight_line() {
        assert_eq!(distance("S...G"), Some(4));
        assert_eq!(distance("SG"), Some(1));
    }

    #[test]
    fn detour_around_wall() {
        assert_eq!(distance("S#G\n..."), Some(4));
    }

    #[test]
    fn blocked() {
        assert_eq!(distance("S#G"), None);
        assert_eq!(distance("S.\n##\n.G"), None);
    }

    #[test]
    fn ragged() {
        assert_eq!(distance("S..\n.\n..G"), Some(4));
    }

    #[test]
    fn same_cell() {
        let grid = Grid::parse("S.G").unwrap();
        assert_eq!(bfs_distance(&grid, Cell::new(0, 1), Cell::new(0, 1)), Some(0));
    }
}
