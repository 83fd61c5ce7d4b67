//! Exhaustive route enumeration with a shared visited set.
//!
//! The frontier is a FIFO queue of partial routes. A cell is marked visited
//! when a route standing on it is dequeued, not when it is first discovered,
//! and the mark is shared by every route in the run. Two routes may therefore
//! both extend into the same cell while it is still unclaimed, and the goal,
//! which is never dequeued, can be reached by many routes.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace, warn};
use maze_core::Cell;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::solutions::{Node, Solutions};
use crate::traits::Maze;

/// Enumerate every route from `start` to `goal` with no limits.
pub fn enumerate<M: Maze>(maze: &M, start: Cell, goal: Cell) -> Solutions {
    match PathEnumerator::new().enumerate(maze, start, goal) {
        Ok(solutions) => solutions,
        Err(e) => unreachable!("unbounded enumeration aborted: {e}"),
    }
}

/// Reusable route enumerator.
///
/// Keeps its visited set, frontier and neighbor buffer between runs so that
/// repeated queries reuse their allocations.
pub struct PathEnumerator {
    config: SearchConfig,
    visited: HashSet<Cell>,
    frontier: VecDeque<usize>,
    neighbors: Neighbors,
}

impl Default for PathEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PathEnumerator {
    /// An enumerator with no limits.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// An enumerator bounded by `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            visited: HashSet::new(),
            frontier: VecDeque::new(),
            neighbors: Neighbors::new(),
        }
    }

    /// The limits in force.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Find every route from `start` to `goal`.
    ///
    /// A route is extended into a neighbor only if the neighbor is in bounds,
    /// not a wall and not yet visited; neighbors are tried up, down, left,
    /// right. A route that steps onto `goal` is complete and is not extended
    /// further. Routes with no candidate neighbor are dropped.
    ///
    /// Completion compares cells, not markers: on a grid with several goal
    /// markers only the one passed as `goal` ends a route, and the others are
    /// walked like floor.
    ///
    /// Fails only when a limit from [`SearchConfig`] is exceeded.
    pub fn enumerate<M: Maze>(
        &mut self,
        maze: &M,
        start: Cell,
        goal: Cell,
    ) -> Result<Solutions, SearchError> {
        let Self {
            config,
            visited,
            frontier,
            neighbors,
        } = self;

        visited.clear();
        frontier.clear();

        let mut solutions = Solutions::default();
        solutions.nodes.push(Node::root(start));

        if start == goal {
            solutions.ends.push(0);
            return Ok(solutions);
        }

        debug!("enumerating routes from {start} to {goal}");
        frontier.push_back(0);
        let mut iterations = 0usize;

        while let Some(ri) = frontier.pop_front() {
            if let Some(limit) = config.max_iterations {
                if iterations >= limit {
                    warn!(
                        "route enumeration hit iteration limit {limit} with {} routes found",
                        solutions.len()
                    );
                    return Err(SearchError::IterationLimit {
                        limit,
                        solutions: solutions.len(),
                    });
                }
            }
            iterations += 1;

            let Node { cell: current, len, .. } = solutions.nodes[ri];
            visited.insert(current);
            trace!("dequeued route of {len} cells ending at {current}");

            let candidates = neighbors.cardinal(current, |n| {
                maze.in_bounds(n) && !visited.contains(&n) && !maze.is_wall(n)
            });

            for &n in candidates {
                let ni = solutions.nodes.len();
                solutions.nodes.push(Node {
                    cell: n,
                    parent: ri,
                    len: len + 1,
                });
                if n == goal {
                    trace!("route of {} cells reached the goal", len + 1);
                    solutions.ends.push(ni);
                } else {
                    frontier.push_back(ni);
                }
            }

            if let Some(limit) = config.max_frontier {
                if frontier.len() > limit {
                    warn!("route enumeration frontier exceeded {limit} after {iterations} iterations");
                    return Err(SearchError::FrontierLimit { limit, iterations });
                }
            }
        }

        debug!(
            "enumeration finished: {iterations} iterations, {} routes, {} nodes, {} cells visited",
            solutions.len(),
            solutions.arena_len(),
            visited.len()
        );
        Ok(solutions)
    }
}
