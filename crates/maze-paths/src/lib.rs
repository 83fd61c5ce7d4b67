//! Route search over maze grids.
//!
//! The main entry point is [`enumerate`](fn@enumerate) / [`PathEnumerator::enumerate`],
//! which walks the maze breadth-first from the start, extending a FIFO
//! frontier of partial routes in the order up, down, left, right, and
//! collects every route that steps onto the goal. Cells are claimed in a
//! single visited set shared by the whole run at the moment a route standing
//! on them is dequeued. The fewest-steps answer is derived afterwards from
//! the [`Solutions`] as an [`Outcome`].
//!
//! Partial routes share their prefixes through a parent-linked arena, so
//! extending a route costs one node rather than a copy of every cell.
//!
//! [`bfs_distance`] is a plain breadth-first distance query over the same
//! [`Maze`] seam, useful as an independent check of the minimum.

mod bfs;
mod config;
mod distance;
mod enumerate;
mod error;
mod neighbors;
mod solutions;
mod solve;
mod traits;

pub use bfs::bfs_distance;
pub use config::SearchConfig;
pub use distance::manhattan;
pub use enumerate::{PathEnumerator, enumerate};
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use solutions::{Outcome, Solutions};
pub use solve::solve;
pub use traits::Maze;
