//! **maze-core** — text-defined maze grids.
//!
//! This crate provides the grid model shared by the rest of the workspace:
//! [`Cell`] coordinates, the fixed [`Direction`] expansion order, marker
//! configuration and the read-only [`Grid`] itself.

pub mod geom;
pub mod grid;
pub mod markers;

pub use geom::{Cell, Direction};
pub use grid::{Grid, GridError};
pub use markers::Markers;
