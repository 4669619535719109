//! Movement rules for a two-cell block rolling across a grid.
//!
//! The [`gameplay`] module holds the [`Brick`] itself.  The [`grid`] module
//! holds the coordinate and direction types it moves with.

pub mod gameplay;
pub mod grid;

pub use gameplay::{Brick, InvalidShape, Stance};
pub use grid::{Direction, RowCol};
