//! Grid coordinates and the four directions a brick can roll in.

use std::fmt;

use strum::{EnumString, IntoStaticStr};

/// A cell on the grid.
///
/// `row` increases downwards and `col` increases to the right.  Both are
/// signed, so a brick may roll past the top or left edge of a board; deciding
/// whether that is legal is up to whoever owns the board.
///
/// This type is `Copy` because it is intended to be cheap to use.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RowCol {
    pub row: i32,
    pub col: i32,
}

/// Each of the four directions on the grid.
///
/// The `u8` numeric representation is used as an index sometimes.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, EnumString, Eq, Hash, IntoStaticStr, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Direction { Up, Down, Left, Right }

impl RowCol {
    pub const fn new(row: i32, col: i32) -> RowCol {
        RowCol { row, col }
    }

    /// The cell `rows` down and `cols` right of this one.
    #[must_use]
    pub const fn shifted(self, rows: i32, cols: i32) -> RowCol {
        RowCol {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    /// The adjacent cell in the given direction.
    #[must_use]
    pub const fn offset(self, direction: Direction) -> RowCol {
        let (rows, cols) = direction.offset();
        self.shifted(rows, cols)
    }
}

impl From<(i32, i32)> for RowCol {
    fn from((row, col): (i32, i32)) -> Self {
        RowCol { row, col }
    }
}

impl fmt::Display for RowCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Direction {
    /// Array of all directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit step `(rows, cols)` taken by moving one cell this way.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing back the way this one came.
    pub const fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Whether moving this way changes the row rather than the column.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Get the full name of a direction.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<char> for Direction {
    type Error = ();

    fn try_from(value: char) -> Result<Self, ()> {
        match value.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(()),
        }
    }
}

impl From<Direction> for char {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}
