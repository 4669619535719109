//! The brick and how it rolls.

use std::{error::Error, fmt};

use smallvec::{smallvec, SmallVec};
use strum::{EnumString, IntoStaticStr};

use crate::grid::{Direction, RowCol};

/// A 1&times;1&times;2 block resting on the grid, stored as the two cells
/// underneath it.
///
/// A brick is either *standing* on one cell (then `b1 == b2`), or *lying* on
/// two adjacent cells.  To keep a single representation for every position,
/// lying bricks are kept in canonical order:
///
/// - Lying on a row, `b1` is the cell with the smaller column.
/// - Lying on a column, `b1` is the cell with the smaller row.
///
/// So exactly one of these holds for every brick:
///
/// ```text
/// b1.row == b2.row     && b1.col == b2.col       standing
/// b1.row == b2.row     && b1.col == b2.col - 1   lying on a row
/// b1.row == b2.row - 1 && b1.col == b2.col       lying on a column
/// ```
///
/// The fields are private and checked by [`new`], so no other pair of cells
/// can be observed.
///
/// This type is `Copy` because it is intended to be cheap to use.  This means
/// that all methods produce *new* bricks.  Methods which take and return values
/// of the same type, whose results might accidentally be ignored, are marked
/// `must_use`.
///
/// [`new`]: Brick::new
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Brick {
    b1: RowCol,
    b2: RowCol,
}

/// How a brick rests on the grid.
#[derive(Clone, Copy, Debug, EnumString, Eq, Hash, IntoStaticStr, Ord, PartialEq, PartialOrd)]
pub enum Stance {
    /// Upright on a single cell.
    #[strum(serialize = "standing")]
    Standing,
    /// On its side across two cells of one row.
    #[strum(serialize = "lying on row")]
    LyingOnRow,
    /// On its side across two cells of one column.
    #[strum(serialize = "lying on column")]
    LyingOnColumn,
}

/// Two cells that do not describe a brick in canonical order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct InvalidShape {
    pub b1: RowCol,
    pub b2: RowCol,
}

impl Brick {
    /// Create a brick covering `b1` and `b2`.
    ///
    /// Fails unless the cells coincide, or are adjacent with `b1` left of or
    /// above `b2`.
    pub fn new(b1: RowCol, b2: RowCol) -> Result<Brick, InvalidShape> {
        let standing = b1.row == b2.row && b1.col == b2.col;
        let on_row = b1.row == b2.row && b1.col == b2.col - 1;
        let on_column = b1.row == b2.row - 1 && b1.col == b2.col;

        if standing || on_row || on_column {
            Ok(Brick { b1, b2 })
        } else {
            Err(InvalidShape { b1, b2 })
        }
    }

    /// Create a brick standing upright on one cell.
    pub const fn standing(at: RowCol) -> Brick {
        Brick { b1: at, b2: at }
    }

    /// The first cell: the only cell if standing, otherwise the cell nearer
    /// the top left.
    pub fn b1(self) -> RowCol {
        self.b1
    }

    /// The second cell: the same as [`b1`] if standing, otherwise the cell
    /// nearer the bottom right.
    ///
    /// [`b1`]: Brick::b1
    pub fn b2(self) -> RowCol {
        self.b2
    }

    pub fn is_standing(self) -> bool {
        self.b1 == self.b2
    }

    pub fn is_lying_on_row(self) -> bool {
        self.b1.row == self.b2.row && self.b1.col == self.b2.col - 1
    }

    pub fn is_lying_on_column(self) -> bool {
        self.b1.row == self.b2.row - 1 && self.b1.col == self.b2.col
    }

    pub fn stance(self) -> Stance {
        if self.is_standing() {
            Stance::Standing
        } else if self.is_lying_on_row() {
            Stance::LyingOnRow
        } else {
            debug_assert!(self.is_lying_on_column());
            Stance::LyingOnColumn
        }
    }

    /// The distinct cells under the brick, in canonical order.
    pub fn cells(self) -> SmallVec<[RowCol; 2]> {
        if self.is_standing() {
            smallvec![self.b1]
        } else {
            smallvec![self.b1, self.b2]
        }
    }

    pub fn contains(self, cell: RowCol) -> bool {
        self.b1 == cell || self.b2 == cell
    }

    /// Roll the brick one step over its edge in the given direction.
    ///
    /// - A standing brick tips over onto the two cells beyond it.
    /// - A brick lying along the direction of travel tips upright onto the
    ///   cell just past its leading end.
    /// - A brick lying across the direction of travel rolls onto the next two
    ///   cells and keeps its stance.
    ///
    /// Rolling in the [opposite] direction undoes a roll.  Board edges and
    /// holes are not considered; a brick can roll anywhere.
    ///
    /// # Panics
    ///
    /// Panics if the result is not a valid brick.  That would be a bug in this
    /// method, not in the caller.
    ///
    /// [opposite]: Direction::opposite
    #[must_use]
    pub fn roll(self, direction: Direction) -> Brick {
        use Direction::*;

        // The end of the brick that goes over the edge first.
        let leading = match direction {
            Up | Left => self.b1,
            Down | Right => self.b2,
        };

        let (first, second) = match (self.stance(), direction.is_vertical()) {
            (Stance::Standing, _) => {
                let near = leading.offset(direction);
                (near, near.offset(direction))
            }
            (Stance::LyingOnColumn, true) | (Stance::LyingOnRow, false) => {
                let tip = leading.offset(direction);
                (tip, tip)
            }
            (Stance::LyingOnColumn, false) | (Stance::LyingOnRow, true) => {
                (self.b1.offset(direction), self.b2.offset(direction))
            }
        };

        // Row-major order puts the top or left cell first, which is canonical
        // for both lying stances.
        let (b1, b2) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };

        match Brick::new(b1, b2) {
            Ok(brick) => brick,
            Err(err) => unreachable!("rolling {} {:?} built an {}", self, direction, err),
        }
    }

    /// Roll the brick once in each direction, in order.
    #[must_use]
    pub fn roll_all(self, directions: impl IntoIterator<Item = Direction>) -> Brick {
        directions.into_iter().fold(self, Brick::roll)
    }

    /// Every position the brick passes through while rolling in each
    /// direction, starting with its current one.
    pub fn path(self, directions: impl IntoIterator<Item = Direction>) -> Vec<Brick> {
        let mut brick = self;
        let mut path = vec![brick];

        for direction in directions {
            brick = brick.roll(direction);
            path.push(brick);
        }

        path
    }

    /// The brick after one roll in each direction, in the order of
    /// [`Direction::ALL`].
    pub fn neighbors(self) -> [(Direction, Brick); 4] {
        Direction::ALL.map(|direction| (direction, self.roll(direction)))
    }
}

impl TryFrom<(RowCol, RowCol)> for Brick {
    type Error = InvalidShape;

    fn try_from((b1, b2): (RowCol, RowCol)) -> Result<Self, InvalidShape> {
        Brick::new(b1, b2)
    }
}

impl fmt::Display for Brick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.b1, self.b2)
    }
}

impl Stance {
    /// Array of all stances.
    pub const ALL: [Stance; 3] = [Stance::Standing, Stance::LyingOnRow, Stance::LyingOnColumn];

    /// Get a human-readable name of a stance.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid brick {}-{}: cells must coincide, or be adjacent with the first left of or above the second",
            self.b1, self.b2
        )
    }
}

impl Error for InvalidShape {}

#[cfg(test)]
mod tests {
    use crate::{
        gameplay::{Brick, InvalidShape, Stance},
        grid::{Direction, RowCol},
    };

    fn brick(b1: (i32, i32), b2: (i32, i32)) -> Brick {
        Brick::new(b1.into(), b2.into()).unwrap()
    }

    fn standing(row: i32, col: i32) -> Brick {
        Brick::standing(RowCol::new(row, col))
    }

    #[test]
    fn valid_shapes() {
        assert_eq!(brick((3, 3), (3, 3)).stance(), Stance::Standing);
        assert_eq!(brick((3, 3), (3, 4)).stance(), Stance::LyingOnRow);
        assert_eq!(brick((3, 3), (4, 3)).stance(), Stance::LyingOnColumn);
        assert_eq!(brick((-2, -5), (-1, -5)).stance(), Stance::LyingOnColumn);
    }

    #[test]
    fn invalid_shapes() {
        fn invalid(b1: (i32, i32), b2: (i32, i32)) {
            let (b1, b2) = (b1.into(), b2.into());
            assert_eq!(Brick::new(b1, b2), Err(InvalidShape { b1, b2 }));
        }

        invalid((0, 0), (0, 2)); // too far apart
        invalid((0, 1), (0, 0)); // wrong order on a row
        invalid((1, 0), (0, 0)); // wrong order on a column
        invalid((0, 0), (1, 1)); // diagonal
        invalid((0, 0), (5, 9));
    }

    #[test]
    fn error_names_cells() {
        let err = Brick::try_from((RowCol::new(0, 0), RowCol::new(0, 2))).unwrap_err();
        assert!(err.to_string().starts_with("invalid brick (0,0)-(0,2)"));
    }

    #[test]
    fn exactly_one_stance() {
        for b in [standing(1, 1), brick((1, 1), (1, 2)), brick((1, 1), (2, 1))] {
            let held = [b.is_standing(), b.is_lying_on_row(), b.is_lying_on_column()];
            assert_eq!(held.iter().filter(|&&h| h).count(), 1, "{}", b);
        }
    }

    #[test]
    fn lying_queries_exclude_standing() {
        let b = standing(4, 4);

        assert!(b.is_standing());
        assert!(!b.is_lying_on_row());
        assert!(!b.is_lying_on_column());
    }

    #[test]
    #[rustfmt::skip]
    fn transitions() {
        use Direction::*;

        fn rolls(from: Brick, direction: Direction, to: Brick) {
            assert_eq!(from.roll(direction), to, "{} {:?}", from, direction);
        }

        // standing tips over
        rolls(standing(2, 2), Up,    brick((0, 2), (1, 2)));
        rolls(standing(2, 2), Down,  brick((3, 2), (4, 2)));
        rolls(standing(2, 2), Left,  brick((2, 0), (2, 1)));
        rolls(standing(2, 2), Right, brick((2, 3), (2, 4)));

        // lying along the direction of travel stands up
        rolls(brick((1, 3), (2, 3)), Up,    standing(0, 3));
        rolls(brick((1, 3), (2, 3)), Down,  standing(3, 3));
        rolls(brick((1, 1), (1, 2)), Left,  standing(1, 0));
        rolls(brick((1, 1), (1, 2)), Right, standing(1, 3));

        // lying across the direction of travel rolls sideways
        rolls(brick((1, 1), (1, 2)), Up,    brick((0, 1), (0, 2)));
        rolls(brick((1, 1), (1, 2)), Down,  brick((2, 1), (2, 2)));
        rolls(brick((1, 3), (2, 3)), Left,  brick((1, 2), (2, 2)));
        rolls(brick((1, 3), (2, 3)), Right, brick((1, 4), (2, 4)));
    }

    #[test]
    fn never_between_lying_stances() {
        for b in [brick((5, 5), (5, 6)), brick((5, 5), (6, 5))] {
            for (_, next) in b.neighbors() {
                assert!(next.stance() == b.stance() || next.is_standing());
            }
        }

        for (_, next) in standing(5, 5).neighbors() {
            assert!(!next.is_standing());
        }
    }

    #[test]
    fn opposite_undoes() {
        for b in [standing(0, 0), brick((0, 0), (0, 1)), brick((0, 0), (1, 0))] {
            for d in Direction::ALL {
                assert_eq!(b.roll(d).roll(d.opposite()), b);
            }
        }
    }

    #[test]
    fn roll_does_not_change_receiver() {
        let b = brick((7, 7), (7, 8));
        let _ = b.roll(Direction::Down);

        assert_eq!(b, brick((7, 7), (7, 8)));
    }

    #[test]
    fn loops() {
        use Direction::*;

        let start = standing(3, 3);

        // Going around a square does not come back to the start.
        assert_eq!(start.roll_all([Right, Down, Left, Up]), brick((2, 3), (3, 3)));

        assert_eq!(start.roll_all([Right, Up, Down, Left]), start);
        assert_eq!(start.roll_all([Right, Right]), standing(3, 6));
        assert_eq!(start.roll_all([Right, Right, Right]), brick((3, 7), (3, 8)));
    }

    #[test]
    fn path() {
        use Direction::*;

        let path = standing(0, 0).path([Right, Right, Down]);

        assert_eq!(
            path,
            vec![
                standing(0, 0),
                brick((0, 1), (0, 2)),
                standing(0, 3),
                brick((1, 3), (2, 3)),
            ]
        );
        assert_eq!(standing(0, 0).path([]), vec![standing(0, 0)]);
    }

    #[test]
    fn cells() {
        assert_eq!(standing(1, 2).cells().as_slice(), &[RowCol::new(1, 2)]);
        assert_eq!(
            brick((1, 2), (2, 2)).cells().as_slice(),
            &[RowCol::new(1, 2), RowCol::new(2, 2)]
        );

        let b = brick((1, 2), (1, 3));
        assert!(b.contains(RowCol::new(1, 3)));
        assert!(!b.contains(RowCol::new(1, 4)));
    }

    #[test]
    fn display() {
        assert_eq!(brick((0, 2), (1, 2)).to_string(), "(0,2)-(1,2)");
        assert_eq!(Stance::LyingOnRow.name(), "lying on row");
        assert_eq!("standing".parse::<Stance>(), Ok(Stance::Standing));
    }
}
