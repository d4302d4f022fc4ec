//! Positions, moves and press plans for two-move cheapest-path problems.

/// An unbounded lattice position. Search positions are compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// The position after one use of `mv`, `None` on overflow.
    pub fn apply(self, mv: &Move) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(mv.dx)?,
            y: self.y.checked_add(mv.dy)?,
        })
    }
}

/// A fixed displacement with a fixed cost per use.
///
/// Displacements are non-negative, so a position past the target on
/// either axis can never come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dx: u64,
    pub dy: u64,
    pub cost: u64,
}

impl Move {
    pub const fn new(dx: u64, dy: u64, cost: u64) -> Self {
        Self { dx, dy, cost }
    }
}

/// How many times each move is used, and what that costs in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub presses: [u64; 2],
    pub cost: u64,
}

impl Plan {
    pub(crate) fn new(presses: [u64; 2], moves: &[Move; 2]) -> Option<Plan> {
        let cost = presses[0]
            .checked_mul(moves[0].cost)?
            .checked_add(presses[1].checked_mul(moves[1].cost)?)?;
        Some(Plan { presses, cost })
    }

    /// Where this plan ends when started at `origin`.
    pub fn destination(&self, origin: Point, moves: &[Move; 2]) -> Option<Point> {
        let x = moves
            .iter()
            .zip(self.presses)
            .try_fold(origin.x, |acc, (mv, n)| acc.checked_add(mv.dx.checked_mul(n)?))?;
        let y = moves
            .iter()
            .zip(self.presses)
            .try_fold(origin.y, |acc, (mv, n)| acc.checked_add(mv.dy.checked_mul(n)?))?;
        Some(Point { x, y })
    }
}
