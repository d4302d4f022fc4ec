//! The four cardinal directions and their unit offsets.

/// A cardinal direction on a row-major grid.
///
/// Discriminants follow clockwise order starting at `Up`, so turning right
/// is a cyclic increment modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Every direction in clockwise order starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(d_row, d_col)` for one step in this direction.
    pub const fn unit_vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Rotate 90 degrees clockwise.
    pub const fn turn_right(self) -> Direction {
        Self::ALL[(self as usize + 1) % 4]
    }

    pub const fn turn_left(self) -> Direction {
        Self::ALL[(self as usize + 3) % 4]
    }

    pub const fn opposite(self) -> Direction {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// `true` for `Up` and `Down`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub const fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Direction> {
        match glyph {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}
