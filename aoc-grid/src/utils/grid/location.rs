//! Canonical cell coordinates for a fixed-size grid.

/// A cell coordinate handed out by a [`LocationCache`].
///
/// Fields are private: the only way to obtain a `Location` is from the
/// cache of the grid it belongs to, so two locations compare equal exactly
/// when they name the same cell of that grid. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    index: usize,
    row: usize,
    col: usize,
}

impl Location {
    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major position within the owning grid, `row * width + col`.
    pub fn index(self) -> usize {
        self.index
    }

    /// `(d_row, d_col)` such that offsetting `self` by it lands on `to`.
    pub fn displacement_to(self, to: Location) -> (isize, isize) {
        (
            to.row as isize - self.row as isize,
            to.col as isize - self.col as isize,
        )
    }
}

/// One canonical [`Location`] per cell of a `height x width` grid.
///
/// Every location is built once at construction; lookups never allocate.
#[derive(Debug, Clone)]
pub struct LocationCache {
    height: usize,
    width: usize,
    locations: Vec<Location>,
}

impl LocationCache {
    pub fn new(height: usize, width: usize) -> Self {
        let locations = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .enumerate()
            .map(|(index, (row, col))| Location { index, row, col })
            .collect();

        Self {
            height,
            width,
            locations,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The canonical location for `(row, col)`, or `None` outside the grid.
    pub fn identity_for(&self, row: usize, col: usize) -> Option<Location> {
        if row < self.height && col < self.width {
            Some(self.locations[row * self.width + col])
        } else {
            None
        }
    }

    /// Whether `location` was handed out by a cache of this shape.
    ///
    /// Locations carry their row-major index, so one taken from a grid of
    /// a different width is rejected even when its row and column fit.
    pub fn owns(&self, location: Location) -> bool {
        self.identity_for(location.row, location.col) == Some(location)
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// The location `(d_row, d_col)` away from `from`, if still inside the grid.
    pub fn offset(&self, from: Location, (d_row, d_col): (isize, isize)) -> Option<Location> {
        let row = from.row.checked_add_signed(d_row)?;
        let col = from.col.checked_add_signed(d_col)?;
        self.identity_for(row, col)
    }

    /// All locations in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations.iter().copied()
    }
}
