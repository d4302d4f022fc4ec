//! Read-only rectangular grid with bounds-checked navigation.

use std::ops::Index;

use thiserror::Error;

use super::direction::Direction;
use super::location::{Location, LocationCache};

/// Reasons a grid cannot be built from the supplied rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected {glyph:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, glyph: char },
}

/// A row-major `height x width` matrix of cells that owns the
/// [`LocationCache`] for its coordinates.
///
/// The grid never changes shape or contents after construction; callers
/// that simulate something keep their own state and borrow the grid.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    cells: Vec<T>,
    locations: LocationCache,
}

impl<T> Grid<T> {
    /// Build a grid from equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Self {
            cells,
            locations: LocationCache::new(height, width),
        })
    }

    /// Parse one row per line of the trimmed input, mapping each character
    /// with `cell`. A `None` from `cell` rejects the input.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.trim()
                    .chars()
                    .enumerate()
                    .map(|(col, glyph)| cell(glyph).ok_or(GridError::InvalidCell { row, col, glyph }))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn height(&self) -> usize {
        self.locations.height()
    }

    pub fn width(&self) -> usize {
        self.locations.width()
    }

    pub fn locations(&self) -> &LocationCache {
        &self.locations
    }

    /// The canonical location for `(row, col)`, or `None` outside the grid.
    pub fn location(&self, row: usize, col: usize) -> Option<Location> {
        self.locations.identity_for(row, col)
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        self.locations.in_bounds(row, col)
    }

    /// The cell at `location`.
    ///
    /// # Panics
    ///
    /// If `location` did not come from a grid of this shape. Use
    /// [`Grid::get_at`] when that is not known.
    pub fn at(&self, location: Location) -> &T {
        assert!(
            self.locations.owns(location),
            "{location:?} does not belong to a {}x{} grid",
            self.height(),
            self.width()
        );
        &self.cells[location.index()]
    }

    /// The cell at `location`, or `None` if it belongs to another shape.
    pub fn get_at(&self, location: Location) -> Option<&T> {
        self.locations
            .owns(location)
            .then(|| &self.cells[location.index()])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.location(row, col).map(|loc| &self.cells[loc.index()])
    }

    /// The neighbour of `location` in `direction`, or `None` past the edge.
    pub fn step(&self, location: Location, direction: Direction) -> Option<Location> {
        self.locations.offset(location, direction.unit_vector())
    }

    /// In-bounds neighbours of `location`, clockwise from `Up`.
    pub fn neighbours(&self, location: Location) -> impl Iterator<Item = (Direction, Location)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(location, dir).map(|next| (dir, next)))
    }

    /// Every location in row-major order.
    pub fn iter_locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations.iter()
    }

    /// First location (row-major) whose cell satisfies `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<Location>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_locations().find(|&loc| pred(self.at(loc)))
    }
}

impl Grid<char> {
    pub fn parse_chars(input: &str) -> Result<Self, GridError> {
        Self::parse_with(input, Some)
    }
}

impl<T> Index<Location> for Grid<T> {
    type Output = T;

    fn index(&self, location: Location) -> &T {
        self.at(location)
    }
}
