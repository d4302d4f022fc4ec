//! Grid Traversal Substrate
//!
//! Building blocks shared by the grid puzzles:
//!
//! - [`Direction`]: the four cardinal directions, unit offsets and rotation
//! - [`LocationCache`] / [`Location`]: one canonical location per cell, so
//!   locations work directly as `HashSet`/`HashMap` keys
//! - [`Grid`]: read-only cells plus bounds-checked lookup and stepping
//! - [`find_region`], [`partition`], [`partition_by`]: iterative flood fill
//! - [`perimeter`], [`sides`]: fence measurements of a [`Region`]
//!
//! Out-of-bounds lookups and steps are `None`, never a panic.
//!
//! # Example: fence pricing
//!
//! ```rust
//! use aoc_grid::utils::grid::{Grid, partition};
//!
//! let grid = Grid::parse_chars("AAAA\nBBCD\nBBCC\nEEEC").unwrap();
//! let regions = partition(&grid);
//! assert_eq!(regions.len(), 5);
//!
//! let cost: usize = regions.iter().map(|r| r.cost(&grid)).sum();
//! let discounted: usize = regions.iter().map(|r| r.discounted_cost(&grid)).sum();
//! assert_eq!((cost, discounted), (140, 80));
//! ```
//!
//! # Example: custom membership
//!
//! ```rust
//! use aoc_grid::utils::grid::{Grid, find_region};
//!
//! let grid = Grid::parse_with("123\n456\n789", |c| c.to_digit(10)).unwrap();
//! let start = grid.location(0, 0).unwrap();
//! let low = find_region(&grid, start, |loc| *grid.at(loc) < 5);
//! assert_eq!(low.area(), 4);
//! ```

mod boundary;
mod bounded;
mod direction;
mod location;
mod region;

pub use boundary::{perimeter, sides};
pub use bounded::{Grid, GridError};
pub use direction::Direction;
pub use location::{Location, LocationCache};
pub use region::{Region, find_region, partition, partition_by};

#[cfg(test)]
mod tests;
