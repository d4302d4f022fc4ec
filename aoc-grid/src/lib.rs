//! Grid traversal substrate and the Advent of Code solutions built on it
//!
//! [`utils::grid`] holds the grid, canonical locations, flood fill and
//! fence measurements; [`utils::search`] holds the two-move cheapest path
//! solvers. Puzzle solutions register themselves with the `aoc-solver`
//! plugin system through the `AutoRegisterSolver` derive macro.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
