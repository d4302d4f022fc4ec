//! Reusable building blocks for the puzzle solutions.

pub mod grid;
pub mod search;
