//! Cheapest Path With Two Fixed Moves
//!
//! Starting at `origin`, each step applies one of two moves, each with a
//! fixed displacement and a fixed cost. The question is the cheapest total
//! cost that lands exactly on `target`, or `None` if no non-negative
//! integer combination of the moves gets there. `None` is an ordinary
//! answer, not an error.
//!
//! Two implementations share the [`CheapestPath`] contract:
//!
//! - [`LinearSolver`]: closed-form, constant time, the default behind
//!   [`cheapest_path`]
//! - [`BestFirstSearch`]: A*-style search with an admissible lower bound,
//!   kept as an independent oracle
//!
//! # Example
//!
//! ```rust
//! use aoc_grid::utils::search::{BestFirstSearch, CheapestPath, Move, Point, cheapest_path};
//!
//! let a = Move::new(94, 34, 3);
//! let b = Move::new(22, 67, 1);
//! let target = Point::new(8400, 5400);
//!
//! assert_eq!(cheapest_path(Point::ORIGIN, target, a, b), Some(280));
//! assert_eq!(BestFirstSearch.cheapest_path(Point::ORIGIN, target, [a, b]), Some(280));
//! ```

mod best_first;
mod linear;
mod moves;

pub use best_first::BestFirstSearch;
pub use linear::LinearSolver;
pub use moves::{Move, Plan, Point};

/// Cheapest way to reach `target` from `origin` with two moves.
pub trait CheapestPath {
    /// The press counts and cost of a cheapest plan, if any plan exists.
    fn plan(&self, origin: Point, target: Point, moves: [Move; 2]) -> Option<Plan>;

    fn cheapest_path(&self, origin: Point, target: Point, moves: [Move; 2]) -> Option<u64> {
        self.plan(origin, target, moves).map(|plan| plan.cost)
    }
}

/// Cheapest cost from `origin` to `target` using [`LinearSolver`].
pub fn cheapest_path(origin: Point, target: Point, move_a: Move, move_b: Move) -> Option<u64> {
    LinearSolver.cheapest_path(origin, target, [move_a, move_b])
}

#[cfg(test)]
mod tests;
