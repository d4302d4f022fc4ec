//! Advent of Code Solver Harness
//!
//! Puzzle solvers parse their input once into shared data and then answer
//! one or more parts from it. The harness wraps each solver behind a
//! type-erased [`DynSolver`] so a registry can hand out solvers by
//! year and day.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PartSolver, RegistryBuilder, SolveError, AocSolver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad depth".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Depths>(2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n3\n2\n5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns raw input into `SharedData`.
//! - [`PartSolver<N>`] answers part `N` with mutable access to the shared data,
//!   so a later part can reuse what an earlier one computed.
//! - [`Solver`] is the runtime dispatch over parts, usually generated with
//!   `#[derive(AocSolver)]`.
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] which
//!   [`RegistryBuilder::register_all_plugins`] picks up.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
