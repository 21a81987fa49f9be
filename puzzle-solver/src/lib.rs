//! Puzzle Solver Framework
//!
//! A type-safe framework for solving daily programming puzzles across multiple
//! years and days. Each puzzle is a solver with its own input parser and one
//! or more parts that share the parsed data.
//!
//! # Overview
//!
//! This library provides:
//! - [`PuzzleParser`], [`PartSolver`] and [`Solver`] traits for defining solvers
//! - [`DynSolver`] for driving any solver through dynamic dispatch, with timing
//! - [`SolverRegistry`] for looking up solvers by (year, day)
//! - Plugin discovery through [`inventory`] and the `AutoRegisterSolver` derive
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{
//!     ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError, SolverRegistryBuilder,
//! };
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(parts = 2)]
//! pub struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "2\n3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```
//!
//! # Plugin Registration
//!
//! ```ignore
//! #[derive(PuzzleSolver, AutoRegisterSolver)]
//! #[puzzle_solver(parts = 2)]
//! #[puzzle(year = 2023, day = 17, tags = ["search", "grid"])]
//! pub struct Solver;
//! ```
//!
//! `SolverRegistryBuilder::register_all_plugins` then picks it up without any
//! central list of solvers.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-exported for the derive macro
pub use inventory;

pub use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
