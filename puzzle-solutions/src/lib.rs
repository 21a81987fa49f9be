//! Puzzle solutions with automatic registration, plus the search toolkit
//! they are built on.
//!
//! Solutions live under `my_solutions::year_YYYY::day_DD`; each one derives
//! `AutoRegisterSolver` so the CLI discovers it without a hand-kept list.
//! The reusable pieces live in [`utils`]:
//!
//! - [`utils::search`]: least-cost search over augmented states
//! - [`utils::dp_cache`]: memoised dynamic programming without recursion
//! - [`utils::grid`]: rectangular grids with 4-way movement

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
