//! Memoised dynamic programming without recursion.
//!
//! Values are defined by a [`DpProblem`]: each index lists the indices it
//! depends on and combines their values. [`DpCache`] resolves the dependency
//! graph with an explicit stack, computes every index at most once and
//! reports a dependency cycle as [`DpError::Cycle`] instead of looping.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: any hashable index
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Number of ways to write `n` as an ordered sum of 1, 3 and 4.
//! struct Compositions;
//!
//! impl DpProblem<usize, u64> for Compositions {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         [1, 3, 4].iter().filter(|&&p| p <= *n).map(|p| n - p).collect()
//!     }
//!
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n == 0 { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Compositions)
//!     .build();
//! assert_eq!(cache.get(&4), Ok(4)); // 1111, 13, 31, 4
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder, DpError};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
