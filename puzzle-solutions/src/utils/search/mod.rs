//! Least-cost search over augmented states.
//!
//! A state carries everything that influences which moves are legal next:
//! position, facing, how long the current straight run is, and so on. Two
//! paths reaching the same cell with different auxiliary data are different
//! states, which lets a plain Dijkstra enforce path-dependent movement rules.
//!
//! # Entry points
//!
//! - [`find_min_cost`]: closure-based, one start, returns the cheapest cost
//! - [`Dijkstra`]: reusable searcher over a [`SearchProblem`] with a
//!   pluggable [`CostTable`]; multi-source [`Dijkstra::find`] and exhaustive
//!   [`Dijkstra::explore`]
//! - [`bfs`]: unit-cost helpers
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::search::find_min_cost;
//!
//! // Move on a 3x3 board, but never twice in a row in the same direction.
//! #[derive(Clone, Copy, PartialEq, Eq, Hash)]
//! struct State { x: i8, y: i8, last: Option<(i8, i8)> }
//!
//! let neighbors = |s: &State| {
//!     let s = *s;
//!     [(0, 1), (1, 0), (0, -1), (-1, 0)]
//!         .into_iter()
//!         .filter(move |&d| s.last != Some(d))
//!         .map(move |(dx, dy)| State { x: s.x + dx, y: s.y + dy, last: Some((dx, dy)) })
//!         .filter(|n| (0..3).contains(&n.x) && (0..3).contains(&n.y))
//!         .map(|n| (n, 1u32))
//! };
//! let start = State { x: 0, y: 0, last: None };
//! // (0,0) -> (1,0) -> (1,1) -> (2,1) -> (2,2)
//! assert_eq!(find_min_cost(start, neighbors, |s| (s.x, s.y) == (2, 2)), Some(4));
//! ```

pub mod bfs;
mod cost;
mod dijkstra;
mod problem;
mod table;
mod tree;

pub use cost::{Cost, Tiebreak};
pub use dijkstra::{Dijkstra, DijkstraBuilder, Found, SearchStats, Unset, find_min_cost};
pub use problem::{ClosureProblem, SearchProblem};
pub use table::{CostTable, DenseTable, HashTable};
pub use tree::SearchTree;
