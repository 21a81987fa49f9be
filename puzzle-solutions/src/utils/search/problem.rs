//! Trait-based search problem definition.

use std::marker::PhantomData;

/// A weighted state space plus a goal predicate.
///
/// # Type Parameters
///
/// - `S`: State type. Compared and hashed as a whole, so every piece of
///   path-dependent context (facing, run length, ...) belongs in it.
/// - `C`: Cost type
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::search::{Dijkstra, SearchProblem};
///
/// /// Walk along a number line; stepping right costs 2, left costs 1.
/// struct Line {
///     target: i32,
/// }
///
/// impl SearchProblem<i32, u32> for Line {
///     fn neighbors(&self, x: &i32) -> impl IntoIterator<Item = (i32, u32)> {
///         [(x + 1, 2), (x - 1, 1)].into_iter().filter(|(n, _)| n.abs() <= 10)
///     }
///
///     fn is_goal(&self, x: &i32) -> bool {
///         *x == self.target
///     }
/// }
///
/// let search = Dijkstra::builder().problem(Line { target: 3 }).build();
/// assert_eq!(search.min_cost(0), Some(6));
/// ```
pub trait SearchProblem<S, C> {
    /// Successors of `state` with the non-negative cost of each transition.
    ///
    /// Must be finite for every reachable state.
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, C)>;

    /// Whether `state` terminates the search.
    fn is_goal(&self, state: &S) -> bool;
}

/// Adapts a pair of closures to [`SearchProblem`].
///
/// ```rust
/// use puzzle_solutions::utils::search::{ClosureProblem, Dijkstra};
///
/// let problem = ClosureProblem::new(
///     |n: &u32| [(n + 1, 1u64), (n * 2, 1u64)].into_iter().filter(|(m, _)| *m <= 100),
///     |n: &u32| *n == 100,
/// );
/// let search = Dijkstra::builder().problem(problem).build();
/// // 1 -> 2 -> 3 -> 6 -> 12 -> 24 -> 25 -> 50 -> 100
/// assert_eq!(search.min_cost(1), Some(8));
/// ```
pub struct ClosureProblem<S, C, N, G> {
    neighbor_fn: N,
    goal_fn: G,
    _phantom: PhantomData<fn(&S) -> C>,
}

impl<S, C, N, G, I> ClosureProblem<S, C, N, G>
where
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
{
    pub fn new(neighbor_fn: N, goal_fn: G) -> Self {
        Self {
            neighbor_fn,
            goal_fn,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, N, G, I> SearchProblem<S, C> for ClosureProblem<S, C, N, G>
where
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
{
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, C)> {
        (self.neighbor_fn)(state)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_fn)(state)
    }
}
