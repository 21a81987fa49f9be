//! Dijkstra's algorithm over composite (augmented) states.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use super::cost::Cost;
use super::problem::{ClosureProblem, SearchProblem};
use super::table::{CostTable, HashTable};
use super::tree::SearchTree;

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first.
///
/// Only the cost takes part in the ordering; pop order among equal costs is
/// whatever the heap gives.
struct Entry<S, C> {
    cost: C,
    state: S,
}

impl<S, C: Ord> Ord for Entry<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl<S, C: Ord> PartialOrd for Entry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Ord> Eq for Entry<S, C> {}

impl<S, C: Ord> PartialEq for Entry<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

/// A goal state and the cost of the cheapest path to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<S, C> {
    pub state: S,
    pub cost: C,
}

/// Counters from the most recent search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, starts included
    pub pushed: usize,
    /// Entries popped, stale ones included
    pub popped: usize,
    /// Popped entries discarded because a cheaper one had superseded them
    pub stale: usize,
}

/// Marker for a builder slot that has not been filled.
pub struct Unset;

/// Shortest-path search over a [`SearchProblem`].
///
/// The best-cost table lives inside the searcher and is cleared at the start
/// of every call, so repeated calls are independent of each other.
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::search::{DenseTable, Dijkstra, ClosureProblem};
///
/// // Cheapest way down a 1-D corridor of 10 cells, entering cell i costs i.
/// let problem = ClosureProblem::new(
///     |&i: &usize| (i + 1 < 10).then(|| (i + 1, (i + 1) as u32)),
///     |&i: &usize| i == 9,
/// );
/// let search = Dijkstra::builder()
///     .table(DenseTable::new(10, |&i: &usize| i))
///     .problem(problem)
///     .build();
/// assert_eq!(search.min_cost(0), Some(45));
/// ```
pub struct Dijkstra<S, C, P, T = HashTable<S, C>> {
    problem: P,
    table: RefCell<T>,
    stats: Cell<SearchStats>,
    _phantom: PhantomData<fn(S) -> C>,
}

/// Builder for [`Dijkstra`]; the table defaults to [`HashTable`].
pub struct DijkstraBuilder<S, C, T, P> {
    table: T,
    problem: P,
    _phantom: PhantomData<fn(S) -> C>,
}

impl<S, C> Dijkstra<S, C, Unset, HashTable<S, C>> {
    pub fn builder() -> DijkstraBuilder<S, C, HashTable<S, C>, Unset> {
        DijkstraBuilder {
            table: HashTable::new(),
            problem: Unset,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, T, P> DijkstraBuilder<S, C, T, P> {
    /// Replace the best-cost table backend.
    pub fn table<T2>(self, table: T2) -> DijkstraBuilder<S, C, T2, P> {
        DijkstraBuilder {
            table,
            problem: self.problem,
            _phantom: PhantomData,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DijkstraBuilder<S, C, T, P2> {
        DijkstraBuilder {
            table: self.table,
            problem,
            _phantom: PhantomData,
        }
    }

    pub fn build(self) -> Dijkstra<S, C, P, T>
    where
        P: SearchProblem<S, C>,
        T: CostTable<S, C>,
    {
        Dijkstra::with_table(self.problem, self.table)
    }
}

impl<S, C, P> Dijkstra<S, C, P, HashTable<S, C>>
where
    S: Clone + Hash + Eq,
    C: Cost,
    P: SearchProblem<S, C>,
{
    /// Searcher with the default hash table backend.
    pub fn new(problem: P) -> Self {
        Self::with_table(problem, HashTable::new())
    }
}

impl<S, C, P, T> Dijkstra<S, C, P, T>
where
    P: SearchProblem<S, C>,
    T: CostTable<S, C>,
{
    pub fn with_table(problem: P, table: T) -> Self {
        Self {
            problem,
            table: RefCell::new(table),
            stats: Cell::new(SearchStats::default()),
            _phantom: PhantomData,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Counters from the most recent `min_cost`/`find`/`explore` call.
    pub fn stats(&self) -> SearchStats {
        self.stats.get()
    }
}

impl<S, C, P, T> Dijkstra<S, C, P, T>
where
    S: Clone,
    C: Cost,
    P: SearchProblem<S, C>,
    T: CostTable<S, C>,
{
    /// Cost of the cheapest path from `start` to any goal state.
    ///
    /// `None` means the reachable state space holds no goal. A start that is
    /// already a goal costs `C::ZERO`.
    pub fn min_cost(&self, start: S) -> Option<C> {
        self.find([start]).map(|found| found.cost)
    }

    /// Multi-source search: every start begins at cost zero.
    ///
    /// Returns the first goal state popped from the frontier, which is the
    /// cheapest one.
    pub fn find(&self, starts: impl IntoIterator<Item = S>) -> Option<Found<S, C>> {
        let mut table = self.table.borrow_mut();
        table.clear();

        let mut stats = SearchStats::default();
        let mut frontier = BinaryHeap::new();
        for start in starts {
            if table.best(&start).is_none() {
                table.record(start.clone(), C::ZERO);
                frontier.push(Entry {
                    cost: C::ZERO,
                    state: start,
                });
                stats.pushed += 1;
            }
        }

        let found = loop {
            let Some(Entry { cost, state }) = frontier.pop() else {
                break None;
            };
            stats.popped += 1;

            if table.best(&state).is_some_and(|best| cost > best) {
                stats.stale += 1;
                continue;
            }

            if self.problem.is_goal(&state) {
                break Some(Found { state, cost });
            }

            for (next, step) in self.problem.neighbors(&state) {
                debug_assert!(step >= C::ZERO, "negative edge cost {step:?}");
                let candidate = cost + step;
                if table.best(&next).is_none_or(|best| candidate < best) {
                    table.record(next.clone(), candidate);
                    frontier.push(Entry {
                        cost: candidate,
                        state: next,
                    });
                    stats.pushed += 1;
                }
            }
        };

        self.stats.set(stats);
        tracing::debug!(
            pushed = stats.pushed,
            popped = stats.popped,
            stale = stats.stale,
            cost = ?found.as_ref().map(|f| f.cost),
            "dijkstra search finished"
        );
        found
    }
}

impl<S, C, P, T> Dijkstra<S, C, P, T>
where
    S: Clone + Hash + Eq,
    C: Cost,
    P: SearchProblem<S, C>,
{
    /// Exhaust the state space reachable from `starts`, ignoring the goal.
    ///
    /// Keeps the best cost of every reached state and all of its optimal
    /// predecessors, so callers can ask for every state lying on some
    /// cheapest path. The reachable space must be finite.
    pub fn explore(&self, starts: impl IntoIterator<Item = S>) -> SearchTree<S, C> {
        let mut costs: FxHashMap<S, C> = FxHashMap::default();
        let mut parents: FxHashMap<S, Vec<S>> = FxHashMap::default();

        let mut stats = SearchStats::default();
        let mut frontier = BinaryHeap::new();
        for start in starts {
            if !costs.contains_key(&start) {
                costs.insert(start.clone(), C::ZERO);
                frontier.push(Entry {
                    cost: C::ZERO,
                    state: start,
                });
                stats.pushed += 1;
            }
        }

        while let Some(Entry { cost, state }) = frontier.pop() {
            stats.popped += 1;
            if costs.get(&state).is_some_and(|&best| cost > best) {
                stats.stale += 1;
                continue;
            }

            for (next, step) in self.problem.neighbors(&state) {
                debug_assert!(step >= C::ZERO, "negative edge cost {step:?}");
                let candidate = cost + step;
                match costs.get(&next).copied() {
                    Some(best) if candidate > best => {}
                    Some(best) if candidate == best => {
                        // Starts have no parents and must keep none, or zero-cost
                        // cycles back into a start would loop path reconstruction.
                        if let Some(preds) = parents.get_mut(&next)
                            && !preds.contains(&state)
                        {
                            preds.push(state.clone());
                        }
                    }
                    _ => {
                        costs.insert(next.clone(), candidate);
                        parents.insert(next.clone(), vec![state.clone()]);
                        frontier.push(Entry {
                            cost: candidate,
                            state: next,
                        });
                        stats.pushed += 1;
                    }
                }
            }
        }

        self.stats.set(stats);
        tracing::debug!(
            pushed = stats.pushed,
            popped = stats.popped,
            stale = stats.stale,
            reached = costs.len(),
            "dijkstra exploration finished"
        );
        SearchTree::new(costs, parents)
    }
}

/// Cheapest cost from `start` to a state satisfying `goal_predicate`.
///
/// `neighbor_fn` lists each successor with its non-negative incremental
/// cost. Returns `None` when no goal state is reachable.
///
/// ```rust
/// use puzzle_solutions::utils::search::find_min_cost;
///
/// // Two routes to 3: 0 -> 1 -> 3 costs 2 + 2, 0 -> 2 -> 3 costs 1 + 5.
/// let edges = |n: &u8| match n {
///     0 => vec![(1, 2u32), (2, 1)],
///     1 => vec![(3, 2)],
///     2 => vec![(3, 5)],
///     _ => vec![],
/// };
/// assert_eq!(find_min_cost(0u8, edges, |n| *n == 3), Some(4));
/// assert_eq!(find_min_cost(0u8, edges, |n| *n == 4), None);
/// ```
pub fn find_min_cost<S, C, N, I, G>(start: S, neighbor_fn: N, goal_predicate: G) -> Option<C>
where
    S: Clone + Hash + Eq,
    C: Cost,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
{
    Dijkstra::new(ClosureProblem::new(neighbor_fn, goal_predicate)).min_cost(start)
}
