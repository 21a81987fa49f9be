//! Best-cost table backends for the search.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Storage for the lowest known cost of each state.
///
/// # Contract
///
/// - `best` returns `None` for a state never recorded since the last `clear`
/// - `record` overwrites; the search only calls it with strictly lower costs
pub trait CostTable<S, C> {
    fn best(&self, state: &S) -> Option<C>;

    fn record(&mut self, state: S, cost: C);

    /// Forget every entry, keeping allocations where possible.
    fn clear(&mut self);
}

/// A hash map backend for any hashable state.
#[derive(Debug, Clone)]
pub struct HashTable<S, C> {
    data: FxHashMap<S, C>,
}

impl<S, C> HashTable<S, C> {
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<S, C> Default for HashTable<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hash + Eq, C: Copy> CostTable<S, C> for HashTable<S, C> {
    fn best(&self, state: &S) -> Option<C> {
        self.data.get(state).copied()
    }

    fn record(&mut self, state: S, cost: C) {
        self.data.insert(state, cost);
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

/// A Vec backend for state spaces with a dense `usize` encoding.
///
/// `index` must map every reachable state to a distinct slot below
/// `capacity`; the table grows if it doesn't fit.
///
/// ```rust
/// use puzzle_solutions::utils::search::{CostTable, DenseTable};
///
/// // (row, col) on a 10-wide grid
/// let mut table = DenseTable::new(100, |&(r, c): &(usize, usize)| r * 10 + c);
/// table.record((2, 3), 7u32);
/// assert_eq!(table.best(&(2, 3)), Some(7));
/// assert_eq!(table.best(&(3, 2)), None);
/// ```
pub struct DenseTable<C, F> {
    data: Vec<Option<C>>,
    index: F,
}

impl<C, F> DenseTable<C, F> {
    pub fn new(capacity: usize, index: F) -> Self {
        Self {
            data: (0..capacity).map(|_| None).collect(),
            index,
        }
    }
}

impl<S, C: Copy, F: Fn(&S) -> usize> CostTable<S, C> for DenseTable<C, F> {
    fn best(&self, state: &S) -> Option<C> {
        self.data.get((self.index)(state)).copied().flatten()
    }

    fn record(&mut self, state: S, cost: C) {
        let i = (self.index)(&state);
        if i >= self.data.len() {
            self.data.resize_with(i + 1, || None);
        }
        self.data[i] = Some(cost);
    }

    fn clear(&mut self) {
        self.data.fill(None);
    }
}
