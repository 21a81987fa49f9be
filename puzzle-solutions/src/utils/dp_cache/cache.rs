//! Single-threaded DP cache with an explicit evaluation stack.

use std::cell::RefCell;
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::backend::Backend;
use super::problem::DpProblem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    /// An index was reached again while its own value was still pending.
    #[error("dependency cycle detected {depth} levels deep")]
    Cycle { depth: usize },
}

/// One pending index: its dependency list and the values resolved so far.
struct Frame<I, K> {
    index: I,
    deps: Vec<I>,
    values: Vec<K>,
}

/// A memoising evaluator for problems whose values depend on other values.
///
/// Dependencies are resolved with an explicit stack instead of recursion, so
/// chain depth is bounded by memory rather than the thread stack. Every
/// index is computed at most once.
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::dp_cache::{DpCache, HashMapBackend, ClosureProblem};
///
/// // Ways to climb n stairs taking 1 or 2 steps at a time.
/// let stairs = ClosureProblem::new(
///     |n: &u64| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
///     |n: &u64, deps: Vec<u64>| if *n <= 1 { 1 } else { deps[0] + deps[1] },
/// );
/// let cache = DpCache::builder()
///     .backend(HashMapBackend::new())
///     .problem(stairs)
///     .build();
/// assert_eq!(cache.get(&10), Ok(89));
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(I) -> K>,
}

/// Marker for a builder slot that has not been filled.
pub struct Unset;

pub struct DpCacheBuilder<I, K, B, P> {
    backend: B,
    problem: P,
    _phantom: PhantomData<fn(I) -> K>,
}

impl<I, K> DpCache<I, K, Unset, Unset> {
    pub fn builder() -> DpCacheBuilder<I, K, Unset, Unset> {
        DpCacheBuilder {
            backend: Unset,
            problem: Unset,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, B, P> DpCacheBuilder<I, K, B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<I, K, B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
            _phantom: PhantomData,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<I, K, B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
            _phantom: PhantomData,
        }
    }

    pub fn build(self) -> DpCache<I, K, B, P>
    where
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + Hash + Eq,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Value for `index`, computing it and any missing dependencies first.
    ///
    /// # Errors
    ///
    /// [`DpError::Cycle`] when `index` transitively depends on itself. Values
    /// finished before the cycle was found stay cached.
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        // `current` is the index being resolved; `ancestors` wait on it.
        let mut pending: FxHashSet<I> = FxHashSet::default();
        pending.insert(index.clone());
        let mut current = self.frame(index.clone());
        let mut ancestors: Vec<Frame<I, K>> = Vec::new();

        loop {
            if let Some(dep) = current.deps.get(current.values.len()) {
                let cached = self.backend.borrow().get(dep).cloned();
                match cached {
                    Some(value) => current.values.push(value),
                    None if pending.contains(dep) => {
                        return Err(DpError::Cycle {
                            depth: ancestors.len() + 1,
                        });
                    }
                    None => {
                        pending.insert(dep.clone());
                        let child = self.frame(dep.clone());
                        ancestors.push(std::mem::replace(&mut current, child));
                    }
                }
                continue;
            }

            let Frame { index, values, .. } = current;
            let value = self.problem.compute(&index, values);
            pending.remove(&index);
            self.backend.borrow_mut().insert(index, value.clone());

            match ancestors.pop() {
                Some(mut parent) => {
                    parent.values.push(value);
                    current = parent;
                }
                None => return Ok(value),
            }
        }
    }

    fn frame(&self, index: I) -> Frame<I, K> {
        let deps = self.problem.deps(&index);
        Frame {
            values: Vec::with_capacity(deps.len()),
            index,
            deps,
        }
    }
}
