//! Unweighted helpers: when every edge costs the same, a queue beats a heap.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Step count from `start` to every reachable state.
pub fn bfs_distances<S, N, I>(start: S, neighbors: N) -> FxHashMap<S, usize>
where
    S: Clone + Hash + Eq,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut dist = FxHashMap::default();
    dist.insert(start.clone(), 0);
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for next in neighbors(&state) {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Whether any state satisfying `goal` is reachable from `start`.
///
/// Depth-first with an explicit stack; stops at the first goal.
pub fn is_reachable<S, N, I, G>(start: S, neighbors: N, goal: G) -> bool
where
    S: Clone + Hash + Eq,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
    G: Fn(&S) -> bool,
{
    let mut seen = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(state) = stack.pop() {
        if goal(&state) {
            return true;
        }
        if !seen.insert(state.clone()) {
            continue;
        }
        stack.extend(neighbors(&state).into_iter().filter(|n| !seen.contains(n)));
    }
    false
}
