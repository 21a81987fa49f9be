use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use super::cost::Cost;

/// Result of [`Dijkstra::explore`](super::Dijkstra::explore): best costs of
/// every reached state plus all of their optimal predecessors.
#[derive(Debug, Clone)]
pub struct SearchTree<S, C> {
    costs: FxHashMap<S, C>,
    parents: FxHashMap<S, Vec<S>>,
}

impl<S, C> SearchTree<S, C>
where
    S: Clone + Hash + Eq,
    C: Cost,
{
    pub(super) fn new(costs: FxHashMap<S, C>, parents: FxHashMap<S, Vec<S>>) -> Self {
        Self { costs, parents }
    }

    /// Best cost of `state`, `None` if unreachable.
    pub fn cost(&self, state: &S) -> Option<C> {
        self.costs.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Every reached state with its best cost, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, C)> + '_ {
        self.costs.iter().map(|(state, &cost)| (state, cost))
    }

    /// Lowest cost among `states`, with the states that attain it.
    pub fn cheapest_of(&self, states: impl IntoIterator<Item = S>) -> Option<(C, Vec<S>)> {
        let mut best: Option<(C, Vec<S>)> = None;
        for state in states {
            let Some(cost) = self.cost(&state) else {
                continue;
            };
            match best.as_ref().map(|(best_cost, _)| cost.cmp(best_cost)) {
                Some(Ordering::Greater) => {}
                Some(Ordering::Equal) => {
                    if let Some((_, tied)) = best.as_mut() {
                        tied.push(state);
                    }
                }
                _ => best = Some((cost, vec![state])),
            }
        }
        best
    }

    /// One cheapest path from a start to `target`, start first.
    pub fn path_to(&self, target: &S) -> Option<Vec<S>> {
        if !self.costs.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.parents.get(current).and_then(|preds| preds.first()) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Union of every state lying on some cheapest path to any of `targets`.
    ///
    /// Callers pass targets that share the same optimal cost; mixing in a
    /// more expensive target also pulls in the paths to it.
    pub fn states_on_optimal_paths(&self, targets: impl IntoIterator<Item = S>) -> FxHashSet<S> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<S> = targets
            .into_iter()
            .filter(|t| self.costs.contains_key(t))
            .collect();

        while let Some(state) = stack.pop() {
            if !seen.insert(state.clone()) {
                continue;
            }
            if let Some(preds) = self.parents.get(&state) {
                stack.extend(preds.iter().filter(|p| !seen.contains(*p)).cloned());
            }
        }
        seen
    }
}
