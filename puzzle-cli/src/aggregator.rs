//! Reordering of results that arrive from worker threads
//!
//! Results are printed in (year, day, part) order as soon as every earlier
//! result is in. Two min-heaps track the keys still owed and the results
//! that arrived early.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Position of a result in the output, ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    /// Every key the given work will produce
    pub fn for_work(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Early result, ordered so the smallest key sits on top of a max-heap
struct Early(SolverResult);

impl Ord for Early {
    fn cmp(&self, other: &Self) -> Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for Early {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Early {}

impl PartialEq for Early {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers results and releases them in key order
pub struct ResultAggregator {
    owed: BinaryHeap<Reverse<ResultKey>>,
    early: BinaryHeap<Early>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            owed: expected_keys.into_iter().map(Reverse).collect(),
            early: BinaryHeap::new(),
        }
    }

    /// Accept a result and return whatever is now ready, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.early.push(Early(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(Early(top))) = (self.owed.peek(), self.early.peek()) {
            if ResultKey::from(top) != *next {
                break;
            }
            self.owed.pop();
            if let Some(Early(result)) = self.early.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Release everything still buffered, sorted
    ///
    /// Only non-empty when some expected result never arrived.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.early.drain().map(|Early(r)| r).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.owed.is_empty()
    }
}
