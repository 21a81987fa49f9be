//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

fn fib_iterative(n: usize) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

#[test]
fn test_basic_cache_creation_and_single_value() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(NoDeps)
        .build();

    assert_eq!(cache.get(&5), Ok(10));
    assert_eq!(cache.get(&0), Ok(0));
    assert_eq!(cache.get(&100), Ok(200));
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0), Ok(0));
    assert_eq!(cache.get(&1), Ok(1));
    assert_eq!(cache.get(&2), Ok(1));
    assert_eq!(cache.get(&10), Ok(55));
    assert_eq!(cache.get(&20), Ok(6765));
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    let compute_count = Rc::new(Cell::new(0));

    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 => vec![3],
                2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                3 => 10,
                _ => 0,
            }
        }
    }

    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Diamond {
            count: compute_count.clone(),
        })
        .build();

    // D=10, B=20, C=30, A=50
    assert_eq!(cache.get(&0), Ok(50));
    assert_eq!(compute_count.get(), 4);

    assert_eq!(cache.get(&0), Ok(50));
    assert_eq!(cache.get(&3), Ok(10));
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let depth = 1_000_000usize;
    let chain = ClosureProblem::new(
        |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
        |n: &usize, deps: Vec<u64>| if *n == 0 { 0 } else { deps[0] + 1 },
    );
    let cache = DpCache::builder()
        .backend(VecBackend::with_capacity(depth + 1))
        .problem(chain)
        .build();

    assert_eq!(cache.get(&depth), Ok(depth as u64));
}

#[test]
fn test_cycle_is_reported() {
    // 0 -> 1 -> 2 -> 0
    let cyclic = ClosureProblem::new(|n: &usize| vec![(n + 1) % 3], |_: &usize, _: Vec<u8>| 0);
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(cyclic)
        .build();

    assert_eq!(cache.get(&0), Err(DpError::Cycle { depth: 3 }));
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let selfish = ClosureProblem::new(|n: &u32| vec![*n], |_: &u32, _: Vec<u8>| 0);
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(selfish)
        .build();

    assert!(matches!(cache.get(&7), Err(DpError::Cycle { .. })));
}

#[test]
fn test_hashmap_backend_with_string_keys() {
    // Number of ways to split a word into one- or two-letter chunks
    let splits = ClosureProblem::new(
        |s: &String| (1..=2.min(s.len())).map(|k| s[k..].to_string()).collect(),
        |_: &String, deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
    );
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(splits)
        .build();

    assert_eq!(cache.get(&"abcde".to_string()), Ok(8));
}

#[test]
fn test_vec_backend_get_and_insert() {
    let mut backend: VecBackend<i32> = VecBackend::new();
    assert_eq!(backend.get(&5), None);

    backend.insert(5, 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&4), None);
    assert_eq!(backend.get(&10), None);

    backend.insert(10, 100);
    assert_eq!(backend.get(&10), Some(&100));
    assert_eq!(backend.get(&5), Some(&42));
}

#[test]
fn test_hashmap_backend_get_and_insert() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();
    assert_eq!(backend.get(&"key1".to_string()), None);

    backend.insert("key1".to_string(), 42);
    backend.insert("key2".to_string(), 100);
    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.get(&"key2".to_string()), Some(&100));
}

proptest! {
    #[test]
    fn prop_fibonacci_matches_iterative(n in 0usize..90) {
        let cache = DpCache::builder()
            .backend(VecBackend::new())
            .problem(Fibonacci)
            .build();
        prop_assert_eq!(cache.get(&n), Ok(fib_iterative(n)));
    }

    #[test]
    fn prop_query_order_does_not_change_results(queries in prop::collection::vec(0usize..60, 1..20)) {
        let shared = DpCache::builder()
            .backend(VecBackend::new())
            .problem(Fibonacci)
            .build();
        for n in queries {
            prop_assert_eq!(shared.get(&n), Ok(fib_iterative(n)));
        }
    }
}
