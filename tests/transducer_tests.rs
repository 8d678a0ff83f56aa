#![cfg(feature = "transducer")]
//! Integration tests for the standard transducers and `transduce`.
//!
//! Tests cover:
//! - Each standard transducer through `transduce`
//! - Boundary counts of `take` and `drop`
//! - Flattening with `cat` and stop propagation out of nested input
//! - Composition order
//! - Completion of stateful transducers after early termination

use reduct::Error;
use reduct::comp;
use reduct::reduce::{Conj, Reducer, Step, completing, reduced};
use reduct::transducer::{
    Transducer, cat, drop, filter, identity, interpose, map, remove, take, transduce,
    transduce_with_init,
};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

// =============================================================================
// A stateful transducer owing output at completion
// =============================================================================

/// Groups inputs into vectors of `size`, flushing the last partial group on
/// completion.
struct Batch<T> {
    size: usize,
    element: PhantomData<fn(T)>,
}

fn batch<T>(size: usize) -> Batch<T> {
    Batch {
        size,
        element: PhantomData,
    }
}

struct BatchReducer<R, T> {
    rf: R,
    size: usize,
    pending: Vec<T>,
}

impl<R, T> Transducer<R> for Batch<T> {
    type Reducer = BatchReducer<R, T>;

    fn apply(self, rf: R) -> Self::Reducer {
        BatchReducer {
            rf,
            size: self.size,
            pending: Vec::new(),
        }
    }
}

impl<A, T, R> Reducer<A, T> for BatchReducer<R, T>
where
    R: Reducer<A, Vec<T>>,
{
    type Output = R::Output;

    fn init(&mut self) -> Result<A, Error> {
        self.rf.init()
    }

    fn complete(&mut self, result: A) -> Self::Output {
        let result = if self.pending.is_empty() {
            result
        } else {
            let pending = std::mem::take(&mut self.pending);
            self.rf.step(result, pending).into_inner()
        };
        self.rf.complete(result)
    }

    fn step(&mut self, result: A, input: T) -> Step<A> {
        self.pending.push(input);
        if self.pending.len() < self.size {
            return Step::Continue(result);
        }
        let full = std::mem::take(&mut self.pending);
        self.rf.step(result, full)
    }
}

// =============================================================================
// Standard Transducers
// =============================================================================

#[rstest]
fn map_transforms_every_input() {
    let words = transduce(map(|x: i32| x.to_string()), Conj::new(), [1, 22]).unwrap();
    assert_eq!(words, vec!["1".to_string(), "22".to_string()]);
}

#[rstest]
fn filter_and_remove_partition_the_input() {
    let even = |x: &i32| x % 2 == 0;
    let kept = transduce(filter(even), Conj::new(), 1..=6).unwrap();
    let removed = transduce(remove(even), Conj::new(), 1..=6).unwrap();
    assert_eq!(kept, vec![2, 4, 6]);
    assert_eq!(removed, vec![1, 3, 5]);
}

#[rstest]
#[case(-5, 0)]
#[case(0, 0)]
#[case(1, 1)]
#[case(3, 3)]
#[case(10, 4)]
fn take_yields_min_of_count_and_length(#[case] count: isize, #[case] expected: usize) {
    let taken = transduce(take(count), Conj::new(), ["a", "b", "c", "d"]).unwrap();
    assert_eq!(taken.len(), expected);
    assert_eq!(taken, ["a", "b", "c", "d"][..expected].to_vec());
}

#[rstest]
fn take_stops_pulling_from_an_infinite_source() {
    let pulled = Cell::new(0);
    let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));
    assert_eq!(transduce(take(3), Conj::new(), source).unwrap(), vec![0, 1, 2]);
    assert_eq!(pulled.get(), 3);
}

#[rstest]
#[case(-1, vec![1, 2, 3])]
#[case(0, vec![1, 2, 3])]
#[case(2, vec![3])]
#[case(3, vec![])]
#[case(7, vec![])]
fn drop_suppresses_leading_inputs(#[case] count: isize, #[case] expected: Vec<i32>) {
    assert_eq!(transduce(drop(count), Conj::new(), [1, 2, 3]).unwrap(), expected);
}

#[rstest]
fn cat_flattens_one_level() {
    let flat = transduce(cat(), Conj::new(), [vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(flat, vec![1, 2, 3, 4]);
}

#[rstest]
fn cat_stops_everything_on_inner_reduced() {
    let calls = RefCell::new(Vec::new());
    let rf = completing(|acc: i32, x: i32| {
        calls.borrow_mut().push(x);
        if x == 2 {
            reduced(acc + x + 100)
        } else {
            Step::Continue(acc + x)
        }
    });
    let outer_pulled = Cell::new(0);
    let source = [vec![1, 2, 3], vec![4]]
        .into_iter()
        .inspect(|_| outer_pulled.set(outer_pulled.get() + 1));
    assert_eq!(transduce_with_init(cat(), rf, 0, source), 103);
    assert_eq!(*calls.borrow(), vec![1, 2]);
    assert_eq!(outer_pulled.get(), 1);
}

#[rstest]
fn interpose_separates_inputs() {
    let joined: String = transduce_with_init(
        interpose(", "),
        completing(|mut acc: String, x: &str| {
            acc.push_str(x);
            Step::Continue(acc)
        }),
        String::new(),
        ["a", "b", "c"],
    );
    assert_eq!(joined, "a, b, c");
}

#[rstest]
fn interpose_of_single_input_has_no_separator() {
    assert_eq!(transduce(interpose(0), Conj::new(), [9]).unwrap(), vec![9]);
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn comp_of_nothing_is_identity() {
    assert_eq!(transduce(comp!(), Conj::new(), [1, 2]).unwrap(), vec![1, 2]);
    assert_eq!(transduce(identity(), Conj::new(), [1, 2]).unwrap(), vec![1, 2]);
}

#[rstest]
fn comp_runs_leftmost_transducer_on_raw_input() {
    let xform = comp!(map(|x: i32| x * 10), filter(|x: &i32| *x > 10));
    assert_eq!(transduce(xform, Conj::new(), [1, 2, 3]).unwrap(), vec![20, 30]);
}

#[rstest]
fn comp_matches_manual_nesting() {
    let nested = map(|x: i32| x + 1).apply(take(2).apply(drop(1).apply(Conj::new())));
    let composed = comp!(map(|x: i32| x + 1), take(2), drop(1)).apply(Conj::new());
    assert_eq!(
        reduct::reduce::reduce_with_init(nested, Vec::new(), 0..),
        reduct::reduce::reduce_with_init(composed, Vec::new(), 0..),
    );
}

#[rstest]
fn closures_compose_with_standard_transducers() {
    let double_then = |rf: Conj<i32>| map(|x: i32| x * 2).apply(rf);
    let xform = comp!(take(3), double_then);
    assert_eq!(transduce(xform, Conj::new(), 1..).unwrap(), vec![2, 4, 6]);
}

// =============================================================================
// Completion
// =============================================================================

#[rstest]
fn batch_flushes_partial_group_on_completion() {
    let groups = transduce(batch(2), Conj::new(), 1..=5).unwrap();
    assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[rstest]
fn completion_runs_after_early_termination() {
    let groups = transduce(comp!(take(3), batch(2)), Conj::new(), 1..).unwrap();
    assert_eq!(groups, vec![vec![1, 2], vec![3]]);
}

#[rstest]
fn transduce_without_seed_reports_arity() {
    let sum = completing(|acc: i32, x: i32| Step::Continue(acc + x));
    assert!(matches!(
        transduce(map(|x: i32| x), sum, [1]),
        Err(Error::Arity { arity: 0, .. })
    ));
}
