#![cfg(feature = "seq")]
//! Integration tests for persistent seqs.
//!
//! Tests cover:
//! - The empty seq and its accessors
//! - `cons` onto seqs, lazy seqs and `None`
//! - The free accessor functions and `next == seq(rest)`
//! - Structural sharing and non-forcing `Debug`
//! - The seq combinators

use reduct::seq::{
    Seq, concat, cons, first, interleave, is_realized, iterate, lazy_from_iter, lazy_seq, next,
    nthrest, rest, seq,
};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn values(coll: &Seq<i32>) -> Vec<i32> {
    coll.iter().collect::<Result<_, _>>().unwrap()
}

// =============================================================================
// Empty Seq
// =============================================================================

#[rstest]
fn rest_of_empty_is_the_same_empty() {
    let empty: Seq<i32> = Seq::Empty;
    assert!(rest(&empty).unwrap().ptr_eq(&empty));
    assert!(rest(&rest(&empty).unwrap()).unwrap().ptr_eq(&Seq::Empty));
}

#[rstest]
fn empty_has_no_first_and_no_seq() {
    let empty: Seq<i32> = Seq::default();
    assert_eq!(first(&empty).unwrap(), None);
    assert!(seq(&empty).unwrap().is_none());
    assert!(next(&empty).unwrap().is_none());
    assert!(is_realized(&empty));
}

#[rstest]
fn empty_iterates_to_nothing() {
    assert!(values(&Seq::Empty).is_empty());
}

// =============================================================================
// Cons
// =============================================================================

#[rstest]
fn cons_onto_none_iterates_to_one_element() {
    assert_eq!(values(&cons(1, None::<Seq<i32>>)), vec![1]);
}

#[rstest]
fn cons_onto_some_seq_prepends() {
    let tail = cons(2, cons(3, Seq::Empty));
    assert_eq!(values(&cons(1, Some(tail))), vec![1, 2, 3]);
}

#[rstest]
fn cons_onto_lazy_seq_does_not_force_it() {
    let tail = lazy_seq(|| cons(2, Seq::Empty));
    let numbers = cons(1, tail.clone());
    assert_eq!(first(&numbers).unwrap(), Some(1));
    assert!(!is_realized(&tail));
    assert_eq!(values(&numbers), vec![1, 2]);
    assert!(is_realized(&tail));
}

#[rstest]
#[case(vec![], true)]
#[case(vec![1], true)]
#[case(vec![1, 2], false)]
fn next_is_none_when_nothing_follows(#[case] items: Vec<i32>, #[case] is_none: bool) {
    let coll: Seq<i32> = items.into_iter().collect();
    assert_eq!(next(&coll).unwrap().is_none(), is_none);
}

#[rstest]
fn next_equals_seq_of_rest() {
    let coll = cons(1, lazy_seq(|| cons(2, Seq::Empty)));
    let via_next = next(&coll).unwrap().unwrap();
    let via_rest = seq(&rest(&coll).unwrap()).unwrap().unwrap();
    assert!(via_next.ptr_eq(&via_rest));
}

#[rstest]
fn shared_tails_are_not_copied() {
    let tail: Seq<i32> = (2..5).collect();
    let left = cons(0, tail.clone());
    let right = cons(1, tail.clone());
    assert!(rest(&left).unwrap().ptr_eq(&rest(&right).unwrap()));
    assert_eq!(values(&left), vec![0, 2, 3, 4]);
    assert_eq!(values(&right), vec![1, 2, 3, 4]);
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
fn debug_lists_realized_elements_only() {
    let tail = lazy_seq(|| cons(3, Seq::Empty));
    let coll = cons(1, cons(2, tail));
    assert_eq!(format!("{coll:?}"), "[1, 2, ..]");
    assert_eq!(format!("{:?}", Seq::<i32>::Empty), "[]");
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn iterate_is_infinite_and_lazy() {
    let powers = iterate(|x: &i32| x * 3, 1);
    let head: Vec<i32> = powers.iter().take(5).collect::<Result<_, _>>().unwrap();
    assert_eq!(head, vec![1, 3, 9, 27, 81]);
}

#[rstest]
fn concat_joins_in_order() {
    let joined = concat([
        (1..3).collect(),
        Seq::Empty,
        lazy_seq(|| cons(3, Seq::Empty)),
        (4..5).collect(),
    ]);
    assert_eq!(values(&joined), vec![1, 2, 3, 4]);
}

#[rstest]
fn concat_pulls_inputs_one_at_a_time() {
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let joined = concat((0..1000).map(move |i| {
        counter.set(counter.get() + 1);
        cons(i, Seq::Empty)
    }));
    assert_eq!(pulled.get(), 0);

    assert_eq!(first(&joined).unwrap(), Some(0));
    assert_eq!(pulled.get(), 1);

    assert_eq!(joined.iter().take(3).collect::<Result<Vec<_>, _>>().unwrap(), vec![0, 1, 2]);
    assert_eq!(pulled.get(), 3);
}

#[rstest]
fn concat_of_an_infinite_source() {
    let joined = concat((0..).map(|i: u32| Seq::from_iter([i, i])));
    assert_eq!(nthrest(&joined, 5).unwrap().first().unwrap(), Some(2));
}

#[rstest]
fn nthrest_past_the_end_is_empty() {
    let coll: Seq<i32> = (0..3).collect();
    assert!(nthrest(&coll, 10).unwrap().is_empty().unwrap());
}

#[rstest]
fn lazy_from_iter_is_re_readable() {
    let coll = lazy_from_iter(vec![5, 6, 7]);
    assert_eq!(values(&coll), vec![5, 6, 7]);
    assert_eq!(values(&coll), vec![5, 6, 7]);
}

#[rstest]
fn interleave_takes_whole_rounds() {
    let mixed: Vec<char> = interleave(["abc".chars(), "xy".chars()]).collect();
    assert_eq!(mixed, vec!['a', 'x', 'b', 'y']);
}

#[rstest]
fn interleave_over_seqs() {
    let evens = iterate(|x: &i32| x + 2, 0);
    let odds = iterate(|x: &i32| x + 2, 1);
    let mixed: Vec<i32> = interleave([evens.iter(), odds.iter()])
        .take(6)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(mixed, vec![0, 1, 2, 3, 4, 5]);
}
