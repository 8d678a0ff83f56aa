//! Building seqs out of functions, iterators and other seqs.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::rc::Rc;

use super::seq::{Seq, cons, lazy_seq, try_lazy_seq};
use crate::Error;

/// Returns the infinite seq `seed, function(seed), function(function(seed)), ...`.
///
/// `function` is called once per element, and only when that element is
/// reached.
///
/// # Examples
///
/// ```rust
/// use reduct::seq::{iterate, nthrest};
///
/// let powers = iterate(|x: &u64| x * 2, 1);
/// assert_eq!(nthrest(&powers, 10).unwrap().first().unwrap(), Some(1024));
/// ```
pub fn iterate<T, F>(function: F, seed: T) -> Seq<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    iterate_from(Rc::new(function), seed)
}

fn iterate_from<T, F>(function: Rc<F>, current: T) -> Seq<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    cons(
        current.clone(),
        lazy_seq(move || {
            let following = function(&current);
            iterate_from(function, following)
        }),
    )
}

/// Returns the lazy concatenation of `colls`.
///
/// `colls` is pulled one input at a time, when the elements before that
/// input have been consumed, so it may be infinite. Empty inputs are skipped without nesting calls, however many of them
/// follow each other.
///
/// # Examples
///
/// ```rust
/// use reduct::seq::{concat, Seq};
///
/// let joined = concat([Seq::from_iter([1, 2]), Seq::Empty, Seq::from_iter([3])]);
/// assert_eq!(joined.iter().collect::<Result<Vec<_>, _>>().unwrap(), vec![1, 2, 3]);
/// ```
pub fn concat<T, C>(colls: C) -> Seq<T>
where
    T: Clone + 'static,
    C: IntoIterator<Item = Seq<T>>,
    C::IntoIter: 'static,
{
    concat_from(Seq::Empty, lazy_from_iter(colls))
}

fn concat_from<T>(current: Seq<T>, remaining: Seq<Seq<T>>) -> Seq<T>
where
    T: Clone + 'static,
{
    try_lazy_seq(move || -> Result<Seq<T>, Error> {
        if let Seq::Cons(cell) = current.realize()? {
            return Ok(cons(
                cell.first().clone(),
                concat_from(cell.more().clone(), remaining),
            ));
        }
        match remaining.realize()? {
            Seq::Cons(next) => Ok(concat_from(next.first().clone(), next.more().clone())),
            _ => Ok(Seq::Empty),
        }
    })
}

/// Returns `coll` without its first `n` elements, realizing them.
///
/// # Errors
///
/// Returns the error of a failing lazy producer met on the way.
pub fn nthrest<T>(coll: &Seq<T>, n: usize) -> Result<Seq<T>, Error> {
    let mut current = coll.clone();
    for _ in 0..n {
        match current.seq()? {
            Some(realized) => current = realized.rest()?,
            None => break,
        }
    }
    Ok(current)
}

/// Returns a lazy seq over `iter`, one element per link.
///
/// The iterator is advanced only when a link is forced, and every element
/// it yields is kept, so the seq can be read any number of times.
///
/// # Examples
///
/// ```rust
/// use reduct::seq::lazy_from_iter;
/// use reduct::transducer::{map, sequence};
///
/// let doubled = lazy_from_iter(sequence(map(|x: i32| x * 2), 1..=3));
/// let twice: Vec<_> = doubled.iter().chain(doubled.iter()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(twice, vec![2, 4, 6, 2, 4, 6]);
/// ```
pub fn lazy_from_iter<I>(iter: I) -> Seq<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    pull(iter.into_iter())
}

fn pull<I>(mut source: I) -> Seq<I::Item>
where
    I: Iterator + 'static,
    I::Item: 'static,
{
    lazy_seq(move || match source.next() {
        Some(element) => cons(element, pull(source)),
        None => Seq::Empty,
    })
}

/// Iterator returned by [`interleave`].
pub struct Interleave<I: Iterator> {
    sources: Vec<I>,
    round: VecDeque<I::Item>,
    done: bool,
}

/// Returns an iterator taking one element of each source in turn.
///
/// Elements are yielded in whole rounds: as soon as one source runs out,
/// the iteration ends, without the partial round.
///
/// # Examples
///
/// ```rust
/// use reduct::seq::interleave;
///
/// let mixed: Vec<_> = interleave([vec![1, 2, 3], vec![10, 20]]).collect();
/// assert_eq!(mixed, vec![1, 10, 2, 20]);
/// ```
pub fn interleave<C, S>(colls: S) -> Interleave<C::IntoIter>
where
    C: IntoIterator,
    S: IntoIterator<Item = C>,
{
    let sources: Vec<_> = colls.into_iter().map(IntoIterator::into_iter).collect();
    Interleave {
        round: VecDeque::with_capacity(sources.len()),
        done: sources.is_empty(),
        sources,
    }
}

impl<I: Iterator> Iterator for Interleave<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(element) = self.round.pop_front() {
            return Some(element);
        }
        if self.done {
            return None;
        }
        for source in &mut self.sources {
            if let Some(element) = source.next() {
                self.round.push_back(element);
            } else {
                self.done = true;
                self.round.clear();
                return None;
            }
        }
        self.round.pop_front()
    }
}

impl<I: Iterator> FusedIterator for Interleave<I> {}
