//! The lazy driver: pull a collection through a transducer on demand.
//!
//! The transformed reducer folds into a [`VecDeque`] buffer. Each call to
//! [`Iterator::next`] drains the buffer before pulling one more upstream
//! element, so the source is never read more than one element ahead of
//! what the transducer needed to produce the next output.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use tracing::trace;

use super::transducer::{Identity, Transducer};
use crate::Error;
use crate::reduce::{Reducer, Step};

/// The base reducer of [`sequence`]: appends outputs to a queue.
pub struct Buffer<U> {
    element: PhantomData<fn(U)>,
}

impl<U> Buffer<U> {
    const fn new() -> Self {
        Self {
            element: PhantomData,
        }
    }
}

impl<U> Reducer<VecDeque<U>, U> for Buffer<U> {
    type Output = VecDeque<U>;

    fn init(&mut self) -> Result<VecDeque<U>, Error> {
        Ok(VecDeque::new())
    }

    fn complete(&mut self, result: VecDeque<U>) -> VecDeque<U> {
        result
    }

    #[inline]
    fn step(&mut self, mut result: VecDeque<U>, input: U) -> Step<VecDeque<U>> {
        result.push_back(input);
        Step::Continue(result)
    }
}

/// Iterator returned by [`sequence`].
///
/// Single pass: once exhausted it keeps returning `None`.
pub struct Sequence<R, I, U> {
    rf: R,
    source: I,
    buffer: VecDeque<U>,
    finished: bool,
}

/// Returns an iterator over `coll` transformed by `xform`.
///
/// Nothing is pulled from `coll` until the iterator is advanced. When the
/// source runs out, or the transducer stops the reduction, the completion
/// runs once and whatever it flushed is yielded last.
///
/// # Examples
///
/// ```rust
/// use reduct::comp;
/// use reduct::transducer::{map, sequence, take};
///
/// let squares: Vec<u64> = sequence(comp!(map(|x: u64| x * x), take(3)), 1..).collect();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn sequence<X, C, U>(xform: X, coll: C) -> Sequence<X::Reducer, C::IntoIter, U>
where
    X: Transducer<Buffer<U>>,
    C: IntoIterator,
{
    Sequence {
        rf: xform.apply(Buffer::new()),
        source: coll.into_iter(),
        buffer: VecDeque::new(),
        finished: false,
    }
}

/// [`sequence`] with the passthrough transducer.
///
/// # Examples
///
/// ```rust
/// use reduct::transducer::sequence_of;
///
/// assert_eq!(sequence_of(vec![1, 2]).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn sequence_of<C>(coll: C) -> Sequence<Buffer<C::Item>, C::IntoIter, C::Item>
where
    C: IntoIterator,
{
    sequence(Identity, coll)
}

impl<R, I, U> Sequence<R, I, U>
where
    I: Iterator,
    R: Reducer<VecDeque<U>, I::Item, Output = VecDeque<U>>,
{
    fn finish(&mut self, buffer: VecDeque<U>) {
        self.finished = true;
        self.buffer = self.rf.complete(buffer);
        trace!(flushed = self.buffer.len(), "sequence completed");
    }
}

impl<R, I, U> Iterator for Sequence<R, I, U>
where
    I: Iterator,
    R: Reducer<VecDeque<U>, I::Item, Output = VecDeque<U>>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            if let Some(output) = self.buffer.pop_front() {
                return Some(output);
            }
            if self.finished {
                return None;
            }
            let buffer = mem::take(&mut self.buffer);
            match self.source.next() {
                Some(input) => match self.rf.step(buffer, input) {
                    Step::Continue(buffer) => self.buffer = buffer,
                    Step::Reduced(buffer) => self.finish(buffer),
                },
                None => self.finish(buffer),
            }
        }
    }
}

impl<R, I, U> FusedIterator for Sequence<R, I, U>
where
    I: Iterator,
    R: Reducer<VecDeque<U>, I::Item, Output = VecDeque<U>>,
{
}
