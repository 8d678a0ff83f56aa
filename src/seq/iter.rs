//! Iteration over seqs.

use std::iter::FusedIterator;

use super::seq::Seq;
use crate::Error;

/// Iterator over the elements of a [`Seq`], created by [`Seq::iter`].
///
/// Lazy links are realized one at a time as the iterator advances. A failing
/// producer is reported as an `Err` item, after which the iterator is done.
#[derive(Debug)]
pub struct SeqIter<T> {
    current: Seq<T>,
    done: bool,
}

impl<T> SeqIter<T> {
    pub(crate) const fn new(current: Seq<T>) -> Self {
        Self {
            current,
            done: false,
        }
    }

    /// The part of the seq not yet visited.
    pub const fn remaining(&self) -> &Seq<T> {
        &self.current
    }
}

impl<T: Clone> Iterator for SeqIter<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.current.realize() {
            Ok(Seq::Cons(cell)) => {
                self.current = cell.more().clone();
                Some(Ok(cell.first().clone()))
            }
            Ok(_) => {
                self.done = true;
                self.current = Seq::Empty;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<T: Clone> FusedIterator for SeqIter<T> {}
