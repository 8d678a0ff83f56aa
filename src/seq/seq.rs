//! Persistent seqs: the empty seq, cons cells and lazy links.
//!
//! A [`Seq`] is immutable. Building on top of an existing seq shares it, and
//! every accessor that needs content realizes lazy links on the way.
//! Accessors that may realize a lazy link return `Result`, because the
//! producer behind it may fail.
//!
//! # Examples
//!
//! ```rust
//! use reduct::seq::{cons, lazy_seq, Seq};
//!
//! let tail = lazy_seq(|| cons(2, cons(3, Seq::Empty)));
//! let numbers = cons(1, tail.clone());
//!
//! assert!(!tail.is_realized());
//! assert_eq!(numbers.first().unwrap(), Some(1));
//! assert_eq!(numbers.next().unwrap().unwrap().first().unwrap(), Some(2));
//! assert!(tail.is_realized());
//! ```

use std::fmt;
use std::mem;
use std::rc::Rc;

use super::iter::SeqIter;
use super::lazy::LazySeq;
use crate::Error;

/// An immutable, possibly lazy, singly linked sequence.
pub enum Seq<T> {
    /// The empty seq. Every empty seq is this one value.
    Empty,
    /// A realized cell.
    Cons(Rc<Cons<T>>),
    /// A link realized on first access.
    Lazy(LazySeq<T>),
}

/// A cell of a [`Seq`]: one element and the seq that follows it.
pub struct Cons<T> {
    first: T,
    more: Seq<T>,
}

impl<T> Cons<T> {
    /// The element held by this cell.
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// The seq after this cell, unrealized if it is lazy.
    pub const fn more(&self) -> &Seq<T> {
        &self.more
    }
}

impl<T> Drop for Cons<T> {
    // Unlinks uniquely owned cells one at a time, so that dropping a long
    // realized seq does not recurse once per element.
    fn drop(&mut self) {
        let mut more = mem::take(&mut self.more);
        loop {
            more = match more {
                Seq::Empty => break,
                Seq::Cons(cell) => match Rc::try_unwrap(cell) {
                    Ok(mut cell) => mem::take(&mut cell.more),
                    Err(_) => break,
                },
                Seq::Lazy(lazy) => match lazy.into_realized() {
                    Some(seq) => seq,
                    None => break,
                },
            };
        }
    }
}

impl<T> Seq<T> {
    /// Returns the realized form of this seq: `Empty` or `Cons`.
    pub(crate) fn realize(&self) -> Result<Self, Error> {
        match self {
            Self::Empty => Ok(Self::Empty),
            Self::Cons(cell) => Ok(Self::Cons(Rc::clone(cell))),
            Self::Lazy(lazy) => lazy.force(),
        }
    }

    /// Returns `None` for an empty seq and the realized seq otherwise.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing lazy producer.
    pub fn seq(&self) -> Result<Option<Self>, Error> {
        match self.realize()? {
            Self::Empty => Ok(None),
            realized => Ok(Some(realized)),
        }
    }

    /// Returns the first element, or `None` for an empty seq.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing lazy producer.
    pub fn first(&self) -> Result<Option<T>, Error>
    where
        T: Clone,
    {
        match self.realize()? {
            Self::Cons(cell) => Ok(Some(cell.first.clone())),
            _ => Ok(None),
        }
    }

    /// Returns everything after the first element; the empty seq for an
    /// empty seq. The returned seq is not realized.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing lazy producer.
    pub fn rest(&self) -> Result<Self, Error> {
        match self.realize()? {
            Self::Cons(cell) => Ok(cell.more.clone()),
            _ => Ok(Self::Empty),
        }
    }

    /// Returns `seq(rest(self))`: `None` when nothing follows the first
    /// element.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing lazy producer.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Result<Option<Self>, Error> {
        self.rest()?.seq()
    }

    /// Returns `true` unless this is a lazy link whose producer has not
    /// succeeded yet. Does not force anything.
    pub fn is_realized(&self) -> bool {
        match self {
            Self::Empty | Self::Cons(_) => true,
            Self::Lazy(lazy) => lazy.is_realized(),
        }
    }

    /// Returns `true` when the seq has no element.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing lazy producer.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(matches!(self.realize()?, Self::Empty))
    }

    /// Returns `true` when both seqs are the same value: both empty, the
    /// same cell or the same lazy link.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Cons(left), Self::Cons(right)) => Rc::ptr_eq(left, right),
            (Self::Lazy(left), Self::Lazy(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// Iterates over the elements, realizing lazy links as it goes.
    ///
    /// Items are `Result`s; the iteration ends after the first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reduct::seq::{cons, try_lazy_seq, Seq};
    /// use reduct::error::Message;
    ///
    /// let broken = cons(1, try_lazy_seq(|| Err::<Seq<i32>, _>(Message::new("gone"))));
    /// let items: Vec<_> = broken.iter().collect();
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(*items[0].as_ref().unwrap(), 1);
    /// assert!(items[1].is_err());
    /// ```
    pub fn iter(&self) -> SeqIter<T> {
        SeqIter::new(self.clone())
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(cell) => Self::Cons(Rc::clone(cell)),
            Self::Lazy(lazy) => Self::Lazy(lazy.clone()),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<LazySeq<T>> for Seq<T> {
    fn from(lazy: LazySeq<T>) -> Self {
        Self::Lazy(lazy)
    }
}

impl<T> From<Option<Seq<T>>> for Seq<T> {
    fn from(seq: Option<Seq<T>>) -> Self {
        seq.unwrap_or_default()
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::Empty, |more, first| cons(first, more))
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = Result<T, Error>;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        SeqIter::new(self)
    }
}

impl<T: Clone> IntoIterator for &Seq<T> {
    type Item = Result<T, Error>;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    /// Shows the realized prefix; an unrealized link is shown as `..`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut current = self.clone();
        loop {
            current = match current {
                Self::Empty => break,
                Self::Cons(cell) => {
                    list.entry(&cell.first);
                    cell.more.clone()
                }
                Self::Lazy(lazy) => match lazy.settled() {
                    Some(Ok(seq)) => seq,
                    Some(Err(error)) => {
                        list.entry(&format_args!("<{error}>"));
                        break;
                    }
                    None => {
                        list.entry(&format_args!(".."));
                        break;
                    }
                },
            };
        }
        list.finish()
    }
}

/// Returns a seq with `first` in front of `more`.
///
/// `more` is anything convertible into a seq: a seq, a [`LazySeq`], or
/// `None` for the empty seq.
///
/// # Examples
///
/// ```rust
/// use reduct::seq::{cons, Seq};
///
/// let one = cons(1, None::<Seq<i32>>);
/// assert_eq!(one.first().unwrap(), Some(1));
/// assert!(one.next().unwrap().is_none());
/// ```
pub fn cons<T>(first: T, more: impl Into<Seq<T>>) -> Seq<T> {
    Seq::Cons(Rc::new(Cons {
        first,
        more: more.into(),
    }))
}

/// Free form of [`Seq::seq`].
///
/// # Errors
///
/// Returns the error of a failing lazy producer.
pub fn seq<T>(coll: &Seq<T>) -> Result<Option<Seq<T>>, Error> {
    coll.seq()
}

/// Free form of [`Seq::first`].
///
/// # Errors
///
/// Returns the error of a failing lazy producer.
pub fn first<T: Clone>(coll: &Seq<T>) -> Result<Option<T>, Error> {
    coll.first()
}

/// Free form of [`Seq::rest`].
///
/// # Errors
///
/// Returns the error of a failing lazy producer.
pub fn rest<T>(coll: &Seq<T>) -> Result<Seq<T>, Error> {
    coll.rest()
}

/// Free form of [`Seq::next`].
///
/// # Errors
///
/// Returns the error of a failing lazy producer.
pub fn next<T>(coll: &Seq<T>) -> Result<Option<Seq<T>>, Error> {
    coll.next()
}

/// Free form of [`Seq::is_realized`].
pub fn is_realized<T>(coll: &Seq<T>) -> bool {
    coll.is_realized()
}

/// Returns a seq whose content is produced by `producer` on first access.
///
/// # Examples
///
/// ```rust
/// use reduct::seq::{cons, lazy_seq, Seq};
///
/// fn countdown(n: u32) -> Seq<u32> {
///     lazy_seq(move || if n == 0 { Seq::Empty } else { cons(n, countdown(n - 1)) })
/// }
///
/// let values: Result<Vec<_>, _> = countdown(3).iter().collect();
/// assert_eq!(values.unwrap(), vec![3, 2, 1]);
/// ```
pub fn lazy_seq<T, F>(producer: F) -> Seq<T>
where
    T: 'static,
    F: FnOnce() -> Seq<T> + 'static,
{
    Seq::Lazy(LazySeq::new(move || Ok::<_, Error>(producer())))
}

/// Returns a seq produced by a fallible `producer` on first access.
///
/// The error is cached: every later access returns the same error.
pub fn try_lazy_seq<T, E, F>(producer: F) -> Seq<T>
where
    T: 'static,
    E: Into<Error> + 'static,
    F: FnOnce() -> Result<Seq<T>, E> + 'static,
{
    Seq::Lazy(LazySeq::new(producer))
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Seq<T>
where
    T: serde::Serialize + Clone,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut elements = serializer.serialize_seq(None)?;
        for element in self {
            let element = element.map_err(<S::Error as serde::ser::Error>::custom)?;
            elements.serialize_element(&element)?;
        }
        elements.end()
    }
}

#[cfg(feature = "serde")]
struct SeqVisitor<T> {
    element_marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SeqVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Seq<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Seq<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor {
            element_marker: std::marker::PhantomData,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_forces_the_seq() {
        let numbers = cons(1, lazy_seq(|| cons(2, Seq::Empty)));
        assert_eq!(serde_json::to_string(&numbers).unwrap(), "[1,2]");
    }

    #[rstest]
    fn test_serialize_reports_producer_failure() {
        let broken = cons(
            1,
            try_lazy_seq(|| Err::<Seq<i32>, _>(crate::error::Message::new("gone"))),
        );
        assert!(serde_json::to_string(&broken).is_err());
    }

    #[rstest]
    fn test_deserialize_builds_a_realized_seq() {
        let numbers: Seq<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert!(numbers.is_realized());
        let values: Vec<i32> = numbers.iter().collect::<Result<_, _>>().unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
