use std::cmp::Ordering;

use crate::{
    error::SequenceError,
    sequence::{Cursor, Sequence},
};

/// A (begin, end) cursor pair over a single [`Sequence`], iterable with a `for` loop
///
/// The end cursor is non-inclusive
pub struct Range<C> {
    start: C,
    end: C,
}

pub struct RangeIterator<C> {
    curr: C,
    end: C,
}

pub trait RangeTo: Cursor {
    /// Create a [`Range`] between `self` and `other`
    ///
    /// Returns an error if the cursors cannot be compared with [`PartialOrd`] or if `other`
    /// occurs before `self`
    fn range_to(&self, other: &Self) -> anyhow::Result<Range<Self>> {
        match self.partial_cmp(other) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Range {
                start: self.clone(),
                end: other.clone(),
            }),
            Some(_) => Err(SequenceError::NegativeLengthRange.into()),
            None => Err(SequenceError::RangeMismatch.into()),
        }
    }
}

impl<C: Cursor> RangeTo for C {}

impl<C: Cursor> Iterator for RangeIterator<C> {
    type Item = anyhow::Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr < self.end {
            let data = match self.curr.data() {
                Ok(d) => d,
                Err(e) => return Some(Err(e)),
            };

            self.curr = match self.curr.next() {
                Ok(Some(c)) => c,
                Ok(None) => return Some(Err(SequenceError::Eof.into())),
                Err(e) => return Some(Err(e)),
            };

            Some(Ok(data))
        } else {
            None
        }
    }
}

impl<C: Cursor> Range<C> {
    pub fn data(&self) -> anyhow::Result<RangeIterator<C>> {
        Ok(RangeIterator {
            curr: self.start.clone(),
            end: self.end.clone(),
        })
    }
}

/// Iterates a [`Sequence`] from a start cursor to its natural end
///
/// A failed dereference or advance yields the error once, after which the iterator is
/// exhausted
pub struct Items<C> {
    head: Option<C>,
}

impl<C> Items<C> {
    pub fn new(head: Option<C>) -> Self {
        Self { head }
    }
}

impl<C: Cursor> Iterator for Items<C> {
    type Item = anyhow::Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.head.take()?;

        let data = match cursor.data() {
            Ok(d) => d,
            Err(e) => return Some(Err(e)),
        };

        match cursor.next() {
            Ok(head) => {
                self.head = head;
                Some(Ok(data))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

pub trait SequenceExt<'a>: Sequence<'a> {
    /// iterate every element of this sequence in order
    fn items(&'a self) -> anyhow::Result<Items<Self::Cursor>> {
        Ok(Items::new(self.start()?))
    }
}

impl<'a, S: Sequence<'a>> SequenceExt<'a> for S {}
