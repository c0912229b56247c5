use std::cmp::Ordering;

use crate::{
    error::SequenceError,
    sequence::{Cursor, Sequence},
};

/// Exposes a borrowed slice as a [`Sequence`]
///
/// The slice is never copied; the caller keeps ownership and the borrow checker keeps the
/// backing storage alive for as long as any cursor refers into it
pub struct MemorySequence<'a, T> {
    inner: &'a [T],
}

impl<'a, T> MemorySequence<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { inner: data }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a, T> From<&'a [T]> for MemorySequence<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Self { inner: value }
    }
}

pub struct MemoryCursor<'a, T> {
    seq: &'a MemorySequence<'a, T>,
    pos: usize,
}

impl<'a, T> Clone for MemoryCursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            pos: self.pos,
        }
    }
}

impl<'a, T> PartialEq for MemoryCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.seq, other.seq) && self.pos == other.pos
    }
}

impl<'a, T> Eq for MemoryCursor<'a, T> {}

impl<'a, T> PartialOrd for MemoryCursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if std::ptr::eq(self.seq, other.seq) {
            self.pos.partial_cmp(&other.pos)
        } else {
            None
        }
    }
}

impl<'a, T: Clone> Sequence<'a> for MemorySequence<'a, T> {
    type Item = T;
    type Cursor = MemoryCursor<'a, T>;

    fn start(&'a self) -> anyhow::Result<Option<Self::Cursor>> {
        if self.inner.is_empty() {
            Ok(None)
        } else {
            Ok(Some(MemoryCursor { seq: self, pos: 0 }))
        }
    }
}

impl<'a, T: Clone> Cursor for MemoryCursor<'a, T> {
    type Item = T;

    fn data(&self) -> anyhow::Result<Self::Item> {
        self.seq.inner.get(self.pos).cloned().ok_or_else(|| {
            SequenceError::InvalidPosition(self.pos, self.seq.inner.len()).into()
        })
    }

    fn next(&self) -> anyhow::Result<Option<Self>> {
        let pos = self
            .pos
            .checked_add(1)
            .ok_or(SequenceError::PositionOverflow)?;

        if pos < self.seq.inner.len() {
            Ok(Some(Self { seq: self.seq, pos }))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        memory::MemorySequence,
        sequence::{Cursor, Sequence},
    };

    #[test]
    fn test_works() {
        let v = [0, 1, 2, 3, 4, 5];
        let seq = MemorySequence::new(v.as_slice());
        let mut head = seq.start().expect("Failed to get start of sequence");

        let mut i = 0;
        while let Some(c) = &head {
            let data = c.data().unwrap();
            assert!(i == data);
            i += 1;
            head = c.next().expect("Failed to advance cursor");
        }

        assert!(i == v.len() as i32, "Stopped early at {i}");
    }

    #[test]
    fn empty_slice_has_no_start() {
        let v: [u8; 0] = [];
        let seq = MemorySequence::new(v.as_slice());

        assert!(seq.start().expect("Failed to get start").is_none());
    }

    #[test]
    fn cursors_order_by_position() {
        let v = [1, 2, 3];
        let seq = MemorySequence::new(v.as_slice());

        let a = seq
            .start()
            .expect("Failed to get start")
            .expect("Found empty sequence");
        let b = a
            .next()
            .expect("Failed to advance")
            .expect("Found <eof>");

        assert!(a < b);
        assert!(a == a.clone());
    }
}
