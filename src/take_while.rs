use crate::sequence::{Cursor, Sequence};

/// Truncates a [`Sequence`] at the first element for which a predicate fails
///
/// Produces the source's elements in order, stopping immediately before the first element for
/// which the predicate returns false, or at the source's natural end, whichever comes first.
/// Elements past a failed check are never revisited, even if a later element would satisfy the
/// predicate again
pub struct TakeWhile<'a, S, P> {
    inner: &'a S,
    pred: P,
}

impl<'a, S, P> TakeWhile<'a, S, P>
where
    S: Sequence<'a>,
    P: Fn(&S::Item) -> bool,
{
    pub fn new(pred: P, inner: &'a S) -> Self {
        Self { inner, pred }
    }

    /// apply the predicate to the element under `cursor`, dropping the cursor if it fails
    fn admit(&self, cursor: S::Cursor) -> anyhow::Result<Option<S::Cursor>> {
        if (self.pred)(&cursor.data()?) {
            Ok(Some(cursor))
        } else {
            Ok(None)
        }
    }
}

pub struct TakeWhileCursor<'a, S: Sequence<'a>, P> {
    adaptor: &'a TakeWhile<'a, S, P>,
    inner: S::Cursor,
}

impl<'a, S: Sequence<'a>, P> Clone for TakeWhileCursor<'a, S, P> {
    fn clone(&self) -> Self {
        Self {
            adaptor: self.adaptor,
            inner: self.inner.clone(),
        }
    }
}

impl<'a, S: Sequence<'a>, P> PartialEq for TakeWhileCursor<'a, S, P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.adaptor, other.adaptor) && self.inner == other.inner
    }
}

impl<'a, S: Sequence<'a>, P> Eq for TakeWhileCursor<'a, S, P> {}

impl<'a, S: Sequence<'a>, P> PartialOrd for TakeWhileCursor<'a, S, P> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if std::ptr::eq(self.adaptor, other.adaptor) {
            self.inner.partial_cmp(&other.inner)
        } else {
            None
        }
    }
}

impl<'a, S, P> Sequence<'a> for TakeWhile<'a, S, P>
where
    S: Sequence<'a>,
    P: Fn(&S::Item) -> bool + 'a,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<'a, S, P>;

    fn start(&'a self) -> anyhow::Result<Option<Self::Cursor>> {
        match self.inner.start()? {
            Some(c) => Ok(self
                .admit(c)?
                .map(|inner| TakeWhileCursor { adaptor: self, inner })),
            None => Ok(None),
        }
    }
}

impl<'a, S, P> Cursor for TakeWhileCursor<'a, S, P>
where
    S: Sequence<'a>,
    P: Fn(&S::Item) -> bool + 'a,
{
    type Item = S::Item;

    fn data(&self) -> anyhow::Result<Self::Item> {
        self.inner.data()
    }

    fn next(&self) -> anyhow::Result<Option<Self>> {
        match self.inner.next()? {
            Some(c) => Ok(self.adaptor.admit(c)?.map(|inner| Self {
                adaptor: self.adaptor,
                inner,
            })),
            None => Ok(None),
        }
    }
}
