use crate::sequence::{Cursor, Sequence};

/// Filters a data [`Sequence`] by a parallel sequence of `bool` selectors
///
/// Both cursors advance in lock-step; the data element is yielded exactly at the positions
/// whose selector is true. Whichever sequence ends first ends the adaptor, so a selector
/// shorter than the data truncates the output rather than erroring
pub struct Compress<'a, D, B> {
    data: &'a D,
    selectors: &'a B,
}

impl<'a, D, B> Compress<'a, D, B>
where
    D: Sequence<'a>,
    B: Sequence<'a, Item = bool>,
{
    pub fn new(data: &'a D, selectors: &'a B) -> Self {
        Self { data, selectors }
    }

    /// walk both cursors in lock-step until the selector under them is true, or either
    /// sequence runs out
    fn seek_selected(
        &self,
        mut data: D::Cursor,
        mut selector: B::Cursor,
    ) -> anyhow::Result<Option<(D::Cursor, B::Cursor)>> {
        loop {
            if selector.data()? {
                return Ok(Some((data, selector)));
            }

            match (data.next()?, selector.next()?) {
                (Some(d), Some(s)) => {
                    data = d;
                    selector = s;
                }
                _ => return Ok(None),
            }
        }
    }
}

pub struct CompressCursor<'a, D: Sequence<'a>, B: Sequence<'a>> {
    adaptor: &'a Compress<'a, D, B>,
    data: D::Cursor,
    selector: B::Cursor,
}

impl<'a, D: Sequence<'a>, B: Sequence<'a>> Clone for CompressCursor<'a, D, B> {
    fn clone(&self) -> Self {
        Self {
            adaptor: self.adaptor,
            data: self.data.clone(),
            selector: self.selector.clone(),
        }
    }
}

impl<'a, D: Sequence<'a>, B: Sequence<'a>> PartialEq for CompressCursor<'a, D, B> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.adaptor, other.adaptor) && self.data == other.data
    }
}

impl<'a, D: Sequence<'a>, B: Sequence<'a>> Eq for CompressCursor<'a, D, B> {}

impl<'a, D: Sequence<'a>, B: Sequence<'a>> PartialOrd for CompressCursor<'a, D, B> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if std::ptr::eq(self.adaptor, other.adaptor) {
            self.data.partial_cmp(&other.data)
        } else {
            None
        }
    }
}

impl<'a, D, B> Sequence<'a> for Compress<'a, D, B>
where
    D: Sequence<'a>,
    B: Sequence<'a, Item = bool>,
{
    type Item = D::Item;
    type Cursor = CompressCursor<'a, D, B>;

    fn start(&'a self) -> anyhow::Result<Option<Self::Cursor>> {
        let (Some(data), Some(selector)) = (self.data.start()?, self.selectors.start()?) else {
            return Ok(None);
        };

        Ok(self
            .seek_selected(data, selector)?
            .map(|(data, selector)| CompressCursor {
                adaptor: self,
                data,
                selector,
            }))
    }
}

impl<'a, D, B> Cursor for CompressCursor<'a, D, B>
where
    D: Sequence<'a>,
    B: Sequence<'a, Item = bool>,
{
    type Item = D::Item;

    fn data(&self) -> anyhow::Result<Self::Item> {
        self.data.data()
    }

    fn next(&self) -> anyhow::Result<Option<Self>> {
        let (Some(data), Some(selector)) = (self.data.next()?, self.selector.next()?) else {
            return Ok(None);
        };

        Ok(self
            .adaptor
            .seek_selected(data, selector)?
            .map(|(data, selector)| Self {
                adaptor: self.adaptor,
                data,
                selector,
            }))
    }
}
