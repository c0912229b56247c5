use std::cmp::Ordering;

use crate::sequence::{Cursor, Sequence};

/// Cartesian product of N sequences, enumerated in odometer order
///
/// Yields every row formed by choosing one element from each sequence, first sequence's
/// element first. The last sequence's cursor advances on every step; when it wraps back to its
/// own start the next sequence leftward advances once, and so on, exactly as an odometer's
/// rightmost wheel spins fastest.
///
/// A product over zero sequences is empty, as is a product where any one sequence is empty.
/// The latter is established once, when the start cursor is requested, by demanding a start
/// cursor from every level before any product cursor exists.
pub struct Product<'a, S> {
    seqs: Vec<&'a S>,
}

impl<'a, S: Sequence<'a>> Product<'a, S> {
    pub fn new(seqs: Vec<&'a S>) -> Self {
        Self { seqs }
    }
}

#[derive(Clone)]
struct Level<C> {
    // begin is kept so a wrapped level can reset without consulting the source again
    begin: C,
    mover: C,
}

pub struct ProductCursor<'a, S: Sequence<'a>> {
    adaptor: &'a Product<'a, S>,
    levels: Vec<Level<S::Cursor>>,
}

impl<'a, S: Sequence<'a>> Clone for ProductCursor<'a, S> {
    fn clone(&self) -> Self {
        Self {
            adaptor: self.adaptor,
            levels: self.levels.clone(),
        }
    }
}

impl<'a, S: Sequence<'a>> PartialEq for ProductCursor<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.adaptor, other.adaptor)
            && self.levels.len() == other.levels.len()
            && self
                .levels
                .iter()
                .zip(&other.levels)
                .all(|(a, b)| a.mover == b.mover)
    }
}

impl<'a, S: Sequence<'a>> Eq for ProductCursor<'a, S> {}

impl<'a, S: Sequence<'a>> PartialOrd for ProductCursor<'a, S> {
    /// lexicographic over the per-level movers, which coincides with enumeration order
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !std::ptr::eq(self.adaptor, other.adaptor) || self.levels.len() != other.levels.len()
        {
            return None;
        }

        for (a, b) in self.levels.iter().zip(&other.levels) {
            match a.mover.partial_cmp(&b.mover)? {
                Ordering::Equal => continue,
                ord => return Some(ord),
            }
        }

        Some(Ordering::Equal)
    }
}

impl<'a, S: Sequence<'a>> Sequence<'a> for Product<'a, S> {
    type Item = Vec<S::Item>;
    type Cursor = ProductCursor<'a, S>;

    fn start(&'a self) -> anyhow::Result<Option<Self::Cursor>> {
        if self.seqs.is_empty() {
            return Ok(None);
        }

        // every level must be nonempty for the product to contain anything; checked here,
        // once, across all levels - no product cursor can exist over an empty level
        let mut levels = Vec::with_capacity(self.seqs.len());
        for seq in &self.seqs {
            match seq.start()? {
                Some(c) => levels.push(Level {
                    begin: c.clone(),
                    mover: c,
                }),
                None => return Ok(None),
            }
        }

        Ok(Some(ProductCursor {
            adaptor: self,
            levels,
        }))
    }
}

impl<'a, S: Sequence<'a>> Cursor for ProductCursor<'a, S> {
    type Item = Vec<S::Item>;

    fn data(&self) -> anyhow::Result<Self::Item> {
        self.levels.iter().map(|level| level.mover.data()).collect()
    }

    fn next(&self) -> anyhow::Result<Option<Self>> {
        let mut levels = self.levels.clone();

        // rightmost level first; a level that reaches its end wraps back to its begin cursor
        // and carries one step into the level to its left
        for i in (0..levels.len()).rev() {
            match levels[i].mover.next()? {
                Some(c) => {
                    levels[i].mover = c;
                    return Ok(Some(Self {
                        adaptor: self.adaptor,
                        levels,
                    }));
                }
                None => {
                    let begin = levels[i].begin.clone();
                    levels[i].mover = begin;
                }
            }
        }

        // the carry fell off the leftmost level
        Ok(None)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        memory::MemorySequence,
        product::Product,
        range::SequenceExt,
        sequence::Sequence,
        take_while::TakeWhile,
    };

    fn rows<'a, S: Sequence<'a>>(seq: &'a S) -> Vec<S::Item> {
        seq.items()
            .expect("Failed to get items")
            .collect::<anyhow::Result<Vec<_>>>()
            .expect("Failed to read items")
    }

    #[test]
    fn two_by_two_in_odometer_order() {
        let a = [1, 2];
        let b = [3, 4];
        let sa = MemorySequence::new(a.as_slice());
        let sb = MemorySequence::new(b.as_slice());
        let product = Product::new(vec![&sa, &sb]);

        let got = rows(&product);
        let expected = [vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]];
        assert!(got == expected, "{got:?} !== {expected:?}");
    }

    #[test]
    fn last_level_spins_fastest_across_three_levels() {
        let a = [0, 1];
        let b = [0, 1, 2];
        let c = [7, 8];
        let sa = MemorySequence::new(a.as_slice());
        let sb = MemorySequence::new(b.as_slice());
        let sc = MemorySequence::new(c.as_slice());
        let product = Product::new(vec![&sa, &sb, &sc]);

        let got = rows(&product);
        assert!(got.len() == a.len() * b.len() * c.len());

        let mut expected = Vec::new();
        for x in a {
            for y in b {
                for z in c {
                    expected.push(vec![x, y, z]);
                }
            }
        }
        assert!(got == expected, "{got:?} !== {expected:?}");
    }

    #[test]
    fn single_sequence_yields_single_element_rows() {
        let a = [5, 6, 7];
        let sa = MemorySequence::new(a.as_slice());
        let product = Product::new(vec![&sa]);

        let got = rows(&product);
        let expected = [vec![5], vec![6], vec![7]];
        assert!(got == expected, "{got:?} !== {expected:?}");
    }

    #[test]
    fn empty_first_level_empties_the_product() {
        let a: [i32; 0] = [];
        let b = [1, 2];
        let sa = MemorySequence::new(a.as_slice());
        let sb = MemorySequence::new(b.as_slice());
        let product = Product::new(vec![&sa, &sb]);

        assert!(rows(&product).is_empty());
    }

    #[test]
    fn empty_middle_level_empties_the_product() {
        let a = [1, 2];
        let b: [i32; 0] = [];
        let c = [3, 4];
        let sa = MemorySequence::new(a.as_slice());
        let sb = MemorySequence::new(b.as_slice());
        let sc = MemorySequence::new(c.as_slice());
        let product = Product::new(vec![&sa, &sb, &sc]);

        assert!(rows(&product).is_empty());
    }

    #[test]
    fn empty_last_level_empties_the_product() {
        let a = [1, 2];
        let b: [i32; 0] = [];
        let sa = MemorySequence::new(a.as_slice());
        let sb = MemorySequence::new(b.as_slice());
        let product = Product::new(vec![&sa, &sb]);

        assert!(rows(&product).is_empty());
    }

    #[test]
    fn zero_sequences_is_an_empty_product() {
        let product: Product<MemorySequence<i32>> = Product::new(vec![]);

        assert!(
            product
                .start()
                .expect("Failed to get start cursor")
                .is_none()
        );
    }

    #[test]
    fn product_feeds_another_adaptor() {
        let a = [0, 1];
        let b = [0, 1];
        let sa = MemorySequence::new(a.as_slice());
        let sb = MemorySequence::new(b.as_slice());
        let product = Product::new(vec![&sa, &sb]);
        let bounded = TakeWhile::new(|row: &Vec<i32>| row.iter().sum::<i32>() < 2, &product);

        let got = rows(&bounded);
        let expected = [vec![0, 0], vec![0, 1], vec![1, 0]];
        assert!(got == expected, "{got:?} !== {expected:?}");
    }
}
