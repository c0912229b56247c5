/// refers to an ordered source of cheaply clonable items
///
/// includes lifetime to ensure a [`Cursor`] can store references to its [`Sequence`]
///
/// Implementors fall into two groups:
///  - concrete sources, e.g. [`MemorySequence`] exposing a borrowed slice
///  - adaptors, which consume the cursors of one or more other [`Sequence`]s and expose this
///    same protocol over a derived, lazily computed sequence ([`TakeWhile`], [`Product`],
///    [`Compress`], [`Transform`])
///
/// Because adaptors satisfy the protocol they consume, the output of one adaptor may be fed
/// directly into another.
///
/// [`MemorySequence`]: crate::MemorySequence
/// [`TakeWhile`]: crate::TakeWhile
/// [`Product`]: crate::Product
/// [`Compress`]: crate::Compress
/// [`Transform`]: crate::Transform
pub trait Sequence<'a> {
    type Item: Sized + Clone;
    type Cursor: Cursor<Item = Self::Item> + 'a;

    /// get the cursor associated with the first element of this sequence, or `None`, indicating
    /// that the sequence is empty
    fn start(&'a self) -> anyhow::Result<Option<Self::Cursor>>;
}

/// Cheaply clonable struct which refers to a single value in a [`Sequence`]
///
/// A cursor always refers to a dereferenceable position: advancing off the final element
/// produces `None` rather than a past-the-end cursor, so there is no way to read past the end
/// of a sequence through this trait. This is a deliberate strengthening of the usual
/// begin/end-sentinel contract, where such reads are left undefined.
///
/// [`PartialEq`] and [`Eq`] should be implemented such that two [`Cursor`]s are equal if they
/// refer to the same location in the same [`Sequence`]
///
/// [`PartialOrd`] should be implemented such that a cursor is less than another in the same
/// [`Sequence`] if successive calls to [`Cursor::next`] would eventually yield the other.
/// Cursors of two different sequences compare as [`None`]
///
/// [`Clone`] should be implemented such that the resulting [`Cursor`] is equal to the original
pub trait Cursor: Sized + Clone + PartialEq + Eq + PartialOrd {
    type Item: Sized + Clone;

    /// get the value that this cursor refers to
    ///
    /// Where possible, it is recommended practice that repeated calls to this function produce
    /// the same result, but there is no guarentee that this is the case for sources which read
    /// from external state
    fn data(&self) -> anyhow::Result<Self::Item>;

    /// get the cursor immediately following this one, or `None`, indicating that this cursor is
    /// the final one in the sequence
    ///
    /// Advancing is forward-only and one step at a time; `self` is left untouched
    fn next(&self) -> anyhow::Result<Option<Self>>;
}
