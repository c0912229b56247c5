//! Lazy adaptors over ordered sequences, driven one element at a time through a cursor
//! protocol.
//!
//! A [`Sequence`] hands out cheaply clonable [`Cursor`]s; adaptors ([`TakeWhile`],
//! [`Product`], [`Compress`], [`Transform`]) borrow one or more sequences and expose the same
//! protocol over a derived sequence, without copying or eagerly materializing anything, so
//! adaptors compose freely with each other.

mod compress;
mod error;
mod memory;
mod product;
mod range;
mod sequence;
mod take_while;
mod transform;

pub use compress::*;
pub use error::*;
pub use memory::*;
pub use product::*;
pub use range::*;
pub use sequence::*;
pub use take_while::*;
pub use transform::*;
