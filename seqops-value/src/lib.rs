//! The value model for the seqops sequence manipulation library.
//!
//! Sequences are ordered, finite, 0-indexed collections of [`Element`]s. An
//! element is either an atomic value ([`Atom`]) or a nested [`Sequence`],
//! so sequences can nest to arbitrary depth and mix value kinds freely.
//!
//! Elements compare structurally and hash consistently with that
//! comparison, which is what lets the set-flavored operators in `seqops`
//! use hash-based lookups. Ordering is a separate, fallible notion: see
//! [`Element::fallible_compare`].

mod atom;
mod compare;
mod display;
mod element;
mod sequence;

pub use atom::Atom;
pub use element::Element;
pub use sequence::Sequence;
