//! Query, transform and in-place mutation operators over ordered,
//! heterogeneous, possibly nested sequences.
//!
//! The operators come in three behavior classes:
//!
//! - **Query** operators inspect a sequence and return a scalar or index
//!   ([`first`], [`index_of`], [`find_index`], ...).
//! - **Transform** operators derive a new sequence or value, leaving their
//!   inputs untouched ([`chunk`], [`flatten_deep`], [`intersection`], ...).
//! - **Mutators** operate in place on a caller-supplied `&mut Sequence`
//!   ([`pull`], [`splice`], [`sort`], ...).
//!
//! All operators are free functions with no shared state between calls;
//! invalid input surfaces immediately as an [`Error`].
//!
//! ```
//! use seqops::{seq, chunk, duplicates, shift};
//!
//! let mut values = seq![1, 2, 3, 4, 1, 2, 3, 4];
//! assert_eq!(duplicates(&values), seq![1, 2, 3, 4]);
//! assert_eq!(chunk(&values, 4)?.len(), 2);
//!
//! let head = shift(&mut values)?;
//! assert_eq!(head, 1.into());
//! assert_eq!(values.len(), 7);
//! # Ok::<(), seqops::Error>(())
//! ```

mod error;
mod library;

pub use error::{Error, Result};
pub use library::*;
pub use seqops_value::{seq, Atom, Element, Sequence};
