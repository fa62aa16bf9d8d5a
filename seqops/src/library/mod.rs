//! The sequence operator library.
//!
//! One module per behavior class: query operators inspect a sequence and
//! never mutate it, transform operators derive a new sequence or value, and
//! mutators change the caller's sequence in place.
//! All operators are free functions with no shared state between calls.

mod mutate;
mod query;
mod transform;

pub use mutate::{append, pull, pull_at, remove, shift, sort, splice};
pub use query::{find_index, find_last_index, first, index_of, last, last_index_of};
pub use transform::{
    cat, chunk, compact, difference, drop, drop_right, drop_right_while, drop_while, duplicates,
    fill, flatten, flatten_deep, initial, intercalate, interleave, intersection, intersperse,
    mapcat, object, rest, reverse, slice,
};
