use std::cmp::Ordering;

use ahash::HashSet;

use seqops_value::{Element, Sequence};

use crate::error::{Error, Result};

/// Append each item to the sequence in argument order.
///
/// Items are appended as-is; a nested sequence item goes in as one element.
pub fn append(seq: &mut Sequence, items: &[Element]) {
    seq.extend(items.iter().cloned());
}

/// Remove every occurrence of any of the given values, in place.
///
/// The relative order of the remaining elements is preserved.
pub fn pull(seq: &mut Sequence, values: &[Element]) {
    seq.retain(|element| !values.contains(element));
}

/// Remove the elements at the given indices, in place.
///
/// Indices are evaluated against the original sequence, not shifted
/// mid-removal. All indices are validated before anything is removed;
/// fails with [`Error::IndexOutOfRange`] and leaves the sequence unchanged
/// if any index is out of range.
pub fn pull_at(seq: &mut Sequence, indices: &[usize]) -> Result<()> {
    for &index in indices {
        if index >= seq.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: seq.len(),
            });
        }
    }
    let indices: HashSet<usize> = indices.iter().copied().collect();
    let mut position = 0;
    seq.retain(|_| {
        let keep = !indices.contains(&position);
        position += 1;
        keep
    });
    Ok(())
}

/// Remove every element for which the predicate holds, in place.
///
/// The relative order of the remaining elements is preserved. Returns the
/// removed elements in their original order.
pub fn remove<P>(seq: &mut Sequence, mut predicate: P) -> Sequence
where
    P: FnMut(&Element) -> bool,
{
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(seq.len());
    for element in seq.drain(..) {
        if predicate(&element) {
            removed.push(element);
        } else {
            kept.push(element);
        }
    }
    seq.extend(kept);
    removed.into()
}

/// Remove and return the first element.
///
/// Fails with [`Error::EmptyInput`] on an empty sequence.
pub fn shift(seq: &mut Sequence) -> Result<Element> {
    if seq.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(seq.remove(0))
}

/// Sort the sequence in place into ascending natural order.
///
/// Fails with [`Error::Uncomparable`] if some pair of elements has no
/// defined relative order, in which case the sequence is left unchanged.
pub fn sort(seq: &mut Sequence) -> Result<()> {
    let mut items = seq.to_vec();
    let mut failed = false;
    items.sort_by(|a, b| {
        a.fallible_compare(b).unwrap_or_else(|| {
            failed = true;
            Ordering::Less
        })
    });
    if failed {
        return Err(Error::Uncomparable);
    }
    **seq = items;
    Ok(())
}

/// Remove `delete_count` elements at `start`, insert `items` there, and
/// return the removed elements.
///
/// `delete_count` is clamped to the available tail. Fails with
/// [`Error::IndexOutOfRange`] if `start` lies past the end.
///
/// ```
/// use seqops::{seq, splice, Element};
///
/// let mut seq = seq![2, 1, 4, 3];
/// let removed = splice(&mut seq, 1, 2, &[Element::from(0), Element::from(0)])?;
/// assert_eq!(removed, seq![1, 4]);
/// assert_eq!(seq, seq![2, 0, 0, 3]);
/// # Ok::<(), seqops::Error>(())
/// ```
pub fn splice(
    seq: &mut Sequence,
    start: usize,
    delete_count: usize,
    items: &[Element],
) -> Result<Sequence> {
    if start > seq.len() {
        return Err(Error::IndexOutOfRange {
            index: start,
            len: seq.len(),
        });
    }
    let delete_count = delete_count.min(seq.len() - start);
    let removed: Vec<Element> = seq
        .splice(start..start + delete_count, items.iter().cloned())
        .collect();
    Ok(removed.into())
}
