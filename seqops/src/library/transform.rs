use ahash::{HashMap, HashSet};

use seqops_value::{Element, Sequence};

use crate::error::{Error, Result};

/// Concatenate sequences into one new sequence.
///
/// Elements of each input are appended as-is, so one nesting level is
/// preserved; nothing inside the elements is flattened.
pub fn cat(seqs: &[Sequence]) -> Sequence {
    let mut result = Vec::with_capacity(seqs.iter().map(|seq| seq.len()).sum());
    for seq in seqs {
        result.extend(seq.iter().cloned());
    }
    result.into()
}

/// Partition the sequence into consecutive chunks of length `size`.
///
/// The final chunk holds the remainder and may be shorter. Fails with
/// [`Error::InvalidArgument`] if `size` is zero.
///
/// ```
/// use seqops::{seq, chunk};
///
/// let chunks = chunk(&seq![1, 2, 3, 4, 5], 2)?;
/// assert_eq!(chunks, vec![seq![1, 2], seq![3, 4], seq![5]]);
/// # Ok::<(), seqops::Error>(())
/// ```
pub fn chunk(seq: &Sequence, size: usize) -> Result<Vec<Sequence>> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "chunk size must be positive".to_string(),
        ));
    }
    Ok(seq
        .chunks(size)
        .map(|window| window.to_vec().into())
        .collect())
}

/// Keep only the truthy elements, preserving their relative order.
pub fn compact(seq: &Sequence) -> Sequence {
    seq.iter()
        .filter(|element| element.is_truthy())
        .cloned()
        .collect()
}

/// Elements of `seq` absent from the union of all `others`.
///
/// Duplicates in `seq` collapse; the result is ordered by first occurrence
/// in `seq`.
pub fn difference(seq: &Sequence, others: &[Sequence]) -> Sequence {
    let excluded: HashSet<&Element> = others.iter().flat_map(|other| other.iter()).collect();
    let mut seen: HashSet<&Element> = HashSet::default();
    seq.iter()
        .filter(|element| !excluded.contains(*element) && seen.insert(*element))
        .cloned()
        .collect()
}

/// All elements from index `n` onward; `n` past the end yields empty.
pub fn drop(seq: &Sequence, n: usize) -> Sequence {
    seq.iter().skip(n).cloned().collect()
}

/// All elements before index `len - n`; `n` past the start yields empty.
pub fn drop_right(seq: &Sequence, n: usize) -> Sequence {
    seq.iter()
        .take(seq.len().saturating_sub(n))
        .cloned()
        .collect()
}

/// Remove the leading run of elements for which the predicate holds.
///
/// The predicate is invoked left to right and stops at the first false.
pub fn drop_while<P>(seq: &Sequence, mut predicate: P) -> Sequence
where
    P: FnMut(&Element) -> bool,
{
    let start = seq
        .iter()
        .position(|element| !predicate(element))
        .unwrap_or(seq.len());
    drop(seq, start)
}

/// Remove the trailing run of elements for which the predicate holds.
///
/// The predicate is invoked right to left and stops at the first false.
pub fn drop_right_while<P>(seq: &Sequence, mut predicate: P) -> Sequence
where
    P: FnMut(&Element) -> bool,
{
    let end = seq
        .iter()
        .rposition(|element| !predicate(element))
        .map(|index| index + 1)
        .unwrap_or(0);
    seq.iter().take(end).cloned().collect()
}

/// Elements occurring more than once, each reported exactly once, in order
/// of first occurrence.
pub fn duplicates(seq: &Sequence) -> Sequence {
    let mut counts: HashMap<&Element, usize> = HashMap::default();
    for element in seq.iter() {
        *counts.entry(element).or_insert(0) += 1;
    }
    let mut seen: HashSet<&Element> = HashSet::default();
    seq.iter()
        .filter(|element| counts[*element] > 1 && seen.insert(*element))
        .cloned()
        .collect()
}

/// A copy of the sequence with indices in the half-open range
/// `[start, end)` replaced by `value`.
///
/// Out-of-range bounds clamp to the sequence; the input is not mutated.
pub fn fill(seq: &Sequence, value: &Element, start: usize, end: usize) -> Sequence {
    let end = end.min(seq.len());
    seq.iter()
        .enumerate()
        .map(|(index, element)| {
            if index >= start && index < end {
                value.clone()
            } else {
                element.clone()
            }
        })
        .collect()
}

/// Expand exactly one nesting level.
///
/// Nested-sequence elements are spliced in; deeper nesting inside them is
/// untouched.
pub fn flatten(seq: &Sequence) -> Sequence {
    let mut result = Vec::with_capacity(seq.len());
    for element in seq.iter() {
        match element {
            Element::Nested(inner) => result.extend(inner.iter().cloned()),
            atom => result.push(atom.clone()),
        }
    }
    result.into()
}

/// Recursively expand all nesting levels into a single flat sequence.
pub fn flatten_deep(seq: &Sequence) -> Sequence {
    let mut result = Vec::new();
    flatten_deep_into(seq, &mut result);
    result.into()
}

fn flatten_deep_into(seq: &Sequence, out: &mut Vec<Element>) {
    for element in seq.iter() {
        match element {
            Element::Nested(inner) => flatten_deep_into(inner, out),
            atom => out.push(atom.clone()),
        }
    }
}

/// All elements except the last; empty input yields empty.
pub fn initial(seq: &Sequence) -> Sequence {
    drop_right(seq, 1)
}

/// Flatten one level while inserting `sep` between successive top-level
/// positions.
///
/// The separator never leads or trails an expansion: elements coming out of
/// one nested top-level element expand inline without separators between
/// them.
pub fn intercalate(seq: &Sequence, sep: &Element) -> Sequence {
    flatten(&intersperse(seq, sep))
}

/// Round-robin merge of multiple sequences of possibly unequal length.
///
/// Takes element 0 from each sequence in argument order, then element 1,
/// and so on; exhausted sequences are skipped on subsequent rounds.
pub fn interleave(seqs: &[Sequence]) -> Sequence {
    let mut result = Vec::with_capacity(seqs.iter().map(|seq| seq.len()).sum());
    let mut index = 0;
    loop {
        let mut exhausted = true;
        for seq in seqs {
            if let Some(element) = seq.get(index) {
                result.push(element.clone());
                exhausted = false;
            }
        }
        if exhausted {
            break;
        }
        index += 1;
    }
    result.into()
}

/// Elements present in every input sequence.
///
/// Deduplicated, ordered by first occurrence in the first sequence. No
/// inputs yield empty.
pub fn intersection(seqs: &[Sequence]) -> Sequence {
    let Some((head, tail)) = seqs.split_first() else {
        return Sequence::new();
    };
    let tail_sets: Vec<HashSet<&Element>> =
        tail.iter().map(|seq| seq.iter().collect()).collect();
    let mut seen: HashSet<&Element> = HashSet::default();
    head.iter()
        .filter(|element| {
            tail_sets.iter().all(|set| set.contains(*element)) && seen.insert(*element)
        })
        .cloned()
        .collect()
}

/// Insert `sep` between every pair of adjacent elements.
///
/// Unlike [`intercalate`], nested elements are kept as-is.
pub fn intersperse(seq: &Sequence, sep: &Element) -> Sequence {
    let mut result = Vec::with_capacity(seq.len().saturating_mul(2).saturating_sub(1));
    for (index, element) in seq.iter().enumerate() {
        if index > 0 {
            result.push(sep.clone());
        }
        result.push(element.clone());
    }
    result.into()
}

/// Map each element to a sub-sequence, then concatenate the results in
/// order (flat-map).
pub fn mapcat<F>(seq: &Sequence, mut f: F) -> Sequence
where
    F: FnMut(&Element) -> Sequence,
{
    let mut result = Vec::new();
    for element in seq.iter() {
        result.extend(f(element));
    }
    result.into()
}

/// Build a key to value mapping by pairing `keys[i]` with `values[i]`.
///
/// Fails with [`Error::LengthMismatch`] if the lengths differ.
pub fn object(keys: &Sequence, values: &Sequence) -> Result<HashMap<Element, Element>> {
    if keys.len() != values.len() {
        return Err(Error::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }
    Ok(keys.iter().cloned().zip(values.iter().cloned()).collect())
}

/// All elements except the first; equivalent to `drop(seq, 1)`.
pub fn rest(seq: &Sequence) -> Sequence {
    drop(seq, 1)
}

/// A new sequence with the element order reversed; the input is untouched.
pub fn reverse(seq: &Sequence) -> Sequence {
    seq.iter().rev().cloned().collect()
}

/// The half-open sub-sequence `[start, end)`, clamped to bounds.
///
/// `start` past `end` yields empty.
pub fn slice(seq: &Sequence, start: usize, end: usize) -> Sequence {
    let end = end.min(seq.len());
    let start = start.min(end);
    seq[start..end].to_vec().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqops_value::{seq, Atom};

    #[test]
    fn test_cat_preserves_one_level() {
        let result = cat(&[seq![1, 2], seq![3, 4], seq![seq![5], seq![6]]]);
        assert_eq!(result, seq![1, 2, 3, 4, seq![5], seq![6]]);
    }

    #[test]
    fn test_chunk() {
        let result = chunk(&seq![1, 2, 3, 4, 5, 6, 7, 8, 9, 0], 2).unwrap();
        assert_eq!(
            result,
            vec![seq![1, 2], seq![3, 4], seq![5, 6], seq![7, 8], seq![9, 0]]
        );
    }

    #[test]
    fn test_chunk_remainder_and_bad_size() {
        let seq = seq![1, 2, 3];
        assert_eq!(chunk(&seq, 2).unwrap(), vec![seq![1, 2], seq![3]]);
        assert!(matches!(chunk(&seq, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_compact() {
        let seq = seq!["", 1, 0, true, false, Atom::Null];
        assert_eq!(compact(&seq), seq![1, true]);
    }

    #[test]
    fn test_compact_drops_empty_nested() {
        let seq = seq![seq![], seq![0]];
        assert_eq!(compact(&seq), seq![seq![0]]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&seq![1, 2, 3], &[seq![1], seq![2]]), seq![3]);
        assert_eq!(
            difference(&seq![1, 2, 1, 3], &[seq![3, 4]]),
            seq![1, 2],
            "duplicates collapse, first-occurrence order"
        );
    }

    #[test]
    fn test_drop_family() {
        let seq = seq![1, 2, 3, 4];
        assert_eq!(drop(&seq, 2), seq![3, 4]);
        assert_eq!(drop(&seq, 9), seq![]);
        assert_eq!(drop_right(&seq, 2), seq![1, 2]);
        assert_eq!(drop_right(&seq, 9), seq![]);
    }

    #[test]
    fn test_drop_while() {
        let less_than_3 = |e: &Element| e.fallible_compare(&3.into()) == Some(std::cmp::Ordering::Less);
        assert_eq!(drop_while(&seq![1, 2, 3, 4], less_than_3), seq![3, 4]);
        // the run stops at the first false, later matches stay
        assert_eq!(drop_while(&seq![1, 4, 1], less_than_3), seq![4, 1]);
    }

    #[test]
    fn test_drop_right_while() {
        let greater_than_2 =
            |e: &Element| e.fallible_compare(&2.into()) == Some(std::cmp::Ordering::Greater);
        assert_eq!(drop_right_while(&seq![1, 2, 3, 4], greater_than_2), seq![1, 2]);
        assert_eq!(drop_right_while(&seq![3, 1, 3], greater_than_2), seq![3, 1]);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(duplicates(&seq![1, 2, 3, 4, 1, 2, 3, 4]), seq![1, 2, 3, 4]);
        assert_eq!(duplicates(&seq![2, 1, 2, 1, 3]), seq![2, 1]);
        assert_eq!(duplicates(&seq![1, 2, 3]), seq![]);
    }

    #[test]
    fn test_fill() {
        let seq = seq![1, 2, 3, 4];
        assert_eq!(fill(&seq, &0.into(), 0, 2), seq![0, 0, 3, 4]);
        assert_eq!(fill(&seq, &0.into(), 1, 99), seq![1, 0, 0, 0]);
        assert_eq!(seq, seq![1, 2, 3, 4], "input untouched");
    }

    #[test]
    fn test_flatten_one_level() {
        let seq = seq![1, seq![2, seq![3]], 4];
        assert_eq!(flatten(&seq), seq![1, 2, seq![3], 4]);
    }

    #[test]
    fn test_flatten_deep() {
        let seq = seq![1, seq![2, seq![3, seq![4]]], 5];
        assert_eq!(flatten_deep(&seq), seq![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial(&seq![1, 2, 3]), seq![1, 2]);
        assert_eq!(initial(&seq![]), seq![]);
    }

    #[test]
    fn test_intercalate() {
        let seq = seq![1, seq![2, 3], 4];
        assert_eq!(intercalate(&seq, &"x".into()), seq![1, "x", 2, 3, "x", 4]);
    }

    #[test]
    fn test_interleave() {
        let result = interleave(&[seq![1, 2, 3], seq![4, 5, 6], seq![7, 8, 9, 10], seq![1, 2]]);
        assert_eq!(result, seq![1, 4, 7, 1, 2, 5, 8, 2, 3, 6, 9, 10]);
    }

    #[test]
    fn test_intersection() {
        assert_eq!(
            intersection(&[seq![1, 2, 3, 2], seq![2, 3, 4], seq![3, 2]]),
            seq![2, 3]
        );
        assert_eq!(intersection(&[]), seq![]);
        assert_eq!(intersection(&[seq![1, 1, 2]]), seq![1, 2]);
    }

    #[test]
    fn test_intersperse_keeps_nesting() {
        let seq = seq![1, seq![2, 3], 4];
        assert_eq!(
            intersperse(&seq, &0.into()),
            seq![1, 0, seq![2, 3], 0, 4]
        );
        assert_eq!(intersperse(&seq![1], &0.into()), seq![1]);
    }

    #[test]
    fn test_mapcat() {
        let result = mapcat(&seq![1, 2], |element| {
            seq![element.clone(), element.clone()]
        });
        assert_eq!(result, seq![1, 1, 2, 2]);
    }

    #[test]
    fn test_object() {
        let mapping = object(&seq!["a", "b"], &seq![1, 2]).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[&Element::from("a")], Element::from(1));
        assert_eq!(
            object(&seq!["a"], &seq![1, 2]),
            Err(Error::LengthMismatch { keys: 1, values: 2 })
        );
    }

    #[test]
    fn test_rest() {
        assert_eq!(rest(&seq![1, 2, 3]), seq![2, 3]);
        assert_eq!(rest(&seq![]), seq![]);
    }

    #[test]
    fn test_reverse_does_not_mutate() {
        let seq = seq![1, 2, 3];
        assert_eq!(reverse(&seq), seq![3, 2, 1]);
        assert_eq!(seq, seq![1, 2, 3]);
    }

    #[test]
    fn test_slice() {
        let seq = seq![1, 2, 3, 4];
        assert_eq!(slice(&seq, 1, 3), seq![2, 3]);
        assert_eq!(slice(&seq, 2, 99), seq![3, 4]);
        assert_eq!(slice(&seq, 3, 1), seq![]);
    }
}
