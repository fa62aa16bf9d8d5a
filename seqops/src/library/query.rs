use seqops_value::{Element, Sequence};

use crate::error::{Error, Result};

/// The first element of the sequence.
///
/// Fails with [`Error::EmptyInput`] on an empty sequence.
pub fn first(seq: &Sequence) -> Result<Element> {
    seq.first().cloned().ok_or(Error::EmptyInput)
}

/// The last element of the sequence.
///
/// Fails with [`Error::EmptyInput`] on an empty sequence.
pub fn last(seq: &Sequence) -> Result<Element> {
    seq.last().cloned().ok_or(Error::EmptyInput)
}

/// The first index at which an element equals `value`.
///
/// Fails with [`Error::NotFound`] if no element matches.
pub fn index_of(seq: &Sequence, value: &Element) -> Result<usize> {
    seq.iter().position(|element| element == value).ok_or(Error::NotFound)
}

/// The highest index at which an element equals `value`, scanning from the
/// right.
///
/// Fails with [`Error::NotFound`] if no element matches.
pub fn last_index_of(seq: &Sequence, value: &Element) -> Result<usize> {
    seq.iter().rposition(|element| element == value).ok_or(Error::NotFound)
}

/// The first index for which the predicate holds, scanning left to right.
///
/// The predicate is not invoked past the first match. `None` when no
/// element matches.
pub fn find_index<P>(seq: &Sequence, mut predicate: P) -> Option<usize>
where
    P: FnMut(&Element) -> bool,
{
    seq.iter().position(|element| predicate(element))
}

/// The first index for which the predicate holds in a right-to-left scan.
///
/// In original-order terms this is the last matching index. `None` when no
/// element matches.
pub fn find_last_index<P>(seq: &Sequence, mut predicate: P) -> Option<usize>
where
    P: FnMut(&Element) -> bool,
{
    seq.iter().rposition(|element| predicate(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqops_value::seq;

    #[test]
    fn test_first_and_last() {
        let seq = seq![1, 2, 3];
        assert_eq!(first(&seq), Ok(Element::from(1)));
        assert_eq!(last(&seq), Ok(Element::from(3)));
    }

    #[test]
    fn test_empty_input() {
        let empty = seq![];
        assert_eq!(first(&empty), Err(Error::EmptyInput));
        assert_eq!(last(&empty), Err(Error::EmptyInput));
    }

    #[test]
    fn test_index_of() {
        let seq = seq![1, 2, 2, 3];
        assert_eq!(index_of(&seq, &2.into()), Ok(1));
        assert_eq!(last_index_of(&seq, &2.into()), Ok(2));
        assert_eq!(index_of(&seq, &4.into()), Err(Error::NotFound));
    }

    #[test]
    fn test_index_of_nested_value() {
        let seq = seq![1, seq![2, 3], 4];
        assert_eq!(index_of(&seq, &seq![2, 3].into()), Ok(1));
    }

    #[test]
    fn test_find_index() {
        let seq = seq![1, 2, 3, 4];
        assert_eq!(find_index(&seq, |e| *e == Element::from(3)), Some(2));
        assert_eq!(find_index(&seq, |_| false), None);
    }

    #[test]
    fn test_find_last_index() {
        let seq = seq![1, 2, 1, 2];
        assert_eq!(find_last_index(&seq, |e| *e == Element::from(1)), Some(2));
        assert_eq!(find_last_index(&seq, |_| false), None);
    }

    #[test]
    fn test_find_index_short_circuits() {
        let seq = seq![1, 2, 3];
        let mut calls = 0;
        let _ = find_index(&seq, |_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);
    }
}
