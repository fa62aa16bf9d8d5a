use std::ops::{Deref, DerefMut};

use crate::element::Element;

/// An ordered, finite, mutable collection of [`Element`]s.
///
/// A newtype over `Vec<Element>` that derefs to the vector, so the whole
/// standard container API is available. Ownership always stays with the
/// caller; mutating operators in `seqops` take `&mut Sequence` and change
/// the contents of this container, never rebinding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Element>);

impl Sequence {
    /// Construct an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Construct an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<Element> {
        self.0
    }
}

impl Deref for Sequence {
    type Target = Vec<Element>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Sequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Element>> for Sequence {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl FromIterator<Element> for Sequence {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Sequence {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Extend<Element> for Sequence {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// Construct a [`Sequence`] from values convertible to [`Element`].
///
/// ```
/// use seqops_value::{seq, Element};
///
/// let nested = seq![1, "two", seq![true, 2.5]];
/// assert_eq!(nested.len(), 3);
/// assert!(matches!(nested[2], Element::Nested(_)));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($crate::Element::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;

    #[test]
    fn test_seq_macro() {
        let seq = seq![1, 2, 3];
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[0], Element::from(1));
        let empty: Sequence = seq![];
        assert_eq!(empty, Sequence::new());
    }

    #[test]
    fn test_collect() {
        let seq: Sequence = (1..4).map(Element::from).collect();
        assert_eq!(seq, seq![1, 2, 3]);
    }

    #[test]
    fn test_mutation_through_deref() {
        let mut seq = seq![1, 2];
        seq.push(3.into());
        seq.remove(0);
        assert_eq!(seq, seq![2, 3]);
    }
}
