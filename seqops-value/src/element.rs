use ibig::IBig;

use crate::atom::Atom;
use crate::sequence::Sequence;

/// A sequence element: an atomic value or a nested sequence.
///
/// Operators pattern-match on this tag rather than doing any runtime type
/// inspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    /// An atomic value.
    Atom(Atom),
    /// A nested sequence.
    Nested(Sequence),
}

impl Element {
    /// Truthiness of the element.
    ///
    /// Atoms follow [`Atom::is_truthy`]; a nested sequence is true exactly
    /// when it is non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Element::Atom(atom) => atom.is_truthy(),
            Element::Nested(seq) => !seq.is_empty(),
        }
    }

    /// The atom inside this element, if it is one.
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Element::Atom(atom) => Some(atom),
            Element::Nested(_) => None,
        }
    }

    /// The nested sequence inside this element, if it is one.
    pub fn as_nested(&self) -> Option<&Sequence> {
        match self {
            Element::Atom(_) => None,
            Element::Nested(seq) => Some(seq),
        }
    }
}

impl From<Atom> for Element {
    fn from(atom: Atom) -> Self {
        Element::Atom(atom)
    }
}

impl From<Sequence> for Element {
    fn from(seq: Sequence) -> Self {
        Element::Nested(seq)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Atom(value.into())
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Atom(value.into())
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Atom(value.into())
    }
}

impl From<usize> for Element {
    fn from(value: usize) -> Self {
        Element::Atom(value.into())
    }
}

impl From<IBig> for Element {
    fn from(value: IBig) -> Self {
        Element::Atom(value.into())
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Atom(value.into())
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Atom(value.into())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Atom(value.into())
    }
}
