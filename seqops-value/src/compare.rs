use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::atom::Atom;
use crate::element::Element;
use crate::sequence::Sequence;

impl Atom {
    /// Compare two atoms by their natural ordering.
    ///
    /// Returns `None` when the atoms have no defined relative order.
    /// Ordering is defined within a kind; integers and doubles are
    /// additionally mutually comparable after promotion to double. `Null`
    /// orders only against `Null`.
    pub fn fallible_compare(&self, other: &Atom) -> Option<Ordering> {
        use Atom::*;
        match (self, other) {
            (Null, Null) => Some(Ordering::Equal),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            (Integer(a), Integer(b)) => Some(a.cmp(b)),
            (Double(a), Double(b)) => Some(a.cmp(b)),
            (Integer(a), Double(b)) => Some(OrderedFloat(a.to_f64()).cmp(b)),
            (Double(a), Integer(b)) => Some(a.cmp(&OrderedFloat(b.to_f64()))),
            (String(a), String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl Element {
    /// Compare two elements by their natural ordering.
    ///
    /// Atoms compare via [`Atom::fallible_compare`]; nested sequences
    /// compare lexicographically. An atom never orders against a nested
    /// sequence.
    pub fn fallible_compare(&self, other: &Element) -> Option<Ordering> {
        match (self, other) {
            (Element::Atom(a), Element::Atom(b)) => a.fallible_compare(b),
            (Element::Nested(a), Element::Nested(b)) => a.fallible_compare(b),
            _ => None,
        }
    }
}

impl Sequence {
    /// Lexicographic, element-wise comparison of two sequences.
    ///
    /// The first uncomparable element pair makes the whole comparison
    /// undefined.
    pub fn fallible_compare(&self, other: &Sequence) -> Option<Ordering> {
        for (a, b) in self.iter().zip(other.iter()) {
            let ordering = a.fallible_compare(b)?;
            if !ordering.is_eq() {
                return Some(ordering);
            }
        }
        Some(self.len().cmp(&other.len()))
    }
}
