use std::rc::Rc;

use ibig::IBig;
use ordered_float::OrderedFloat;

/// An atomic sequence value.
///
/// Atoms are the leaf values a sequence can hold. They are deliberately a
/// closed set: anything that is not one of these kinds is represented as a
/// nested sequence instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// The absent value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// An arbitrary-precision integer.
    Integer(IBig),
    /// A double-precision float.
    ///
    /// Wrapped in [`OrderedFloat`] so atoms are `Eq` and `Hash`; NaN equals
    /// NaN under structural equality.
    Double(OrderedFloat<f64>),
    /// Text.
    String(Rc<str>),
}

impl Atom {
    /// Truthiness under the "non-empty, non-zero, non-null/non-false" rule.
    ///
    /// `Null`, `false`, zero-valued numbers and the empty string are false;
    /// everything else, including NaN, is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Atom::Null => false,
            Atom::Boolean(b) => *b,
            Atom::Integer(i) => *i != IBig::from(0),
            Atom::Double(d) => **d != 0.0,
            Atom::String(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for Atom {
    fn from(value: bool) -> Self {
        Atom::Boolean(value)
    }
}

impl From<i32> for Atom {
    fn from(value: i32) -> Self {
        Atom::Integer(value.into())
    }
}

impl From<i64> for Atom {
    fn from(value: i64) -> Self {
        Atom::Integer(value.into())
    }
}

impl From<usize> for Atom {
    fn from(value: usize) -> Self {
        Atom::Integer(value.into())
    }
}

impl From<IBig> for Atom {
    fn from(value: IBig) -> Self {
        Atom::Integer(value)
    }
}

impl From<f64> for Atom {
    fn from(value: f64) -> Self {
        Atom::Double(OrderedFloat(value))
    }
}

impl From<&str> for Atom {
    fn from(value: &str) -> Self {
        Atom::String(Rc::from(value))
    }
}

impl From<String> for Atom {
    fn from(value: String) -> Self {
        Atom::String(Rc::from(value))
    }
}
