use std::fmt::{self, Write};

use crate::atom::Atom;
use crate::element::Element;
use crate::sequence::Sequence;

// Readable literal representations, mainly for debugging and test output.
// Strings are double-quoted with minimal escaping; sequences print as
// bracketed comma-separated lists.

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Null => f.write_str("null"),
            Atom::Boolean(b) => write!(f, "{}", b),
            Atom::Integer(i) => write!(f, "{}", i),
            Atom::Double(d) => write!(f, "{}", d),
            Atom::String(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        _ => f.write_char(c)?,
                    }
                }
                f.write_char('"')
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Atom(atom) => fmt::Display::fmt(atom, f),
            Element::Nested(seq) => fmt::Display::fmt(seq, f),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_char(']')
    }
}
