//! Literal-style rendering of JSON values for diagnostics.
//!
//! Error messages render mappings the way they are usually written in remap
//! tooling and test expectations: single-quoted strings, `None`, `True` and
//! `False`, and `{'key': value}` objects in source key order.
//!
//! ```text
//! {"s": "testX", "m": 3}  =>  {'s': 'testX', 'm': 3}
//! ```

use std::fmt;

use serde_json::{Map, Value};

/// Display adapter rendering a [`Value`] in literal style.
pub struct Repr<'a>(pub &'a Value);

/// Display adapter rendering a JSON object in literal style.
pub struct MapRepr<'a>(pub &'a Map<String, Value>);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_str_literal(f, s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Repr(item))?;
                }
                f.write_str("]")
            }
            Value::Object(map) => write!(f, "{}", MapRepr(map)),
        }
    }
}

impl fmt::Display for MapRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_str_literal(f, key)?;
            write!(f, ": {}", Repr(value))?;
        }
        f.write_str("}")
    }
}

/// Renders a value to an owned string.
#[must_use]
pub fn value(value: &Value) -> String {
    Repr(value).to_string()
}

/// Renders a mapping to an owned string.
#[must_use]
pub fn mapping(map: &Map<String, Value>) -> String {
    MapRepr(map).to_string()
}

// Single quotes unless the text itself contains one and no double quote.
pub(crate) fn write_str_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}
