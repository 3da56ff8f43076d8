//! Result rows.

use std::fmt;

use rusqlite::types::Value;

/// One result row, printed as a tuple: `(1, 'John', 20, 'New York')`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.values)
    }
}

/// Write `values` as a tuple literal. A single value keeps its trailing
/// comma.
pub(crate) fn write_tuple(f: &mut impl fmt::Write, values: &[Value]) -> fmt::Result {
    f.write_char('(')?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_value(f, value)?;
    }
    if values.len() == 1 {
        f.write_char(',')?;
    }
    f.write_char(')')
}

fn write_value(f: &mut impl fmt::Write, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("None"),
        Value::Integer(i) => write!(f, "{i}"),
        Value::Real(r) => write!(f, "{r:?}"),
        Value::Text(s) => write_str_repr(f, s),
        Value::Blob(b) => {
            f.write_str("b'")?;
            for byte in b {
                write!(f, "\\x{byte:02x}")?;
            }
            f.write_char('\'')
        }
    }
}

/// Quote `s` the way Python's `repr` does: single quotes unless the text
/// holds a `'` and no `"`, with the chosen quote and control characters
/// escaped.
fn write_str_repr(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}
