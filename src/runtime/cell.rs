//! Tagged scalar values

use std::fmt;

/// A scalar in the interpreter's value model.
///
/// `String` and `MaybeNumeric` both carry text but are not interchangeable:
/// a `String` is never reinterpreted as a number, while a `MaybeNumeric`
/// value (command-line arguments, environment values, `-v` assignments)
/// becomes a `StrNum` when its text looks numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    NoInit,
    Double(f64),
    String(String),
    MaybeNumeric(String),
    /// Text that has been checked and found to look numeric
    StrNum(String, f64),
}

impl Cell {
    pub fn string(text: impl Into<String>) -> Self {
        Cell::String(text.into())
    }

    pub fn maybe_numeric(text: impl Into<String>) -> Self {
        Cell::MaybeNumeric(text.into())
    }

    /// The text of string-like cells
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::String(s) | Cell::MaybeNumeric(s) | Cell::StrNum(s, _) => Some(s),
            Cell::NoInit | Cell::Double(_) => None,
        }
    }

    pub fn is_maybe_numeric(&self) -> bool {
        matches!(self, Cell::MaybeNumeric(_))
    }

    /// Resolve a `MaybeNumeric` cell: numeric-looking text becomes
    /// `StrNum`, anything else a plain `String`. Other cells are unchanged.
    pub fn check_strnum(self) -> Cell {
        match self {
            Cell::MaybeNumeric(text) => match looks_numeric(&text) {
                Some(value) => Cell::StrNum(text, value),
                None => Cell::String(text),
            },
            other => other,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::NoInit => Ok(()),
            Cell::Double(d) if d.fract() == 0.0 && d.abs() < 1e16 => write!(f, "{}", *d as i64),
            Cell::Double(d) => write!(f, "{}", d),
            Cell::String(s) | Cell::MaybeNumeric(s) | Cell::StrNum(s, _) => f.write_str(s),
        }
    }
}

/// Decimal number with optional surrounding blanks, sign, fraction and
/// exponent. `inf`, `nan` and hex forms are not numbers here.
pub fn looks_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    let bytes = trimmed.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits == 0 {
            return None;
        }
        i = j + exp_digits;
    }
    if i != bytes.len() {
        return None;
    }
    trimmed.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
