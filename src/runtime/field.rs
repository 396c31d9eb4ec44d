//! Escape decoding and field separator casting

use regex::Regex;

use crate::errors::{Result, StartupError};

/// Decode backslash escapes in command-line text (`-F` and `-v` values).
///
/// Recognized: `\" \\ \a \b \f \n \r \t \v`, one to three octal digits and
/// `\x` with one or two hex digits. Any other escape keeps its backslash, as
/// does a trailing lone backslash.
pub fn rm_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&c) = chars.peek() else {
            out.push('\\');
            break;
        };
        if let Some(decoded) = simple_escape(c) {
            out.push(decoded);
            chars.next();
        } else if c.is_digit(8) {
            let mut value: u32 = 0;
            for _ in 0..3 {
                let Some(digit) = chars.peek().and_then(|c| c.to_digit(8)) else {
                    break;
                };
                value = value * 8 + digit;
                chars.next();
            }
            out.push(byte_char(value));
        } else if c == 'x' && chars.clone().nth(1).is_some_and(|c| c.is_ascii_hexdigit()) {
            chars.next();
            let mut value: u32 = 0;
            for _ in 0..2 {
                let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) else {
                    break;
                };
                value = value * 16 + digit;
                chars.next();
            }
            out.push(byte_char(value));
        } else {
            out.push('\\');
            out.push(c);
            chars.next();
        }
    }
    out
}

/// A decoded escape is a single byte; bytes above 0x7f map to U+0080..U+00FF.
fn byte_char(value: u32) -> char {
    char::from(value as u8)
}

fn simple_escape(c: char) -> Option<char> {
    Some(match c {
        'n' => '\n',
        't' => '\t',
        'f' => '\x0c',
        'b' => '\x08',
        'r' => '\r',
        'a' => '\x07',
        'v' => '\x0b',
        '\\' => '\\',
        '"' => '"',
        _ => return None,
    })
}

const REGEX_META: &str = "^$.[]|()*+?";

/// How records are split into fields, derived from the `FS` text
#[derive(Debug, Clone)]
pub enum FieldSeparator {
    /// `FS = " "`: runs of blanks separate fields, edges are trimmed
    Space,
    /// `FS = ""`: every character is a field
    Null,
    /// Anything else, matched as a regular expression
    Regex(Regex),
}

impl Default for FieldSeparator {
    fn default() -> Self {
        FieldSeparator::Space
    }
}

impl FieldSeparator {
    /// Cast separator text for splitting. A single regex metacharacter is
    /// taken literally.
    pub fn new(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        let pattern = match (chars.next(), chars.next()) {
            (None, _) => return Ok(FieldSeparator::Null),
            (Some(' '), None) => return Ok(FieldSeparator::Space),
            (Some(c), None) if REGEX_META.contains(c) => regex::escape(text),
            _ => text.to_string(),
        };
        Regex::new(&pattern)
            .map(FieldSeparator::Regex)
            .map_err(|source| StartupError::FieldSeparator {
                pattern: text.to_string(),
                source,
            })
    }

    /// Pattern text for regex separators
    pub fn pattern(&self) -> Option<&str> {
        match self {
            FieldSeparator::Regex(re) => Some(re.as_str()),
            FieldSeparator::Space | FieldSeparator::Null => None,
        }
    }
}
