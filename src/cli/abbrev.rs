//! Abbreviation matching for comma-joined option groups
//!
//! A group such as `vers,random=42,,dump` is consumed one candidate at a
//! time. Each candidate ends at `,`, `=` or the end of the text and is
//! resolved against a keyword table by case-insensitive prefix match.

use std::ops::Range;

use tracing::trace;

use crate::cli::keywords::Keyword;

/// Result of resolving one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<C> {
    /// Matched nothing in the table
    Unknown,
    /// Matched exactly one keyword
    Code(C),
    /// Matched several keywords; `code` is the first match in table order
    Ambiguous {
        code: C,
        first: &'static str,
        second: &'static str,
    },
}

impl<C: Copy> Token<C> {
    /// The code processing continues with, if any
    pub fn code(&self) -> Option<C> {
        match *self {
            Token::Unknown => None,
            Token::Code(code) | Token::Ambiguous { code, .. } => Some(code),
        }
    }
}

/// One resolved candidate and where the scan stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption<C> {
    pub token: Token<C>,
    /// Byte range of the candidate name inside the group text
    pub span: Range<usize>,
    /// Offset of the byte that ended the candidate (`,`, `=` or end)
    pub next: usize,
}

/// Resolve the next candidate starting at byte offset `from`.
///
/// Leading commas are skipped. Returns `None` once only commas (or nothing)
/// remain.
pub fn parse_option<C: Copy>(
    table: &[Keyword<C>],
    text: &str,
    from: usize,
) -> Option<ParsedOption<C>> {
    let bytes = text.as_bytes();
    let mut start = from;
    while start < bytes.len() && bytes[start] == b',' {
        start += 1;
    }
    if start >= bytes.len() {
        return None;
    }

    let end = bytes[start..]
        .iter()
        .position(|&b| b == b',' || b == b'=')
        .map_or(bytes.len(), |pos| start + pos);
    let candidate = &bytes[start..end];

    let mut matches = table
        .iter()
        .filter(|kw| is_abbreviation(kw.name, candidate));
    let token = match (matches.next(), matches.next()) {
        (None, _) => Token::Unknown,
        (Some(only), None) => Token::Code(only.code),
        (Some(first), Some(second)) => Token::Ambiguous {
            code: first.code,
            first: first.name,
            second: second.name,
        },
    };
    trace!(candidate = %String::from_utf8_lossy(candidate), ?start, ?end, "resolved option candidate");

    Some(ParsedOption {
        token,
        span: start..end,
        next: end,
    })
}

/// True when `candidate` is a prefix of `full`, folding ASCII letters to
/// upper case. `full` is expected to be upper case already.
pub fn is_abbreviation(full: &str, candidate: &[u8]) -> bool {
    let full = full.as_bytes();
    candidate.len() <= full.len()
        && candidate
            .iter()
            .zip(full)
            .all(|(&c, &f)| c.to_ascii_uppercase() == f)
}

/// `=` followed by a usable value (not empty, not another `=` or `,`)
pub fn have_value(text: &str, at: usize) -> bool {
    let bytes = text.as_bytes();
    bytes.get(at) == Some(&b'=')
        && bytes
            .get(at + 1)
            .is_some_and(|&b| b != b'=' && b != b',')
}

/// Advance to the next `,` or the end of the text
pub fn skip_value(text: &str, at: usize) -> usize {
    text.as_bytes()[at..]
        .iter()
        .position(|&b| b == b',')
        .map_or(text.len(), |pos| at + pos)
}

/// C `atoi`: optional whitespace, optional sign, leading digits, else 0
pub fn atoi(text: &str) -> i64 {
    let trimmed = text.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::keywords::{WOption, W_OPTIONS};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Reed,
        Blue,
    }

    const COLORS: &[Keyword<Color>] = &[
        Keyword { code: Color::Red, name: "RED" },
        Keyword { code: Color::Reed, name: "REED" },
        Keyword { code: Color::Blue, name: "BLUE" },
    ];

    fn resolve(text: &str) -> Token<WOption> {
        parse_option(W_OPTIONS, text, 0).map(|p| p.token).unwrap()
    }

    #[test]
    fn test_unique_prefix_resolves() {
        assert_eq!(resolve("v"), Token::Code(WOption::Version));
        assert_eq!(resolve("VeRs"), Token::Code(WOption::Version));
        assert_eq!(resolve("posix_space"), Token::Code(WOption::PosixSpace));
        assert_eq!(resolve("ex"), Token::Code(WOption::Exec));
        assert_eq!(resolve("sprintf"), Token::Code(WOption::Sprintf));
    }

    #[test]
    fn test_no_match_is_unknown() {
        assert_eq!(resolve("nope"), Token::Unknown);
        // Longer than the keyword is never a prefix
        assert_eq!(resolve("dumpster"), Token::Unknown);
        // Only letters fold; '-' is not '_'
        assert_eq!(resolve("posix-space"), Token::Unknown);
    }

    #[test]
    fn test_ambiguous_keeps_first_match() {
        let parsed = parse_option(COLORS, "re", 0).unwrap();
        assert_eq!(
            parsed.token,
            Token::Ambiguous { code: Color::Red, first: "RED", second: "REED" }
        );
        assert_eq!(parsed.token.code(), Some(Color::Red));
        assert_eq!(parse_option(COLORS, "ree", 0).unwrap().token, Token::Code(Color::Reed));
        assert_eq!(parse_option(COLORS, "b", 0).unwrap().token, Token::Code(Color::Blue));
    }

    #[test]
    fn test_empty_candidate_before_value_matches_everything() {
        let parsed = parse_option(COLORS, "=1", 0).unwrap();
        assert!(matches!(parsed.token, Token::Ambiguous { first: "RED", second: "REED", .. }));
        assert_eq!(parsed.next, 0);
    }

    #[test]
    fn test_candidate_stops_at_equals_and_comma() {
        let parsed = parse_option(W_OPTIONS, "random=42,dump", 0).unwrap();
        assert_eq!(parsed.token, Token::Code(WOption::Random));
        assert_eq!(parsed.span, 0..6);
        assert_eq!(parsed.next, 6);

        let parsed = parse_option(W_OPTIONS, "random=42,dump", 9).unwrap();
        assert_eq!(parsed.token, Token::Code(WOption::Dump));
        assert_eq!(parsed.span, 10..14);
    }

    #[test]
    fn test_empty_spans_are_skipped() {
        let parsed = parse_option(W_OPTIONS, ",,,dump", 0).unwrap();
        assert_eq!(parsed.token, Token::Code(WOption::Dump));
        assert_eq!(parsed.span.start, 3);
        assert!(parse_option(W_OPTIONS, "dump,,", 4).is_none());
        assert!(parse_option(W_OPTIONS, "", 0).is_none());
    }

    #[test]
    fn test_have_value() {
        assert!(have_value("random=42", 6));
        assert!(!have_value("random=", 6));
        assert!(!have_value("random=,dump", 6));
        assert!(!have_value("random==3", 6));
        assert!(!have_value("random", 6));
    }

    #[test]
    fn test_skip_value() {
        assert_eq!(skip_value("random=42,dump", 6), 9);
        assert_eq!(skip_value("random=42", 6), 9);
    }

    #[test]
    fn test_atoi() {
        assert_eq!(atoi("42"), 42);
        assert_eq!(atoi("  -17abc"), -17);
        assert_eq!(atoi("+8"), 8);
        assert_eq!(atoi("x9"), 0);
        assert_eq!(atoi("42,dump"), 42);
        assert_eq!(atoi(""), 0);
    }
}
