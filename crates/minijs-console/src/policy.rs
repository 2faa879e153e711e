//! Accept/reject policy applied before any parsing or evaluation.
//!
//! Two passes:
//!
//! 1. A character allowlist that bounds the input alphabet. This is not
//!    a grammar check; it only rejects characters the expression
//!    grammar could never use.
//! 2. A case-sensitive substring denylist of dangerous names. It also
//!    rejects harmless identifiers that merely contain a banned word
//!    (`refetch`, `evaluate`). That over-matching is part of the
//!    console's observable contract and must not be tightened.

use thiserror::Error;

/// Names whose presence anywhere in the input rejects it.
pub const DENIED_KEYWORDS: &[&str] = &[
    "eval",
    "function",
    "Function",
    "setTimeout",
    "setInterval",
    "fetch",
    "XMLHttpRequest",
];

/// Symbols permitted beyond ASCII letters, digits and whitespace.
const ALLOWED_SYMBOLS: &[char] = &[
    '+', '-', '*', '/', '(', ')', '.', '\'', '"', '_', '$', ',', '[', ']', '{', '}', ':', ';',
    '!', '=', '<', '>', '&', '|', '?',
];

/// A policy rejection. The display text is the exact message shown in
/// the console log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    /// A character outside the allowed alphabet.
    #[error("Code contains disallowed characters")]
    DisallowedCharacters,
    /// A denied keyword appeared as a substring.
    #[error("Potentially dangerous code detected")]
    DangerousKeyword,
}

/// Check one line of input against both policy passes.
///
/// The character filter runs first, so input failing both reports the
/// character violation.
pub fn check(text: &str) -> Result<(), PolicyViolation> {
    if !text.chars().all(is_allowed_char) {
        return Err(PolicyViolation::DisallowedCharacters);
    }
    if DENIED_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return Err(PolicyViolation::DangerousKeyword);
    }
    Ok(())
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || ALLOWED_SYMBOLS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_arithmetic_passes() {
        assert_eq!(check("5 + 3"), Ok(()));
        assert_eq!(check("\"Hello \" + 'World'"), Ok(()));
        assert_eq!(check("[1, 2, 3].length"), Ok(()));
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(check("5 % 3"), Err(PolicyViolation::DisallowedCharacters));
        assert_eq!(check("x => x"), Ok(())); // '=' and '>' are each allowed
        assert_eq!(check("a\\b"), Err(PolicyViolation::DisallowedCharacters));
        assert_eq!(check("foo#bar"), Err(PolicyViolation::DisallowedCharacters));
    }

    #[test]
    fn test_denied_keywords_are_substring_matched() {
        for keyword in DENIED_KEYWORDS {
            assert_eq!(
                check(&format!("1 + {keyword}")),
                Err(PolicyViolation::DangerousKeyword),
                "keyword '{keyword}'"
            );
        }
        // Harmless identifiers containing a banned word are rejected too.
        assert_eq!(check("refetch"), Err(PolicyViolation::DangerousKeyword));
        assert_eq!(check("evaluate"), Err(PolicyViolation::DangerousKeyword));
    }

    #[test]
    fn test_denylist_is_case_sensitive() {
        assert_eq!(check("EVAL"), Ok(()));
        assert_eq!(check("Fetch"), Ok(()));
    }

    #[test]
    fn test_character_filter_runs_first() {
        assert_eq!(
            check("eval @ 1"),
            Err(PolicyViolation::DisallowedCharacters)
        );
    }
}
