//! Pattern builders for field-value grammars.
//!
//! Patterns are immutable trees assembled from the free functions in this
//! module. Building a pattern never allocates per-parse state; all matching
//! state lives on the stack of [`Pattern::match_text`].

use std::borrow::Cow;

/// An immutable, reentrant field-value grammar.
///
/// Built compositionally from the free functions in this module
/// ([`token`], [`concat`], [`or`], ...), then matched against decoded
/// field-value text with [`Pattern::match_text`].
///
/// A `Pattern` is cheap to clone (sub-trees are cloned, no matching state
/// exists) and safe to share across threads once built.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) node: Node,
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    /// Match exactly the given text
    Literal(Cow<'static, str>),
    /// One or more RFC 2616 token characters
    Token,
    /// One or more ASCII digits
    Digits,
    /// A double-quoted string with backslash escape pairs
    QuotedString,
    /// Match each part in sequence
    Concat(Vec<Pattern>),
    /// First matching alternative wins, subject to backtracking
    Or(Vec<Pattern>),
    /// Zero or more repetitions, greedy
    Any(Box<Pattern>),
    /// Named capture group
    Capture(Box<Pattern>, &'static str),
    /// The match must end at end-of-input
    Entire(Box<Pattern>),
}

/// Matches exactly the given text.
pub fn literal(text: impl Into<Cow<'static, str>>) -> Pattern {
    Pattern { node: Node::Literal(text.into()) }
}

/// Matches one or more HTTP `token` characters.
///
/// Per RFC 2616: any visible ASCII character that is not a separator
/// (`()<>@,;:\"/[]?={}`, space, or horizontal tab).
pub fn token() -> Pattern {
    Pattern { node: Node::Token }
}

/// Matches one or more ASCII digits.
pub fn digits() -> Pattern {
    Pattern { node: Node::Digits }
}

/// Matches an HTTP `quoted-string`: `"` qdtext / quoted-pair `"`.
///
/// A backslash escapes the character that follows it; the first unescaped
/// double quote closes the string.
pub fn quoted_string() -> Pattern {
    Pattern { node: Node::QuotedString }
}

/// Matches every part in sequence.
pub fn concat(parts: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern { node: Node::Concat(parts.into_iter().collect()) }
}

/// Matches the first alternative that lets the rest of the grammar succeed.
///
/// Alternatives are tried in declaration order; an earlier alternative is
/// abandoned (backtracked) if it blocks the remainder of the pattern.
pub fn or(alternatives: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern { node: Node::Or(alternatives.into_iter().collect()) }
}

/// Matches zero or more repetitions of `inner`, greedily.
///
/// Prefers more repetitions and backtracks to fewer when the remainder of
/// the pattern cannot otherwise succeed. Repetitions that consume no input
/// are not repeated, so a zero-width `inner` cannot loop.
pub fn any(inner: Pattern) -> Pattern {
    Pattern { node: Node::Any(Box::new(inner)) }
}

/// Wraps `inner` in a named capture group.
///
/// Every successful match of the group on the surviving parse is recorded;
/// a group inside a repetition therefore accumulates one capture per
/// repetition, reported left to right by [`Captures::all`].
///
/// [`Captures::all`]: crate::Captures::all
pub fn capture(inner: Pattern, name: &'static str) -> Pattern {
    Pattern { node: Node::Capture(Box::new(inner), name) }
}

/// Matches optional whitespace: zero or more spaces or horizontal tabs.
pub fn optional_spaces() -> Pattern {
    any(or([literal(" "), literal("\t")]))
}

/// Matches at least `min_count` occurrences of `element` separated by
/// commas, with optional whitespace around each comma.
///
/// # Panics
///
/// Panics if `min_count` is zero.
pub fn comma_separated_list(element: Pattern, min_count: usize) -> Pattern {
    assert!(min_count >= 1, "a comma separated list requires at least one element");

    let separator = concat([optional_spaces(), literal(","), optional_spaces()]);

    let mut parts = Vec::with_capacity(min_count + 1);
    parts.push(element.clone());
    for _ in 1..min_count {
        parts.push(concat([separator.clone(), element.clone()]));
    }
    parts.push(any(concat([separator, element])));
    concat(parts)
}

/// Anchors `inner` so the match must consume the entire input.
pub fn match_entire(inner: Pattern) -> Pattern {
    Pattern { node: Node::Entire(Box::new(inner)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_are_send_and_sync() {
        fn assert_shareable<T: Send + Sync>(_value: &T) {}

        let grammar = match_entire(comma_separated_list(capture(token(), "item"), 1));
        assert_shareable(&grammar);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn comma_separated_list_rejects_zero_min_count() {
        let _grammar = comma_separated_list(token(), 0);
    }
}
