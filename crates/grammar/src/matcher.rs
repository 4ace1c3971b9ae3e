//! The backtracking match engine behind [`Pattern::match_text`].
//!
//! The engine walks the pattern tree with an explicit continuation: each
//! node matches some input starting at a position, then asks the
//! continuation whether the rest of the grammar can succeed from the end
//! position. Returning `false` from the continuation makes the node try its
//! next candidate (a shorter token, a later alternative, fewer
//! repetitions), which yields standard leftmost/greedy semantics.
//!
//! Captures are recorded into a shared log as branches commit and removed
//! again when a branch is abandoned, so only captures on the surviving
//! parse are reported.

use std::ops::Range;

use tracing::trace;

use crate::pattern::{Node, Pattern};

/// The outcome of matching a [`Pattern`] against field-value text.
///
/// A failed match is an ordinary value, not an error: callers that follow
/// the permissive header-processing posture map [`MatchOutcome::NoMatch`]
/// to an empty typed value instead of propagating a failure.
#[derive(Debug)]
pub enum MatchOutcome<'t> {
    /// The text matched; named captures are available for extraction
    Matched(Captures<'t>),
    /// The text did not match the grammar
    NoMatch,
}

impl MatchOutcome<'_> {
    /// Returns true if the text matched the grammar
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Named captures extracted from a successful match.
///
/// Captures are ordered by their start position in the input, so a group
/// that matched repeatedly (for example one element of a comma separated
/// list) reports its occurrences left to right.
#[derive(Debug)]
pub struct Captures<'t> {
    captures: Vec<(&'static str, &'t str)>,
}

impl<'t> Captures<'t> {
    fn new(text: &'t str, log: CaptureLog) -> Self {
        Self { captures: log.into_iter().map(|(name, range)| (name, &text[range])).collect() }
    }

    /// Returns every capture of the named group, in left-to-right order.
    pub fn all<'c>(&'c self, name: &'c str) -> impl Iterator<Item = &'t str> + 'c {
        self.captures.iter().filter(move |(captured, _)| *captured == name).map(|(_, text)| *text)
    }

    /// Returns the first capture of the named group, if the group matched.
    pub fn first(&self, name: &str) -> Option<&'t str> {
        self.captures.iter().find(|(captured, _)| *captured == name).map(|(_, text)| *text)
    }

    /// Returns the total number of recorded captures across all groups.
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Returns true if no group captured anything.
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

type CaptureLog = Vec<(&'static str, Range<usize>)>;

/// The continuation invoked with the end position of a candidate match.
///
/// Returning `false` rejects the candidate and asks for the next one.
type Next<'k> = dyn FnMut(usize, &mut CaptureLog) -> bool + 'k;

impl Pattern {
    /// Matches this grammar against `text`, anchored at the start.
    ///
    /// An unanchored pattern accepts any matching prefix; wrap the grammar
    /// in [`match_entire`](crate::match_entire) to require the match to
    /// consume the whole input.
    ///
    /// # Returns
    /// - [`MatchOutcome::Matched`] with the named captures of the surviving
    ///   parse
    /// - [`MatchOutcome::NoMatch`] if no parse succeeds
    pub fn match_text<'t>(&self, text: &'t str) -> MatchOutcome<'t> {
        let mut log = CaptureLog::new();
        let matched = self.node.run(text, 0, &mut log, &mut |_, _| true);

        if matched {
            log.sort_by_key(|(_, range)| range.start);
            trace!(captures = log.len(), "field grammar matched");
            MatchOutcome::Matched(Captures::new(text, log))
        } else {
            MatchOutcome::NoMatch
        }
    }
}

impl Node {
    /// Matches this node at `pos`, then defers to the continuation `next`.
    ///
    /// Invariant: on returning `false` the capture log is exactly as the
    /// caller left it; every abandoned branch removes the captures it
    /// recorded.
    fn run(&self, text: &str, pos: usize, log: &mut CaptureLog, next: &mut Next<'_>) -> bool {
        match self {
            Node::Literal(expected) => {
                let expected: &str = expected;
                text[pos..].starts_with(expected) && next(pos + expected.len(), log)
            }

            Node::Token => run_char_class(text, pos, is_token_char, log, next),

            Node::Digits => run_char_class(text, pos, is_digit_char, log, next),

            Node::QuotedString => match quoted_string_end(text, pos) {
                Some(end) => next(end, log),
                None => false,
            },

            Node::Concat(parts) => run_sequence(parts, text, pos, log, next),

            Node::Or(alternatives) => {
                for alternative in alternatives {
                    if alternative.node.run(text, pos, log, &mut *next) {
                        return true;
                    }
                }
                false
            }

            Node::Any(inner) => run_repeat(inner, text, pos, log, next),

            Node::Capture(inner, name) => inner.node.run(text, pos, log, &mut |end, log| {
                log.push((*name, pos..end));
                if next(end, log) {
                    true
                } else {
                    log.pop();
                    false
                }
            }),

            Node::Entire(inner) => inner.node.run(text, pos, log, &mut |end, log| end == text.len() && next(end, log)),
        }
    }
}

/// Matches each part in order, threading the continuation through the tail.
fn run_sequence(parts: &[Pattern], text: &str, pos: usize, log: &mut CaptureLog, next: &mut Next<'_>) -> bool {
    match parts.split_first() {
        None => next(pos, log),
        Some((head, rest)) => {
            head.node.run(text, pos, log, &mut |end, log| run_sequence(rest, text, end, log, &mut *next))
        }
    }
}

/// Greedy zero-or-more repetition: try one more occurrence first, fall back
/// to stopping here.
///
/// An occurrence that consumes no input is not repeated, so patterns like
/// `any(optional_spaces())` terminate.
fn run_repeat(inner: &Pattern, text: &str, pos: usize, log: &mut CaptureLog, next: &mut Next<'_>) -> bool {
    if inner.node.run(text, pos, log, &mut |end, log| end > pos && run_repeat(inner, text, end, log, &mut *next)) {
        return true;
    }
    next(pos, log)
}

/// Matches one or more bytes of a character class, longest first.
///
/// Accepted bytes are ASCII only, so every candidate end position is a
/// character boundary.
fn run_char_class(
    text: &str,
    pos: usize,
    accepts: fn(u8) -> bool,
    log: &mut CaptureLog,
    next: &mut Next<'_>,
) -> bool {
    let available = text.as_bytes()[pos..].iter().take_while(|byte| accepts(**byte)).count();

    for taken in (1..=available).rev() {
        if next(pos + taken, log) {
            return true;
        }
    }
    false
}

const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={} \t";

/// RFC 2616 `token` characters: visible ASCII minus the separators.
fn is_token_char(byte: u8) -> bool {
    byte > 0x1f && byte < 0x7f && !SEPARATORS.contains(&byte)
}

fn is_digit_char(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Finds the end of a quoted-string starting at `pos`, if one is there.
///
/// The opening quote must be at `pos`; a backslash escapes the following
/// character; the first unescaped double quote closes the string. Returns
/// the position one past the closing quote.
fn quoted_string_end(text: &str, pos: usize) -> Option<usize> {
    let mut chars = text[pos..].char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => return Some(pos + offset + 1),
            '\\' => {
                chars.next()?;
            }
            _ => {}
        }
    }
    None
}
