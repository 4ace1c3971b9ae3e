//! Composable regular grammars for HTTP field values.
//!
//! This crate provides the grammar-combinator layer used by typed header
//! fields: small pattern builders that compose into one immutable grammar
//! per field type, plus a matching operation that extracts named captures.
//!
//! # Design
//!
//! A [`Pattern`] is an immutable tree built once (typically into a static)
//! and shared read-only across every message that carries the field. The
//! builders mirror the syntactic units of RFC 2616 field values:
//!
//! - [`token`] / [`quoted_string`] / [`digits`] / [`literal`]: leaf patterns
//! - [`concat`] / [`or`] / [`any`]: sequencing, alternation, greedy repetition
//! - [`capture`]: named capture group; repeated matches accumulate
//! - [`comma_separated_list`]: the `#rule` list form with optional
//!   whitespace around separators
//! - [`match_entire`]: anchor requiring the match to consume the whole input
//!
//! Matching follows standard regular-grammar semantics: leftmost match,
//! greedy repetition with backtracking, and named captures reported in
//! left-to-right order of their start positions.
//!
//! # Example
//!
//! ```
//! use field_grammar::{capture, comma_separated_list, match_entire, token, MatchOutcome};
//!
//! let grammar = match_entire(comma_separated_list(capture(token(), "item"), 1));
//!
//! match grammar.match_text("gzip, deflate") {
//!     MatchOutcome::Matched(captures) => {
//!         let items: Vec<&str> = captures.all("item").collect();
//!         assert_eq!(items, ["gzip", "deflate"]);
//!     }
//!     MatchOutcome::NoMatch => unreachable!(),
//! }
//! ```
//!
//! Matching is a pure, bounded, synchronous computation; [`Pattern`] values
//! are `Send + Sync` and safe for concurrent read-only matching.

mod matcher;
mod pattern;

pub use matcher::Captures;
pub use matcher::MatchOutcome;

pub use pattern::Pattern;
pub use pattern::{any, capture, comma_separated_list, concat, digits, literal, match_entire, optional_spaces, or, quoted_string, token};
