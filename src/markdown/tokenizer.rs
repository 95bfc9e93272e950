//! Tokenizer
//!
//!     Turns raw text into a marked string plus an ordered token list. Tokenization runs in
//!     two phases:
//!
//!         1. Substitution. Every catalog pattern, in catalog order, replaces its matches in the
//!            working string with the element's marker. Each stage sees the previous stage's
//!            output, which is what disambiguates `##` from `#` and `**` from `*`. This is an
//!            ordered pipeline on purpose, not one combined regex.
//!
//!         2. Extraction. Each kind's marker is located in the fully substituted string, one
//!            token per occurrence, and the merged list is sorted by offset.
//!
//!     Break is special in phase 1: every `\r` and every `\n` becomes a Break marker, and one
//!     more Break marker is always appended for end of input. The marked string therefore
//!     always ends with a Break, even for empty input.
//!
//!     Nothing here can fail. Unbalanced emphasis is left for the
//!     [balancing](super::balancing) stage.

use super::elements::{Anchoring, ElementKind, ElementSpec, ELEMENTS};
use super::token::Token;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Catalog patterns, compiled once, in processing order
static COMPILED_ELEMENTS: Lazy<Vec<(&'static ElementSpec, Regex)>> = Lazy::new(|| {
    ELEMENTS
        .iter()
        .map(|element| {
            let source = match element.anchoring {
                // multi-line, with `\r` and `\n` both counting as line terminators
                Anchoring::LineStart => format!("(?mR){}", element.pattern),
                Anchoring::Anywhere | Anchoring::LineEnd => element.pattern.to_string(),
            };
            let regex = Regex::new(&source).expect("catalog pattern must compile");
            (element, regex)
        })
        .collect()
});

/// Output of [tokenize]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tokenized {
    /// Input with every recognized element replaced by its marker
    pub marked: String,
    /// Tokens in document order
    pub tokens: Vec<Token>,
}

impl Tokenized {
    pub fn into_parts(self) -> (String, Vec<Token>) {
        (self.marked, self.tokens)
    }

    /// Tokens of a single kind, in document order
    pub fn tokens_of(&self, kind: ElementKind) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |token| token.kind == kind)
    }
}

/// Tokenize raw markdown text
pub fn tokenize(raw: &str) -> Tokenized {
    let marked = substitute(raw);
    let tokens = extract(&marked);

    tracing::debug!(
        input_len = raw.len(),
        marked_len = marked.len(),
        tokens = tokens.len(),
        "tokenized input"
    );

    Tokenized { marked, tokens }
}

/// Phase 1: replace every element with its marker
pub fn substitute(raw: &str) -> String {
    let mut working = raw.to_string();

    for (element, regex) in COMPILED_ELEMENTS.iter() {
        working = regex
            .replace_all(&working, NoExpand(element.marker))
            .into_owned();

        if element.anchoring == Anchoring::LineEnd {
            working.push_str(element.marker);
        }

        tracing::trace!(kind = %element.kind, len = working.len(), "substituted");
    }

    working
}

/// Phase 2: one token per marker occurrence, sorted by offset
///
/// Markers are located by byte offset and converted to char offsets in a single forward pass.
pub fn extract(marked: &str) -> Vec<Token> {
    let mut located: Vec<(usize, ElementKind)> = ELEMENTS
        .iter()
        .flat_map(|element| {
            marked
                .match_indices(element.marker)
                .map(move |(byte_offset, _)| (byte_offset, element.kind))
        })
        .collect();

    // stable, so ties keep catalog order
    located.sort_by_key(|(byte_offset, _)| *byte_offset);

    let mut byte_cursor = 0;
    let mut char_cursor = 0;
    located
        .into_iter()
        .map(|(byte_offset, kind)| {
            char_cursor += marked[byte_cursor..byte_offset].chars().count();
            byte_cursor = byte_offset;
            Token::new(kind, char_cursor)
        })
        .collect()
}
