//! Token type
//!
//!     A token records that a marker of some [ElementKind] starts at a given offset in the
//!     marked string. Offsets count Unicode scalar values (chars), not bytes, and refer to the
//!     string produced by substitution, never to the raw input.
//!
//!     Tokens are plain values. Stages hand token lists to each other by value and never
//!     mutate a list they received.

use super::elements::ElementKind;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: ElementKind,
    /// Char offset of the marker's first character in the marked string
    pub start: usize,
}

impl Token {
    pub fn new(kind: ElementKind, start: usize) -> Self {
        Token { kind, start }
    }

    /// Char offset one past the marker's last character
    pub fn end(&self) -> usize {
        // markers are ASCII
        self.start + self.kind.marker().len()
    }
}

/// Document order: by offset, then by catalog position
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.kind.position().cmp(&other.kind.position()))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.start)
    }
}
