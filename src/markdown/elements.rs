//! Element catalog
//!
//!     The static table of supported markdown elements. Each entry carries the pattern that
//!     recognizes the element in raw text, the marker that replaces it, the delimiter that closes
//!     it, and whether it must come in open/close pairs.
//!
//!     The table is pure data. Matching and substitution live in the
//!     [tokenizer](super::tokenizer), which walks [ELEMENTS] in declaration order.
//!
//! Processing Order
//!
//!     Order matters: substitution runs in declaration order and every stage sees the output of
//!     the previous one.
//!         - Header2 before Header1, so `##` is not consumed as two Header1 matches.
//!         - UnorderedListItem before Italic and Bold, so a leading `* ` becomes a list item.
//!         - Italic before Bold, so `**` is not consumed as two Bold matches.
//!         - Break last, so line-anchored patterns still see their line starts.
//!
//! Markers
//!
//!     | Kind              | Marker    | Anchoring              |
//!     |-------------------|-----------|------------------------|
//!     | Header1           | `%H1%`    | start of line          |
//!     | Header2           | `%H2%`    | start of line          |
//!     | UnorderedListItem | `%UL%`    | start of line          |
//!     | Italic            | `%IT%`    | anywhere, `**`         |
//!     | Bold              | `%B%`     | anywhere, `*`          |
//!     | Quote             | `%QT%`    | start of line, `>`     |
//!     | Break             | `%BREAK%` | line end, end of input |
//!
//!     Markers never contain `#`, `*`, `>` or line terminators, so no pattern can re-match a
//!     marker inserted by an earlier stage.

use std::fmt;

/// The kind of a markdown element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    /// `#` at line start
    Header1,
    /// `##` at line start
    Header2,
    /// `* ` at line start
    UnorderedListItem,
    /// `**text**`
    Italic,
    /// `*text*`
    Bold,
    /// `>` at line start
    Quote,
    /// Line terminator or end of input
    Break,
}

/// Where a pattern is allowed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// Only at the start of input or right after a line terminator
    LineStart,
    /// At any position
    Anywhere,
    /// At every line terminator, plus once at end of input
    LineEnd,
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    pub kind: ElementKind,
    /// Regex source. Line-start patterns carry their own `^`; [Anchoring::LineStart] only adds
    /// the multi-line CRLF flags when compiling
    pub pattern: &'static str,
    pub anchoring: Anchoring,
    pub marker: &'static str,
    pub delimiter: &'static str,
    /// Symmetric kinds must appear an even number of times
    pub symmetric: bool,
}

/// The catalog, in processing order
pub const ELEMENTS: &[ElementSpec] = &[
    ElementSpec {
        kind: ElementKind::Header2,
        pattern: r"^##",
        anchoring: Anchoring::LineStart,
        marker: "%H2%",
        delimiter: BREAK_MARKER,
        symmetric: false,
    },
    ElementSpec {
        kind: ElementKind::Header1,
        pattern: r"^#",
        anchoring: Anchoring::LineStart,
        marker: "%H1%",
        delimiter: BREAK_MARKER,
        symmetric: false,
    },
    // The whitespace after the asterisk is consumed with it, but never a line terminator
    ElementSpec {
        kind: ElementKind::UnorderedListItem,
        pattern: r"^\*[^\S\r\n]",
        anchoring: Anchoring::LineStart,
        marker: "%UL%",
        delimiter: BREAK_MARKER,
        symmetric: false,
    },
    ElementSpec {
        kind: ElementKind::Italic,
        pattern: r"\*\*",
        anchoring: Anchoring::Anywhere,
        marker: "%IT%",
        delimiter: "%IT%",
        symmetric: true,
    },
    ElementSpec {
        kind: ElementKind::Bold,
        pattern: r"\*",
        anchoring: Anchoring::Anywhere,
        marker: "%B%",
        delimiter: "%B%",
        symmetric: true,
    },
    ElementSpec {
        kind: ElementKind::Quote,
        pattern: r"^>",
        anchoring: Anchoring::LineStart,
        marker: "%QT%",
        delimiter: BREAK_MARKER,
        symmetric: false,
    },
    ElementSpec {
        kind: ElementKind::Break,
        pattern: r"\r|\n",
        anchoring: Anchoring::LineEnd,
        marker: BREAK_MARKER,
        delimiter: "",
        symmetric: false,
    },
];

/// Marker for [ElementKind::Break], also the delimiter of every block element
pub const BREAK_MARKER: &str = "%BREAK%";

/// Look up the catalog entry for a kind
pub fn spec(kind: ElementKind) -> &'static ElementSpec {
    // ELEMENTS covers every variant; position() is the canonical index
    &ELEMENTS[kind.position()]
}

/// All kinds in processing order
pub fn processing_order() -> impl Iterator<Item = ElementKind> {
    ELEMENTS.iter().map(|element| element.kind)
}

/// Kinds whose markers must pair up (Italic, Bold), in processing order
pub fn symmetric_kinds() -> impl Iterator<Item = ElementKind> {
    ELEMENTS
        .iter()
        .filter(|element| element.symmetric)
        .map(|element| element.kind)
}

impl ElementKind {
    /// Index of this kind in [ELEMENTS]
    pub fn position(self) -> usize {
        match self {
            ElementKind::Header2 => 0,
            ElementKind::Header1 => 1,
            ElementKind::UnorderedListItem => 2,
            ElementKind::Italic => 3,
            ElementKind::Bold => 4,
            ElementKind::Quote => 5,
            ElementKind::Break => 6,
        }
    }

    pub fn marker(self) -> &'static str {
        spec(self).marker
    }

    pub fn is_symmetric(self) -> bool {
        spec(self).symmetric
    }

    /// Reverse lookup from a marker string such as `%H1%`
    pub fn from_marker(marker: &str) -> Option<ElementKind> {
        ELEMENTS
            .iter()
            .find(|element| element.marker == marker)
            .map(|element| element.kind)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = self.marker();
        write!(f, "{}", &marker[1..marker.len() - 1])
    }
}
