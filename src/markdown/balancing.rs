//! Tag balancing
//!
//!     Symmetric kinds (Italic, Bold) open and close with the same marker, so a well formed
//!     stream holds an even number of each. When a kind has an odd count, its last occurrence
//!     in document order is the dangling one and is dropped. Earlier occurrences may still
//!     pair with an opener that follows them, so removing the last one disturbs the fewest
//!     existing pairs.
//!
//!     Removal goes by position in the list, not by value. Two tokens comparing equal would
//!     otherwise make the removed one ambiguous.
//!
//!     Non-symmetric kinds are never inspected. At most one token per symmetric kind is
//!     removed, and the relative order of everything else is kept.

use super::elements::{self, ElementKind};
use super::token::Token;
use super::tokenizer::{self, Tokenized};

impl Tokenized {
    /// Drop dangling symmetric tags, keeping the marked string as is
    pub fn balanced(self) -> Tokenized {
        let tokens = drop_dangling_symmetric_tags(&self.tokens);
        Tokenized {
            marked: self.marked,
            tokens,
        }
    }
}

/// Tokenize then balance, the way a renderer consumes the token stream
pub fn tokenize_balanced(raw: &str) -> Tokenized {
    tokenizer::tokenize(raw).balanced()
}

/// Drop the last occurrence of every symmetric kind that has an odd count
pub fn drop_dangling_symmetric_tags(tokens: &[Token]) -> Vec<Token> {
    let dangling = dangling_tag_positions(tokens);
    if dangling.is_empty() {
        return tokens.to_vec();
    }

    for &index in &dangling {
        let token = tokens[index];
        tracing::debug!(kind = %token.kind, start = token.start, "dropping dangling tag");
    }

    tokens
        .iter()
        .enumerate()
        .filter(|(index, _)| dangling.binary_search(index).is_err())
        .map(|(_, token)| *token)
        .collect()
}

/// Indices of the tokens [drop_dangling_symmetric_tags] would remove, ascending
pub fn dangling_tag_positions(tokens: &[Token]) -> Vec<usize> {
    let mut positions: Vec<usize> = elements::symmetric_kinds()
        .filter_map(|kind| dangling_position(tokens, kind))
        .collect();
    positions.sort_unstable();
    positions
}

/// True when every symmetric kind occurs an even number of times
pub fn is_balanced(tokens: &[Token]) -> bool {
    elements::symmetric_kinds().all(|kind| count_of(tokens, kind) % 2 == 0)
}

fn dangling_position(tokens: &[Token], kind: ElementKind) -> Option<usize> {
    if count_of(tokens, kind) % 2 == 0 {
        return None;
    }

    // last in document order: highest start, not last in the slice
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.kind == kind)
        .max_by_key(|(index, token)| (token.start, *index))
        .map(|(index, _)| index)
}

fn count_of(tokens: &[Token], kind: ElementKind) -> usize {
    tokens.iter().filter(|token| token.kind == kind).count()
}
