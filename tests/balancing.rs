//! Tag balancing tests
//!
//! Hand-built token lists check which occurrence is dropped; full sources check balancing
//! through the tokenizer.

use mdtok::markdown::balancing::dangling_tag_positions;
use mdtok::markdown::{
    drop_dangling_symmetric_tags, is_balanced, tokenize, tokenize_balanced, ElementKind, Token,
};
use rstest::rstest;

use ElementKind::*;

fn tokens(pairs: &[(ElementKind, usize)]) -> Vec<Token> {
    pairs
        .iter()
        .map(|&(kind, start)| Token::new(kind, start))
        .collect()
}

#[rstest]
#[case::dangling_at_end(
    &[(Bold, 0), (Bold, 10), (Bold, 15), (Break, 16)],
    &[(Bold, 0), (Bold, 10), (Break, 16)]
)]
#[case::dangling_surrounded_by_text(
    &[(Bold, 0), (Bold, 10), (Bold, 15), (Break, 25)],
    &[(Bold, 0), (Bold, 10), (Break, 25)]
)]
#[case::even_bold_unchanged(
    &[(Bold, 0), (Bold, 10), (Bold, 15), (Bold, 20), (Break, 25)],
    &[(Bold, 0), (Bold, 10), (Bold, 15), (Bold, 20), (Break, 25)]
)]
#[case::single_italic(
    &[(Italic, 3), (Break, 12)],
    &[(Break, 12)]
)]
#[case::both_kinds_dangling(
    &[(Italic, 0), (Bold, 6), (Italic, 10), (Italic, 20), (Break, 30)],
    &[(Italic, 0), (Italic, 10), (Break, 30)]
)]
#[case::headers_ignored(
    &[(Header1, 0), (Header1, 10), (Header1, 20), (Break, 30)],
    &[(Header1, 0), (Header1, 10), (Header1, 20), (Break, 30)]
)]
fn test_drop_dangling(
    #[case] input: &[(ElementKind, usize)],
    #[case] expected: &[(ElementKind, usize)],
) {
    let result = drop_dangling_symmetric_tags(&tokens(input));
    assert_eq!(result, tokens(expected));
    assert!(is_balanced(&result));
}

#[test]
fn test_dangling_positions_point_at_last_occurrence() {
    let input = tokens(&[(Bold, 0), (Italic, 4), (Bold, 8), (Bold, 12), (Break, 20)]);
    assert_eq!(dangling_tag_positions(&input), vec![1, 3]);
}

#[test]
fn test_balanced_source_keeps_all_tokens() {
    let tokenized = tokenize("*a* and **b** and *c*");
    let balanced = drop_dangling_symmetric_tags(&tokenized.tokens);
    assert_eq!(balanced, tokenized.tokens);
}

#[test]
fn test_unclosed_bold_in_source() {
    let result = tokenize_balanced("*dangling and *closed* text");
    let expected = tokens(&[(Bold, 0), (Bold, 16), (Break, 33)]);
    assert_eq!(result.marked, "%B%dangling and %B%closed%B% text%BREAK%");
    assert_eq!(result.tokens, expected);
}

#[test]
fn test_interleaved_italic_and_bold() {
    let result = tokenize_balanced("**a *b** c");
    let expected = tokens(&[(Italic, 0), (Italic, 10), (Break, 16)]);
    assert_eq!(result.tokens, expected);
}

#[test]
fn test_tokenize_balanced_matches_manual_balancing() {
    let source = "**x *y** z\n> q *";
    let tokenized = tokenize(source);
    let expected = drop_dangling_symmetric_tags(&tokenized.tokens);

    let result = tokenize_balanced(source);
    assert_eq!(result.marked, tokenized.marked);
    assert_eq!(result.tokens, expected);
}
