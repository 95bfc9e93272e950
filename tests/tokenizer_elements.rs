//! Tokenization tests for individual markdown elements
//!
//! Each case feeds a short source through the tokenizer and checks the marked string and the
//! token kinds. Longer documents are checked with inline snapshots of the `tokens` listing.

use mdtok::markdown::formats::FormatRegistry;
use mdtok::markdown::{tokenize, ElementKind, Token};
use rstest::rstest;

use ElementKind::*;

fn kinds(source: &str) -> Vec<ElementKind> {
    tokenize(source).tokens.iter().map(|token| token.kind).collect()
}

fn listing(source: &str) -> String {
    FormatRegistry::with_defaults()
        .serialize(&tokenize(source), "tokens")
        .expect("tokens format is registered")
}

#[rstest]
#[case::hash_mid_line("This is not a #Header Test.", "This is not a #Header Test.%BREAK%")]
#[case::double_hash_mid_line("This is not a ##Subheader.", "This is not a ##Subheader.%BREAK%")]
#[case::header1(
    "#Header Test.\nAnd this is a new line",
    "%H1%Header Test.%BREAK%And this is a new line%BREAK%"
)]
#[case::header2(
    "##Subheader...and it's\ngone!",
    "%H2%Subheader...and it's%BREAK%gone!%BREAK%"
)]
#[case::bold(
    "And this my dear friend, is *bold*...",
    "And this my dear friend, is %B%bold%B%...%BREAK%"
)]
#[case::italic(
    "And this is cursive **italics** ...",
    "And this is cursive %IT%italics%IT% ...%BREAK%"
)]
#[case::multi_word_italic(
    "And this is cursive **text and if everything is good then this as well** ...",
    "And this is cursive %IT%text and if everything is good then this as well%IT% ...%BREAK%"
)]
#[case::gt_mid_line("This is > not a quote.", "This is > not a quote.%BREAK%")]
#[case::quote(
    ">Quote test.\nAnd this is a new line",
    "%QT%Quote test.%BREAK%And this is a new line%BREAK%"
)]
#[case::quote_with_space(
    "> Quote test.\nAnd this is a new line",
    "%QT% Quote test.%BREAK%And this is a new line%BREAK%"
)]
#[case::list_items("* first\n* second", "%UL%first%BREAK%%UL%second%BREAK%")]
#[case::empty("", "%BREAK%")]
fn test_marked_string(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(tokenize(source).marked, expected);
}

#[rstest]
#[case::hash_mid_line("This is not a #Header Test.", vec![Break])]
#[case::header1("#Header Test.\nAnd this is a new line", vec![Header1, Break, Break])]
#[case::header2("##Subheader...and it's\ngone!", vec![Header2, Break, Break])]
#[case::bold("And this my dear friend, is *bold*...", vec![Bold, Bold, Break])]
#[case::italic("And this is cursive **italics** ...", vec![Italic, Italic, Break])]
#[case::quote(">Quote test.\nAnd this is a new line", vec![Quote, Break, Break])]
#[case::list_items("* first\n* second", vec![UnorderedListItem, Break, UnorderedListItem, Break])]
#[case::blank_lines("\n\n", vec![Break, Break, Break])]
fn test_token_kinds(#[case] source: &str, #[case] expected: Vec<ElementKind>) {
    assert_eq!(kinds(source), expected);
}

#[test]
fn test_nested_bold_in_italic_offsets() {
    let result = tokenize(
        "And this is cursive **text and if *everything is good* then this as well** ...",
    );
    assert_eq!(
        result.marked,
        "And this is cursive %IT%text and if %B%everything is good%B% then this as well%IT% ...%BREAK%"
    );
    assert_eq!(
        result.tokens,
        vec![
            Token::new(Italic, 20),
            Token::new(Bold, 36),
            Token::new(Bold, 57),
            Token::new(Italic, 78),
            Token::new(Break, result.marked.len() - "%BREAK%".len()),
        ]
    );
}

#[test]
fn test_quote_offsets() {
    let result = tokenize("> Quote test.\nAnd this is a new line");
    assert_eq!(
        result.tokens,
        vec![
            Token::new(Quote, 0),
            Token::new(Break, 16),
            Token::new(Break, result.marked.len() - "%BREAK%".len()),
        ]
    );
}

#[test]
fn test_all_elements_in_one_document() {
    let source = "#A test of how well tokenization works\n\n##We try this with a limited subset for now\nThings that should work are: #h1 headers, ##h2 headers, *bold modifiers*, and **italic modifiers**";
    let result = tokenize(source);

    insta::assert_snapshot!(
        result.marked,
        @"%H1%A test of how well tokenization works%BREAK%%BREAK%%H2%We try this with a limited subset for now%BREAK%Things that should work are: #h1 headers, ##h2 headers, %B%bold modifiers%B%, and %IT%italic modifiers%IT%%BREAK%"
    );
    insta::assert_snapshot!(listing(source), @r"
    H1@0
    BREAK@41
    BREAK@48
    H2@55
    BREAK@100
    B@163
    B@180
    IT@189
    IT@209
    BREAK@213
    ");
}

#[test]
fn test_mixed_block_elements() {
    insta::assert_snapshot!(listing("# Title\n> *quoted* text\n* item"), @r"
    H1@0
    BREAK@10
    QT@17
    B@22
    B@31
    BREAK@39
    UL@46
    BREAK@54
    ");
}
