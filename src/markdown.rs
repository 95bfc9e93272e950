//! Markdown tokenization
//!
//!     Raw text flows one way through this module:
//!
//!         raw text → [tokenizer] → (marked string, tokens) → [balancing] → balanced tokens
//!
//!     The [elements] catalog drives the tokenizer. Only six element kinds plus line breaks are
//!     recognized; everything else passes through as plain text. The tokenizer never rejects
//!     input, and unbalanced emphasis is corrected afterwards by dropping the dangling tag.
//!
//!     [balancing::tokenize_balanced] runs both steps in one call, and [formats] serializes
//!     the result for tooling.

pub mod balancing;
pub mod elements;
pub mod formats;
pub mod token;
pub mod tokenizer;

pub use balancing::{drop_dangling_symmetric_tags, is_balanced, tokenize_balanced};
pub use elements::{ElementKind, ElementSpec, ELEMENTS};
pub use token::Token;
pub use tokenizer::{tokenize, Tokenized};
