//! # mdtok
//!
//! Tokenizer and tag balancer for a small markdown subset.
//!
//! Markdown elements are replaced by fixed markers such as `%H1%` or `%B%`, and every marker
//! occurrence becomes a token carrying its kind and offset. Paired markers (italic, bold) are
//! then balanced so a renderer never sees an unclosed tag.
//!
//! ```rust,ignore
//! use mdtok::markdown::{tokenize, drop_dangling_symmetric_tags};
//!
//! let tokenized = tokenize("#Title\nSome *bold* text");
//! let tokens = drop_dangling_symmetric_tags(&tokenized.tokens);
//! ```
//!
//! File Layout
//!
//! src/markdown
//!   ├── elements     The element catalog
//!   ├── token        Token value type
//!   ├── tokenizer    Substitution and extraction
//!   ├── balancing    Dangling tag removal
//!   └── formats      Output serialization
//! src/config         Layered configuration

pub mod config;
pub mod markdown;
