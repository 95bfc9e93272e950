//! Format registry for token stream serialization
//!
//! Each format implements the [Formatter] trait and can be registered with [FormatRegistry].
//! Built-in formats:
//!
//! - `marked`: the substituted string as is
//! - `tokens`: one `KIND@offset` line per token
//! - `json`: pretty-printed JSON of the whole [Tokenized]
//! - `yaml`: YAML of the whole [Tokenized]

use crate::markdown::tokenizer::Tokenized;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for token stream formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tokens", "json")
    fn name(&self) -> &str;

    fn serialize(&self, tokenized: &Tokenized) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct MarkedFormatter;

impl Formatter for MarkedFormatter {
    fn name(&self) -> &str {
        "marked"
    }

    fn serialize(&self, tokenized: &Tokenized) -> Result<String, FormatError> {
        Ok(format!("{}\n", tokenized.marked))
    }

    fn description(&self) -> &str {
        "Input with elements replaced by their markers"
    }
}

pub struct TokenListFormatter;

impl Formatter for TokenListFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn serialize(&self, tokenized: &Tokenized) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in &tokenized.tokens {
            out.push_str(&token.to_string());
            out.push('\n');
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "One KIND@offset line per token"
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tokenized: &Tokenized) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokenized)
            .map(|json| json + "\n")
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Marked string and tokens as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tokenized: &Tokenized) -> Result<String, FormatError> {
        serde_yaml::to_string(tokenized)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Marked string and tokens as YAML"
    }
}

/// Registry of token stream formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a token stream using the specified format
    pub fn serialize(&self, tokenized: &Tokenized, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tokenized)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(MarkedFormatter);
        registry.register(TokenListFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
