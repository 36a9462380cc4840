//! Token types produced by the lexer.

use std::fmt;

/// Lexical category of a highlighted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Line or block comment, delimiters included.
    Comment,
    /// Reserved word (`return`, `class`, `sizeof`, ...).
    Keyword,
    /// Built-in or standard type name (`int`, `uint32_t`, ...).
    Type,
    /// Well-known library or framework name (`std`, `Colors`, ...).
    Identifier,
    /// Numeric literal including prefix and suffix.
    Number,
    /// Preprocessor directive (`#include`, `#define`, ...).
    Preprocessor,
    /// String literal or `#include` header name.
    String,
    /// Character literal.
    Char,
    /// Anything else: whitespace, punctuation, unknown identifiers.
    Plain,
}

impl TokenCategory {
    /// CSS class suffix used in rendered markup.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Preprocessor => "preprocessor",
            Self::String => "string",
            Self::Char => "char",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A categorized slice of the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Lexical category.
    pub category: TokenCategory,
    /// Exact source text covered by this token.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new token.
    #[must_use]
    pub fn new(category: TokenCategory, text: &'a str) -> Self {
        Self { category, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_are_distinct() {
        let all = [
            TokenCategory::Comment,
            TokenCategory::Keyword,
            TokenCategory::Type,
            TokenCategory::Identifier,
            TokenCategory::Number,
            TokenCategory::Preprocessor,
            TokenCategory::String,
            TokenCategory::Char,
            TokenCategory::Plain,
        ];
        let names: std::collections::HashSet<_> = all.iter().map(|c| c.class_name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_display_matches_class_name() {
        assert_eq!(TokenCategory::Preprocessor.to_string(), "preprocessor");
    }
}
