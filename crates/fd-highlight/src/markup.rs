//! HTML markup for highlighted tokens.

use std::fmt::Write;

use crate::language::Language;
use crate::lexer::tokenize;
use crate::token::{Token, TokenCategory};

/// Highlight `source` as HTML.
///
/// When `language` names a supported language the source is tokenized and
/// each non-plain token is wrapped in `<span class="token {category}">`.
/// Otherwise the source is returned HTML-escaped and otherwise untouched.
#[must_use]
pub fn highlight(source: &str, language: Option<&str>) -> String {
    match language.and_then(Language::from_tag) {
        Some(language) => render_tokens(&tokenize(source, language)),
        None => escape_html(source),
    }
}

/// Render tokens as HTML, one span per non-plain token.
#[must_use]
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let capacity = tokens.iter().map(|t| t.text.len() + 32).sum();
    let mut out = String::with_capacity(capacity);

    for token in tokens {
        if token.category == TokenCategory::Plain {
            out.push_str(&escape_html(token.text));
        } else {
            write!(
                out,
                r#"<span class="token {}">{}</span>"#,
                token.category.class_name(),
                escape_html(token.text)
            )
            .unwrap();
        }
    }

    out
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
