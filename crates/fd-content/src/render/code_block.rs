//! Code block processing.
//!
//! Processors are consulted in registration order when a fenced block ends.
//! The first one returning something other than
//! [`ProcessResult::PassThrough`] decides what is written. Blocks nobody
//! claims are rendered by [`code_block_html`].

use std::collections::HashMap;
use std::fmt::Write;

use fd_highlight::{escape_html, highlight};

use crate::variant::{ParseVariantError, Variant};

/// Outcome of processing one code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the block with this HTML.
    Inline(String),
    /// Drop the block from the output.
    Omit,
    /// Render as a regular highlighted block.
    PassThrough,
}

/// Hook for special handling of fenced code blocks.
pub trait CodeBlockProcessor {
    /// Process one block.
    ///
    /// `language` is the first word of the fence info string, `attrs` the
    /// `key=value` pairs after it and `index` the zero-based position of the
    /// block in the document.
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult;
}

/// Keeps code samples of the selected variant and drops the others.
///
/// Blocks with a `variant=both` attribute, or a language that is not a
/// variant language, are always kept.
#[derive(Clone, Copy, Debug)]
pub struct VariantSampleProcessor {
    variant: Variant,
}

impl VariantSampleProcessor {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }
}

impl CodeBlockProcessor for VariantSampleProcessor {
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        _source: &str,
        _index: usize,
    ) -> ProcessResult {
        match sample_variant(language, attrs) {
            Ok(Some(variant)) if variant != self.variant => ProcessResult::Omit,
            _ => ProcessResult::PassThrough,
        }
    }
}

/// Variant a fenced block is a sample of, if any.
///
/// An explicit `variant=` attribute wins over the fence language and must be
/// `both` or a variant name.
pub(crate) fn sample_variant(
    language: &str,
    attrs: &HashMap<String, String>,
) -> Result<Option<Variant>, ParseVariantError> {
    match attrs.get("variant").map(String::as_str) {
        Some(tag) if tag.eq_ignore_ascii_case("both") => Ok(None),
        Some(tag) => tag.parse().map(Some),
        None => Ok(Variant::from_fence_language(language)),
    }
}

/// Split a fence info string into language and attributes.
///
/// Format: `language [key=value ...]`. Surrounding quotes on values are
/// stripped.
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let language = parts.next().unwrap_or("").to_owned();

    let attrs = parts
        .filter_map(|part| part.split_once('='))
        .map(|(key, value)| {
            let value = value.trim_matches('"').trim_matches('\'');
            (key.to_owned(), value.to_owned())
        })
        .collect();

    (language, attrs)
}

/// Default markup for a code block: highlighted source with a copy button.
pub(crate) fn code_block_html(language: Option<&str>, source: &str, out: &mut String) {
    let language_attr = language.map(escape_html).unwrap_or_default();

    write!(
        out,
        r#"<div class="code-block" data-language="{language_attr}"><button type="button" class="copy-button" aria-label="Copy code">Copy</button><pre><code"#
    )
    .unwrap();
    if language.is_some() {
        write!(out, r#" class="language-{language_attr}""#).unwrap();
    }
    out.push('>');
    out.push_str(&highlight(source, language));
    out.push_str("</code></pre></div>");
}
