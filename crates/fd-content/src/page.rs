//! Documentation pages.

use std::collections::BTreeMap;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::render::code_block::{parse_fence_info, sample_variant};
use crate::render::parser_options;
use crate::variant::{ParseVariantError, Variant};

/// A documentation page loaded from markdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPage {
    /// Normalized path without leading or trailing slash (`""` for home).
    pub id: String,
    /// Page title.
    pub title: String,
    /// Markdown source.
    pub body: String,
    /// Raw code samples per variant, in document order.
    pub code_samples: BTreeMap<Variant, Vec<String>>,
}

impl ContentPage {
    /// Build a page from markdown.
    ///
    /// The title is the first H1, falling back to the last path segment of
    /// `id` and finally to `"Home"`. Fences with an unknown `variant=` value
    /// are not samples; use [`parse`](Self::parse) to reject them.
    #[must_use]
    pub fn from_markdown(id: impl Into<String>, body: impl Into<String>) -> Self {
        let id = id.into();
        let body = body.into();
        let scan = scan_markdown(&body);
        Self::from_scan(id, body, scan)
    }

    /// Build a page from markdown, rejecting code fences whose `variant=`
    /// attribute is not `both`, `c`, `cpp` or `c++`.
    ///
    /// # Errors
    ///
    /// Returns the first unknown variant value in document order.
    pub fn parse(
        id: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ParseVariantError> {
        let id = id.into();
        let body = body.into();
        let mut scan = scan_markdown(&body);
        if let Some(err) = scan.invalid_variant.take() {
            return Err(err);
        }
        Ok(Self::from_scan(id, body, scan))
    }

    fn from_scan(id: String, body: String, scan: MarkdownScan) -> Self {
        let title = scan.title.unwrap_or_else(|| title_from_id(&id));

        Self {
            id,
            title,
            body,
            code_samples: scan.samples,
        }
    }

    /// Site-absolute URL of the page.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/{}", self.id)
    }

    /// Code samples for `variant`.
    #[must_use]
    pub fn samples(&self, variant: Variant) -> &[String] {
        self.code_samples
            .get(&variant)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

struct MarkdownScan {
    title: Option<String>,
    samples: BTreeMap<Variant, Vec<String>>,
    invalid_variant: Option<ParseVariantError>,
}

fn scan_markdown(body: &str) -> MarkdownScan {
    let mut title: Option<String> = None;
    let mut in_h1 = false;
    let mut h1_text = String::new();
    let mut sample: Option<(Variant, String)> = None;
    let mut samples: BTreeMap<Variant, Vec<String>> = BTreeMap::new();
    let mut invalid_variant = None;

    for event in Parser::new_ext(body, parser_options()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => {
                in_h1 = true;
                h1_text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_h1 => {
                in_h1 = false;
                let text = h1_text.trim();
                if !text.is_empty() {
                    title = Some(text.to_owned());
                }
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let (language, attrs) = parse_fence_info(&info);
                sample = match sample_variant(&language, &attrs) {
                    Ok(variant) => variant.map(|v| (v, String::new())),
                    Err(err) => {
                        invalid_variant.get_or_insert(err);
                        None
                    }
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((variant, source)) = sample.take() {
                    samples.entry(variant).or_default().push(source);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, source)) = sample.as_mut() {
                    source.push_str(&text);
                } else if in_h1 {
                    h1_text.push_str(&text);
                }
            }
            _ => {}
        }
    }

    MarkdownScan {
        title,
        samples,
        invalid_variant,
    }
}

fn title_from_id(id: &str) -> String {
    let Some(segment) = id.rsplit('/').next().filter(|s| !s.is_empty()) else {
        return "Home".to_owned();
    };

    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
