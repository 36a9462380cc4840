//! Markdown to HTML renderer.

use std::fmt::Write;

use fd_highlight::escape_html;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use super::code_block::{
    CodeBlockProcessor, ProcessResult, VariantSampleProcessor, code_block_html, parse_fence_info,
};
use super::state::{CodeBlockState, HeadingState, ImageState, TableState, TocEntry};
use crate::page::ContentPage;
use crate::variant::Variant;

/// Markdown extensions enabled for all content.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Result of rendering markdown events.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Text of the first H1, if any.
    pub title: Option<String>,
    /// Headings below the title.
    pub toc: Vec<TocEntry>,
}

/// A page rendered for one variant.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedPage {
    /// Page body HTML.
    pub html: String,
    /// Page title.
    pub title: String,
    /// Table of contents.
    pub toc: Vec<TocEntry>,
    /// Variant the page was rendered for.
    pub variant: Variant,
}

/// Render `page` showing only the code samples of `variant`.
#[must_use]
pub fn render_page(page: &ContentPage, variant: Variant) -> RenderedPage {
    let parser = Parser::new_ext(&page.body, parser_options());
    let result = MarkdownRenderer::new()
        .with_processor(VariantSampleProcessor::new(variant))
        .render(parser);

    RenderedPage {
        html: result.html,
        title: page.title.clone(),
        toc: result.toc,
        variant,
    }
}

/// Event-driven HTML renderer.
///
/// Custom code block handling is added via
/// [`with_processor`](Self::with_processor).
pub struct MarkdownRenderer {
    output: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    processors: Vec<Box<dyn CodeBlockProcessor>>,
    code_block_index: usize,
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::default(),
            processors: Vec::new(),
            code_block_index: 0,
        }
    }

    /// Add a code block processor. Processors are consulted in order.
    #[must_use]
    pub fn with_processor<P: CodeBlockProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Render markdown events.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            title: self.heading.take_title(),
            toc: self.heading.take_toc(),
        }
    }

    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.push_inline(&html),
            Event::SoftBreak => self.push_inline("\n"),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => {
                let checked = if checked { " checked" } else { "" };
                write!(self.output, r#"<input type="checkbox" disabled{checked}> "#).unwrap();
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => self.heading.start_heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info,
                    CodeBlockKind::Indented => "".into(),
                };
                self.code.start(&info);
            }
            Tag::List(Some(1)) => self.output.push_str("<ol>"),
            Tag::List(Some(start)) => write!(self.output, r#"<ol start="{start}">"#).unwrap(),
            Tag::List(None) => self.output.push_str("<ul>"),
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.set_header(true);
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let (cell, style) = self.table.open_cell();
                write!(self.output, "<{cell}{style}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                let link = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => self.image.start(dest_url.into_string(), title.into_string()),
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => {
                if let Some(heading) = self.heading.complete_heading() {
                    write!(
                        self.output,
                        r#"<h{level} id="{id}">{html}</h{level}>"#,
                        level = heading.level,
                        id = heading.id,
                        html = heading.html.trim()
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => self.finish_code_block(),
            TagEnd::List(ordered) => self.output.push_str(if ordered { "</ol>" } else { "</ul>" }),
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.set_header(false);
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => write!(self.output, "</{}>", self.table.cell_tag()).unwrap(),
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                if let Some((src, title, alt)) = self.image.end() {
                    let mut img = format!(
                        r#"<img src="{}" alt="{}""#,
                        escape_html(&src),
                        escape_html(&alt)
                    );
                    if !title.is_empty() {
                        write!(img, r#" title="{}""#, escape_html(&title)).unwrap();
                    }
                    img.push('>');
                    self.push_inline(&img);
                }
            }
            _ => {}
        }
    }

    fn finish_code_block(&mut self) {
        let (info, source) = self.code.end();
        let (language, attrs) = parse_fence_info(&info);
        let index = self.code_block_index;
        self.code_block_index += 1;

        for processor in &mut self.processors {
            match processor.process(&language, &attrs, &source, index) {
                ProcessResult::Inline(html) => {
                    self.output.push_str(&html);
                    return;
                }
                ProcessResult::Omit => return,
                ProcessResult::PassThrough => {}
            }
        }

        let language = (!language.is_empty()).then_some(language.as_str());
        code_block_html(language, &source, &mut self.output);
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
            return;
        }
        if self.heading.is_active() {
            self.heading.push_text(code);
        }
        let html = format!("<code>{}</code>", escape_html(code));
        self.push_inline(&html);
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
