//! Event-tracking state used while rendering a page.

use std::collections::HashMap;

use pulldown_cmark::Alignment;
use serde::Serialize;

/// Buffer for the code block currently being read.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    info: String,
    buffer: String,
}

impl CodeBlockState {
    /// Start a block with its raw fence info string.
    pub fn start(&mut self, info: &str) {
        self.active = true;
        self.info = info.to_owned();
        self.buffer.clear();
    }

    /// Finish the block and return `(info, source)`.
    pub fn end(&mut self) -> (String, String) {
        self.active = false;
        (
            std::mem::take(&mut self.info),
            std::mem::take(&mut self.buffer),
        )
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Column cursor for the table being rendered.
#[derive(Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    column: usize,
    header: bool,
}

impl TableState {
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        *self = Self {
            alignments,
            ..Self::default()
        };
    }

    /// Enter or leave the header row.
    pub fn set_header(&mut self, header: bool) {
        self.header = header;
        self.column = 0;
    }

    pub fn start_row(&mut self) {
        self.column = 0;
    }

    /// Element name and attributes for the cell at the cursor, then advance.
    pub fn open_cell(&mut self) -> (&'static str, &'static str) {
        let style = match self.alignments.get(self.column) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        };
        self.column += 1;
        (self.cell_tag(), style)
    }

    pub fn cell_tag(&self) -> &'static str {
        if self.header { "th" } else { "td" }
    }
}

/// Alt text capture for an image and its pending `(src, title)`.
#[derive(Default)]
pub(crate) struct ImageState {
    pending: Option<(String, String)>,
    alt_text: String,
}

impl ImageState {
    pub fn start(&mut self, src: String, title: String) {
        self.pending = Some((src, title));
        self.alt_text.clear();
    }

    /// Finish the image and return `(src, title, alt)`.
    pub fn end(&mut self) -> Option<(String, String, String)> {
        let (src, title) = self.pending.take()?;
        Some((src, title, std::mem::take(&mut self.alt_text)))
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level (2-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// Heading ids, the first H1 title and the table of contents.
#[derive(Default)]
pub(crate) struct HeadingState {
    title: Option<String>,
    current_level: Option<u8>,
    text: String,
    html: String,
    toc: Vec<TocEntry>,
    id_counts: HashMap<String, usize>,
}

/// A completed heading ready to be written out.
pub(crate) struct CompletedHeading {
    pub level: u8,
    pub id: String,
    pub html: String,
}

impl HeadingState {
    pub fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    pub fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Finish the current heading, assigning a unique id.
    ///
    /// The first H1 becomes the title; every other heading goes into the TOC.
    pub fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);
        let id = self.generate_id(&text);

        if level == 1 {
            if self.title.is_none() {
                self.title = Some(text.trim().to_owned());
            }
        } else {
            self.toc.push(TocEntry {
                level,
                title: text.trim().to_owned(),
                id: id.clone(),
            });
        }

        Some(CompletedHeading { level, id, html })
    }

    fn generate_id(&mut self, text: &str) -> String {
        let mut base_id = slugify(text);
        if base_id.is_empty() {
            base_id.push_str("section");
        }
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }

    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    pub fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert heading text to an anchor slug.
///
/// Lowercases ASCII alphanumerics and collapses whitespace, dashes and
/// underscores into single dashes. Everything else is dropped.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Color Constants"), "color-constants");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Point & Size  "), "point-size");
        assert_eq!(slugify("fern_draw_rect"), "fern-draw-rect");
        assert_eq!(slugify("C++ Classes"), "c-classes");
    }

    #[test]
    fn test_heading_ids_are_unique() {
        let mut state = HeadingState::default();
        for _ in 0..3 {
            state.start_heading(2);
            state.push_text("Example");
            state.complete_heading();
        }
        let ids: Vec<_> = state.take_toc().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["example", "example-1", "example-2"]);
    }

    #[test]
    fn test_first_h1_is_title_not_toc() {
        let mut state = HeadingState::default();
        state.start_heading(1);
        state.push_text("Core Types");
        let heading = state.complete_heading().unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.id, "core-types");

        state.start_heading(3);
        state.push_text("Point");
        state.complete_heading();

        assert_eq!(state.take_title(), Some("Core Types".to_owned()));
        let toc = state.take_toc();
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].level, 3);
    }

    #[test]
    fn test_symbol_only_heading_gets_fallback_id() {
        let mut state = HeadingState::default();
        state.start_heading(2);
        state.push_text("++");
        assert_eq!(state.complete_heading().unwrap().id, "section");
    }

    #[test]
    fn test_table_state_cells() {
        let mut state = TableState::default();
        state.start(vec![Alignment::Left, Alignment::None, Alignment::Right]);
        state.set_header(true);
        assert_eq!(state.open_cell(), ("th", r#" style="text-align:left""#));
        assert_eq!(state.open_cell(), ("th", ""));
        assert_eq!(state.open_cell(), ("th", r#" style="text-align:right""#));

        state.set_header(false);
        state.start_row();
        assert_eq!(state.open_cell(), ("td", r#" style="text-align:left""#));
        assert_eq!(state.cell_tag(), "td");
    }

    #[test]
    fn test_image_state() {
        let mut state = ImageState::default();
        assert!(!state.is_active());
        state.start("logo.png".to_owned(), String::new());
        state.push_str("Fern logo");
        assert_eq!(
            state.end(),
            Some(("logo.png".to_owned(), String::new(), "Fern logo".to_owned()))
        );
        assert!(!state.is_active());
    }
}
