//! Content model for the Fern documentation site.
//!
//! A content directory holds `navigation.yaml` and a `pages/` tree of
//! markdown files. [`ContentRegistry::load`] reads and validates both;
//! [`render_page`] turns a page into HTML for one implementation
//! [`Variant`], dropping the code samples of the other.
//!
//! # Example
//!
//! ```
//! use fd_content::{ContentPage, Variant, render_page};
//!
//! let page = ContentPage::from_markdown(
//!     "quick-start",
//!     "# Quick Start\n\n```c\nfern_start();\n```\n\n```cpp\nFern::startRenderLoop();\n```\n",
//! );
//! let rendered = render_page(&page, Variant::C);
//! assert!(rendered.html.contains("fern_start"));
//! assert!(!rendered.html.contains("startRenderLoop"));
//! ```

mod error;
mod navigation;
mod page;
mod registry;
mod render;
mod router;
mod scanner;
mod variant;

pub use error::ContentError;
pub use navigation::{NavigationEntry, NavigationSection, filter_navigation};
pub use page::ContentPage;
pub use registry::{ContentRegistry, NAVIGATION_FILENAME, NOT_FOUND_PAGE, PAGES_DIR};
pub use render::{
    CodeBlockProcessor, MarkdownRenderer, ProcessResult, RenderResult, RenderedPage, TocEntry,
    VariantSampleProcessor, parser_options, render_page, slugify,
};
pub use router::{Resolved, normalize_path};
pub use variant::{ParseVariantError, SelectorState, Variant, VariantTag};
