//! Page rendering.

pub(crate) mod code_block;
mod renderer;
mod state;

pub use code_block::{CodeBlockProcessor, ProcessResult, VariantSampleProcessor};
pub use renderer::{MarkdownRenderer, RenderResult, RenderedPage, parser_options, render_page};
pub use state::{TocEntry, slugify};
