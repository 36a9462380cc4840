//! Syntax highlighting and code presentation for fern-docs.
//!
//! The highlighter is a single-pass tokenizer: source text is split into a
//! sequence of [`Token`]s, each tagged with a [`TokenCategory`], and markup is
//! rendered once per token. Token texts always concatenate back to the exact
//! input, and every character is HTML-escaped on output, so no markup produced
//! for one token can be mistaken for source by another.
//!
//! # Quick Start
//!
//! ```
//! use fd_highlight::highlight;
//!
//! let html = highlight("int x = 0xFF;", Some("c"));
//! assert_eq!(
//!     html,
//!     r#"<span class="token type">int</span> x = <span class="token number">0xFF</span>;"#
//! );
//!
//! // Unsupported languages pass through escaped.
//! assert_eq!(highlight("a < b", Some("python")), "a &lt; b");
//! ```

mod copy;
mod language;
mod lexer;
mod markup;
mod token;

pub use copy::{Clipboard, ClipboardError, CodePresentation, Notice, copy_code};
pub use language::Language;
pub use lexer::tokenize;
pub use markup::{escape_html, highlight, render_tokens};
pub use token::{Token, TokenCategory};
