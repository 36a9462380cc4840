//! `fd copy` command implementation.

use std::path::PathBuf;

use clap::Args;
use fd_config::{CliSettings, Config};
use fd_content::{ContentPage, ContentRegistry, ParseVariantError, Resolved, Variant};
use fd_highlight::{Clipboard, ClipboardError, CodePresentation, copy_code};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the copy command.
#[derive(Args)]
pub(crate) struct CopyArgs {
    /// Page path (e.g. /quick-start).
    path: String,

    /// Variant whose sample to copy (default: configured default variant).
    #[arg(long)]
    variant: Option<Variant>,

    /// Zero-based index of the sample on the page.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Path to configuration file (default: auto-discover fern-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

impl CopyArgs {
    /// Execute the copy command.
    ///
    /// A clipboard failure is reported as a warning notice and is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to load or the page has no
    /// such sample.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = ContentRegistry::load(&config.content_resolved.dir)?;

        let variant = match self.variant {
            Some(variant) => variant,
            None => config
                .site
                .default_variant
                .parse()
                .map_err(|e: ParseVariantError| CliError::Validation(e.to_string()))?,
        };

        let page = match registry.resolve(&self.path) {
            Resolved::Page(page) => page,
            Resolved::NotFound(_) => {
                return Err(CliError::Validation(format!("No page at '{}'", self.path)));
            }
        };
        let presentation = select_sample(page, variant, self.index)?;

        let mut clipboard = SystemClipboard;
        let notice = copy_code(&presentation, &mut clipboard);
        if notice.is_failure() {
            output.warning(&notice.to_string());
        } else {
            output.success(&format!(
                "{notice} ({} sample {} from {})",
                variant.label(),
                self.index,
                page.url()
            ));
        }

        Ok(())
    }
}

/// Pick the `index`-th sample of `variant` on `page`.
fn select_sample(page: &ContentPage, variant: Variant, index: usize) -> Result<CodePresentation, CliError> {
    let samples = page.samples(variant);
    let source = samples.get(index).ok_or_else(|| {
        CliError::Validation(format!(
            "Page '{}' has {} {} sample(s), no sample at index {index}",
            page.url(),
            samples.len(),
            variant.label()
        ))
    })?;

    Ok(CodePresentation::new(source.clone(), Some(variant.as_str())))
}

/// System clipboard backed by `arboard`.
///
/// Opened per write; a missing display surfaces as
/// [`ClipboardError::Unavailable`].
struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const QUICK_START: &str = "\
# Quick Start

```c
fern_init();
```

```c
fern_start();
```

```cpp
Fern::initialize();
```
";

    fn page() -> ContentPage {
        ContentPage::from_markdown("quick-start", QUICK_START)
    }

    #[test]
    fn test_select_sample() {
        let page = page();

        let first = select_sample(&page, Variant::C, 0).unwrap();
        assert_eq!(first.source(), "fern_init();\n");
        assert_eq!(first.language(), Some("c"));

        let second = select_sample(&page, Variant::C, 1).unwrap();
        assert_eq!(second.source(), "fern_start();\n");

        let cpp = select_sample(&page, Variant::Cpp, 0).unwrap();
        assert_eq!(cpp.source(), "Fern::initialize();\n");
    }

    #[test]
    fn test_select_sample_out_of_range() {
        let err = select_sample(&page(), Variant::Cpp, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Page '/quick-start' has 1 C++ sample(s), no sample at index 1"
        );
    }
}
