//! Page discovery by filesystem walking.
//!
//! Only locates markdown files and derives their URL paths. Reading and
//! parsing happens in the registry.

use std::fs;
use std::path::{Path, PathBuf};

/// Location of a page source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageRef {
    /// URL path (e.g. `""`, `"docs"`, `"docs/core-types"`).
    pub url_path: String,
    /// Markdown file.
    pub content_path: PathBuf,
}

/// Walks a pages directory and collects [`PageRef`]s.
pub(crate) struct Scanner {
    pages_dir: PathBuf,
}

impl Scanner {
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
        }
    }

    /// Scan for pages, sorted by URL path.
    ///
    /// Returns an empty list if the directory doesn't exist.
    pub fn scan(&self) -> Vec<PageRef> {
        let mut refs = Vec::new();
        if self.pages_dir.is_dir() {
            scan_directory(&self.pages_dir, "", &mut refs);
        }
        refs.sort_by(|a, b| a.url_path.cmp(&b.url_path));
        refs
    }
}

fn scan_directory(dir_path: &Path, url_prefix: &str, refs: &mut Vec<PageRef>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        tracing::warn!(path = %dir_path.display(), "Failed to read pages directory");
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            let child_url = if url_prefix.is_empty() {
                name
            } else {
                format!("{url_prefix}/{name}")
            };
            scan_directory(&path, &child_url, refs);
        } else if path.extension().is_some_and(|e| e == "md") {
            refs.push(PageRef {
                url_path: file_path_to_url(Path::new(&name), url_prefix),
                content_path: path,
            });
        }
    }
}

/// Convert a markdown file name to a URL path under `base`.
///
/// - `index.md` -> `base`
/// - `guide.md` -> `base/guide`
pub(crate) fn file_path_to_url(rel_path: &Path, base: &str) -> String {
    let path_str = rel_path.to_string_lossy();
    let without_ext = path_str.strip_suffix(".md").unwrap_or(&path_str);

    let path_part = if without_ext == "index" {
        ""
    } else if let Some(without_index) = without_ext.strip_suffix("/index") {
        without_index
    } else {
        without_ext
    };

    match (base.is_empty(), path_part.is_empty()) {
        (true, _) => path_part.to_owned(),
        (false, true) => base.to_owned(),
        (false, false) => format!("{base}/{path_part}"),
    }
}
