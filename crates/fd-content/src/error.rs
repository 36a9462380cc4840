//! Content loading errors.

use std::io;
use std::path::PathBuf;

use crate::variant::ParseVariantError;

/// Error loading or validating a content directory.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content directory does not exist.
    #[error("Content directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `navigation.yaml` is not valid.
    #[error("Invalid navigation file {}: {source}", path.display())]
    Navigation {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Two entries in one section share an id.
    #[error("Duplicate navigation id '{id}' in section '{section}'")]
    DuplicateId { section: String, id: String },
    /// An entry href is not site-absolute.
    #[error("Navigation entry '{id}' has invalid href '{href}': must start with '/'")]
    InvalidHref { id: String, href: String },
    /// An entry links to a page that does not exist.
    #[error("Navigation entry '{id}' links to missing page '{href}'")]
    MissingPage { id: String, href: String },
    /// More than one page source maps to the same route.
    #[error("Multiple pages map to route '/{id}'{}", source_list(.paths))]
    DuplicatePage { id: String, paths: Vec<PathBuf> },
    /// A code fence carries a `variant=` value that is not a known variant.
    #[error("Invalid code sample variant in {}: {source}", path.display())]
    InvalidSampleVariant {
        path: PathBuf,
        #[source]
        source: ParseVariantError,
    },
}

fn source_list(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return String::new();
    }
    let names: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
    format!(" ({})", names.join(", "))
}
