//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod variant;
pub(crate) mod views;

/// Convert a page id (without leading slash) to a URL path.
pub(crate) fn to_url_path(id: &str) -> String {
    if id.is_empty() {
        "/".to_owned()
    } else {
        format!("/{id}")
    }
}
