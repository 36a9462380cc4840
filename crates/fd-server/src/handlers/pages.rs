//! Pages API endpoint.
//!
//! Renders a page for the selected variant and returns JSON with metadata,
//! table of contents and HTML content.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use fd_content::{Resolved, TocEntry, Variant, normalize_path, render_page};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    meta: PageMeta,
    toc: Vec<TocEntry>,
    /// Rendered HTML content.
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    title: String,
    path: String,
    variant: Variant,
    /// Number of code samples shown for `variant`.
    sample_count: usize,
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_page_impl("", &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_page_impl(&path, &state, &headers)
}

fn get_page_impl(path: &str, state: &AppState, headers: &HeaderMap) -> Result<Response, ServerError> {
    let content = state.content();
    let page = match content.resolve(path) {
        Resolved::Page(page) => page,
        Resolved::NotFound(not_found) => {
            return Err(ServerError::PageNotFound {
                path: to_url_path(&normalize_path(path)),
                title: not_found.title.clone(),
            });
        }
    };

    let variant = state.variant();
    let rendered = render_page(page, variant);

    let etag = compute_etag(&state.options.version, variant, &rendered.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PageResponse {
        meta: PageMeta {
            title: rendered.title,
            path: page.url(),
            variant,
            sample_count: page.samples(variant).len(),
        },
        toc: rendered.toc,
        content: rendered.html,
    };

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version, variant and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, variant: Variant, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{variant}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(
            compute_etag("1.0.0", Variant::C, "content"),
            compute_etag("1.0.1", Variant::C, "content")
        );
    }

    #[test]
    fn test_compute_etag_includes_variant() {
        assert_ne!(
            compute_etag("1.0.0", Variant::C, "content"),
            compute_etag("1.0.0", Variant::Cpp, "content")
        );
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", Variant::Cpp, "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_page_meta_serialization() {
        let meta = PageMeta {
            title: "Core Types".to_owned(),
            path: "/docs/core-types".to_owned(),
            variant: Variant::C,
            sample_count: 3,
        };

        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["title"], "Core Types");
        assert_eq!(json["path"], "/docs/core-types");
        assert_eq!(json["variant"], "c");
        assert_eq!(json["sampleCount"], 3);
    }
}
