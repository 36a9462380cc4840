//! Implementation variant selection.
//!
//! The JSON endpoints read and change the selector. The form endpoint backs
//! the toggle in the HTML views and redirects back to the page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use fd_content::Variant;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Response for GET and PUT /api/variant.
#[derive(Debug, Serialize)]
pub(crate) struct VariantResponse {
    variant: Variant,
    label: &'static str,
    /// Whether the request changed the selection.
    changed: bool,
}

impl VariantResponse {
    fn new(variant: Variant, changed: bool) -> Self {
        Self {
            variant,
            label: variant.label(),
            changed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariantRequest {
    variant: Variant,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariantForm {
    variant: Variant,
    #[serde(default)]
    redirect: Option<String>,
}

/// Handle GET /api/variant.
pub(crate) async fn get_variant(State(state): State<Arc<AppState>>) -> Json<VariantResponse> {
    Json(VariantResponse::new(state.variant(), false))
}

/// Handle PUT /api/variant.
pub(crate) async fn put_variant(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VariantRequest>,
) -> Json<VariantResponse> {
    let changed = state.set_variant(request.variant);
    Json(VariantResponse::new(request.variant, changed))
}

/// Handle POST /variant.
pub(crate) async fn post_variant(
    State(state): State<Arc<AppState>>,
    Form(form): Form<VariantForm>,
) -> Redirect {
    state.set_variant(form.variant);
    Redirect::to(&local_redirect(form.redirect.as_deref()))
}

/// Redirect target restricted to paths on this site.
fn local_redirect(target: Option<&str>) -> String {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_owned()
        }
        _ => "/".to_owned(),
    }
}
