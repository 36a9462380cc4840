//! Navigation API endpoint.
//!
//! Returns the sidebar sections visible under the selected variant.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use fd_content::{NavigationSection, Variant};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Variant the sections were filtered for.
    variant: Variant,
    /// Visible sections in display order.
    sections: Vec<NavigationSection>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    let variant = state.variant();
    let sections = state.content().visible_navigation(variant);
    Json(NavigationResponse { variant, sections })
}
