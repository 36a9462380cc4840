//! Client configuration endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use fd_content::Variant;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    live_reload_enabled: bool,
    default_variant: Variant,
    version: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        live_reload_enabled: state.options.live_reload_enabled,
        default_variant: state.options.default_variant,
        version: state.options.version.clone(),
    })
}
