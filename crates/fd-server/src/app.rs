//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::assets;
use crate::events;
use crate::handlers;
use crate::middleware::security::with_security_headers;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .route(
            "/api/variant",
            get(handlers::variant::get_variant).put(handlers::variant::put_variant),
        );

    let view_routes = Router::new()
        .route("/", get(handlers::views::root_view))
        .route("/variant", post(handlers::variant::post_variant))
        .route("/assets/app.js", get(assets::app_js))
        .route("/assets/style.css", get(assets::style_css))
        .route("/{*path}", get(handlers::views::page_view));

    let router = Router::new()
        .merge(api_routes)
        .route("/ws/events", get(events::ws_handler))
        .merge(view_routes);

    with_security_headers(router).with_state(state)
}
