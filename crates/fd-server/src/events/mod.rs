//! Site events pushed to connected clients.
//!
//! Variant changes and content reloads are broadcast on one channel and
//! forwarded over the `/ws/events` websocket.

mod debouncer;
mod watcher;
mod websocket;

use fd_content::Variant;
use serde::Serialize;

pub(crate) use watcher::ContentWatcher;
pub(crate) use websocket::ws_handler;

/// Path reported when a change affects the whole site (navigation).
pub(crate) const SITE_WIDE: &str = "*";

/// Event sent to websocket clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum SiteEvent {
    /// The selected implementation variant changed.
    Variant { variant: Variant },
    /// Content changed; `path` is the page URL or [`SITE_WIDE`].
    Reload { path: String },
}
