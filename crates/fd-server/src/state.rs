//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::{Arc, PoisonError, RwLock};

use fd_content::{ContentRegistry, SelectorState, Variant};
use tokio::sync::broadcast;

use crate::events::SiteEvent;

/// Capacity of the site event channel.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Static site settings carried by the state.
#[derive(Clone, Debug)]
pub(crate) struct SiteOptions {
    pub title: String,
    pub default_variant: Variant,
    pub live_reload_enabled: bool,
    pub version: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "Fern Documentation".to_owned(),
            default_variant: Variant::default(),
            live_reload_enabled: false,
            version: String::new(),
        }
    }
}

/// Application state shared across all handlers.
pub(crate) struct AppState {
    content: RwLock<Arc<ContentRegistry>>,
    selector: RwLock<SelectorState>,
    events: broadcast::Sender<SiteEvent>,
    pub(crate) options: SiteOptions,
}

impl AppState {
    /// Create state starting at the configured default variant.
    pub(crate) fn new(registry: ContentRegistry, options: SiteOptions) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            content: RwLock::new(Arc::new(registry)),
            selector: RwLock::new(SelectorState::new(options.default_variant)),
            events,
            options,
        }
    }

    /// Current content snapshot.
    pub(crate) fn content(&self) -> Arc<ContentRegistry> {
        let content = self.content.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&content)
    }

    /// Swap in freshly loaded content.
    pub(crate) fn replace_content(&self, registry: ContentRegistry) {
        let mut content = self.content.write().unwrap_or_else(PoisonError::into_inner);
        *content = Arc::new(registry);
    }

    /// Currently selected variant.
    pub(crate) fn variant(&self) -> Variant {
        self.selector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current()
    }

    /// Select `variant`, broadcasting a `variant` event if it changed.
    pub(crate) fn set_variant(&self, variant: Variant) -> bool {
        let changed = self
            .selector
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(variant);

        if changed {
            tracing::info!(%variant, "Implementation variant changed");
            self.broadcast(SiteEvent::Variant { variant });
        }
        changed
    }

    /// Send an event to all subscribers. Having none is not an error.
    pub(crate) fn broadcast(&self, event: SiteEvent) {
        let _ = self.events.send(event);
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.events.subscribe()
    }
}
