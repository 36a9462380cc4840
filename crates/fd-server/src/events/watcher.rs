//! Content directory watcher.
//!
//! Watches the content directory, debounces changes, reloads the registry
//! and broadcasts `reload` events.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use fd_content::{ContentRegistry, PAGES_DIR};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::debouncer::{EventDebouncer, FsEvent, FsEventKind};
use super::{SITE_WIDE, SiteEvent};
use crate::state::AppState;

const DEFAULT_DEBOUNCE_MS: u64 = 100;
const DEFAULT_WATCH_PATTERNS: [&str; 2] = ["**/*.md", "**/*.yaml"];

/// Reloads content when files in the content directory change.
pub(crate) struct ContentWatcher {
    content_dir: PathBuf,
    watch_patterns: Vec<String>,
    state: Arc<AppState>,
    debounce: Duration,
}

impl ContentWatcher {
    pub(crate) fn new(
        content_dir: PathBuf,
        watch_patterns: Option<Vec<String>>,
        state: Arc<AppState>,
    ) -> Self {
        Self {
            content_dir,
            watch_patterns: watch_patterns.unwrap_or_else(|| {
                DEFAULT_WATCH_PATTERNS.iter().map(|p| (*p).to_owned()).collect()
            }),
            state,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Start watching.
    ///
    /// Spawns background tasks on the current tokio runtime. Watching stops
    /// when the returned watcher is dropped.
    pub(crate) fn start(self) -> Result<RecommendedWatcher, notify::Error> {
        let content_dir = self
            .content_dir
            .canonicalize()
            .unwrap_or_else(|_| self.content_dir.clone());
        let (tx, mut rx) = mpsc::channel::<Event>(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    let _ = tx.blocking_send(event);
                }
                Err(e) => tracing::warn!(error = %e, "File watcher error"),
            }
        })?;
        watcher.watch(&content_dir, RecursiveMode::Recursive)?;
        tracing::info!(dir = %content_dir.display(), "Watching content for changes");

        let debouncer = Arc::new(EventDebouncer::new(self.debounce));

        let recorder = Arc::clone(&debouncer);
        let record_dir = content_dir.clone();
        let patterns = self.watch_patterns;
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                record_event(&event, &record_dir, &patterns, &recorder);
            }
        });

        let state = self.state;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(50));
            loop {
                interval.tick().await;
                let events = debouncer.drain_ready();
                if !events.is_empty() {
                    reload_content(&state, &content_dir, &events);
                }
            }
        });

        Ok(watcher)
    }
}

fn record_event(event: &Event, content_dir: &Path, patterns: &[String], debouncer: &EventDebouncer) {
    let kind = match event.kind {
        EventKind::Create(_) => FsEventKind::Created,
        EventKind::Modify(_) => FsEventKind::Modified,
        EventKind::Remove(_) => FsEventKind::Removed,
        _ => return,
    };

    for path in &event.paths {
        if matches_patterns(path, content_dir, patterns) {
            debouncer.record(path.clone(), kind);
            tracing::debug!(path = %path.display(), ?kind, "Recorded content change");
        }
    }
}

/// Reload the registry once for a batch of changes and announce them.
///
/// A failed reload keeps the current registry active.
pub(crate) fn reload_content(state: &AppState, content_dir: &Path, events: &[FsEvent]) {
    let start = Instant::now();

    match ContentRegistry::load(content_dir) {
        Ok(registry) => state.replace_content(registry),
        Err(e) => {
            tracing::error!(error = %e, "Content reload failed, keeping previous content");
            return;
        }
    }

    for event in events {
        let path = page_url(&event.path, content_dir);
        tracing::info!(
            path = %path,
            kind = ?event.kind,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Content reloaded"
        );
        state.broadcast(SiteEvent::Reload { path });
    }
}

fn matches_patterns(path: &Path, content_dir: &Path, patterns: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(content_dir) else {
        return false;
    };
    let relative = relative.to_string_lossy();

    patterns
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .any(|pattern| pattern.matches(&relative))
}

/// URL of the page a changed file belongs to, or [`SITE_WIDE`].
fn page_url(file_path: &Path, content_dir: &Path) -> String {
    let Ok(relative) = file_path.strip_prefix(content_dir.join(PAGES_DIR)) else {
        return SITE_WIDE.to_owned();
    };
    if relative.extension().is_none_or(|e| e != "md") {
        return SITE_WIDE.to_owned();
    }

    let mut segments: Vec<_> = relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use fd_content::Variant;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::{AppState, SiteOptions};

    fn patterns() -> Vec<String> {
        DEFAULT_WATCH_PATTERNS.iter().map(|p| (*p).to_owned()).collect()
    }

    #[test]
    fn test_matches_patterns() {
        let dir = PathBuf::from("/site/content");

        assert!(matches_patterns(&dir.join("pages/index.md"), &dir, &patterns()));
        assert!(matches_patterns(&dir.join("navigation.yaml"), &dir, &patterns()));
        assert!(!matches_patterns(&dir.join("pages/logo.png"), &dir, &patterns()));
        assert!(!matches_patterns(&PathBuf::from("/elsewhere/a.md"), &dir, &patterns()));
    }

    #[test]
    fn test_page_url() {
        let dir = PathBuf::from("/site/content");

        assert_eq!(page_url(&dir.join("pages/index.md"), &dir), "/");
        assert_eq!(page_url(&dir.join("pages/quick-start.md"), &dir), "/quick-start");
        assert_eq!(page_url(&dir.join("pages/docs/index.md"), &dir), "/docs");
        assert_eq!(
            page_url(&dir.join("pages/docs/core-types.md"), &dir),
            "/docs/core-types"
        );
        assert_eq!(page_url(&dir.join("navigation.yaml"), &dir), SITE_WIDE);
    }

    fn write_site(dir: &Path, title: &str) {
        fs::create_dir_all(dir.join("pages")).unwrap();
        fs::write(dir.join("pages/index.md"), format!("# {title}")).unwrap();
    }

    #[test]
    fn test_reload_swaps_registry_and_broadcasts() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), "Before");
        let state = AppState::new(
            ContentRegistry::load(dir.path()).unwrap(),
            SiteOptions::default(),
        );
        let mut events = state.subscribe();

        write_site(dir.path(), "After");
        let change = FsEvent {
            path: dir.path().join("pages/index.md"),
            kind: FsEventKind::Modified,
        };
        reload_content(&state, dir.path(), &[change]);

        assert_eq!(state.content().resolve("/").page().title, "After");
        assert_eq!(
            events.try_recv().unwrap(),
            SiteEvent::Reload {
                path: "/".to_owned()
            }
        );
    }

    #[test]
    fn test_failed_reload_keeps_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), "Stable");
        let state = AppState::new(
            ContentRegistry::load(dir.path()).unwrap(),
            SiteOptions {
                default_variant: Variant::C,
                ..SiteOptions::default()
            },
        );
        let mut events = state.subscribe();

        fs::write(dir.path().join("navigation.yaml"), "- title: [broken").unwrap();
        let change = FsEvent {
            path: dir.path().join("navigation.yaml"),
            kind: FsEventKind::Created,
        };
        reload_content(&state, dir.path(), &[change]);

        assert_eq!(state.content().resolve("/").page().title, "Stable");
        assert!(events.try_recv().is_err());
    }
}
