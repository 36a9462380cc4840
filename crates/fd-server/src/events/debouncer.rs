//! Per-path debouncing of filesystem events.
//!
//! Editors often emit several events for one save. Events for the same path
//! are coalesced and released once no new event arrived for the debounce
//! duration.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Kind of filesystem change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FsEventKind {
    Created,
    Modified,
    Removed,
}

/// A debounced filesystem event.
#[derive(Clone, Debug)]
pub(crate) struct FsEvent {
    pub path: PathBuf,
    pub kind: FsEventKind,
}

struct PendingEvent {
    kind: FsEventKind,
    deadline: Instant,
}

/// Thread-safe event debouncer.
pub(crate) struct EventDebouncer {
    pending: Mutex<HashMap<PathBuf, PendingEvent>>,
    debounce_duration: Duration,
}

impl EventDebouncer {
    pub fn new(debounce_duration: Duration) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            debounce_duration,
        }
    }

    /// Record an event, coalescing with any pending event for the same path.
    pub fn record(&self, path: PathBuf, kind: FsEventKind) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let deadline = Instant::now() + self.debounce_duration;

        match pending.entry(path) {
            Entry::Vacant(entry) => {
                entry.insert(PendingEvent { kind, deadline });
            }
            Entry::Occupied(mut entry) => match coalesce(entry.get().kind, kind) {
                Some(kind) => {
                    let event = entry.get_mut();
                    event.kind = kind;
                    event.deadline = deadline;
                }
                None => {
                    entry.remove();
                }
            },
        }
    }

    /// Remove and return events whose deadline has passed.
    pub fn drain_ready(&self) -> Vec<FsEvent> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        pending
            .extract_if(|_, event| event.deadline <= now)
            .map(|(path, event)| FsEvent {
                path,
                kind: event.kind,
            })
            .collect()
    }
}

/// Combine a pending event kind with a new one.
///
/// `None` means the two cancel out (created then removed).
#[allow(clippy::match_same_arms)]
fn coalesce(existing: FsEventKind, new: FsEventKind) -> Option<FsEventKind> {
    use FsEventKind::{Created, Modified, Removed};

    match (existing, new) {
        (Created, Created | Modified) => Some(Created),
        (Created, Removed) => None,
        (Modified, Created) => Some(Created),
        (Modified, Modified) => Some(Modified),
        (Modified | Removed, Removed) => Some(Removed),
        (Removed, Created) => Some(Modified),
        (Removed, Modified) => Some(Removed),
    }
}
