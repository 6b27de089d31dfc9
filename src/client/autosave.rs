//! # Autosave Coordinator
//!
//! Turns a stream of edits to one note into debounced save calls and
//! tracks where the note stands.
//!
//! ## States
//!
//! - `Saved` - the server has the latest content
//! - `Unsaved` - there are edits the server has not seen
//! - `Saving` - a save request is in flight
//! - `SaveFailed` - the last save failed and no newer edit is pending
//!
//! ## Transitions
//!
//! - edit → `Unsaved`, restarts the debounce timer
//! - timer fires, `flush()`, or `retry()` → `Saving`
//! - save succeeds → `Saved`, or `Unsaved` if edits arrived meanwhile
//! - save fails → `SaveFailed`, or `Unsaved` if edits arrived meanwhile
//! - from `SaveFailed`, the next edit or `retry()` saves again
//!
//! Saves for one note never overlap: each save holds an async mutex for
//! the whole request, so writes reach the server in edit order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

use crate::client::api::ClientError;
use crate::client::scheduler::DebounceTimer;
use crate::shared::AppConfig;

/// Something that can persist a note's content
#[async_trait]
pub trait NoteSaver: Send + Sync {
    async fn save(&self, note_id: Uuid, content: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl<T: NoteSaver + ?Sized> NoteSaver for Arc<T> {
    async fn save(&self, note_id: Uuid, content: &str) -> Result<(), ClientError> {
        (**self).save(note_id, content).await
    }
}

/// Save status of one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveState {
    Saved,
    Unsaved,
    Saving,
    SaveFailed(String),
}

impl SaveState {
    /// Label for a status line
    pub fn label(&self) -> &str {
        match self {
            Self::Saved => "Saved",
            Self::Unsaved => "Unsaved",
            Self::Saving => "Saving...",
            Self::SaveFailed(_) => "Save failed",
        }
    }
}

struct Inner<S> {
    note_id: Uuid,
    saver: S,
    content: Mutex<String>,
    /// Bumped on every edit
    revision: AtomicU64,
    /// Revision the server last acknowledged
    saved_revision: AtomicU64,
    save_lock: tokio::sync::Mutex<()>,
    state: watch::Sender<SaveState>,
}

impl<S: NoteSaver> Inner<S> {
    fn snapshot(&self) -> (String, u64) {
        let content = self.content.lock().unwrap_or_else(|e| e.into_inner());
        (content.clone(), self.revision.load(Ordering::SeqCst))
    }

    async fn save_now(&self) -> Result<(), ClientError> {
        let _guard = self.save_lock.lock().await;

        let (content, revision) = self.snapshot();
        if revision == self.saved_revision.load(Ordering::SeqCst) {
            self.state.send_replace(SaveState::Saved);
            return Ok(());
        }

        self.state.send_replace(SaveState::Saving);
        let result = self.saver.save(self.note_id, &content).await;
        let newer_edits = self.revision.load(Ordering::SeqCst) != revision;

        match &result {
            Ok(()) => {
                self.saved_revision.store(revision, Ordering::SeqCst);
                tracing::debug!("Saved note {} at revision {}", self.note_id, revision);
                self.state.send_replace(if newer_edits {
                    SaveState::Unsaved
                } else {
                    SaveState::Saved
                });
            }
            Err(e) => {
                tracing::warn!("Failed to save note {}: {}", self.note_id, e);
                self.state.send_replace(if newer_edits {
                    SaveState::Unsaved
                } else {
                    SaveState::SaveFailed(e.to_string())
                });
            }
        }

        result
    }
}

/// Autosave for a single note
///
/// Dropping the coordinator cancels a save that is still waiting on the
/// debounce delay. Call [`flush`](Self::flush) first to keep those edits.
pub struct AutosaveCoordinator<S: NoteSaver + 'static> {
    inner: Arc<Inner<S>>,
    timer: DebounceTimer,
}

impl<S: NoteSaver + 'static> AutosaveCoordinator<S> {
    /// Start tracking `note_id`, whose server copy is `initial_content`
    pub fn new(
        saver: S,
        note_id: Uuid,
        initial_content: impl Into<String>,
        config: &AppConfig,
    ) -> Self {
        let (state, _) = watch::channel(SaveState::Saved);
        Self {
            inner: Arc::new(Inner {
                note_id,
                saver,
                content: Mutex::new(initial_content.into()),
                revision: AtomicU64::new(0),
                saved_revision: AtomicU64::new(0),
                save_lock: tokio::sync::Mutex::new(()),
                state,
            }),
            timer: DebounceTimer::new(config.autosave_delay),
        }
    }

    pub fn note_id(&self) -> Uuid {
        self.inner.note_id
    }

    /// Current save state
    pub fn state(&self) -> SaveState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.inner.state.subscribe()
    }

    /// Latest content, saved or not
    pub fn content(&self) -> String {
        self.inner.snapshot().0
    }

    /// Record an edit and restart the debounce timer
    ///
    /// Must be called from within a Tokio runtime.
    pub fn edit(&self, content: impl Into<String>) {
        {
            let mut current = self.inner.content.lock().unwrap_or_else(|e| e.into_inner());
            *current = content.into();
            self.inner.revision.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.state.send_replace(SaveState::Unsaved);

        let inner = Arc::clone(&self.inner);
        self.timer.schedule(async move {
            // Outcome is published through the state channel
            let _ = inner.save_now().await;
        });
    }

    /// Cancel the pending timer and save immediately
    pub async fn flush(&self) -> Result<(), ClientError> {
        self.timer.cancel();
        self.inner.save_now().await
    }

    /// Save again after a failure. Does nothing unless in `SaveFailed`.
    pub async fn retry(&self) -> Result<(), ClientError> {
        if !matches!(self.state(), SaveState::SaveFailed(_)) {
            return Ok(());
        }
        self.timer.cancel();
        self.inner.save_now().await
    }
}
