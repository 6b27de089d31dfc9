//! # Debounce Timer
//!
//! A single-slot cancellable scheduler. Scheduling an action cancels any
//! action that is scheduled but has not fired yet. Once an action fires it
//! runs to completion; later `schedule` or `cancel` calls do not touch it.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    token: Option<CancellationToken>,
}

/// Debounce timer
#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    slot: Arc<Mutex<Slot>>,
    generations: AtomicU64,
}

impl DebounceTimer {
    /// Create a timer with a fixed quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: Arc::new(Mutex::new(Slot::default())),
            generations: AtomicU64::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` after the quiet period unless rescheduled or cancelled first
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;

        {
            let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = slot.token.replace(token.clone()) {
                previous.cancel();
            }
            slot.generation = generation;
        }

        let delay = self.delay;
        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    {
                        let mut slot = slot.lock().unwrap_or_else(|e| e.into_inner());
                        if slot.generation == generation {
                            slot.token = None;
                        }
                    }
                    action.await;
                }
            }
        });
    }

    /// Cancel the pending action, if any
    ///
    /// # Returns
    /// Whether an action was pending
    pub fn cancel(&self) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        match slot.token.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether an action is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .token
            .is_some()
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
