//! Deferred command execution on the UI thread.
//!
//! Callbacks raised while a render pass is in progress must not mutate the
//! tree that pass is reading. They schedule an intent instead, and the host
//! runs the queue once the pass is over.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::NavigationError;
use super::intent::NavigationIntent;
use super::state::Navigator;

/// Queue of intents to apply on the next scheduling turn.
#[derive(Clone)]
pub struct MainQueue {
    navigator: Navigator,
    pending: Arc<Mutex<VecDeque<NavigationIntent>>>,
}

impl MainQueue {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            pending: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Defer `intent` to the next turn.
    pub fn schedule(&self, intent: NavigationIntent) {
        tracing::trace!(intent = ?intent, "Intent scheduled");
        self.pending.lock().push_back(intent);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Run one turn: apply every intent scheduled before this call, in order.
    ///
    /// Intents scheduled while the turn runs wait for the next one. Failed
    /// intents are returned; the remaining ones still run.
    pub fn run_pending(&self) -> Vec<NavigationError> {
        let turn: Vec<NavigationIntent> = self.pending.lock().drain(..).collect();
        turn.into_iter()
            .filter_map(|intent| self.navigator.dispatch(intent).err())
            .collect()
    }
}
