//! The navigator: single authority over the navigation tree.
//!
//! Every command computes a new tree from the current one and publishes it
//! with the tree it replaced. Readers always observe a complete snapshot.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;
use tokio::sync::watch;

use super::error::NavigationError;
use super::intent::NavigationIntent;
use crate::config::NavigatorConfig;
use crate::screen::{AnyScreen, IdGenerator, Screen, ScreenId};
use crate::tree::{ActivePath, NavigationTree, TreeUpdate};

/// A command the navigator applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    Go { on: ScreenId, inserted: usize },
    Replace { inserted: usize },
    Dismiss { id: ScreenId, removed: usize },
    DidAppear { id: ScreenId },
    ReplaceContent { id: ScreenId },
}

/// Log entry for an applied command.
#[derive(Debug, Clone)]
pub struct NavigationLogEntry {
    /// When the command was applied.
    pub timestamp: SystemTime,
    pub command: NavigationCommand,
}

/// Cloneable handle to the navigation state.
///
/// Clones share the same tree. Commands are serialized by a write lock; the
/// engine still assumes a single logical UI thread issues them (see
/// [`MainQueue`](super::MainQueue)).
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<RwLock<NavigatorInner>>,
    publisher: Arc<watch::Sender<TreeUpdate>>,
}

struct NavigatorInner {
    tree: NavigationTree,
    previous: NavigationTree,
    ids: IdGenerator,
    /// Applied commands, oldest first, capped at `history_limit`.
    log: VecDeque<NavigationLogEntry>,
    history_limit: usize,
}

impl NavigatorInner {
    /// Install `tree` and return the update to publish.
    fn commit(&mut self, tree: NavigationTree, command: NavigationCommand) -> TreeUpdate {
        self.previous = std::mem::replace(&mut self.tree, tree);

        if self.log.len() == self.history_limit {
            self.log.pop_front();
        }
        self.log.push_back(NavigationLogEntry {
            timestamp: SystemTime::now(),
            command,
        });

        TreeUpdate::new(self.previous.clone(), self.tree.clone())
    }
}

impl Navigator {
    /// Create a navigator showing `root`, with default configuration.
    pub fn new(root: impl Into<ActivePath>) -> Self {
        Self::with_config(root, &NavigatorConfig::default())
    }

    pub fn with_config(root: impl Into<ActivePath>, config: &NavigatorConfig) -> Self {
        let mut ids = IdGenerator::new(config.id_strategy);
        let tree = root.into().materialize(&mut ids);
        let (publisher, _) = watch::channel(TreeUpdate::new(NavigationTree::new(), tree.clone()));

        let inner = NavigatorInner {
            tree,
            previous: NavigationTree::new(),
            ids,
            log: VecDeque::new(),
            history_limit: config.history_limit.max(1),
        };

        Self {
            inner: Arc::new(RwLock::new(inner)),
            publisher: Arc::new(publisher),
        }
    }

    /// The current tree together with the one it replaced.
    pub fn navigation_tree(&self) -> TreeUpdate {
        let state = self.inner.read();
        TreeUpdate::new(state.previous.clone(), state.tree.clone())
    }

    /// The current tree.
    pub fn current(&self) -> NavigationTree {
        self.inner.read().tree.clone()
    }

    /// Receive every published tree. The receiver starts at the latest one.
    pub fn subscribe(&self) -> watch::Receiver<TreeUpdate> {
        self.publisher.subscribe()
    }

    /// Make `path` the successor chain of `on`.
    ///
    /// Whatever followed `on` in its branch is dropped. A leading tab request
    /// on (or right after) a tabbed container switches that container's
    /// active tab, reactivating a previously visited branch with the same key.
    pub fn go(&self, path: impl Into<ActivePath>, on: ScreenId) -> Result<(), NavigationError> {
        let path = path.into();
        let mut state = self.inner.write();

        let Some(tree) = ({
            let NavigatorInner { tree, ids, .. } = &mut *state;
            tree.appending(on, &path, ids)
        }) else {
            return Err(log_failure(NavigationError::NoSuchNode { id: on }));
        };

        let before = state.tree.ids();
        let inserted = tree.ids().difference(&before).count();
        tracing::debug!(screen_id = %on, inserted, "Navigated forward");
        let update = state.commit(tree, NavigationCommand::Go { on, inserted });
        self.publish(update);
        Ok(())
    }

    /// Present a single screen after `on`.
    pub fn go_to<S: Screen>(&self, screen: S, on: ScreenId) -> Result<(), NavigationError> {
        self.go(ActivePath::screens([screen.erase()]), on)
    }

    /// Replace the whole tree with a fresh materialization of `path`.
    ///
    /// All previous ids are discarded and every node starts unappeared.
    pub fn replace(&self, path: impl Into<ActivePath>) {
        let path = path.into();
        let mut state = self.inner.write();
        let tree = path.materialize(&mut state.ids);
        let inserted = tree.ids().len();

        tracing::info!(inserted, "Navigation tree replaced");
        let update = state.commit(tree, NavigationCommand::Replace { inserted });
        self.publish(update);
    }

    /// Remove `id` and everything it presents.
    ///
    /// Only nodes on the active path can be dismissed.
    pub fn dismiss(&self, id: ScreenId) -> Result<(), NavigationError> {
        let mut state = self.inner.write();
        if !state.tree.contains(id) {
            return Err(log_failure(NavigationError::NoSuchNode { id }));
        }
        if !state.tree.is_active(id) {
            return Err(log_failure(NavigationError::NotDismissible { id }));
        }

        let Some(tree) = state.tree.truncating(id) else {
            return Err(log_failure(NavigationError::NoSuchNode { id }));
        };

        let removed = state.tree.ids().len().saturating_sub(tree.ids().len());
        tracing::debug!(screen_id = %id, removed, "Dismissed");
        let update = state.commit(tree, NavigationCommand::Dismiss { id, removed });
        self.publish(update);
        Ok(())
    }

    /// Record that `id` became visible. Idempotent: nothing is published when
    /// the node had already appeared.
    pub fn did_appear(&self, id: ScreenId) -> Result<(), NavigationError> {
        let mut state = self.inner.write();
        match state.tree.component(id) {
            None => return Err(log_failure(NavigationError::NoSuchNode { id })),
            Some(element) if element.has_appeared() => return Ok(()),
            Some(_) => {}
        }

        let Some(tree) = state.tree.marking_appeared(id) else {
            return Err(log_failure(NavigationError::NoSuchNode { id }));
        };

        tracing::trace!(screen_id = %id, "Screen appeared");
        let update = state.commit(tree, NavigationCommand::DidAppear { id });
        self.publish(update);
        Ok(())
    }

    /// Swap the payload of `id`, keeping its id and appearance state.
    pub fn replace_content<S: Screen>(&self, id: ScreenId, content: S) -> Result<(), NavigationError> {
        self.replace_erased_content(id, content.erase())
    }

    fn replace_erased_content(&self, id: ScreenId, content: AnyScreen) -> Result<(), NavigationError> {
        let mut state = self.inner.write();
        if !state.tree.contains(id) {
            return Err(log_failure(NavigationError::NoSuchNode { id }));
        }

        let tree = state.tree.replace_content(id, &content);
        tracing::debug!(screen_id = %id, content = ?content, "Content replaced");
        let update = state.commit(tree, NavigationCommand::ReplaceContent { id });
        self.publish(update);
        Ok(())
    }

    /// Append `path` after the screen currently on top.
    ///
    /// Returns false when the tree is empty.
    pub fn go_from_current(&self, path: impl Into<ActivePath>) -> bool {
        let Some(current) = self.inner.read().tree.last_active_id() else {
            return false;
        };
        self.go(path, current).is_ok()
    }

    /// Dismiss the screen currently on top.
    ///
    /// Returns false when the tree is empty.
    pub fn dismiss_current(&self) -> bool {
        let Some(current) = self.inner.read().tree.last_active_id() else {
            return false;
        };
        self.dismiss(current).is_ok()
    }

    /// Apply an intent.
    pub fn dispatch(&self, intent: NavigationIntent) -> Result<(), NavigationError> {
        match intent {
            NavigationIntent::Go { path, on } => self.go(path, on),
            NavigationIntent::Replace { path } => {
                self.replace(path);
                Ok(())
            }
            NavigationIntent::Dismiss { id } => self.dismiss(id),
            NavigationIntent::DidAppear { id } => self.did_appear(id),
            NavigationIntent::ReplaceContent { id, content } => self.replace_erased_content(id, content),
        }
    }

    /// Applied commands, oldest first.
    pub fn history(&self) -> Vec<NavigationLogEntry> {
        self.inner.read().log.iter().cloned().collect()
    }

    /// Sent while the write lock is held so observers see updates in commit order.
    fn publish(&self, update: TreeUpdate) {
        let removed = update.removed_ids();
        if !removed.is_empty() {
            tracing::trace!(removed = removed.len(), "Screens removed from tree");
        }
        self.publisher.send_replace(update);
    }
}

fn log_failure(err: NavigationError) -> NavigationError {
    tracing::warn!(kind = err.kind(), error = %err, "Navigation command ignored");
    err
}
