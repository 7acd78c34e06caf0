use std::collections::HashSet;

use super::element::{NavigationTree, TreeElement};
use crate::screen::ScreenId;

/// A lookup answered against both the previous and the current tree, so a
/// renderer can tell whether a node it holds was rebuilt, kept, or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update<T> {
    pub previous: Option<T>,
    pub current: Option<T>,
}

impl<T: PartialEq> Update<T> {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// A published tree together with the tree it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeUpdate {
    pub previous: NavigationTree,
    pub current: NavigationTree,
}

impl TreeUpdate {
    pub fn new(previous: NavigationTree, current: NavigationTree) -> Self {
        Self { previous, current }
    }

    /// The element with `id` before and after the mutation.
    pub fn component(&self, id: ScreenId) -> Update<&TreeElement> {
        Update {
            previous: self.previous.component(id),
            current: self.current.component(id),
        }
    }

    /// The successor of `id` before and after the mutation.
    pub fn successor(&self, id: ScreenId) -> Update<&TreeElement> {
        Update {
            previous: self.previous.successor(id),
            current: self.current.successor(id),
        }
    }

    /// Ids that were present before and are gone now. Observers use this to
    /// release per-node state.
    pub fn removed_ids(&self) -> HashSet<ScreenId> {
        let current = self.current.ids();
        self.previous
            .ids()
            .into_iter()
            .filter(|id| !current.contains(id))
            .collect()
    }

    /// Ids that are new in the current tree.
    pub fn inserted_ids(&self) -> HashSet<ScreenId> {
        let previous = self.previous.ids();
        self.current
            .ids()
            .into_iter()
            .filter(|id| !previous.contains(id))
            .collect()
    }
}
