//! Structural rewrites of a [`NavigationTree`].
//!
//! Each operation returns a new tree. Nodes that are carried over keep their
//! ids and appearance state; only materialized path elements get fresh ids.

use super::element::{IdentifiedScreen, NavigationTree, Tab, TabScreen, TreeElement};
use super::path::{ActivePath, ActiveTab, PathElement};
use crate::screen::{AnyScreen, IdGenerator, ScreenId};

impl NavigationTree {
    /// Replace the payload of `id`, keeping its id and appearance flag.
    ///
    /// A tabbed or split node whose content is replaced becomes a plain
    /// screen node. Returns an equal tree when `id` is absent.
    pub fn replace_content(&self, id: ScreenId, content: &AnyScreen) -> NavigationTree {
        self.iter()
            .map(|element| element.replace_content(id, content))
            .collect::<Vec<_>>()
            .into()
    }

    /// Make `path` the successor chain of `on`, dropping whatever followed
    /// `on` in its branch. `None` when `on` is absent.
    pub(crate) fn appending(
        &self,
        on: ScreenId,
        path: &ActivePath,
        ids: &mut IdGenerator,
    ) -> Option<NavigationTree> {
        for (index, element) in self.iter().enumerate() {
            if element.id() == on {
                return Some(self.extend_after(index, path, ids));
            }
            if let Some(element) = element.map_branch(|branch| branch.appending(on, path, ids)) {
                return Some(self.with_element(index, element));
            }
        }
        None
    }

    fn extend_after(&self, index: usize, path: &ActivePath, ids: &mut IdGenerator) -> NavigationTree {
        let mut elements = self.elements()[..=index].to_vec();
        let mut rest = path.elements();

        // A tab request extends an existing container instead of replacing it:
        // either `on` itself or the container currently following it.
        if let Some((PathElement::Tabbed(request), tail)) = rest.split_first() {
            if let TreeElement::Tabbed(container) = &self.elements()[index] {
                elements[index] = TreeElement::Tabbed(container.activating(request, ids));
                rest = tail;
            } else if let Some(TreeElement::Tabbed(container)) = self.elements().get(index + 1) {
                elements.push(TreeElement::Tabbed(container.activating(request, ids)));
                rest = tail;
            }
        }

        elements.extend(rest.iter().map(|element| element.materialize(ids)));
        elements.into()
    }

    /// Remove `id` and everything after it in its branch. When `id` stands for
    /// a container position (the container or one of its branch roots), the
    /// whole container goes. `None` when `id` is absent.
    pub(crate) fn truncating(&self, id: ScreenId) -> Option<NavigationTree> {
        for (index, element) in self.iter().enumerate() {
            if element.represented_ids().contains(&id) {
                return Some(self.elements()[..index].to_vec().into());
            }
            if let Some(element) = element.map_branch(|branch| branch.truncating(id)) {
                return Some(self.with_element(index, element));
            }
        }
        None
    }

    /// Flip the appearance flag of `id`. `None` when `id` is absent.
    pub(crate) fn marking_appeared(&self, id: ScreenId) -> Option<NavigationTree> {
        for (index, element) in self.iter().enumerate() {
            if element.id() == id {
                let mut element = element.clone();
                element.set_appeared();
                return Some(self.with_element(index, element));
            }
            if let Some(element) = element.map_branch(|branch| branch.marking_appeared(id)) {
                return Some(self.with_element(index, element));
            }
        }
        None
    }

    fn with_element(&self, index: usize, element: TreeElement) -> NavigationTree {
        let mut elements = self.clone().into_elements();
        elements[index] = element;
        elements.into()
    }
}

impl TreeElement {
    fn replace_content(&self, id: ScreenId, content: &AnyScreen) -> TreeElement {
        if self.id() == id {
            return TreeElement::Screen(IdentifiedScreen {
                id,
                content: content.clone(),
                has_appeared: self.has_appeared(),
            });
        }
        match self {
            TreeElement::Screen(_) => self.clone(),
            TreeElement::Tabbed(screen) => {
                let mut screen = screen.clone();
                screen.active_tab.path = screen.active_tab.path.replace_content(id, content);
                for path in screen.inactive_tabs.values_mut() {
                    *path = path.replace_content(id, content);
                }
                TreeElement::Tabbed(screen)
            }
            TreeElement::Split(screen) => {
                let mut screen = screen.clone();
                screen.column = screen.column.replace_content(id, content);
                screen.detail = screen.detail.replace_content(id, content);
                TreeElement::Split(screen)
            }
        }
    }
}

impl TabScreen {
    /// Switch the active tab to `request.key`.
    ///
    /// An inactive branch with that key is reactivated as it was left; an
    /// unknown key materializes `request.path`. The previously active branch
    /// moves to the inactive set. Requesting the active key changes nothing.
    pub(crate) fn activating(&self, request: &ActiveTab, ids: &mut IdGenerator) -> TabScreen {
        if self.active_tab.key == request.key {
            return self.clone();
        }

        let mut inactive_tabs = self.inactive_tabs.clone();
        let path = match inactive_tabs.remove(&request.key) {
            Some(path) => path,
            None => request.path.materialize(ids),
        };
        inactive_tabs.insert(self.active_tab.key.clone(), self.active_tab.path.clone());

        TabScreen {
            active_tab: Tab {
                key: request.key.clone(),
                path,
            },
            inactive_tabs,
            ..self.clone()
        }
    }
}
