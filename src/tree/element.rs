//! The materialized navigation tree.

use std::collections::{BTreeMap, HashSet};

use super::path::TabKey;
use crate::screen::{AnyScreen, PresentationStyle, Screen, ScreenId};

/// A plain screen node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifiedScreen {
    pub id: ScreenId,
    pub content: AnyScreen,
    pub has_appeared: bool,
}

/// One branch of a tabbed container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tab {
    pub key: TabKey,
    pub path: NavigationTree,
}

/// A tabbed container: one active branch and the branches visited before.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabScreen {
    pub id: ScreenId,
    pub active_tab: Tab,
    /// Previously active branches, keyed by tab. A key never appears both here
    /// and as the active tab.
    pub inactive_tabs: BTreeMap<TabKey, NavigationTree>,
    pub presentation_style: PresentationStyle,
    pub has_appeared: bool,
}

impl TabScreen {
    /// Branches in search order: active first, then inactive by key.
    pub fn branches(&self) -> impl Iterator<Item = (&TabKey, &NavigationTree)> {
        std::iter::once((&self.active_tab.key, &self.active_tab.path)).chain(self.inactive_tabs.iter())
    }

    pub fn tab(&self, key: &TabKey) -> Option<&NavigationTree> {
        if &self.active_tab.key == key {
            Some(&self.active_tab.path)
        } else {
            self.inactive_tabs.get(key)
        }
    }
}

impl Screen for TabScreen {
    fn presentation_style(&self) -> PresentationStyle {
        self.presentation_style.clone()
    }
}

/// Which half of a split container a branch is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitBranch {
    Column,
    Detail,
}

/// A split container showing a column and a detail branch side by side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitScreen {
    pub id: ScreenId,
    pub column: NavigationTree,
    pub detail: NavigationTree,
    pub presentation_style: PresentationStyle,
    pub has_appeared: bool,
}

impl SplitScreen {
    pub fn path(&self, branch: SplitBranch) -> &NavigationTree {
        match branch {
            SplitBranch::Column => &self.column,
            SplitBranch::Detail => &self.detail,
        }
    }
}

impl Screen for SplitScreen {
    fn presentation_style(&self) -> PresentationStyle {
        self.presentation_style.clone()
    }
}

/// A node of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeElement {
    Screen(IdentifiedScreen),
    Tabbed(TabScreen),
    Split(SplitScreen),
}

impl TreeElement {
    pub fn id(&self) -> ScreenId {
        match self {
            Self::Screen(screen) => screen.id,
            Self::Tabbed(screen) => screen.id,
            Self::Split(screen) => screen.id,
        }
    }

    pub fn has_appeared(&self) -> bool {
        match self {
            Self::Screen(screen) => screen.has_appeared,
            Self::Tabbed(screen) => screen.has_appeared,
            Self::Split(screen) => screen.has_appeared,
        }
    }

    /// The payload rendered for this node. Containers are their own payload.
    pub fn content(&self) -> AnyScreen {
        match self {
            Self::Screen(screen) => screen.content.clone(),
            Self::Tabbed(screen) => screen.clone().erase(),
            Self::Split(screen) => screen.clone().erase(),
        }
    }

    pub fn presentation_style(&self) -> PresentationStyle {
        match self {
            Self::Screen(screen) => screen.content.presentation_style(),
            Self::Tabbed(screen) => screen.presentation_style.clone(),
            Self::Split(screen) => screen.presentation_style.clone(),
        }
    }

    /// Nested branches in search order. Empty for plain screens.
    pub fn branches(&self) -> Vec<&NavigationTree> {
        match self {
            Self::Screen(_) => Vec::new(),
            Self::Tabbed(screen) => screen.branches().map(|(_, path)| path).collect(),
            Self::Split(screen) => vec![&screen.column, &screen.detail],
        }
    }

    /// Ids this position on screen stands for: its own id and the first
    /// element of every branch. Does not descend further.
    pub fn represented_ids(&self) -> HashSet<ScreenId> {
        let mut ids = HashSet::from([self.id()]);
        ids.extend(
            self.branches()
                .into_iter()
                .filter_map(|branch| branch.first().map(TreeElement::id)),
        );
        ids
    }

    /// Every id reachable from this element.
    pub fn ids(&self) -> HashSet<ScreenId> {
        let mut ids = HashSet::from([self.id()]);
        for branch in self.branches() {
            ids.extend(branch.ids());
        }
        ids
    }

    /// Every screen payload reachable from this element. Containers
    /// contribute their branches' payloads, not themselves.
    pub fn contents(&self) -> HashSet<AnyScreen> {
        match self {
            Self::Screen(screen) => HashSet::from([screen.content.clone()]),
            _ => self
                .branches()
                .into_iter()
                .flat_map(|branch| branch.contents())
                .collect(),
        }
    }

    pub(crate) fn set_appeared(&mut self) {
        match self {
            Self::Screen(screen) => screen.has_appeared = true,
            Self::Tabbed(screen) => screen.has_appeared = true,
            Self::Split(screen) => screen.has_appeared = true,
        }
    }

    /// Rebuild this element with the first branch `f` rewrites, trying
    /// branches in search order. `None` when `f` declines every branch.
    pub(crate) fn map_branch<F>(&self, mut f: F) -> Option<TreeElement>
    where
        F: FnMut(&NavigationTree) -> Option<NavigationTree>,
    {
        match self {
            Self::Screen(_) => None,
            Self::Tabbed(screen) => {
                if let Some(path) = f(&screen.active_tab.path) {
                    let mut screen = screen.clone();
                    screen.active_tab.path = path;
                    return Some(Self::Tabbed(screen));
                }
                for (key, inactive) in &screen.inactive_tabs {
                    if let Some(path) = f(inactive) {
                        let mut screen = screen.clone();
                        screen.inactive_tabs.insert(key.clone(), path);
                        return Some(Self::Tabbed(screen));
                    }
                }
                None
            }
            Self::Split(screen) => {
                if let Some(column) = f(&screen.column) {
                    return Some(Self::Split(SplitScreen {
                        column,
                        ..screen.clone()
                    }));
                }
                f(&screen.detail).map(|detail| {
                    Self::Split(SplitScreen {
                        detail,
                        ..screen.clone()
                    })
                })
            }
        }
    }
}

/// One branch of navigation: an ordered sequence of elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationTree {
    elements: Vec<TreeElement>,
}

impl NavigationTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[TreeElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first(&self) -> Option<&TreeElement> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&TreeElement> {
        self.elements.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeElement> {
        self.elements.iter()
    }

    /// Every id reachable from this branch.
    pub fn ids(&self) -> HashSet<ScreenId> {
        self.elements.iter().flat_map(TreeElement::ids).collect()
    }

    /// Every screen payload reachable from this branch.
    pub fn contents(&self) -> HashSet<AnyScreen> {
        self.elements.iter().flat_map(TreeElement::contents).collect()
    }

    pub(crate) fn into_elements(self) -> Vec<TreeElement> {
        self.elements
    }
}

impl From<Vec<TreeElement>> for NavigationTree {
    fn from(elements: Vec<TreeElement>) -> Self {
        Self { elements }
    }
}

impl<'a> IntoIterator for &'a NavigationTree {
    type Item = &'a TreeElement;
    type IntoIter = std::slice::Iter<'a, TreeElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
