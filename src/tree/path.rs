//! Declarative navigation paths, as supplied by callers.

use std::fmt;

use super::element::{IdentifiedScreen, NavigationTree, SplitScreen, Tab, TabScreen, TreeElement};
use crate::screen::{AnyScreen, IdGenerator, PresentationStyle, Screen};

/// Key identifying one branch of a tabbed container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabKey(String);

impl TabKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TabKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The requested active branch of a tabbed container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveTab {
    pub key: TabKey,
    pub path: ActivePath,
}

/// The two requested branches of a split container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitPath {
    pub column: ActivePath,
    pub detail: ActivePath,
}

/// One element of an [`ActivePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    Screen(AnyScreen),
    /// Only the active branch is described; inactive branches exist once materialized.
    Tabbed(ActiveTab),
    Split(SplitPath),
}

impl PathElement {
    pub fn screen<S: Screen>(screen: S) -> Self {
        Self::Screen(screen.erase())
    }

    /// A tabbed container whose active tab `key` shows `content`.
    pub fn tabbed<S: Screen>(key: impl Into<TabKey>, content: S) -> Self {
        Self::Tabbed(ActiveTab {
            key: key.into(),
            path: ActivePath::from(vec![Self::screen(content)]),
        })
    }

    pub fn tabbed_path(key: impl Into<TabKey>, path: impl Into<ActivePath>) -> Self {
        Self::Tabbed(ActiveTab {
            key: key.into(),
            path: path.into(),
        })
    }

    pub fn split(column: impl Into<ActivePath>, detail: impl Into<ActivePath>) -> Self {
        Self::Split(SplitPath {
            column: column.into(),
            detail: detail.into(),
        })
    }

    /// A split container with one screen per branch.
    pub fn split_screens<C: Screen, D: Screen>(column: C, detail: D) -> Self {
        Self::split(vec![Self::screen(column)], vec![Self::screen(detail)])
    }

    /// Tabbed containers are presented like the first screen of their active
    /// tab; split containers are always pushed.
    pub fn presentation_style(&self) -> PresentationStyle {
        match self {
            Self::Screen(screen) => screen.presentation_style(),
            Self::Tabbed(tab) => tab.path.presentation_style(),
            Self::Split(_) => PresentationStyle::Push,
        }
    }

    /// Materialize this element with freshly minted ids.
    pub fn materialize(&self, ids: &mut IdGenerator) -> TreeElement {
        match self {
            Self::Screen(content) => TreeElement::Screen(IdentifiedScreen {
                id: ids.next_id(),
                content: content.clone(),
                has_appeared: false,
            }),
            Self::Tabbed(tab) => TreeElement::Tabbed(TabScreen {
                id: ids.next_id(),
                active_tab: Tab {
                    key: tab.key.clone(),
                    path: tab.path.materialize(ids),
                },
                inactive_tabs: Default::default(),
                presentation_style: tab.path.presentation_style(),
                has_appeared: false,
            }),
            Self::Split(split) => {
                let id = ids.next_id();
                TreeElement::Split(SplitScreen {
                    id,
                    column: split.column.materialize(ids),
                    detail: split.detail.materialize(ids),
                    presentation_style: PresentationStyle::Push,
                    has_appeared: false,
                })
            }
        }
    }
}

/// An ordered, caller-declared description of the desired navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ActivePath(Vec<PathElement>);

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path of plain screens.
    pub fn screens<I>(screens: I) -> Self
    where
        I: IntoIterator<Item = AnyScreen>,
    {
        Self(screens.into_iter().map(PathElement::Screen).collect())
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, element: PathElement) {
        self.0.push(element);
    }

    /// This path followed by `tail`.
    pub fn concat(&self, tail: &ActivePath) -> ActivePath {
        let mut elements = self.0.clone();
        elements.extend(tail.0.iter().cloned());
        Self(elements)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.0.iter()
    }

    fn presentation_style(&self) -> PresentationStyle {
        self.0
            .first()
            .map(PathElement::presentation_style)
            .unwrap_or_default()
    }

    /// Materialize every element with freshly minted ids, depth first.
    pub fn materialize(&self, ids: &mut IdGenerator) -> NavigationTree {
        NavigationTree::from(
            self.0
                .iter()
                .map(|element| element.materialize(ids))
                .collect::<Vec<_>>(),
        )
    }
}

impl From<Vec<PathElement>> for ActivePath {
    fn from(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }
}

impl FromIterator<PathElement> for ActivePath {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ActivePath {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
