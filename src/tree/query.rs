//! Read-only algorithms over a [`NavigationTree`].
//!
//! Every search is depth first and left to right: column before detail,
//! active tab before inactive tabs. Ids are unique, so the first match is the
//! only one.

use super::element::{NavigationTree, TreeElement};
use super::path::{ActivePath, ActiveTab, PathElement, SplitPath};
use crate::screen::{AnyScreen, ScreenId};

impl NavigationTree {
    /// The element with `id`, wherever it is nested.
    pub fn component(&self, id: ScreenId) -> Option<&TreeElement> {
        self.iter().find_map(|element| {
            if element.id() == id {
                Some(element)
            } else {
                element
                    .branches()
                    .into_iter()
                    .find_map(|branch| branch.component(id))
            }
        })
    }

    /// The element `id` presents next: the one following it in its own branch.
    ///
    /// Containers render the roots of their branches themselves, so a
    /// container's successor is also its next sibling.
    pub fn successor(&self, id: ScreenId) -> Option<&TreeElement> {
        for (index, element) in self.iter().enumerate() {
            if element.id() == id {
                return self.elements().get(index + 1);
            }
            if element.ids().contains(&id) {
                return element
                    .branches()
                    .into_iter()
                    .find_map(|branch| branch.successor(id));
            }
        }
        None
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.component(id).is_some()
    }

    /// Whether `id` is reachable without entering an inactive tab.
    pub fn is_active(&self, id: ScreenId) -> bool {
        self.iter().any(|element| {
            element.id() == id
                || match element {
                    TreeElement::Screen(_) => false,
                    TreeElement::Tabbed(screen) => screen.active_tab.path.is_active(id),
                    TreeElement::Split(screen) => {
                        screen.column.is_active(id) || screen.detail.is_active(id)
                    }
                }
        })
    }

    /// Whether `id` sits in the detail branch of some split container.
    pub fn is_in_split_detail(&self, id: ScreenId) -> bool {
        self.iter().any(|element| match element {
            TreeElement::Screen(_) => false,
            TreeElement::Tabbed(screen) => screen
                .branches()
                .any(|(_, branch)| branch.is_in_split_detail(id)),
            TreeElement::Split(screen) => {
                screen.detail.contains(id)
                    || screen.column.is_in_split_detail(id)
            }
        })
    }

    /// Id of the first screen node whose payload equals `content`.
    pub fn id_of(&self, content: &AnyScreen) -> Option<ScreenId> {
        self.iter().find_map(|element| match element {
            TreeElement::Screen(screen) if &screen.content == content => Some(screen.id),
            _ => element
                .branches()
                .into_iter()
                .find_map(|branch| branch.id_of(content)),
        })
    }

    /// The terminal node of the active path, i.e. what the user currently sees
    /// on top. Descends into the active tab and into the detail branch of a
    /// split, falling back to its column.
    pub fn last_active_id(&self) -> Option<ScreenId> {
        let last = self.last()?;
        let nested = match last {
            TreeElement::Screen(_) => None,
            TreeElement::Tabbed(screen) => screen.active_tab.path.last_active_id(),
            TreeElement::Split(screen) => screen
                .detail
                .last_active_id()
                .or_else(|| screen.column.last_active_id()),
        };
        nested.or(Some(last.id()))
    }

    /// Project the tree back onto the declarative path that would produce it,
    /// dropping ids, appearance state and inactive tabs.
    pub fn active_path(&self) -> ActivePath {
        self.iter().map(TreeElement::active_path_element).collect()
    }
}

impl TreeElement {
    pub fn active_path_element(&self) -> PathElement {
        match self {
            TreeElement::Screen(screen) => PathElement::Screen(screen.content.clone()),
            TreeElement::Tabbed(screen) => PathElement::Tabbed(ActiveTab {
                key: screen.active_tab.key.clone(),
                path: screen.active_tab.path.active_path(),
            }),
            TreeElement::Split(screen) => PathElement::Split(SplitPath {
                column: screen.column.active_path(),
                detail: screen.detail.active_path(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{IdGenerator, PresentationStyle, Screen};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Page(&'static str);

    impl Screen for Page {
        fn presentation_style(&self) -> PresentationStyle {
            PresentationStyle::Push
        }
    }

    fn page(name: &'static str) -> PathElement {
        PathElement::screen(Page(name))
    }

    /// [home, tabbed(a: [a1, a2]), sheet] with tab b inactive, and a split
    /// further down inside tab a.
    fn sample() -> NavigationTree {
        let mut ids = IdGenerator::sequential();
        ActivePath::from(vec![
            page("home"),
            PathElement::tabbed_path(
                "a",
                vec![
                    page("a1"),
                    PathElement::split(vec![page("col")], vec![page("det1"), page("det2")]),
                ],
            ),
            page("last"),
        ])
        .materialize(&mut ids)
    }

    fn id(tree: &NavigationTree, name: &'static str) -> ScreenId {
        tree.id_of(&Page(name).erase()).expect("page in tree")
    }

    #[test]
    fn component_finds_nested_nodes() {
        let tree = sample();
        let det2 = id(&tree, "det2");
        assert_eq!(tree.component(det2).map(TreeElement::id), Some(det2));
        assert!(tree.component(det2).is_some_and(|e| !e.has_appeared()));
    }

    #[test]
    fn successor_is_next_sibling_in_own_branch() {
        let tree = sample();
        let home = id(&tree, "home");
        let tabbed = tree.successor(home).expect("tabbed follows home");
        assert!(matches!(tabbed, TreeElement::Tabbed(_)));

        // The container's own successor is the element after it, not its tab root.
        let last = tree.successor(tabbed.id()).expect("last follows tabbed");
        assert_eq!(last.id(), id(&tree, "last"));

        let det1 = id(&tree, "det1");
        assert_eq!(tree.successor(det1).map(TreeElement::id), Some(id(&tree, "det2")));
        assert!(tree.successor(id(&tree, "det2")).is_none());
        assert!(tree.successor(id(&tree, "col")).is_none());
    }

    #[test]
    fn no_two_nodes_share_a_successor() {
        let tree = sample();
        let successors: Vec<ScreenId> = tree
            .ids()
            .into_iter()
            .filter_map(|node| tree.successor(node).map(TreeElement::id))
            .collect();
        let unique: std::collections::HashSet<_> = successors.iter().copied().collect();
        assert_eq!(successors.len(), unique.len());
        // home -> tabbed, tabbed -> last, a1 -> split, det1 -> det2
        assert_eq!(successors.len(), 4);
    }

    #[test]
    fn represented_ids_stop_at_branch_roots() {
        let tree = sample();
        let tabbed = tree.successor(id(&tree, "home")).expect("tabbed");
        let represented = tabbed.represented_ids();
        assert!(represented.contains(&tabbed.id()));
        assert!(represented.contains(&id(&tree, "a1")));
        assert!(!represented.contains(&id(&tree, "det1")));
        assert_eq!(tabbed.ids().len(), 6);
    }

    #[test]
    fn last_active_id_prefers_split_detail() {
        let mut ids = IdGenerator::sequential();
        let tree = ActivePath::from(vec![
            page("home"),
            PathElement::split(vec![page("col")], vec![page("det")]),
        ])
        .materialize(&mut ids);
        assert_eq!(tree.last_active_id(), Some(id(&tree, "det")));

        let tree = ActivePath::from(vec![PathElement::split(vec![page("col")], vec![])])
            .materialize(&mut ids);
        assert_eq!(tree.last_active_id(), Some(id(&tree, "col")));
    }

    #[test]
    fn split_detail_membership() {
        let tree = sample();
        assert!(tree.is_in_split_detail(id(&tree, "det2")));
        assert!(!tree.is_in_split_detail(id(&tree, "col")));
        assert!(!tree.is_in_split_detail(id(&tree, "home")));
    }

    #[test]
    fn active_path_round_trips_through_materialization() {
        let tree = sample();
        let path = tree.active_path();
        let mut ids = IdGenerator::sequential();
        let rebuilt = path.materialize(&mut ids);
        assert_eq!(rebuilt.active_path(), path);
        assert_eq!(rebuilt.contents(), tree.contents());
        assert_eq!(tree.contents().len(), 6);
    }
}
