use crate::screen::{AnyScreen, ScreenId};
use crate::tree::{NavigationTree, TreeElement};

/// Everything a rendered node knows about its place in the tree.
///
/// Passed explicitly from each node to the successor it builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeContext {
    pub id: ScreenId,
    pub screen: AnyScreen,
    pub parent_id: Option<ScreenId>,
    pub parent_screen: Option<AnyScreen>,
    pub treat_sheet_dismiss_as_appear: bool,
}

impl NodeContext {
    /// Context for the root node of `tree`.
    pub fn root(tree: &NavigationTree, treat_sheet_dismiss_as_appear: bool) -> Option<Self> {
        tree.first().map(|root| Self {
            id: root.id(),
            screen: root.content(),
            parent_id: None,
            parent_screen: None,
            treat_sheet_dismiss_as_appear,
        })
    }

    /// Context handed to `successor` when this node builds it.
    pub fn child(&self, successor: &TreeElement) -> Self {
        Self {
            id: successor.id(),
            screen: successor.content(),
            parent_id: Some(self.id),
            parent_screen: Some(self.screen.clone()),
            treat_sheet_dismiss_as_appear: self.treat_sheet_dismiss_as_appear,
        }
    }
}
