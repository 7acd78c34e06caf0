use crate::screen::{DetentStyle, PresentationStyle, ScreenId};
use crate::tree::{NavigationTree, TreeElement};

/// How a presenter shows its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationMode {
    /// Pushed onto the presenter's stack. `detail` pushes land in the detail
    /// column of an enclosing split container.
    Push { detail: bool },
    Sheet { allows_push: bool },
    DetentSheet { allows_push: bool, style: DetentStyle },
}

impl PresentationMode {
    pub fn is_modal(&self) -> bool {
        !matches!(self, PresentationMode::Push { .. })
    }

    /// Whether the presented content gets a navigation stack of its own.
    /// Pushed content lives in the presenter's stack, and sheets that do not
    /// allow pushes embed their content directly.
    pub fn wraps_in_stack(&self) -> bool {
        match self {
            PresentationMode::Push { .. } => false,
            PresentationMode::Sheet { allows_push }
            | PresentationMode::DetentSheet { allows_push, .. } => *allows_push,
        }
    }
}

/// What a node should present right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Successor<'a> {
    /// Nothing follows this node (or the node is gone).
    None,
    /// A successor exists but the presenter has not appeared yet. Toolkits
    /// drop presentations requested before the presenter is on screen.
    Blocked(&'a TreeElement),
    Presented {
        element: &'a TreeElement,
        mode: PresentationMode,
    },
}

impl<'a> Successor<'a> {
    pub fn element(&self) -> Option<&'a TreeElement> {
        match self {
            Successor::None => None,
            Successor::Blocked(element) => Some(*element),
            Successor::Presented { element, .. } => Some(*element),
        }
    }

    pub fn mode(&self) -> Option<&PresentationMode> {
        match self {
            Successor::Presented { mode, .. } => Some(mode),
            _ => None,
        }
    }
}

/// Resolve what the node `id` presents in `tree`.
pub fn resolve_successor(tree: &NavigationTree, id: ScreenId) -> Successor<'_> {
    let Some(presenter) = tree.component(id) else {
        return Successor::None;
    };
    let Some(element) = tree.successor(id) else {
        return Successor::None;
    };
    if !presenter.has_appeared() {
        return Successor::Blocked(element);
    }

    let mode = match element.presentation_style() {
        PresentationStyle::Push => PresentationMode::Push {
            detail: tree.is_in_split_detail(id),
        },
        PresentationStyle::Sheet { allows_push } => PresentationMode::Sheet { allows_push },
        PresentationStyle::DetentSheet { allows_push, style } => {
            PresentationMode::DetentSheet { allows_push, style }
        }
    };
    Successor::Presented { element, mode }
}
