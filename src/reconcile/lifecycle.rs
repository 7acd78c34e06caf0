//! Appearance and dismissal callbacks from the rendering layer.
//!
//! Toolkits recycle lifecycle callbacks: a node "appears" again when a sheet
//! over it closes, and a presentation binding is cleared both when the user
//! dismisses a screen and when the binding was never shown. The appearance
//! flags in the tree tell these cases apart.

use crate::config::NavigatorConfig;
use crate::navigator::{MainQueue, NavigationIntent, Navigator};
use crate::tree::NavigationTree;

use super::context::NodeContext;

/// Result of a node reporting that it became visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// First time on screen. `did_appear` has been scheduled.
    First,
    /// Visible again, e.g. after popping back to it.
    Again,
    /// The node is no longer in the tree.
    Stale,
}

/// Result of a presenter reporting that its successor binding was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The successor was on screen and has been dismissed. `reappeared` is set
    /// when the presenter should treat this as its own re-appearance.
    Dismissed { reappeared: bool },
    /// The successor never appeared (or there is none): the callback belongs
    /// to a presentation that did not happen yet.
    Ignored,
}

/// Glue between rendered nodes and the navigator.
#[derive(Clone)]
pub struct Reconciler {
    queue: MainQueue,
    treat_sheet_dismiss_as_appear: bool,
}

impl Reconciler {
    pub fn new(queue: MainQueue, config: &NavigatorConfig) -> Self {
        Self {
            queue,
            treat_sheet_dismiss_as_appear: config.treat_sheet_dismiss_as_appear_in_presenter,
        }
    }

    /// Context for the root of `tree`, carrying the configured dismissal
    /// behaviour down to every child.
    pub fn root_context(&self, tree: &NavigationTree) -> Option<NodeContext> {
        NodeContext::root(tree, self.treat_sheet_dismiss_as_appear)
    }

    pub fn navigator(&self) -> &Navigator {
        self.queue.navigator()
    }

    pub fn queue(&self) -> &MainQueue {
        &self.queue
    }

    /// Whether pushes from the node in `ctx` belong to a split detail column.
    pub fn is_detail(&self, ctx: &NodeContext) -> bool {
        self.navigator().current().is_in_split_detail(ctx.id)
    }

    /// The node in `ctx` became visible.
    ///
    /// Raised from inside a render pass, so the appearance flag is flipped on
    /// the next turn of the queue.
    pub fn on_appear(&self, ctx: &NodeContext) -> Appearance {
        let tree = self.navigator().current();
        let Some(screen) = tree.component(ctx.id) else {
            return Appearance::Stale;
        };
        if screen.has_appeared() {
            return Appearance::Again;
        }

        self.queue.schedule(NavigationIntent::DidAppear { id: ctx.id });
        Appearance::First
    }

    /// The presentation binding of the node in `ctx` was cleared.
    ///
    /// Bindings are also written while the presenter itself is first shown;
    /// in that case the presenter's `did_appear` is scheduled. The successor
    /// is dismissed only if it had actually appeared.
    pub fn on_presentation_dismissed(&self, ctx: &NodeContext) -> Dismissal {
        let tree = self.navigator().current();
        let Some(screen) = tree.component(ctx.id) else {
            return Dismissal::Ignored;
        };
        if !screen.has_appeared() {
            self.queue.schedule(NavigationIntent::DidAppear { id: ctx.id });
        }

        let Some(successor) = tree.successor(ctx.id) else {
            return Dismissal::Ignored;
        };
        if !successor.has_appeared() {
            return Dismissal::Ignored;
        }

        let modal = successor.presentation_style().is_modal();
        if self.navigator().dismiss(successor.id()).is_err() {
            return Dismissal::Ignored;
        }

        Dismissal::Dismissed {
            reappeared: modal && ctx.treat_sheet_dismiss_as_appear,
        }
    }
}
