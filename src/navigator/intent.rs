use crate::screen::{AnyScreen, ScreenId};
use crate::tree::ActivePath;

/// A navigation command as a value, so it can be queued and applied later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Go { path: ActivePath, on: ScreenId },
    Replace { path: ActivePath },
    Dismiss { id: ScreenId },
    DidAppear { id: ScreenId },
    ReplaceContent { id: ScreenId, content: AnyScreen },
}
