//! Errors reported by navigation commands.
//!
//! All of them are recoverable: a failed command leaves the tree untouched.

use thiserror::Error;

use crate::screen::ScreenId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The command referenced an id that is not in the tree.
    #[error("Screen {id} is not in the navigation tree")]
    NoSuchNode { id: ScreenId },

    /// Dismissal of a node that is not on the active path (e.g. inside an
    /// inactive tab).
    #[error("Screen {id} is not on the active path and cannot be dismissed")]
    NotDismissible { id: ScreenId },

    /// Downcast of a type-erased screen to the wrong concrete type.
    #[error("Screen is a {actual}, not a {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl NavigationError {
    /// Short machine-readable name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationError::NoSuchNode { .. } => "no_such_node",
            NavigationError::NotDismissible { .. } => "not_dismissible",
            NavigationError::TypeMismatch { .. } => "type_mismatch",
        }
    }
}
