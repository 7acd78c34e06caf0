//! The navigation tree: declarative paths, their materialized form, and the
//! algorithms over it.
//!
//! ```text
//! ActivePath ──materialize──→ NavigationTree ──active_path──→ ActivePath
//!                                  │
//!                  component / successor / ids / replace_content
//! ```

mod element;
mod mutate;
mod path;
mod query;
mod update;

pub use element::{
    IdentifiedScreen, NavigationTree, SplitBranch, SplitScreen, Tab, TabScreen, TreeElement,
};
pub use path::{ActivePath, ActiveTab, PathElement, SplitPath, TabKey};
pub use update::{TreeUpdate, Update};
