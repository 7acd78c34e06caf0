//! Tree-structured navigation state.
//!
//! The [`Navigator`](navigator::Navigator) owns a [`NavigationTree`](tree::NavigationTree)
//! of screens presented by push, sheet, tabbed and split navigation. Commands
//! rewrite the tree and publish the previous and current versions; the
//! [`reconcile`] and [`builder`] modules let an append-only UI render it one
//! successor at a time.

pub mod builder;
pub mod config;
pub mod deeplink;
pub mod logging;
pub mod navigator;
pub mod reconcile;
pub mod replay;
pub mod screen;
pub mod snapshot;
pub mod tree;
