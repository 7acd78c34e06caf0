//! Mapping the tree onto a one-hop-at-a-time rendering layer.
//!
//! A rendered node only ever asks two things of the tree: what am I, and what
//! do I present next. It reports back when it appears and when the user
//! dismisses what it presented.
//!
//! ```text
//! render(ctx) ─→ resolve_successor(tree, ctx.id) ─→ render(ctx.child(successor))
//!     │                                                   │
//!     └── on_appear / on_presentation_dismissed ──→ MainQueue ──→ Navigator
//! ```

mod context;
mod lifecycle;
mod presentation;

pub use context::NodeContext;
pub use lifecycle::{Appearance, Dismissal, Reconciler};
pub use presentation::{resolve_successor, PresentationMode, Successor};
