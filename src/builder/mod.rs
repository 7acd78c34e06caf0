//! Declarative description of which views a navigation tree can render.
//!
//! A [`PathBuilder`] is plain data composed from the combinators below. The
//! interpreter ([`PathBuilder::build`]) matches it against one tree element at
//! a time; a matched screen builder also says which builder renders that
//! screen's successor.
//!
//! ```ignore
//! let app = screen(|_: &Home| "home".to_string()).followed_by(any_of(vec![
//!     screen(|d: &Detail| format!("detail {}", d.id)),
//!     if_then(|| logged_in(), screen(|_: &Settings| "settings".into()), empty()),
//!     if_screen(|d: &Draft| d.locked.then(|| screen(|_: &Draft| "locked".into())), empty()),
//! ]));
//! ```

mod render;

use std::sync::Arc;

use crate::screen::{AnyScreen, Screen};
use crate::tree::TabKey;

pub use render::{render, Built, RenderedNode, SplitView, TabbedView};

type ScreenFn<V> = Arc<dyn Fn(&AnyScreen) -> Option<V> + Send + Sync>;
type TabbedFn<V> = Arc<dyn Fn(TabbedView<V>) -> V + Send + Sync>;
type SplitFn<V> = Arc<dyn Fn(SplitView<V>) -> V + Send + Sync>;
type SelectFn<V> = Arc<dyn Fn(&AnyScreen) -> Option<PathBuilder<V>> + Send + Sync>;

/// A combinator tree describing renderable paths.
pub enum PathBuilder<V> {
    /// Renders nothing.
    Empty,
    /// Renders screens whose payload is of one concrete type.
    Screen {
        build: ScreenFn<V>,
        successors: Arc<PathBuilder<V>>,
    },
    /// The first builder that matches wins.
    AnyOf(Vec<PathBuilder<V>>),
    /// Chooses a builder from the screen being built, falling back to
    /// `otherwise` for other screen types or when no builder is chosen.
    IfScreen {
        select: SelectFn<V>,
        otherwise: Arc<PathBuilder<V>>,
    },
    /// Chooses a builder each time an element is built.
    If {
        condition: Arc<dyn Fn() -> bool + Send + Sync>,
        then: Arc<PathBuilder<V>>,
        otherwise: Arc<PathBuilder<V>>,
    },
    /// Renders tabbed containers, one builder per tab key.
    Tabbed {
        tabs: Vec<(TabKey, PathBuilder<V>)>,
        build: TabbedFn<V>,
        successors: Arc<PathBuilder<V>>,
    },
    /// Renders split containers.
    Split {
        column: Arc<PathBuilder<V>>,
        detail: Arc<PathBuilder<V>>,
        build: SplitFn<V>,
        successors: Arc<PathBuilder<V>>,
    },
}

impl<V> PathBuilder<V> {
    /// Use `next` for whatever the matched element presents.
    ///
    /// Only screen, tabbed and split builders present successors; other
    /// combinators are returned unchanged.
    pub fn followed_by(self, next: PathBuilder<V>) -> Self {
        match self {
            PathBuilder::Screen { build, .. } => PathBuilder::Screen {
                build,
                successors: Arc::new(next),
            },
            PathBuilder::Tabbed { tabs, build, .. } => PathBuilder::Tabbed {
                tabs,
                build,
                successors: Arc::new(next),
            },
            PathBuilder::Split {
                column,
                detail,
                build,
                ..
            } => PathBuilder::Split {
                column,
                detail,
                build,
                successors: Arc::new(next),
            },
            other => other,
        }
    }
}

pub fn empty<V>() -> PathBuilder<V> {
    PathBuilder::Empty
}

/// Build screens of type `S` with `build`.
pub fn screen<S, V, F>(build: F) -> PathBuilder<V>
where
    S: Screen,
    V: 'static,
    F: Fn(&S) -> V + Send + Sync + 'static,
{
    PathBuilder::Screen {
        build: Arc::new(move |content: &AnyScreen| content.downcast::<S>().ok().map(&build)),
        successors: Arc::new(PathBuilder::Empty),
    }
}

pub fn any_of<V>(builders: Vec<PathBuilder<V>>) -> PathBuilder<V> {
    PathBuilder::AnyOf(builders)
}

/// `then` while `condition` holds, `otherwise` when it does not.
pub fn if_then<V, C>(condition: C, then: PathBuilder<V>, otherwise: PathBuilder<V>) -> PathBuilder<V>
where
    C: Fn() -> bool + Send + Sync + 'static,
{
    PathBuilder::If {
        condition: Arc::new(condition),
        then: Arc::new(then),
        otherwise: Arc::new(otherwise),
    }
}

/// Let a screen of type `S` pick the builder that renders it.
pub fn if_screen<S, V, F>(select: F, otherwise: PathBuilder<V>) -> PathBuilder<V>
where
    S: Screen,
    V: 'static,
    F: Fn(&S) -> Option<PathBuilder<V>> + Send + Sync + 'static,
{
    PathBuilder::IfScreen {
        select: Arc::new(move |content: &AnyScreen| content.downcast::<S>().ok().and_then(&select)),
        otherwise: Arc::new(otherwise),
    }
}

/// Build tabbed containers. Each tab branch is rendered with the builder
/// registered for its key; branches without one are left out.
pub fn tabbed<V, F>(tabs: Vec<(TabKey, PathBuilder<V>)>, build: F) -> PathBuilder<V>
where
    V: 'static,
    F: Fn(TabbedView<V>) -> V + Send + Sync + 'static,
{
    PathBuilder::Tabbed {
        tabs,
        build: Arc::new(build),
        successors: Arc::new(PathBuilder::Empty),
    }
}

pub fn split<V, F>(column: PathBuilder<V>, detail: PathBuilder<V>, build: F) -> PathBuilder<V>
where
    V: 'static,
    F: Fn(SplitView<V>) -> V + Send + Sync + 'static,
{
    PathBuilder::Split {
        column: Arc::new(column),
        detail: Arc::new(detail),
        build: Arc::new(build),
        successors: Arc::new(PathBuilder::Empty),
    }
}
