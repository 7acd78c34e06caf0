use std::sync::Arc;

use crate::reconcile::{resolve_successor, PresentationMode, Successor};
use crate::screen::ScreenId;
use crate::tree::{NavigationTree, TabKey, TreeElement};

use super::PathBuilder;

/// A built element and the builder responsible for its successor.
pub struct Built<V> {
    pub view: V,
    pub successors: Arc<PathBuilder<V>>,
}

/// One node of a rendered chain.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode<V> {
    pub id: ScreenId,
    pub view: V,
    /// How the predecessor presents this node. `None` for a branch root.
    pub presented_as: Option<PresentationMode>,
    pub has_appeared: bool,
}

/// Rendered branches of a tabbed container, in key order after the active tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabbedView<V> {
    pub active: TabKey,
    pub tabs: Vec<(TabKey, Vec<RenderedNode<V>>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitView<V> {
    pub column: Vec<RenderedNode<V>>,
    pub detail: Vec<RenderedNode<V>>,
}

impl<V> PathBuilder<V> {
    /// Interpret this builder against a single element.
    ///
    /// `None` when no combinator matches the element's shape and type.
    pub fn build(&self, element: &TreeElement) -> Option<Built<V>> {
        match self {
            PathBuilder::Empty => None,
            PathBuilder::Screen { build, successors } => match element {
                TreeElement::Screen(screen) => build(&screen.content).map(|view| Built {
                    view,
                    successors: successors.clone(),
                }),
                _ => None,
            },
            PathBuilder::AnyOf(builders) => builders.iter().find_map(|builder| builder.build(element)),
            PathBuilder::IfScreen { select, otherwise } => {
                let selected = match element {
                    TreeElement::Screen(screen) => select(&screen.content),
                    _ => None,
                };
                match selected {
                    Some(builder) => builder.build(element),
                    None => otherwise.build(element),
                }
            }
            PathBuilder::If {
                condition,
                then,
                otherwise,
            } => {
                if condition() {
                    then.build(element)
                } else {
                    otherwise.build(element)
                }
            }
            PathBuilder::Tabbed {
                tabs,
                build,
                successors,
            } => {
                let TreeElement::Tabbed(screen) = element else {
                    return None;
                };
                let mut rendered: Vec<(TabKey, Vec<RenderedNode<V>>)> = tabs
                    .iter()
                    .filter_map(|(key, builder)| {
                        screen
                            .tab(key)
                            .map(|path| (key.clone(), render_branch(path, builder, false)))
                    })
                    .collect();
                rendered.sort_by_key(|(key, _)| (key != &screen.active_tab.key, key.clone()));
                let view = build(TabbedView {
                    active: screen.active_tab.key.clone(),
                    tabs: rendered,
                });
                Some(Built {
                    view,
                    successors: successors.clone(),
                })
            }
            PathBuilder::Split {
                column,
                detail,
                build,
                successors,
            } => {
                let TreeElement::Split(screen) = element else {
                    return None;
                };
                let view = build(SplitView {
                    column: render_branch(&screen.column, column, false),
                    detail: render_branch(&screen.detail, detail, true),
                });
                Some(Built {
                    view,
                    successors: successors.clone(),
                })
            }
        }
    }
}

/// Render `tree` from its root, one successor hop at a time.
///
/// The chain stops at the first element no builder matches, or at a
/// successor whose presenter has not appeared yet.
pub fn render<V>(tree: &NavigationTree, builder: &PathBuilder<V>) -> Vec<RenderedNode<V>> {
    render_branch(tree, builder, false)
}

fn render_branch<V>(branch: &NavigationTree, builder: &PathBuilder<V>, in_detail: bool) -> Vec<RenderedNode<V>> {
    let mut nodes = Vec::new();
    let Some(mut element) = branch.first() else {
        return nodes;
    };
    let mut built = builder.build(element);
    let mut presented_as = None;

    while let Some(Built { view, successors }) = built {
        nodes.push(RenderedNode {
            id: element.id(),
            view,
            presented_as: presented_as.take(),
            has_appeared: element.has_appeared(),
        });

        let Successor::Presented { element: next, mut mode } = resolve_successor(branch, element.id()) else {
            break;
        };
        if let PresentationMode::Push { detail } = &mut mode {
            *detail |= in_detail;
        }
        element = next;
        built = successors.build(element);
        presented_as = Some(mode);
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{any_of, empty, if_screen, if_then, screen, split, tabbed};
    use crate::navigator::Navigator;
    use crate::screen::{PresentationStyle, Screen};
    use crate::tree::{ActivePath, PathElement};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Home;

    impl Screen for Home {
        fn presentation_style(&self) -> PresentationStyle {
            PresentationStyle::Push
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Detail(u32);

    impl Screen for Detail {
        fn presentation_style(&self) -> PresentationStyle {
            PresentationStyle::Push
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Settings;

    impl Screen for Settings {
        fn presentation_style(&self) -> PresentationStyle {
            PresentationStyle::sheet()
        }
    }

    fn app() -> PathBuilder<String> {
        screen(|_: &Home| "home".to_string()).followed_by(any_of(vec![
            screen(|d: &Detail| format!("detail {}", d.0)),
            screen(|_: &Settings| "settings".to_string()),
        ]))
    }

    fn appear_all(navigator: &Navigator) {
        for id in navigator.current().ids() {
            navigator.did_appear(id).expect("id from tree");
        }
    }

    #[test]
    fn renders_chain_through_nested_builders() {
        let navigator = Navigator::new(ActivePath::from(vec![
            PathElement::screen(Home),
            PathElement::screen(Settings),
        ]));
        appear_all(&navigator);

        let nodes = render(&navigator.current(), &app());
        let views: Vec<&str> = nodes.iter().map(|n| n.view.as_str()).collect();
        assert_eq!(views, vec!["home", "settings"]);
        assert_eq!(nodes[0].presented_as, None);
        assert_eq!(
            nodes[1].presented_as,
            Some(PresentationMode::Sheet { allows_push: true })
        );
    }

    #[test]
    fn chain_stops_at_unappeared_presenter() {
        let navigator = Navigator::new(ActivePath::from(vec![
            PathElement::screen(Home),
            PathElement::screen(Detail(1)),
        ]));

        let nodes = render(&navigator.current(), &app());
        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].has_appeared);
    }

    #[test]
    fn unmatched_successor_ends_chain() {
        let navigator = Navigator::new(ActivePath::from(vec![
            PathElement::screen(Home),
            PathElement::screen(Detail(1)),
            PathElement::screen(Detail(2)),
        ]));
        appear_all(&navigator);

        // Detail's builder has no successors.
        let nodes = render(&navigator.current(), &app());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].view, "detail 1");
    }

    #[test]
    fn conditional_builder_is_evaluated_per_build() {
        let enabled = Arc::new(AtomicBool::new(false));
        let flag = enabled.clone();
        let builder: PathBuilder<String> = if_then(
            move || flag.load(Ordering::SeqCst),
            screen(|_: &Home| "on".to_string()),
            screen(|_: &Home| "off".to_string()),
        );
        let tree = Navigator::new(ActivePath::screens([Home.erase()])).current();

        assert_eq!(render(&tree, &builder)[0].view, "off");
        enabled.store(true, Ordering::SeqCst);
        assert_eq!(render(&tree, &builder)[0].view, "on");
        assert!(render(&tree, &empty::<String>()).is_empty());
    }

    #[test]
    fn screen_selects_its_own_builder() {
        let builder: PathBuilder<String> = if_screen(
            |d: &Detail| (d.0 > 1).then(|| screen(|d: &Detail| format!("big {}", d.0))),
            screen(|d: &Detail| format!("small {}", d.0)),
        );
        let small = Navigator::new(ActivePath::screens([Detail(1).erase()])).current();
        let big = Navigator::new(ActivePath::screens([Detail(2).erase()])).current();
        let other = Navigator::new(ActivePath::screens([Home.erase()])).current();

        assert_eq!(render(&small, &builder)[0].view, "small 1");
        assert_eq!(render(&big, &builder)[0].view, "big 2");
        assert!(render(&other, &builder).is_empty());
    }

    #[test]
    fn containers_render_their_branches() {
        let navigator = Navigator::new(ActivePath::from(vec![PathElement::tabbed("home", Home)]));
        let tabs = navigator.current().first().map(|e| e.id()).expect("tabbed root");
        navigator
            .go(
                vec![PathElement::tabbed_path(
                    "split",
                    vec![PathElement::split(
                        vec![PathElement::screen(Home)],
                        vec![PathElement::screen(Detail(1)), PathElement::screen(Detail(2))],
                    )],
                )],
                tabs,
            )
            .expect("tabbed root exists");
        appear_all(&navigator);

        let details = || any_of(vec![screen(|d: &Detail| format!("detail {}", d.0))]);
        let builder: PathBuilder<String> = tabbed(
            vec![
                ("home".into(), screen(|_: &Home| "home".to_string())),
                (
                    "split".into(),
                    split(
                        screen(|_: &Home| "column".to_string()),
                        screen(|d: &Detail| format!("detail {}", d.0)).followed_by(details()),
                        |view: SplitView<String>| {
                            let detail: Vec<String> = view.detail.into_iter().map(|n| n.view).collect();
                            format!("split[{}|{}]", view.column.len(), detail.join(","))
                        },
                    ),
                ),
            ],
            |view: TabbedView<String>| {
                let tabs: Vec<String> = view
                    .tabs
                    .iter()
                    .map(|(key, nodes)| format!("{}:{}", key, nodes.first().map(|n| n.view.as_str()).unwrap_or("-")))
                    .collect();
                format!("active={} {}", view.active, tabs.join(" "))
            },
        );

        let nodes = render(&navigator.current(), &builder);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].view, "active=split split:split[1|detail 1,detail 2] home:home");
    }

    #[test]
    fn pushes_inside_split_detail_are_detail_pushes() {
        let navigator = Navigator::new(ActivePath::from(vec![PathElement::split(
            vec![PathElement::screen(Home)],
            vec![PathElement::screen(Detail(1)), PathElement::screen(Detail(2))],
        )]));
        appear_all(&navigator);

        let tree = navigator.current();
        let TreeElement::Split(split_screen) = &tree.elements()[0] else {
            panic!("expected split");
        };
        let detail_builder: PathBuilder<u32> =
            screen(|d: &Detail| d.0).followed_by(screen(|d: &Detail| d.0));
        let nodes = render_branch(&split_screen.detail, &detail_builder, true);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].presented_as, Some(PresentationMode::Push { detail: true }));
    }
}
