//! Serializable dumps of a navigation tree, for logs and the replay tool.

use std::fmt;

use serde::Serialize;

use crate::tree::{NavigationTree, TreeElement};

/// A navigation tree with payloads rendered through `Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementSnapshot {
    Screen {
        id: String,
        content: String,
        style: String,
        has_appeared: bool,
    },
    Tabbed {
        id: String,
        style: String,
        has_appeared: bool,
        active: TabSnapshot,
        inactive: Vec<TabSnapshot>,
    },
    Split {
        id: String,
        style: String,
        has_appeared: bool,
        column: TreeSnapshot,
        detail: TreeSnapshot,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSnapshot {
    pub key: String,
    pub path: TreeSnapshot,
}

impl TreeSnapshot {
    pub fn capture(tree: &NavigationTree) -> Self {
        Self {
            elements: tree.iter().map(ElementSnapshot::capture).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for element in &self.elements {
            element.write_indented(f, depth)?;
        }
        Ok(())
    }
}

impl ElementSnapshot {
    fn capture(element: &TreeElement) -> Self {
        let id = element.id().to_string();
        let style = element.presentation_style().to_string();
        let has_appeared = element.has_appeared();

        match element {
            TreeElement::Screen(screen) => ElementSnapshot::Screen {
                id,
                content: format!("{:?}", screen.content),
                style,
                has_appeared,
            },
            TreeElement::Tabbed(screen) => ElementSnapshot::Tabbed {
                id,
                style,
                has_appeared,
                active: TabSnapshot {
                    key: screen.active_tab.key.to_string(),
                    path: TreeSnapshot::capture(&screen.active_tab.path),
                },
                inactive: screen
                    .inactive_tabs
                    .iter()
                    .map(|(key, path)| TabSnapshot {
                        key: key.to_string(),
                        path: TreeSnapshot::capture(path),
                    })
                    .collect(),
            },
            TreeElement::Split(screen) => ElementSnapshot::Split {
                id,
                style,
                has_appeared,
                column: TreeSnapshot::capture(&screen.column),
                detail: TreeSnapshot::capture(&screen.detail),
            },
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            ElementSnapshot::Screen {
                id,
                content,
                style,
                has_appeared,
            } => writeln!(f, "{pad}{id} {content} [{style}]{}", appeared_mark(*has_appeared)),
            ElementSnapshot::Tabbed {
                id,
                style,
                has_appeared,
                active,
                inactive,
            } => {
                writeln!(f, "{pad}{id} tabbed [{style}]{}", appeared_mark(*has_appeared))?;
                writeln!(f, "{pad}  tab {} (active)", active.key)?;
                active.path.write_indented(f, depth + 2)?;
                for tab in inactive {
                    writeln!(f, "{pad}  tab {}", tab.key)?;
                    tab.path.write_indented(f, depth + 2)?;
                }
                Ok(())
            }
            ElementSnapshot::Split {
                id,
                style,
                has_appeared,
                column,
                detail,
            } => {
                writeln!(f, "{pad}{id} split [{style}]{}", appeared_mark(*has_appeared))?;
                writeln!(f, "{pad}  column")?;
                column.write_indented(f, depth + 2)?;
                writeln!(f, "{pad}  detail")?;
                detail.write_indented(f, depth + 2)
            }
        }
    }
}

fn appeared_mark(has_appeared: bool) -> &'static str {
    if has_appeared {
        " *"
    } else {
        ""
    }
}

impl From<&NavigationTree> for TreeSnapshot {
    fn from(tree: &NavigationTree) -> Self {
        Self::capture(tree)
    }
}

/// Indented outline, one element per line. Appeared nodes are marked `*`.
impl fmt::Display for TreeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::Navigator;
    use crate::screen::{PresentationStyle, Screen};
    use crate::tree::{ActivePath, PathElement};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Page {
        Home,
        Inbox,
        Settings,
    }

    impl Screen for Page {
        fn presentation_style(&self) -> PresentationStyle {
            match self {
                Page::Settings => PresentationStyle::sheet(),
                _ => PresentationStyle::Push,
            }
        }
    }

    fn navigator() -> Navigator {
        let navigator = Navigator::new(ActivePath::from(vec![
            PathElement::tabbed("home", Page::Home),
            PathElement::screen(Page::Settings),
        ]));
        let tabs = navigator.current().first().map(|e| e.id()).expect("root");
        navigator
            .go(vec![PathElement::tabbed("inbox", Page::Inbox)], tabs)
            .expect("tabs exist");
        navigator.did_appear(tabs).expect("tabs exist");
        navigator
    }

    #[test]
    fn outline_lists_active_tab_first() {
        let snapshot = TreeSnapshot::capture(&navigator().current());
        let text = snapshot.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "#1 tabbed [push] *");
        assert_eq!(lines[1], "  tab inbox (active)");
        assert!(lines[2].starts_with("    #") && lines[2].ends_with("Inbox [push]"));
        assert_eq!(lines[3], "  tab home");
        assert_eq!(lines[4], "    #2 Home [push]");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn json_is_tagged_by_kind() {
        let json = TreeSnapshot::from(&navigator().current()).to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        let root = &value["elements"][0];
        assert_eq!(root["kind"], "tabbed");
        assert_eq!(root["has_appeared"], true);
        assert_eq!(root["active"]["key"], "inbox");
        assert_eq!(root["inactive"][0]["path"]["elements"][0]["content"], "Home");
    }
}
