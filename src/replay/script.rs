//! TOML navigation scripts.
//!
//! ```toml
//! root = ["home", { tab = "inbox", path = ["inbox"] }]
//!
//! [[steps]]
//! action = "go"
//! on = "home"
//! path = ["detail", { name = "settings", style = "sheet" }]
//!
//! [[steps]]
//! action = "appear"
//!
//! [[steps]]
//! action = "dismiss"
//! target = "settings"
//! ```

use serde::Deserialize;

use crate::screen::{PresentationStyle, Screen};
use crate::tree::{ActivePath, PathElement};

/// Generic screen used by scripts: a name and a presentation style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedScreen {
    pub name: String,
    pub style: PresentationStyle,
}

impl NamedScreen {
    pub fn new(name: impl Into<String>, style: PresentationStyle) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    pub fn push(name: impl Into<String>) -> Self {
        Self::new(name, PresentationStyle::Push)
    }
}

impl Screen for NamedScreen {
    fn presentation_style(&self) -> PresentationStyle {
        self.style.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSpec {
    #[default]
    Push,
    Sheet,
    SheetNoPush,
    DetentSheet,
}

impl StyleSpec {
    /// Parse the `style` argument of a deeplink component.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "push" => Some(Self::Push),
            "sheet" => Some(Self::Sheet),
            "sheet_no_push" => Some(Self::SheetNoPush),
            "detent_sheet" => Some(Self::DetentSheet),
            _ => None,
        }
    }
}

impl From<StyleSpec> for PresentationStyle {
    fn from(spec: StyleSpec) -> Self {
        match spec {
            StyleSpec::Push => PresentationStyle::Push,
            StyleSpec::Sheet => PresentationStyle::sheet(),
            StyleSpec::SheetNoPush => PresentationStyle::Sheet { allows_push: false },
            StyleSpec::DetentSheet => PresentationStyle::detent_sheet(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenSpec {
    pub name: String,
    #[serde(default)]
    pub style: StyleSpec,
}

/// One element of a scripted path. A bare string is a pushed screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ElementSpec {
    Name(String),
    Screen(ScreenSpec),
    Tabbed { tab: String, path: Vec<ElementSpec> },
    Split { column: Vec<ElementSpec>, detail: Vec<ElementSpec> },
}

impl ElementSpec {
    pub fn to_path_element(&self) -> PathElement {
        match self {
            ElementSpec::Name(name) => PathElement::screen(NamedScreen::push(name.as_str())),
            ElementSpec::Screen(spec) => PathElement::screen(NamedScreen::new(spec.name.as_str(), spec.style.into())),
            ElementSpec::Tabbed { tab, path } => PathElement::tabbed_path(tab.as_str(), to_path(path)),
            ElementSpec::Split { column, detail } => PathElement::split(to_path(column), to_path(detail)),
        }
    }
}

pub fn to_path(elements: &[ElementSpec]) -> ActivePath {
    elements.iter().map(ElementSpec::to_path_element).collect()
}

/// A screen name, `current` for the screen on top, or `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Target {
    #[default]
    Current,
    Root,
    Named(String),
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        match value.as_str() {
            "current" => Target::Current,
            "root" => Target::Root,
            _ => Target::Named(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Go {
        #[serde(default)]
        on: Target,
        path: Vec<ElementSpec>,
    },
    Replace {
        path: Vec<ElementSpec>,
    },
    Dismiss {
        #[serde(default)]
        target: Target,
    },
    /// Mark `target` as appeared, or every node when no target is given.
    Appear {
        #[serde(default)]
        target: Option<Target>,
    },
    Deeplink {
        url: String,
    },
}

impl Step {
    pub fn action(&self) -> &'static str {
        match self {
            Step::Go { .. } => "go",
            Step::Replace { .. } => "replace",
            Step::Dismiss { .. } => "dismiss",
            Step::Appear { .. } => "appear",
            Step::Deeplink { .. } => "deeplink",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Script {
    pub root: Vec<ElementSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn root_path(&self) -> ActivePath {
        to_path(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
root = ["home", { tab = "inbox", path = ["inbox", { name = "compose", style = "sheet" }] }]

[[steps]]
action = "go"
path = [{ column = ["list"], detail = ["item"] }]

[[steps]]
action = "appear"
target = "inbox"

[[steps]]
action = "appear"

[[steps]]
action = "dismiss"
target = "root"

[[steps]]
action = "deeplink"
url = "navtree://home"
"#;

    #[test]
    fn parses_every_step_kind() {
        let script = Script::from_toml(SCRIPT).expect("valid script");
        let actions: Vec<&str> = script.steps.iter().map(Step::action).collect();
        assert_eq!(actions, vec!["go", "appear", "appear", "dismiss", "deeplink"]);

        assert_eq!(script.steps[0], Step::Go {
            on: Target::Current,
            path: vec![ElementSpec::Split {
                column: vec![ElementSpec::Name("list".into())],
                detail: vec![ElementSpec::Name("item".into())],
            }],
        });
        assert_eq!(script.steps[1], Step::Appear {
            target: Some(Target::Named("inbox".into())),
        });
        assert_eq!(script.steps[2], Step::Appear { target: None });
        assert_eq!(script.steps[3], Step::Dismiss { target: Target::Root });
    }

    #[test]
    fn root_path_materializes_styles_and_tabs() {
        let script = Script::from_toml(SCRIPT).expect("valid script");
        let path = script.root_path();

        assert_eq!(path.len(), 2);
        let PathElement::Tabbed(tab) = &path.elements()[1] else {
            panic!("expected tabbed element");
        };
        assert_eq!(tab.key.as_str(), "inbox");
        assert_eq!(
            tab.path.elements()[1],
            PathElement::screen(NamedScreen::new("compose", PresentationStyle::sheet()))
        );
    }

    #[test]
    fn unknown_actions_are_rejected() {
        let err = Script::from_toml("root = []\n[[steps]]\naction = \"jump\"\n");
        assert!(err.is_err());
    }
}
