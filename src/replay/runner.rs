use thiserror::Error;

use super::script::{to_path, NamedScreen, Script, Step, StyleSpec, Target};
use crate::config::NavigatorConfig;
use crate::deeplink::{Deeplink, DeeplinkHandler, FnParser};
use crate::navigator::{NavigationError, Navigator};
use crate::screen::ScreenId;
use crate::tree::{ActivePath, NavigationTree, PathElement, TreeElement};

/// URL scheme accepted by `deeplink` steps.
pub const DEEPLINK_SCHEME: &str = "navtree";

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("No screen named '{0}' in the tree")]
    UnknownScreen(String),

    #[error("The navigation tree is empty")]
    EmptyTree,

    #[error("Invalid deeplink '{0}' (expected navtree://...)")]
    InvalidDeeplink(String),

    #[error("Deeplink '{0}' was not handled")]
    UnhandledDeeplink(String),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Drives a navigator through the steps of a [`Script`].
pub struct Replay {
    navigator: Navigator,
    deeplinks: DeeplinkHandler,
}

impl Replay {
    pub fn new(script: &Script, config: &NavigatorConfig) -> Self {
        let navigator = Navigator::with_config(script.root_path(), config);
        let deeplinks = DeeplinkHandler::new(navigator.clone(), FnParser::new(parse_named_path));
        Self { navigator, deeplinks }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub async fn apply(&self, step: &Step) -> Result<(), ReplayError> {
        match step {
            Step::Go { on, path } => {
                let on = self.resolve(on)?;
                self.navigator.go(to_path(path), on)?;
            }
            Step::Replace { path } => self.navigator.replace(to_path(path)),
            Step::Dismiss { target } => {
                let id = self.resolve(target)?;
                self.navigator.dismiss(id)?;
            }
            Step::Appear { target: Some(target) } => {
                let id = self.resolve(target)?;
                self.navigator.did_appear(id)?;
            }
            Step::Appear { target: None } => {
                let mut ids: Vec<ScreenId> = self.navigator.current().ids().into_iter().collect();
                ids.sort();
                for id in ids {
                    self.navigator.did_appear(id)?;
                }
            }
            Step::Deeplink { url } => {
                let link = Deeplink::from_url(url, DEEPLINK_SCHEME)
                    .ok_or_else(|| ReplayError::InvalidDeeplink(url.clone()))?;
                if !self.deeplinks.handle(&link).await {
                    return Err(ReplayError::UnhandledDeeplink(url.clone()));
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, target: &Target) -> Result<ScreenId, ReplayError> {
        let tree = self.navigator.current();
        match target {
            Target::Current => tree.last_active_id().ok_or(ReplayError::EmptyTree),
            Target::Root => tree.first().map(TreeElement::id).ok_or(ReplayError::EmptyTree),
            Target::Named(name) => find_named(&tree, name).ok_or_else(|| ReplayError::UnknownScreen(name.clone())),
        }
    }
}

fn find_named(tree: &NavigationTree, name: &str) -> Option<ScreenId> {
    tree.iter().find_map(|element| match element {
        TreeElement::Screen(screen)
            if screen
                .content
                .downcast::<NamedScreen>()
                .is_ok_and(|named| named.name == name) =>
        {
            Some(screen.id)
        }
        _ => element
            .branches()
            .into_iter()
            .find_map(|branch| find_named(branch, name)),
    })
}

/// `navtree://home/detail?style=sheet` pushes `home` and presents `detail` as
/// a sheet. Unknown styles are not handled.
fn parse_named_path(link: &Deeplink) -> Option<ActivePath> {
    if link.is_empty() {
        return None;
    }
    link.components
        .iter()
        .map(|component| {
            let style = match component.value("style") {
                Some(name) => StyleSpec::from_name(name)?,
                None => StyleSpec::Push,
            };
            Some(PathElement::screen(NamedScreen::new(
                component.name.as_str(),
                style.into(),
            )))
        })
        .collect()
}
