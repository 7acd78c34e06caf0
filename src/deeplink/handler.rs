use std::sync::Arc;

use super::link::Deeplink;
use super::parser::DeeplinkParser;
use crate::navigator::Navigator;

/// Applies parsed deeplinks to a navigator.
#[derive(Clone)]
pub struct DeeplinkHandler {
    navigator: Navigator,
    parser: Arc<dyn DeeplinkParser>,
}

impl DeeplinkHandler {
    pub fn new(navigator: Navigator, parser: impl DeeplinkParser + 'static) -> Self {
        Self {
            navigator,
            parser: Arc::new(parser),
        }
    }

    /// Replace the navigation tree with the path `deeplink` parses to.
    ///
    /// Returns false and leaves the tree alone when no parser matches.
    pub async fn handle(&self, deeplink: &Deeplink) -> bool {
        let Some(path) = self.parser.parse(deeplink).await else {
            tracing::debug!(deeplink = %deeplink, "Deeplink not handled");
            return false;
        };

        tracing::info!(deeplink = %deeplink, screens = path.len(), "Handling deeplink");
        self.navigator.replace(path);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::{any_of, prepending, FnParser};
    use crate::screen::{PresentationStyle, Screen};
    use crate::tree::ActivePath;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Page {
        Home,
        Detail(u32),
    }

    impl Screen for Page {
        fn presentation_style(&self) -> PresentationStyle {
            PresentationStyle::Push
        }
    }

    fn detail_parser() -> FnParser<impl Fn(&Deeplink) -> Option<ActivePath> + Send + Sync> {
        FnParser::new(|link: &Deeplink| {
            let component = link.first().filter(|c| c.name == "detail")?;
            let id = component.value("id")?.parse().ok()?;
            Some(ActivePath::screens([Page::Detail(id).erase()]))
        })
    }

    #[tokio::test]
    async fn matched_deeplink_replaces_tree() {
        let navigator = Navigator::new(ActivePath::screens([Page::Home.erase()]));
        let parser = prepending(ActivePath::screens([Page::Home.erase()]), detail_parser());
        let handler = DeeplinkHandler::new(navigator.clone(), any_of(vec![Box::new(parser)]));
        let old_root = navigator.current().first().map(|e| e.id()).expect("root");

        let link = Deeplink::from_url("app://detail?id=7", "app").expect("app scheme");
        assert!(handler.handle(&link).await);

        let tree = navigator.current();
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(old_root));
        assert!(tree.id_of(&Page::Detail(7).erase()).is_some());
        assert!(tree.iter().all(|e| !e.has_appeared()));
    }

    #[tokio::test]
    async fn unmatched_deeplink_leaves_tree_alone() {
        let navigator = Navigator::new(ActivePath::screens([Page::Home.erase()]));
        let handler = DeeplinkHandler::new(navigator.clone(), detail_parser());
        let before = navigator.current();

        let link = Deeplink::from_url("app://detail?id=nope", "app").expect("app scheme");
        assert!(!handler.handle(&link).await);
        assert_eq!(navigator.current(), before);
        assert!(navigator.history().is_empty());
    }
}
