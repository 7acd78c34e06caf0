//! Shared screens and helpers for navigator integration tests.

#![allow(dead_code, unused_imports)]

use navtree::navigator::Navigator;
use navtree::screen::{PresentationStyle, Screen, ScreenId};
use navtree::tree::{NavigationTree, PathElement};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Detail(u32),
    Inbox,
    Message(u32),
    Settings,
    Profile,
}

impl Screen for Page {
    fn presentation_style(&self) -> PresentationStyle {
        match self {
            Page::Settings => PresentationStyle::sheet(),
            Page::Profile => PresentationStyle::detent_sheet(),
            _ => PresentationStyle::Push,
        }
    }
}

/// Id of the first node holding `page`.
pub fn id_of(tree: &NavigationTree, page: Page) -> ScreenId {
    tree.id_of(&page.clone().erase())
        .unwrap_or_else(|| panic!("{:?} not in tree", page))
}

pub fn root_id(navigator: &Navigator) -> ScreenId {
    navigator
        .current()
        .first()
        .map(|element| element.id())
        .expect("tree has a root")
}

/// Report every node in the tree as appeared.
pub fn appear_all(navigator: &Navigator) {
    let mut ids: Vec<ScreenId> = navigator.current().ids().into_iter().collect();
    ids.sort();
    for id in ids {
        navigator.did_appear(id).expect("id taken from the tree");
    }
}

/// Payloads along the active path, containers left out.
pub fn active_pages(tree: &NavigationTree) -> Vec<Page> {
    fn collect(elements: &[PathElement], out: &mut Vec<Page>) {
        for element in elements {
            match element {
                PathElement::Screen(content) => out.extend(content.unwrap::<Page>()),
                PathElement::Tabbed(tab) => collect(tab.path.elements(), out),
                PathElement::Split(split) => {
                    collect(split.column.elements(), out);
                    collect(split.detail.elements(), out);
                }
            }
        }
    }

    let mut pages = Vec::new();
    collect(tree.active_path().elements(), &mut pages);
    pages
}
