//! Deeplinks: a normalized link value and composable parsers that turn it
//! into an [`ActivePath`](crate::tree::ActivePath).

mod handler;
mod link;
mod parser;

pub use handler::DeeplinkHandler;
pub use link::{Deeplink, DeeplinkArgument, DeeplinkComponent};
pub use parser::{any_of, prepending, AnyOf, DeeplinkParser, Empty, FnParser, Prepending};
