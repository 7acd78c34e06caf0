use std::sync::Arc;

use async_trait::async_trait;

use super::link::Deeplink;
use crate::tree::ActivePath;

/// Turns a deeplink into the path the app should show.
///
/// `None` means the parser is not responsible for this deeplink; callers
/// try other parsers or ignore the link.
#[async_trait]
pub trait DeeplinkParser: Send + Sync {
    async fn parse(&self, deeplink: &Deeplink) -> Option<ActivePath>;
}

#[async_trait]
impl<P: DeeplinkParser + ?Sized> DeeplinkParser for Box<P> {
    async fn parse(&self, deeplink: &Deeplink) -> Option<ActivePath> {
        (**self).parse(deeplink).await
    }
}

#[async_trait]
impl<P: DeeplinkParser + ?Sized> DeeplinkParser for Arc<P> {
    async fn parse(&self, deeplink: &Deeplink) -> Option<ActivePath> {
        (**self).parse(deeplink).await
    }
}

/// Tries each parser in order; the first match wins.
pub struct AnyOf {
    parsers: Vec<Box<dyn DeeplinkParser>>,
}

impl AnyOf {
    pub fn new(parsers: Vec<Box<dyn DeeplinkParser>>) -> Self {
        Self { parsers }
    }
}

#[async_trait]
impl DeeplinkParser for AnyOf {
    async fn parse(&self, deeplink: &Deeplink) -> Option<ActivePath> {
        for parser in &self.parsers {
            if let Some(path) = parser.parse(deeplink).await {
                return Some(path);
            }
        }
        None
    }
}

/// Puts `prefix` in front of whatever `inner` parses, e.g. the entry point of
/// the feature `inner` belongs to.
pub struct Prepending<P> {
    prefix: ActivePath,
    inner: P,
}

impl<P: DeeplinkParser> Prepending<P> {
    pub fn new(prefix: impl Into<ActivePath>, inner: P) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }
}

#[async_trait]
impl<P: DeeplinkParser> DeeplinkParser for Prepending<P> {
    async fn parse(&self, deeplink: &Deeplink) -> Option<ActivePath> {
        let path = self.inner.parse(deeplink).await?;
        Some(self.prefix.concat(&path))
    }
}

/// Never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

#[async_trait]
impl DeeplinkParser for Empty {
    async fn parse(&self, _deeplink: &Deeplink) -> Option<ActivePath> {
        None
    }
}

/// Adapts a synchronous closure.
pub struct FnParser<F> {
    parse: F,
}

impl<F> FnParser<F>
where
    F: Fn(&Deeplink) -> Option<ActivePath> + Send + Sync,
{
    pub fn new(parse: F) -> Self {
        Self { parse }
    }
}

#[async_trait]
impl<F> DeeplinkParser for FnParser<F>
where
    F: Fn(&Deeplink) -> Option<ActivePath> + Send + Sync,
{
    async fn parse(&self, deeplink: &Deeplink) -> Option<ActivePath> {
        (self.parse)(deeplink)
    }
}

pub fn any_of(parsers: Vec<Box<dyn DeeplinkParser>>) -> AnyOf {
    AnyOf::new(parsers)
}

pub fn prepending<P: DeeplinkParser>(prefix: impl Into<ActivePath>, inner: P) -> Prepending<P> {
    Prepending::new(prefix, inner)
}
