use std::collections::BTreeMap;
use std::fmt;

use url::Url;

/// Value of a query argument. `?flag&value=123` yields one of each.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeeplinkArgument {
    Flag,
    Value(String),
}

/// One path component of a deeplink and the arguments attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeeplinkComponent {
    pub name: String,
    pub arguments: BTreeMap<String, DeeplinkArgument>,
}

impl DeeplinkComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), DeeplinkArgument::Flag);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments
            .insert(name.into(), DeeplinkArgument::Value(value.into()));
        self
    }

    /// The value of argument `name`, if it was given one.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.arguments.get(name) {
            Some(DeeplinkArgument::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }
}

/// Normalized deeplink: the path components of a URL, independent of how the
/// link reached the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deeplink {
    pub components: Vec<DeeplinkComponent>,
}

impl Deeplink {
    pub fn new(components: Vec<DeeplinkComponent>) -> Self {
        Self { components }
    }

    /// Parse `url` if it uses `scheme`. Schemes compare case-insensitively.
    ///
    /// The host and every path segment become components, in order. Query
    /// arguments are attached to the last component. Names and values are
    /// percent-decoded.
    ///
    /// `myapp://detail?flag&value=123` gives one `detail` component with a
    /// flag argument and a value argument.
    pub fn from_url(url: &str, scheme: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        if !url.scheme().eq_ignore_ascii_case(scheme) {
            return None;
        }
        Some(Self::from_parts(url.host_str(), &url))
    }

    /// Parse a universal link served from `domain`.
    ///
    /// Only https links are accepted unless `secure` is false. The domain
    /// itself is not a component, and its port is ignored.
    pub fn from_universal_link(url: &str, domain: &str, secure: bool) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let scheme_allowed = url.scheme() == "https" || (!secure && url.scheme() == "http");
        if !scheme_allowed || !url.host_str()?.eq_ignore_ascii_case(domain) {
            return None;
        }
        Some(Self::from_parts(None, &url))
    }

    pub fn first(&self) -> Option<&DeeplinkComponent> {
        self.components.first()
    }

    /// This deeplink without its first component.
    pub fn tail(&self) -> Deeplink {
        Self {
            components: self.components.iter().skip(1).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn from_parts(host: Option<&str>, url: &Url) -> Self {
        let mut components: Vec<DeeplinkComponent> = host
            .into_iter()
            .chain(url.path_segments().into_iter().flatten())
            .filter(|segment| !segment.is_empty())
            .map(|segment| DeeplinkComponent::new(decode(segment)))
            .collect();

        // `query_pairs` reads `flag` and `flag=` alike; the raw pairs keep
        // the difference. Both skip empty pairs, so they line up.
        if let (Some(last), Some(query)) = (components.last_mut(), url.query()) {
            let raw_pairs = query.split('&').filter(|pair| !pair.is_empty());
            for ((name, value), raw) in url.query_pairs().zip(raw_pairs) {
                let argument = if raw.contains('=') {
                    DeeplinkArgument::Value(value.into_owned())
                } else {
                    DeeplinkArgument::Flag
                };
                last.arguments.insert(name.into_owned(), argument);
            }
        }

        Self { components }
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

impl fmt::Display for Deeplink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.components.iter().map(|c| c.name.as_str()).collect();
        write!(f, "/{}", names.join("/"))
    }
}
