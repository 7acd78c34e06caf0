//! Type erasure for screens.
//!
//! [`AnyScreen`] compares and hashes by the full wrapped payload: two erased
//! screens are equal only if they wrap the same concrete type with equal values.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::presentation::PresentationStyle;
use crate::navigator::NavigationError;

/// A navigable unit of content.
pub trait Screen: fmt::Debug + Clone + Eq + Hash + Send + Sync + 'static {
    /// How this screen is presented by its predecessor.
    fn presentation_style(&self) -> PresentationStyle;

    /// Erase the concrete type. Erasing an [`AnyScreen`] returns it unchanged.
    fn erase(self) -> AnyScreen {
        AnyScreen::new(self)
    }
}

/// Object-safe view of a [`Screen`].
trait ErasedScreen: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
    fn eq_erased(&self, other: &dyn ErasedScreen) -> bool;
    fn hash_erased(&self, state: &mut dyn Hasher);
    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<S: Screen> ErasedScreen for S {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<S>()
    }

    fn eq_erased(&self, other: &dyn ErasedScreen) -> bool {
        other
            .as_any()
            .downcast_ref::<S>()
            .is_some_and(|other| self == other)
    }

    fn hash_erased(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<S>().hash(&mut state);
        self.hash(&mut state);
    }

    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Type-erased [`Screen`].
#[derive(Clone)]
pub struct AnyScreen {
    inner: Arc<dyn ErasedScreen>,
    presentation_style: PresentationStyle,
}

impl AnyScreen {
    pub fn new<S: Screen>(screen: S) -> Self {
        if let Some(erased) = (&screen as &dyn Any).downcast_ref::<AnyScreen>() {
            return erased.clone();
        }
        let presentation_style = screen.presentation_style();
        Self {
            inner: Arc::new(screen),
            presentation_style,
        }
    }

    /// Borrow the payload as `S`.
    ///
    /// Fails with [`NavigationError::TypeMismatch`] when the payload is of another type.
    pub fn downcast<S: Screen>(&self) -> Result<&S, NavigationError> {
        self.inner
            .as_any()
            .downcast_ref::<S>()
            .ok_or_else(|| NavigationError::TypeMismatch {
                expected: std::any::type_name::<S>(),
                actual: self.inner.type_name(),
            })
    }

    /// Clone the payload out as `S`, or `None` on a type mismatch.
    pub fn unwrap<S: Screen>(&self) -> Option<S> {
        self.downcast::<S>().ok().cloned()
    }

    pub fn is<S: Screen>(&self) -> bool {
        self.inner.as_any().is::<S>()
    }

    /// Fully qualified name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }
}

impl Screen for AnyScreen {
    fn presentation_style(&self) -> PresentationStyle {
        self.presentation_style.clone()
    }
}

impl PartialEq for AnyScreen {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_erased(other.inner.as_ref())
    }
}

impl Eq for AnyScreen {}

impl Hash for AnyScreen {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash_erased(state);
    }
}

impl fmt::Debug for AnyScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_erased(f)
    }
}
