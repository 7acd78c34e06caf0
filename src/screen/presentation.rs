use std::fmt;

/// Defines how a screen is presented by its predecessor.
///
/// The style belongs to the content being presented, not to the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PresentationStyle {
    /// Pushed onto the presenter's navigation stack.
    #[default]
    Push,
    /// Presented modally. Without `allows_push` the sheet content is not
    /// embedded in a navigation stack and pushes from it cannot be shown.
    Sheet { allows_push: bool },
    /// Modal sheet resting at the detents described by `style`.
    DetentSheet { allows_push: bool, style: DetentStyle },
}

impl PresentationStyle {
    /// A sheet that supports pushes from its content.
    pub fn sheet() -> Self {
        Self::Sheet { allows_push: true }
    }

    /// A detent sheet with the default style.
    pub fn detent_sheet() -> Self {
        Self::DetentSheet {
            allows_push: true,
            style: DetentStyle::default(),
        }
    }

    pub fn is_push(&self) -> bool {
        matches!(self, Self::Push)
    }

    /// True for both sheet variants.
    pub fn is_modal(&self) -> bool {
        !self.is_push()
    }

    /// Whether content presented with this style lives in its own navigation
    /// stack. Pushes reuse the presenter's stack.
    pub fn allows_push(&self) -> bool {
        match self {
            Self::Push => true,
            Self::Sheet { allows_push } | Self::DetentSheet { allows_push, .. } => *allows_push,
        }
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::Sheet { allows_push: true } => write!(f, "sheet"),
            Self::Sheet { allows_push: false } => write!(f, "sheet(no-push)"),
            Self::DetentSheet { allows_push, style } => {
                write!(f, "detent-sheet[{}]", style)?;
                if !allows_push {
                    write!(f, "(no-push)")?;
                }
                Ok(())
            }
        }
    }
}

/// A height stop a detent sheet can rest at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Detent {
    Medium,
    Large,
    /// Fixed height in points.
    Custom(u32),
}

impl fmt::Display for Detent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detent::Medium => write!(f, "medium"),
            Detent::Large => write!(f, "large"),
            Detent::Custom(points) => write!(f, "{}pt", points),
        }
    }
}

/// Configuration of a detent sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetentStyle {
    pub detents: Vec<Detent>,
    /// Detent the sheet initially rests at. `None` means the smallest one.
    pub selected: Option<Detent>,
    pub grabber_visible: bool,
    /// Scrolling the sheet's content expands the sheet to the next detent.
    pub scrolling_expands: bool,
}

impl DetentStyle {
    pub fn new(detents: Vec<Detent>) -> Self {
        Self {
            detents,
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, detent: Detent) -> Self {
        self.selected = Some(detent);
        self
    }

    pub fn with_grabber(mut self, visible: bool) -> Self {
        self.grabber_visible = visible;
        self
    }

    /// The detent the sheet rests at when first presented.
    pub fn initial_detent(&self) -> Option<Detent> {
        self.selected
            .filter(|detent| self.detents.contains(detent))
            .or_else(|| self.detents.iter().min().copied())
    }
}

impl Default for DetentStyle {
    fn default() -> Self {
        Self {
            detents: vec![Detent::Medium, Detent::Large],
            selected: None,
            grabber_visible: false,
            scrolling_expands: true,
        }
    }
}

impl fmt::Display for DetentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detents: Vec<String> = self.detents.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", detents.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_sheet_allow_push_by_default() {
        assert!(PresentationStyle::Push.allows_push());
        assert!(PresentationStyle::sheet().allows_push());
        assert!(!PresentationStyle::Sheet { allows_push: false }.allows_push());
        assert!(PresentationStyle::detent_sheet().is_modal());
    }

    #[test]
    fn initial_detent_prefers_valid_selection() {
        let style = DetentStyle::new(vec![Detent::Large, Detent::Medium]);
        assert_eq!(style.initial_detent(), Some(Detent::Medium));

        let style = style.with_selected(Detent::Large);
        assert_eq!(style.initial_detent(), Some(Detent::Large));

        let style = DetentStyle::new(vec![Detent::Medium]).with_selected(Detent::Custom(300));
        assert_eq!(style.initial_detent(), Some(Detent::Medium));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(PresentationStyle::detent_sheet().to_string(), "detent-sheet[medium,large]");
        assert_eq!(
            PresentationStyle::Sheet { allows_push: false }.to_string(),
            "sheet(no-push)"
        );
    }
}
