//! Light/dark theme state.
//!
//! The controller owns the flag and pushes every value, the initial one
//! included, through its [`ThemeMarker`], so the applied marker always
//! matches the stored flag.

use crate::core::ThemeMarker;

/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

pub struct ThemeController<M: ThemeMarker> {
    dark: bool,
    marker: M,
}

impl<M: ThemeMarker> ThemeController<M> {
    /// Starts in dark mode.
    pub fn new(marker: M) -> Self {
        Self::with_initial(marker, true)
    }

    pub fn with_initial(mut marker: M, dark: bool) -> Self {
        marker.apply(dark);
        Self { dark, marker }
    }

    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.marker.apply(self.dark);
        tracing::debug!("Theme switched to {}", if self.dark { "dark" } else { "light" });
        self.dark
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }
}

/// Tracks the class list of the `<html>` element for the rendered page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootClassMarker {
    class: Option<&'static str>,
}

impl RootClassMarker {
    pub fn class(&self) -> Option<&'static str> {
        self.class
    }
}

impl ThemeMarker for RootClassMarker {
    fn apply(&mut self, dark: bool) {
        self.class = dark.then_some(DARK_CLASS);
    }
}
