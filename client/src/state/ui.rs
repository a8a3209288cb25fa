//! Local presentation preferences.
//!
//! DESIGN
//! ======
//! Kept apart from the fetched domain lists so layout switches never touch
//! camp or registration data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Grid density of the available-camps page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogLayout {
    #[default]
    ThreeColumns,
    TwoColumns,
}

impl CatalogLayout {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::ThreeColumns => Self::TwoColumns,
            Self::TwoColumns => Self::ThreeColumns,
        }
    }

    #[must_use]
    pub fn grid_class(self) -> &'static str {
        match self {
            Self::ThreeColumns => "camp-grid camp-grid--three",
            Self::TwoColumns => "camp-grid camp-grid--two",
        }
    }

    /// Label of the button that switches to the other layout.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::ThreeColumns => "Switch to 2 Columns",
            Self::TwoColumns => "Switch to 3 Columns",
        }
    }

    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::ThreeColumns => "three",
            Self::TwoColumns => "two",
        }
    }

    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "two" { Self::TwoColumns } else { Self::ThreeColumns }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub catalog_layout: CatalogLayout,
}
