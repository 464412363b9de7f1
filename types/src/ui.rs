//! Presentation options shared by the engine (state ownership) and tui
//! (rendering), with no ratatui dependency.

/// How much detail the agent architecture view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Plain-language skill summaries.
    #[default]
    Simple,
    /// Skills with example IO, MCP latencies, model names.
    Technical,
}

impl ViewMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Simple => ViewMode::Technical,
            ViewMode::Technical => ViewMode::Simple,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ViewMode::Simple => "Simple",
            ViewMode::Technical => "Technical",
        }
    }
}

/// Accessibility and rendering switches, sourced from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and progress markers.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable motion (spinner animation, progress sweep).
    pub reduced_motion: bool,
}
