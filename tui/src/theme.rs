//! Color theme and glyphs for the Meridian TUI.
//!
//! Deep-navy carrier palette by default with an optional high-contrast
//! override; all glyphs have ASCII fallbacks.

use ratatui::style::{Color, Modifier, Style};

use meridian_engine::UiOptions;

/// Default palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(13, 17, 28); // harbor night
    pub const BG_PANEL: Color = Color::Rgb(21, 27, 43);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(33, 42, 66);
    pub const BG_BORDER: Color = Color::Rgb(58, 70, 102);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(222, 226, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(170, 180, 199);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 120, 142);

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(94, 156, 230); // ledger blue
    pub const TEAL: Color = Color::Rgb(92, 201, 192);
    pub const GREEN: Color = Color::Rgb(140, 196, 116);
    pub const YELLOW: Color = Color::Rgb(229, 192, 123);
    pub const ORANGE: Color = Color::Rgb(235, 155, 100);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    // === Semantic aliases ===
    pub const ACCENT: Color = TEAL;
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = YELLOW;
    pub const HUMAN: Color = ORANGE;
    pub const ERROR: Color = RED;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub human: Color,
    pub error: Color,
}

/// Resolve the palette for the current UI options.
#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            primary: Color::LightBlue,
            accent: Color::LightCyan,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            human: Color::LightMagenta,
            error: Color::LightRed,
        };
    }
    Palette {
        bg_dark: colors::BG_DARK,
        bg_panel: colors::BG_PANEL,
        bg_highlight: colors::BG_HIGHLIGHT,
        bg_border: colors::BG_BORDER,
        text_primary: colors::TEXT_PRIMARY,
        text_secondary: colors::TEXT_SECONDARY,
        text_muted: colors::TEXT_MUTED,
        primary: colors::PRIMARY,
        accent: colors::ACCENT,
        success: colors::SUCCESS,
        warning: colors::WARNING,
        human: colors::HUMAN,
        error: colors::ERROR,
    }
}

/// Icon set with ASCII fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub step_done: &'static str,
    pub step_pending: &'static str,
    pub step_active: &'static str,
    pub human: &'static str,
    pub bullet: &'static str,
    pub connected: &'static str,
    pub arrow: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            step_done: "[x]",
            step_pending: "[ ]",
            step_active: "[>]",
            human: "*",
            bullet: "-",
            connected: "+",
            arrow: "->",
        }
    } else {
        Glyphs {
            step_done: "✔",
            step_pending: "○",
            step_active: "●",
            human: "👤",
            bullet: "•",
            connected: "●",
            arrow: "→",
        }
    }
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Pick a spinner frame from the animation tick counter.
#[must_use]
pub fn spinner_frame(tick: u64, options: UiOptions) -> &'static str {
    if options.reduced_motion {
        return if options.ascii_only { "*" } else { "●" };
    }
    if options.ascii_only {
        SPINNER_FRAMES_ASCII[(tick / 4) as usize % SPINNER_FRAMES_ASCII.len()]
    } else {
        SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
    }
}

/// Common composed styles.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(p: &Palette) -> Style {
        Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn panel_border(p: &Palette) -> Style {
        Style::default().fg(p.bg_border)
    }

    #[must_use]
    pub fn value(p: &Palette) -> Style {
        Style::default()
            .fg(p.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(p: &Palette) -> Style {
        Style::default().fg(p.text_muted)
    }

    #[must_use]
    pub fn selected(p: &Palette) -> Style {
        Style::default()
            .fg(p.text_primary)
            .bg(p.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }
}
