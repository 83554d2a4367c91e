//! Color theme and glyphs for the Vivento TUI.
//!
//! Uses a Kanagawa-derived dark palette by default with an optional high-contrast override.
//! Envelope colors follow the selected [`ColorScheme`].

use ratatui::style::{Color, Modifier, Style};

use vivento_engine::{ColorScheme, UiOptions};

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55);
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109);
    pub const BG_OVERLAY: Color = Color::Rgb(30, 20, 48);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);

    // === Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184);
    pub const GOLD: Color = Color::Rgb(212, 175, 55);

    // === Accents ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202);
    pub const GREEN: Color = Color::Rgb(152, 187, 108);
    pub const YELLOW: Color = Color::Rgb(230, 195, 132);
    pub const RED: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub bg_overlay: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub gold: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            bg_overlay: colors::BG_OVERLAY,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            gold: colors::GOLD,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            bg_overlay: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            gold: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Envelope body, flap and trim colors for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopePalette {
    pub body: Color,
    pub flap: Color,
    pub border: Color,
    /// Title ink on the white invitation card.
    pub card_ink: Color,
}

#[must_use]
pub fn envelope_palette(scheme: ColorScheme, options: UiOptions) -> EnvelopePalette {
    if options.high_contrast {
        return EnvelopePalette {
            body: Color::Black,
            flap: Color::Black,
            border: Color::White,
            card_ink: Color::Black,
        };
    }
    match scheme {
        ColorScheme::Premium => EnvelopePalette {
            body: Color::Rgb(245, 245, 220),
            flap: Color::Rgb(240, 230, 210),
            border: colors::GOLD,
            card_ink: colors::GOLD,
        },
        ColorScheme::Classic => EnvelopePalette {
            body: Color::Rgb(255, 255, 255),
            flap: Color::Rgb(240, 240, 240),
            border: Color::Rgb(204, 204, 204),
            card_ink: Color::Rgb(64, 64, 64),
        },
        ColorScheme::Modern => EnvelopePalette {
            body: Color::Rgb(102, 126, 234),
            flap: Color::Rgb(85, 104, 211),
            border: Color::Rgb(255, 255, 255),
            card_ink: Color::Rgb(118, 75, 162),
        },
    }
}

/// ASCII/Unicode glyphs for icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub info: &'static str,
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub seal: &'static str,
    pub premium: &'static str,
    pub confetti: &'static [&'static str],
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            check: "+",
            cross: "x",
            info: "i",
            dot_active: "o",
            dot_inactive: ".",
            arrow_left: "<",
            arrow_right: ">",
            seal: "(V)",
            premium: "*",
            confetti: &["*", "+", "o", "."],
            separator: "|",
        }
    } else {
        Glyphs {
            bullet: "•",
            check: "✓",
            cross: "✗",
            info: "ℹ",
            dot_active: "●",
            dot_inactive: "○",
            arrow_left: "←",
            arrow_right: "→",
            seal: "✉",
            premium: "★",
            confetti: &["✦", "•", "✧", "·"],
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn highlight_border(palette: &Palette) -> Style {
        Style::default().fg(palette.gold)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }
}
