//! Envelope reveal vocabulary shared by the engine and the renderer.

use serde::{Deserialize, Serialize};

/// Phase of the envelope reveal.
///
/// Variants are declared in reveal order, so `Ord` doubles as "how far along".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RevealStage {
    #[default]
    Closed,
    Opening,
    Opened,
    Hidden,
}

impl RevealStage {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hidden)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Opened => "opened",
            Self::Hidden => "hidden",
        }
    }
}

/// Cosmetic palette selector for the envelope.
///
/// Parsing never fails: unknown names resolve to [`ColorScheme::Premium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ColorScheme {
    #[default]
    Premium,
    Classic,
    Modern,
}

impl ColorScheme {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "classic" => Self::Classic,
            "modern" => Self::Modern,
            _ => Self::Premium,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Classic => "classic",
            Self::Modern => "modern",
        }
    }
}

impl From<String> for ColorScheme {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ColorScheme {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ColorScheme> for &'static str {
    fn from(value: ColorScheme) -> Self {
        value.as_str()
    }
}
