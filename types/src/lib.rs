//! Core domain types for Vivento.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod content;
mod email;
mod options;
mod reveal;
mod site;

pub use content::{Slide, Template, active_slides};
pub use email::{EmailAddress, EmailError};
pub use options::UiOptions;
pub use reveal::{ColorScheme, RevealStage};
pub use site::{
    DEFAULT_HERO_SUBTITLE, DEFAULT_HERO_TITLE, SiteSettings, SiteSettingsPatch, SocialLinks,
    SocialLinksPatch,
};

/// Truncate `raw` to at most `max` characters, appending an ellipsis when cut.
#[must_use]
pub fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if raw.chars().count() <= max {
        return raw.to_string();
    }
    let mut out: String = raw.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
