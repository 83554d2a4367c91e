//! CMS-managed landing content: hero slides and invitation templates.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// One hero slide as served by `GET /api/slides`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Slide {
    /// Call-to-action label and target, if the slide has a button.
    ///
    /// A button without a link points at registration.
    #[must_use]
    pub fn call_to_action(&self) -> Option<(&str, &str)> {
        let text = self.button_text.as_deref().filter(|t| !t.trim().is_empty())?;
        let link = self
            .button_link
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("/register");
        Some((text, link))
    }
}

/// Keep active slides only, in display order. Ties keep backend order.
#[must_use]
pub fn active_slides(slides: Vec<Slide>) -> Vec<Slide> {
    let mut active: Vec<Slide> = slides.into_iter().filter(|s| s.is_active).collect();
    active.sort_by_key(|s| s.order);
    active
}

/// An invitation template summary as served by `GET /api/templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub is_premium: bool,
}
