//! Branding and site-wide copy broadcast to every view.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HERO_TITLE: &str = "Rəqəmsal dəvətnamə yaratmaq heç vaxt bu qədər asan olmayıb";
pub const DEFAULT_HERO_SUBTITLE: &str = "Vivento ilə toy, nişan, doğum günü və digər tədbirləriniz üçün gözəl dəvətnamələr yaradın.";

/// Social links shown in the footer. Absent links are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
}

impl SocialLinks {
    /// Present links as `(label, target)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("WhatsApp", self.whatsapp.as_deref()),
            ("E-poçt", self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, target)| target.map(|t| (label, t)))
        .filter(|(_, target)| !target.trim().is_empty())
        .collect()
    }

    pub fn apply(&mut self, patch: SocialLinksPatch) {
        if let Some(value) = patch.facebook {
            self.facebook = Some(value);
        }
        if let Some(value) = patch.instagram {
            self.instagram = Some(value);
        }
        if let Some(value) = patch.whatsapp {
            self.whatsapp = Some(value);
        }
        if let Some(value) = patch.email {
            self.email = Some(value);
        }
    }
}

/// Site-wide branding. [`Default`] is the copy shipped before the backend answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_logo: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub social: SocialLinks,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_logo: None,
            hero_title: DEFAULT_HERO_TITLE.to_string(),
            hero_subtitle: DEFAULT_HERO_SUBTITLE.to_string(),
            social: SocialLinks::default(),
        }
    }
}

impl SiteSettings {
    /// Shallow merge: only fields present in `patch` replace current values.
    pub fn apply(&mut self, patch: SiteSettingsPatch) {
        if let Some(logo) = patch.site_logo {
            self.site_logo = Some(logo);
        }
        if let Some(title) = patch.hero_title.filter(|t| !t.trim().is_empty()) {
            self.hero_title = title;
        }
        if let Some(subtitle) = patch.hero_subtitle.filter(|s| !s.trim().is_empty()) {
            self.hero_subtitle = subtitle;
        }
        if let Some(social) = patch.social_links {
            self.social.apply(social);
        }
    }

    #[must_use]
    pub fn merged(mut self, patch: SiteSettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial settings as returned by `GET /api/site/settings`.
///
/// Unknown fields are ignored so backend additions never break the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettingsPatch {
    pub site_logo: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub social_links: Option<SocialLinksPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinksPatch {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
}
