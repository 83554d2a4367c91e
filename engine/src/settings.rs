//! Site settings context: the branding every view reads.
//!
//! Starts from [`SiteSettings::default`] and is refreshed by merging whatever
//! `GET /api/site/settings` returns. A failed refresh keeps the current values.

use vivento_api::ApiError;
use vivento_types::{SiteSettings, SiteSettingsPatch};

#[derive(Debug, Default)]
pub struct SiteSettingsContext {
    settings: SiteSettings,
    loading: bool,
}

impl SiteSettingsContext {
    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Merge a local patch (fields absent from `patch` are kept).
    pub fn update(&mut self, patch: SiteSettingsPatch) {
        self.settings.apply(patch);
    }

    /// Mark a refresh in flight. Returns `false` if one already is.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Finish a refresh. Returns whether the visible settings changed.
    pub fn apply_fetch(&mut self, result: Result<SiteSettingsPatch, ApiError>) -> bool {
        self.loading = false;
        match result {
            Ok(patch) => {
                let before = self.settings.clone();
                self.settings.apply(patch);
                let changed = before != self.settings;
                tracing::info!(changed, "Site settings loaded");
                changed
            }
            Err(err) => {
                tracing::warn!("Site settings fetch failed: {err}");
                false
            }
        }
    }
}
