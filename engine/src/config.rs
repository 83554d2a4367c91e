use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use vivento_api::DEFAULT_BACKEND_URL;
use vivento_types::{ColorScheme, UiOptions};

use crate::reveal::RevealConfig;
use crate::slider::DEFAULT_AUTOPLAY_INTERVAL;

pub const BACKEND_URL_ENV: &str = "VIVENTO_BACKEND_URL";
pub const ENVELOPE_ENV: &str = "VIVENTO_ENVELOPE";

const fn default_true() -> bool {
    true
}

/// `~/.vivento/config.toml`, as written by the user.
#[derive(Debug, Default, Deserialize)]
pub struct VivConfig {
    pub app: Option<AppConfig>,
    pub envelope: Option<EnvelopeConfig>,
    pub slider: Option<SliderConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Base URL of the REST backend. `${VAR}` references are expanded.
    pub backend_url: Option<String>,
    /// Use ASCII-only glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Render the final pose of each animation instead of motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// ```toml
/// [envelope]
/// enabled = true
/// color_scheme = "classic"
/// auto_start = true
/// ```
#[derive(Debug, Deserialize)]
pub struct EnvelopeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub auto_start: bool,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color_scheme: None,
            auto_start: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_true")]
    pub autoplay: bool,
    pub autoplay_interval_ms: Option<u64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: None,
        }
    }
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let var = &after[..close];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

impl VivConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {}: {source}", path.display());
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {}: {source}", path.display());
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vivento").join("config.toml"))
}

/// Effective startup settings: defaults, then the config file, then the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub backend_url: String,
    pub ui: UiOptions,
    /// `None` when the envelope overlay is disabled.
    pub envelope: Option<RevealConfig>,
    /// `None` disables slider autoplay.
    pub slider_autoplay: Option<Duration>,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self::resolve_with(None, |_| None)
    }
}

impl LaunchSettings {
    #[must_use]
    pub fn resolve(config: Option<&VivConfig>) -> Self {
        Self::resolve_with(config, |key| env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) with an injectable environment lookup.
    pub fn resolve_with(config: Option<&VivConfig>, env: impl Fn(&str) -> Option<String>) -> Self {
        let app = config.and_then(|c| c.app.as_ref());
        let envelope = config.and_then(|c| c.envelope.as_ref());
        let slider = config.and_then(|c| c.slider.as_ref());

        let backend_url = env(BACKEND_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                app.and_then(|a| a.backend_url.as_deref())
                    .map(expand_env_vars)
                    .filter(|v| !v.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let ui = app.map_or_else(UiOptions::default, |a| UiOptions {
            ascii_only: a.ascii_only,
            high_contrast: a.high_contrast,
            reduced_motion: a.reduced_motion,
        });

        let mut envelope_enabled = envelope.is_none_or(|e| e.enabled);
        if let Some(raw) = env(ENVELOPE_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => envelope_enabled = true,
                "0" | "false" | "off" => envelope_enabled = false,
                other => tracing::warn!("Ignoring {ENVELOPE_ENV}={other:?}; expected 0 or 1"),
            }
        }
        let envelope = envelope_enabled.then(|| RevealConfig {
            color_scheme: envelope
                .and_then(|e| e.color_scheme.as_deref())
                .map(|raw| ColorScheme::parse(&expand_env_vars(raw)))
                .unwrap_or_default(),
            auto_start: envelope.is_some_and(|e| e.auto_start),
        });

        let slider_autoplay = match slider {
            Some(s) if !s.autoplay => None,
            Some(SliderConfig {
                autoplay_interval_ms: Some(ms),
                ..
            }) if *ms > 0 => Some(Duration::from_millis(*ms)),
            _ => Some(DEFAULT_AUTOPLAY_INTERVAL),
        };

        Self {
            backend_url,
            ui,
            envelope,
            slider_autoplay,
        }
    }
}
