//! REST client for the Vivento backend.
//!
//! # Endpoints
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | `GET`  | `/api/slides` | hero slides ([`Slide`]) |
//! | `GET`  | `/api/site/settings` | partial branding ([`SiteSettingsPatch`]) |
//! | `GET`  | `/api/templates` | invitation templates ([`Template`]) |
//! | `POST` | `/api/auth/forgot-password` | password-reset link request |
//!
//! # Error Handling
//!
//! Every call returns [`ApiError`]. Callers on the landing page treat any error
//! the same way: log it and keep their default content. There is no retry
//! layer; a failed fetch stays failed until the user refreshes.

use std::sync::OnceLock;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub use vivento_types;
use vivento_types::{EmailAddress, SiteSettingsPatch, Slide, Template};

/// Production backend.
pub const DEFAULT_BACKEND_URL: &str = "https://vivento.az";

pub const SLIDES_PATH: &str = "api/slides";
pub const SITE_SETTINGS_PATH: &str = "api/site/settings";
pub const TEMPLATES_PATH: &str = "api/templates";
pub const FORGOT_PASSWORD_PATH: &str = "api/auth/forgot-password";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend URL {url:?} must use http or https")]
    UnsupportedScheme { url: String },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status for `Status` errors.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Shared connection pool for all backend calls.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::new()
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .user_agent(concat!("vivento/", env!("CARGO_PKG_VERSION")))
}

async fn read_capped_error_body(response: reqwest::Response) -> String {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Parse and normalize a backend base URL so relative endpoint paths join under it.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|source| ApiError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::UnsupportedScheme {
            url: trimmed.to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_http_client(base_url, http_client().clone())
    }

    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self, ApiError> {
        Ok(Self {
            base: parse_base_url(base_url)?,
            http,
        })
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|source| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                source,
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path,
                source,
            })?;
        let response = check_status(path, response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path,
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            endpoint: path,
            source,
        })
    }

    /// All slides the backend knows about, active or not.
    pub async fn slides(&self) -> Result<Vec<Slide>, ApiError> {
        self.get_json(SLIDES_PATH).await
    }

    pub async fn site_settings(&self) -> Result<SiteSettingsPatch, ApiError> {
        self.get_json(SITE_SETTINGS_PATH).await
    }

    pub async fn templates(&self) -> Result<Vec<Template>, ApiError> {
        self.get_json(TEMPLATES_PATH).await
    }

    /// Ask the backend to mail a reset link. Any 2xx counts as accepted.
    pub async fn request_password_reset(&self, email: &EmailAddress) -> Result<(), ApiError> {
        let url = self.endpoint(FORGOT_PASSWORD_PATH)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(&ForgotPasswordRequest {
                email: email.as_str(),
            })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: FORGOT_PASSWORD_PATH,
                source,
            })?;
        check_status(FORGOT_PASSWORD_PATH, response).await?;
        Ok(())
    }
}

async fn check_status(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = read_capped_error_body(response).await;
    Err(ApiError::Status {
        endpoint,
        status,
        body,
    })
}
