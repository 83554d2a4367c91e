//! Forgot-password form.
//!
//! The request outcome is never shown to the user as success vs failure:
//! both land on the same "check your inbox" screen so the form cannot be used
//! to discover which addresses have accounts.

use std::mem;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use vivento_api::ApiError;
use vivento_types::{EmailAddress, EmailError};

const MAX_EMAIL_CHARS: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("E-poçt ünvanı daxil edin")]
    EmptyEmail,
    #[error("Düzgün e-poçt formatı daxil edin")]
    InvalidEmail,
}

impl From<EmailError> for ResetError {
    fn from(value: EmailError) -> Self {
        match value {
            EmailError::Empty => Self::EmptyEmail,
            EmailError::Malformed => Self::InvalidEmail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetFormState {
    Editing {
        input: String,
        error: Option<ResetError>,
    },
    Submitting {
        email: EmailAddress,
    },
    Sent {
        email: EmailAddress,
    },
}

impl Default for ResetFormState {
    fn default() -> Self {
        Self::Editing {
            input: String::new(),
            error: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct PasswordResetForm {
    state: ResetFormState,
}

impl PasswordResetForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ResetFormState {
        &self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ResetFormState::Submitting { .. })
    }

    #[must_use]
    pub fn input(&self) -> &str {
        match &self.state {
            ResetFormState::Editing { input, .. } => input,
            ResetFormState::Submitting { email } | ResetFormState::Sent { email } => {
                email.as_str()
            }
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<ResetError> {
        match &self.state {
            ResetFormState::Editing { error, .. } => *error,
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let ResetFormState::Editing { input, error } = &mut self.state
            && !c.is_control()
            && input.chars().count() < MAX_EMAIL_CHARS
        {
            input.push(c);
            *error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let ResetFormState::Editing { input, error } = &mut self.state
            && let Some((idx, _)) = input.grapheme_indices(true).next_back()
        {
            input.truncate(idx);
            *error = None;
        }
    }

    pub fn clear(&mut self) {
        if let ResetFormState::Editing { input, error } = &mut self.state {
            input.clear();
            *error = None;
        }
    }

    /// Validate and move to `Submitting`. The caller sends the request for the returned address.
    ///
    /// Returns `None` when validation failed (the error is shown inline) or when
    /// the form is not editable.
    pub fn submit(&mut self) -> Option<EmailAddress> {
        let ResetFormState::Editing { input, error } = &mut self.state else {
            return None;
        };
        match EmailAddress::parse(input.as_str()) {
            Ok(email) => {
                self.state = ResetFormState::Submitting {
                    email: email.clone(),
                };
                Some(email)
            }
            Err(err) => {
                *error = Some(err.into());
                None
            }
        }
    }

    /// Record the request outcome and return the toast to show.
    pub fn complete(&mut self, result: Result<(), ApiError>) -> &'static str {
        let email = match mem::take(&mut self.state) {
            ResetFormState::Submitting { email } => email,
            other => {
                self.state = other;
                return "";
            }
        };
        let toast = match result {
            Ok(()) => {
                tracing::info!("Password reset link requested");
                "Şifrə bərpa linki göndərildi"
            }
            Err(err) => {
                tracing::warn!("Password reset request failed: {err}");
                "Əgər bu e-poçt qeydiyyatdan keçibsə, şifrə bərpa linki göndərildi"
            }
        };
        self.state = ResetFormState::Sent { email };
        toast
    }

    /// From the confirmation screen back to the form, keeping the last address.
    pub fn try_another(&mut self) {
        if let ResetFormState::Sent { email } = &self.state {
            self.state = ResetFormState::Editing {
                input: email.as_str().to_string(),
                error: None,
            };
        }
    }

    pub fn reset(&mut self) {
        self.state = ResetFormState::default();
    }
}
