//! Toast notifications shown in the corner of the screen.
//!
//! Toasts age on the frame tick and disappear after [`TOAST_LIFETIME`].
//! The queue is bounded; when full the oldest toast is dropped.

use std::collections::VecDeque;
use std::time::Duration;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    age: Duration,
}

impl Toast {
    #[must_use]
    pub fn age(&self) -> Duration {
        self.age
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast. An identical visible toast is refreshed instead of duplicated.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        if let Some(existing) = self
            .toasts
            .iter_mut()
            .find(|t| t.kind == kind && t.message == message)
        {
            existing.age = Duration::ZERO;
            return;
        }
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message,
            age: Duration::ZERO,
        });
    }

    pub fn advance(&mut self, delta: Duration) {
        for toast in &mut self.toasts {
            toast.age = toast.age.saturating_add(delta);
        }
        self.toasts.retain(|t| t.age < TOAST_LIFETIME);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
