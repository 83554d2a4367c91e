//! Core engine for Vivento - landing state machine and orchestration.
//!
//! This crate contains the App state machine without TUI dependencies.

use std::future::Future;
use std::mem;
use std::time::{Duration, Instant};

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::{mpsc, oneshot};

pub use vivento_api::{self, ApiClient, ApiError};
pub use vivento_types::{
    ColorScheme, EmailAddress, RevealStage, SiteSettings, SiteSettingsPatch, Slide, SocialLinks,
    Template, UiOptions,
};

pub mod config;
mod landing;
mod notifications;
mod password_reset;
mod reveal;
mod settings;
mod slider;
mod timers;

pub use config::{ConfigError, LaunchSettings, VivConfig};
pub use landing::{
    FEATURED_TEMPLATE_COUNT, FEATURES, Feature, FeaturedTemplates, PRICING_PLANS, PricingPlan,
    builtin_templates,
};
pub use notifications::{TOAST_LIFETIME, Toast, ToastKind, ToastQueue};
pub use password_reset::{PasswordResetForm, ResetError, ResetFormState};
pub use reveal::{
    AUTO_START_DELAY, CONTENT_REVEAL_DELAY, HIDDEN_DELAY, OPENED_DELAY, RevealConfig,
    RevealSequencer,
};
pub use settings::SiteSettingsContext;
pub use slider::{DEFAULT_AUTOPLAY_INTERVAL, HeroSlider, SliderState};
pub use timers::TimerSet;

const FETCH_EVENT_CHANNEL_CAPACITY: usize = 16;

const SETTINGS_FAILED_TOAST: &str = "Sayt ayarlarını yükləmək mümkün olmadı";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    ForgotPassword,
}

// ============================================================================
// Background fetches
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Slides,
    Settings,
    Templates,
    PasswordReset,
}

#[derive(Debug)]
enum FetchEvent {
    Slides(Result<Vec<Slide>, ApiError>),
    Settings(Result<SiteSettingsPatch, ApiError>),
    Templates(Result<Vec<Template>, ApiError>),
    PasswordReset(Result<(), ApiError>),
}

impl FetchEvent {
    fn kind(&self) -> FetchKind {
        match self {
            Self::Slides(_) => FetchKind::Slides,
            Self::Settings(_) => FetchKind::Settings,
            Self::Templates(_) => FetchKind::Templates,
            Self::PasswordReset(_) => FetchKind::PasswordReset,
        }
    }
}

/// A spawned fetch. A result is applied only while its generation is still the
/// live one for its kind; anything older was superseded by a newer request.
#[derive(Debug)]
struct InFlight {
    kind: FetchKind,
    generation: u64,
    handle: AbortHandle,
}

/// A mounted envelope overlay and the receiving end of its completion hook.
#[derive(Debug)]
struct Envelope {
    sequencer: RevealSequencer,
    completed: oneshot::Receiver<()>,
}

impl Envelope {
    fn mount(config: RevealConfig) -> Self {
        let (tx, completed) = oneshot::channel();
        let sequencer = RevealSequencer::new(config, move || {
            let _ = tx.send(());
        });
        Self {
            sequencer,
            completed,
        }
    }
}

// ============================================================================
// App
// ============================================================================

#[derive(Debug)]
pub struct App {
    page: Page,
    envelope: Option<Envelope>,
    settings: SiteSettingsContext,
    slider: HeroSlider,
    templates: FeaturedTemplates,
    reset_form: PasswordResetForm,
    toasts: ToastQueue,
    ui_options: UiOptions,
    api: ApiClient,
    fetch_tx: mpsc::Sender<(u64, FetchEvent)>,
    fetch_rx: mpsc::Receiver<(u64, FetchEvent)>,
    in_flight: Vec<InFlight>,
    next_generation: u64,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(launch: &LaunchSettings) -> Result<Self, ApiError> {
        let api = ApiClient::new(&launch.backend_url)?;
        Ok(Self::with_api(launch, api))
    }

    #[must_use]
    pub fn with_api(launch: &LaunchSettings, api: ApiClient) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel(FETCH_EVENT_CHANNEL_CAPACITY);
        Self {
            page: Page::Landing,
            envelope: launch.envelope.map(Envelope::mount),
            settings: SiteSettingsContext::default(),
            slider: HeroSlider::new(launch.slider_autoplay),
            templates: FeaturedTemplates::default(),
            reset_form: PasswordResetForm::new(),
            toasts: ToastQueue::new(),
            ui_options: launch.ui,
            api,
            fetch_tx,
            fetch_rx,
            in_flight: Vec::new(),
            next_generation: 0,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    /// Kick off the initial backend fetches. Must run inside a tokio runtime.
    pub fn load(&mut self) {
        self.refresh();
        let api = self.api.clone();
        self.spawn_fetch(FetchKind::Templates, async move {
            FetchEvent::Templates(api.templates().await)
        });
    }

    /// Re-fetch site settings and slides.
    pub fn refresh(&mut self) {
        if self.settings.begin_refresh() {
            let api = self.api.clone();
            self.spawn_fetch(FetchKind::Settings, async move {
                FetchEvent::Settings(api.site_settings().await)
            });
        }
        self.slider.begin_reload();
        let api = self.api.clone();
        self.spawn_fetch(FetchKind::Slides, async move {
            FetchEvent::Slides(api.slides().await)
        });
    }

    fn spawn_fetch<F>(&mut self, kind: FetchKind, task: F)
    where
        F: Future<Output = FetchEvent> + Send + 'static,
    {
        if let Some(pos) = self.in_flight.iter().position(|f| f.kind == kind) {
            let stale = self.in_flight.swap_remove(pos);
            stale.handle.abort();
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.push(InFlight {
            kind,
            generation,
            handle,
        });

        let tx = self.fetch_tx.clone();
        tokio::spawn(Abortable::new(
            async move {
                let _ = tx.send((generation, task.await)).await;
            },
            registration,
        ));
    }

    fn poll_fetches(&mut self) {
        while let Ok((generation, event)) = self.fetch_rx.try_recv() {
            let kind = event.kind();
            let Some(pos) = self
                .in_flight
                .iter()
                .position(|f| f.kind == kind && f.generation == generation)
            else {
                tracing::debug!(?kind, generation, "Dropping superseded fetch result");
                continue;
            };
            self.in_flight.swap_remove(pos);
            self.apply_fetch_event(event);
        }
    }

    fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Slides(result) => self.slider.apply_fetch(result),
            FetchEvent::Settings(result) => {
                let failed = result.is_err();
                self.settings.apply_fetch(result);
                if failed {
                    self.toasts.push(ToastKind::Error, SETTINGS_FAILED_TOAST);
                }
            }
            FetchEvent::Templates(result) => self.templates.apply_fetch(result),
            FetchEvent::PasswordReset(result) => {
                let kind = if result.is_ok() {
                    ToastKind::Success
                } else {
                    ToastKind::Info
                };
                let message = self.reset_form.complete(result);
                self.toasts.push(kind, message);
            }
        }
    }

    /// Wall-clock time since the previous frame.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Per-frame update driven by the wall clock.
    pub fn tick(&mut self) {
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    /// Per-frame update with an explicit delta.
    pub fn advance(&mut self, delta: Duration) {
        self.poll_fetches();
        if let Some(envelope) = &mut self.envelope {
            envelope.sequencer.advance(delta);
        }
        self.poll_envelope();
        if self.envelope.is_none() {
            self.slider.advance(delta);
        }
        self.toasts.advance(delta);
    }

    fn poll_envelope(&mut self) {
        let Some(envelope) = &mut self.envelope else {
            return;
        };
        if envelope.completed.try_recv().is_ok() {
            tracing::info!(
                color_scheme = envelope.sequencer.color_scheme().as_str(),
                "Envelope reveal complete"
            );
            self.envelope = None;
            self.last_frame = Instant::now();
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// The envelope overlay, while it still covers the viewport.
    #[must_use]
    pub fn envelope(&self) -> Option<&RevealSequencer> {
        self.envelope
            .as_ref()
            .map(|e| &e.sequencer)
            .filter(|s| s.wants_overlay())
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.envelope().is_some()
    }

    #[must_use]
    pub fn site_settings(&self) -> &SiteSettings {
        self.settings.settings()
    }

    #[must_use]
    pub fn settings_loading(&self) -> bool {
        self.settings.is_loading()
    }

    #[must_use]
    pub fn slider(&self) -> &HeroSlider {
        &self.slider
    }

    #[must_use]
    pub fn featured_templates(&self) -> &[Template] {
        self.templates.templates()
    }

    #[must_use]
    pub fn reset_form(&self) -> &PasswordResetForm {
        &self.reset_form
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------------
    // Envelope actions
    // ------------------------------------------------------------------------

    pub fn open_envelope(&mut self) -> bool {
        let Some(envelope) = &mut self.envelope else {
            return false;
        };
        let started = envelope.sequencer.start();
        if started {
            tracing::debug!("Envelope opening");
        }
        started
    }

    pub fn skip_envelope(&mut self) -> bool {
        let Some(envelope) = &mut self.envelope else {
            return false;
        };
        let skipped = envelope.sequencer.skip();
        if skipped {
            tracing::debug!("Envelope skipped");
        }
        self.poll_envelope();
        skipped
    }

    // ------------------------------------------------------------------------
    // Landing actions
    // ------------------------------------------------------------------------

    pub fn next_slide(&mut self) -> bool {
        self.slider.next()
    }

    pub fn prev_slide(&mut self) -> bool {
        self.slider.prev()
    }

    pub fn select_slide(&mut self, index: usize) -> bool {
        self.slider.select(index)
    }

    pub fn show_forgot_password(&mut self) {
        self.page = Page::ForgotPassword;
    }

    /// Leave the current page. A finished reset form is cleared so the next visit starts fresh.
    pub fn back(&mut self) {
        if self.page == Page::ForgotPassword
            && matches!(self.reset_form.state(), ResetFormState::Sent { .. })
        {
            self.reset_form.reset();
        }
        self.page = Page::Landing;
    }

    // ------------------------------------------------------------------------
    // Password reset actions
    // ------------------------------------------------------------------------

    pub fn reset_insert_char(&mut self, c: char) {
        self.reset_form.insert_char(c);
    }

    pub fn reset_backspace(&mut self) {
        self.reset_form.backspace();
    }

    pub fn reset_clear(&mut self) {
        self.reset_form.clear();
    }

    pub fn reset_try_another(&mut self) {
        self.reset_form.try_another();
    }

    /// Validate the form and send the reset request. Must run inside a tokio runtime.
    pub fn submit_reset(&mut self) -> bool {
        let Some(email) = self.reset_form.submit() else {
            return false;
        };
        let api = self.api.clone();
        self.spawn_fetch(FetchKind::PasswordReset, async move {
            FetchEvent::PasswordReset(api.request_password_reset(&email).await)
        });
        true
    }

    #[must_use]
    pub fn fetches_in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for fetch in mem::take(&mut self.in_flight) {
            fetch.handle.abort();
        }
    }
}
