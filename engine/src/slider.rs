//! Hero slider: CMS slides in an auto-advancing, wrap-around carousel.

use std::time::Duration;

use vivento_api::ApiError;
use vivento_types::{Slide, active_slides};

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderState {
    Loading,
    /// No slides to show (none configured, all inactive, or the fetch failed).
    /// The host renders the default hero from site settings instead.
    Fallback,
    Carousel {
        slides: Vec<Slide>,
        current: usize,
    },
}

#[derive(Debug)]
pub struct HeroSlider {
    state: SliderState,
    autoplay: Option<Duration>,
    since_advance: Duration,
}

impl Default for HeroSlider {
    fn default() -> Self {
        Self::new(Some(DEFAULT_AUTOPLAY_INTERVAL))
    }
}

impl HeroSlider {
    /// `autoplay` of `None` (or zero) disables auto-advance.
    #[must_use]
    pub fn new(autoplay: Option<Duration>) -> Self {
        Self {
            state: SliderState::Loading,
            autoplay: autoplay.filter(|d| !d.is_zero()),
            since_advance: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SliderState::Loading)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.state {
            SliderState::Carousel { slides, .. } => slides.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            SliderState::Carousel { current, .. } => Some(*current),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        match &self.state {
            SliderState::Carousel { slides, current } => slides.get(*current),
            _ => None,
        }
    }

    /// Mark a reload in flight. The current slides stay visible until it lands.
    pub fn begin_reload(&mut self) {
        if matches!(self.state, SliderState::Fallback) {
            self.state = SliderState::Loading;
        }
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Slide>, ApiError>) {
        let slides = match result {
            Ok(slides) => active_slides(slides),
            Err(err) => {
                tracing::warn!("Slide fetch failed: {err}");
                Vec::new()
            }
        };
        tracing::debug!(count = slides.len(), "Hero slides loaded");
        self.since_advance = Duration::ZERO;
        self.state = if slides.is_empty() {
            SliderState::Fallback
        } else {
            SliderState::Carousel { slides, current: 0 }
        };
    }

    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn prev(&mut self) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        self.step(len - 1)
    }

    /// Jump to a slide (dot navigation). Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let SliderState::Carousel { slides, current } = &mut self.state else {
            return false;
        };
        if index >= slides.len() {
            return false;
        }
        *current = index;
        self.since_advance = Duration::ZERO;
        true
    }

    fn step(&mut self, offset: usize) -> bool {
        let SliderState::Carousel { slides, current } = &mut self.state else {
            return false;
        };
        if slides.len() < 2 {
            return false;
        }
        *current = (*current + offset) % slides.len();
        self.since_advance = Duration::ZERO;
        true
    }

    /// Autoplay tick.
    pub fn advance(&mut self, delta: Duration) {
        let Some(interval) = self.autoplay else {
            return;
        };
        if self.len() < 2 {
            return;
        }
        self.since_advance = self.since_advance.saturating_add(delta);
        let steps = (self.since_advance.as_millis() / interval.as_millis()) as usize;
        if steps == 0 {
            return;
        }
        let remainder = self.since_advance.as_millis() % interval.as_millis();
        self.step(steps % self.len());
        self.since_advance = Duration::from_millis(remainder as u64);
    }
}
