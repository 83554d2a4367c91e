//! Envelope reveal sequencer.
//!
//! Drives the overlay shown before the landing page:
//!
//! ```text
//! Closed --start()--> Opening --+800ms--> (content visible)
//!                             --+1500ms-> Opened --+2800ms--> Hidden
//! Closed | Opening | Opened --skip()--> Hidden
//! ```
//!
//! Delays are measured from the `start()` call on the sequencer's own virtual
//! clock, which the host advances from its frame tick. All pending steps live
//! in one [`TimerSet`]; `skip()` and drop clear it, so a stale step can never
//! move the stage backwards or fire completion twice.

use std::fmt;
use std::time::Duration;

use vivento_types::{ColorScheme, RevealStage};

use crate::timers::TimerSet;

/// Settle delay between mount and the automatic `start()`.
pub const AUTO_START_DELAY: Duration = Duration::from_millis(500);
/// From `start()` until the card is exposed.
pub const CONTENT_REVEAL_DELAY: Duration = Duration::from_millis(800);
/// From `start()` until the envelope is fully open.
pub const OPENED_DELAY: Duration = Duration::from_millis(1500);
/// From `start()` until the overlay goes away.
pub const HIDDEN_DELAY: Duration = Duration::from_millis(2800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealStep {
    AutoStart,
    RevealContent,
    MarkOpened,
    Hide,
}

/// Construction-time options. Both are fixed for the life of the sequencer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealConfig {
    pub color_scheme: ColorScheme,
    pub auto_start: bool,
}

type CompletionHook = Box<dyn FnOnce() + Send + 'static>;

pub struct RevealSequencer {
    stage: RevealStage,
    content_visible: bool,
    color_scheme: ColorScheme,
    auto_start: bool,
    timers: TimerSet<RevealStep>,
    stage_entered_at: Duration,
    on_complete: Option<CompletionHook>,
}

impl fmt::Debug for RevealSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealSequencer")
            .field("stage", &self.stage)
            .field("content_visible", &self.content_visible)
            .field("color_scheme", &self.color_scheme)
            .field("auto_start", &self.auto_start)
            .field("pending_steps", &self.timers.len())
            .field("completion_pending", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

impl RevealSequencer {
    /// Mount a sequencer. `on_complete` runs exactly once, when the stage first reaches
    /// [`RevealStage::Hidden`], and never if the sequencer is dropped before that.
    pub fn new(config: RevealConfig, on_complete: impl FnOnce() + Send + 'static) -> Self {
        let mut timers = TimerSet::new();
        if config.auto_start {
            timers.schedule_after(AUTO_START_DELAY, RevealStep::AutoStart);
        }
        Self {
            stage: RevealStage::Closed,
            content_visible: false,
            color_scheme: config.color_scheme,
            auto_start: config.auto_start,
            timers,
            stage_entered_at: Duration::ZERO,
            on_complete: Some(Box::new(on_complete)),
        }
    }

    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    #[must_use]
    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    #[must_use]
    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    /// Whether the host should cover the viewport with the envelope overlay.
    #[must_use]
    pub fn wants_overlay(&self) -> bool {
        !self.stage.is_terminal()
    }

    /// Virtual time spent in the current stage. Renderers key motion off this.
    #[must_use]
    pub fn time_in_stage(&self) -> Duration {
        self.timers.now().saturating_sub(self.stage_entered_at)
    }

    #[must_use]
    pub fn pending_steps(&self) -> usize {
        self.timers.len()
    }

    /// Open the envelope. Returns `false` (and does nothing) unless the stage is `Closed`.
    pub fn start(&mut self) -> bool {
        if self.stage != RevealStage::Closed {
            tracing::trace!(stage = self.stage.as_str(), "Ignoring reveal start");
            return false;
        }
        // A tap that beats the auto-start settle delay supersedes it.
        self.timers.cancel_where(|step| *step == RevealStep::AutoStart);
        self.enter(RevealStage::Opening);
        self.timers.schedule_after(CONTENT_REVEAL_DELAY, RevealStep::RevealContent);
        self.timers.schedule_after(OPENED_DELAY, RevealStep::MarkOpened);
        self.timers.schedule_after(HIDDEN_DELAY, RevealStep::Hide);
        tracing::debug!(color_scheme = self.color_scheme.as_str(), "Reveal started");
        true
    }

    /// Jump straight to `Hidden`. Returns `false` if the reveal had already finished.
    pub fn skip(&mut self) -> bool {
        if self.stage.is_terminal() {
            return false;
        }
        let cancelled = self.timers.cancel_all();
        tracing::debug!(from = self.stage.as_str(), cancelled, "Reveal skipped");
        self.content_visible = true;
        self.finish();
        true
    }

    /// Feed elapsed time. Every step due within `delta` runs in order.
    pub fn advance(&mut self, delta: Duration) {
        let deadline = self.timers.now().saturating_add(delta);
        while let Some(step) = self.timers.pop_due(deadline) {
            self.apply(step);
        }
        self.timers.settle(deadline);
    }

    fn apply(&mut self, step: RevealStep) {
        match step {
            RevealStep::AutoStart => {
                self.start();
            }
            RevealStep::RevealContent => {
                if self.stage == RevealStage::Opening {
                    self.content_visible = true;
                }
            }
            RevealStep::MarkOpened => {
                if self.stage == RevealStage::Opening {
                    self.enter(RevealStage::Opened);
                }
            }
            RevealStep::Hide => {
                if self.stage == RevealStage::Opened {
                    self.finish();
                }
            }
        }
    }

    fn enter(&mut self, stage: RevealStage) {
        debug_assert!(stage > self.stage, "reveal stage must only move forward");
        self.stage = stage;
        self.stage_entered_at = self.timers.now();
    }

    fn finish(&mut self) {
        self.enter(RevealStage::Hidden);
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl Drop for RevealSequencer {
    fn drop(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            tracing::trace!(cancelled, "Reveal unmounted with steps pending");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn sequencer(config: RevealConfig) -> (RevealSequencer, Arc<AtomicUsize>) {
        let completions = Arc::new(AtomicUsize::new(0));
        let counter = completions.clone();
        let seq = RevealSequencer::new(config, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (seq, completions)
    }

    fn manual() -> (RevealSequencer, Arc<AtomicUsize>) {
        sequencer(RevealConfig::default())
    }

    #[test]
    fn starts_closed_and_covered() {
        let (seq, completions) = manual();
        assert_eq!(seq.stage(), RevealStage::Closed);
        assert!(!seq.content_visible());
        assert!(seq.wants_overlay());
        assert_eq!(seq.pending_steps(), 0);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn closed_waits_for_user_without_auto_start() {
        let (mut seq, _) = manual();
        seq.advance(ms(10_000));
        assert_eq!(seq.stage(), RevealStage::Closed);
    }

    #[test]
    fn content_shows_at_800ms_while_still_opening() {
        let (mut seq, _) = manual();
        assert!(seq.start());
        seq.advance(ms(799));
        assert!(!seq.content_visible());
        seq.advance(ms(1));
        assert!(seq.content_visible());
        assert_eq!(seq.stage(), RevealStage::Opening);
    }

    #[test]
    fn opened_at_1500ms() {
        let (mut seq, _) = manual();
        seq.start();
        seq.advance(ms(1499));
        assert_eq!(seq.stage(), RevealStage::Opening);
        seq.advance(ms(1));
        assert_eq!(seq.stage(), RevealStage::Opened);
        assert!(seq.content_visible());
    }

    #[test]
    fn hidden_at_2800ms_with_single_completion() {
        let (mut seq, completions) = manual();
        seq.start();
        seq.advance(ms(2799));
        assert_eq!(seq.stage(), RevealStage::Opened);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
        seq.advance(ms(1));
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert!(!seq.wants_overlay());
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        seq.advance(ms(60_000));
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn one_large_step_runs_whole_chain_in_order() {
        let (mut seq, completions) = manual();
        seq.start();
        seq.advance(ms(5_000));
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert!(seq.content_visible());
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert_eq!(seq.pending_steps(), 0);
    }

    #[test]
    fn skip_before_start() {
        let (mut seq, completions) = manual();
        assert!(seq.skip());
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert!(seq.content_visible());
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn skip_mid_sequence_cancels_pending_steps() {
        for offset in [0, 100, 900, 1600, 2799] {
            let (mut seq, completions) = manual();
            seq.start();
            seq.advance(ms(offset));
            assert!(seq.skip(), "skip at +{offset}ms");
            assert_eq!(seq.stage(), RevealStage::Hidden);
            assert!(seq.content_visible());
            assert_eq!(seq.pending_steps(), 0);
            seq.advance(ms(10_000));
            assert_eq!(seq.stage(), RevealStage::Hidden);
            assert_eq!(completions.load(Ordering::SeqCst), 1, "skip at +{offset}ms");
        }
    }

    #[test]
    fn skip_after_hidden_is_noop() {
        let (mut seq, completions) = manual();
        seq.start();
        seq.advance(HIDDEN_DELAY);
        assert!(!seq.skip());
        assert!(!seq.skip());
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn second_start_does_not_restart_chain() {
        let (mut seq, _) = manual();
        assert!(seq.start());
        seq.advance(ms(400));
        assert!(!seq.start());
        assert_eq!(seq.pending_steps(), 3);
        // The original chain still fires on its own schedule.
        seq.advance(ms(399));
        assert!(!seq.content_visible());
        seq.advance(ms(1));
        assert!(seq.content_visible());
        seq.advance(ms(700));
        assert_eq!(seq.stage(), RevealStage::Opened);
    }

    #[test]
    fn start_after_skip_is_noop() {
        let (mut seq, completions) = manual();
        seq.skip();
        assert!(!seq.start());
        seq.advance(ms(5_000));
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn auto_start_fires_after_settle_delay() {
        let (mut seq, _) = sequencer(RevealConfig {
            auto_start: true,
            ..Default::default()
        });
        assert!(seq.auto_start());
        seq.advance(ms(499));
        assert_eq!(seq.stage(), RevealStage::Closed);
        seq.advance(ms(1));
        assert_eq!(seq.stage(), RevealStage::Opening);
        assert_eq!(seq.pending_steps(), 3);
    }

    #[test]
    fn auto_start_chain_is_relative_to_auto_start() {
        let (mut seq, completions) = sequencer(RevealConfig {
            auto_start: true,
            ..Default::default()
        });
        // 500ms settle + 2800ms chain, delivered as one tick.
        seq.advance(ms(3_299));
        assert_eq!(seq.stage(), RevealStage::Opened);
        seq.advance(ms(1));
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn tap_before_auto_start_supersedes_it() {
        let (mut seq, _) = sequencer(RevealConfig {
            auto_start: true,
            ..Default::default()
        });
        seq.advance(ms(200));
        assert!(seq.start());
        assert_eq!(seq.pending_steps(), 3);
        seq.advance(ms(800));
        assert!(seq.content_visible());
        seq.advance(ms(700));
        assert_eq!(seq.stage(), RevealStage::Opened);
    }

    #[test]
    fn skip_cancels_pending_auto_start() {
        let (mut seq, completions) = sequencer(RevealConfig {
            auto_start: true,
            ..Default::default()
        });
        seq.skip();
        seq.advance(ms(5_000));
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn color_scheme_does_not_affect_timing() {
        let mut stages = Vec::new();
        for raw in ["premium", "classic", "modern", "holographic"] {
            let (mut seq, completions) = sequencer(RevealConfig {
                color_scheme: ColorScheme::parse(raw),
                auto_start: false,
            });
            seq.start();
            let mut trace = Vec::new();
            for _ in 0..30 {
                seq.advance(ms(100));
                trace.push((seq.stage(), seq.content_visible()));
            }
            assert_eq!(completions.load(Ordering::SeqCst), 1);
            stages.push(trace);
        }
        assert!(stages.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn unknown_color_scheme_is_premium() {
        let (seq, _) = sequencer(RevealConfig {
            color_scheme: ColorScheme::parse("holographic"),
            auto_start: false,
        });
        assert_eq!(seq.color_scheme(), ColorScheme::Premium);
    }

    #[test]
    fn time_in_stage_resets_on_transition() {
        let (mut seq, _) = manual();
        seq.advance(ms(300));
        assert_eq!(seq.time_in_stage(), ms(300));
        seq.start();
        assert_eq!(seq.time_in_stage(), Duration::ZERO);
        seq.advance(ms(1600));
        assert_eq!(seq.stage(), RevealStage::Opened);
        assert_eq!(seq.time_in_stage(), ms(100));
    }

    #[test]
    fn dropping_mid_sequence_never_completes() {
        let (mut seq, completions) = manual();
        seq.start();
        seq.advance(ms(1000));
        drop(seq);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }
}
