//! Envelope motion derived from the reveal stage and time spent in it.

use std::time::Duration;

use ratatui::layout::Rect;

use vivento_engine::{
    CONTENT_REVEAL_DELAY, HIDDEN_DELAY, OPENED_DELAY, RevealSequencer, RevealStage,
};

/// Flap swing, measured from `start()`.
const FLAP_DURATION: Duration = CONTENT_REVEAL_DELAY;

/// How the envelope should look on this frame. All fields are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopePose {
    /// 0 = flap down over the seal, 1 = fully open.
    pub flap_open: f32,
    /// 0 = card inside the envelope, 1 = fully out.
    pub card_rise: f32,
    /// 1 = envelope fully drawn, 0 = faded out.
    pub opacity: f32,
    /// Intro scale while the envelope settles in.
    pub scale: f32,
}

impl EnvelopePose {
    const RESTING: Self = Self {
        flap_open: 0.0,
        card_rise: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
}

#[must_use]
pub fn envelope_pose(sequencer: &RevealSequencer, reduced_motion: bool) -> EnvelopePose {
    pose_for(
        sequencer.stage(),
        sequencer.content_visible(),
        sequencer.time_in_stage(),
        reduced_motion,
    )
}

#[must_use]
pub fn pose_for(
    stage: RevealStage,
    content_visible: bool,
    in_stage: Duration,
    reduced_motion: bool,
) -> EnvelopePose {
    match stage {
        RevealStage::Closed if reduced_motion => EnvelopePose::RESTING,
        RevealStage::Closed => EnvelopePose {
            scale: 0.8 + 0.2 * ease_out_cubic(progress(in_stage, Duration::from_millis(600))),
            ..EnvelopePose::RESTING
        },
        RevealStage::Opening => {
            let card_window = OPENED_DELAY - CONTENT_REVEAL_DELAY;
            let (flap_open, card_rise) = if reduced_motion {
                (1.0, if content_visible { 1.0 } else { 0.0 })
            } else {
                let card = if content_visible {
                    ease_out_cubic(progress(
                        in_stage.saturating_sub(CONTENT_REVEAL_DELAY),
                        card_window,
                    ))
                } else {
                    0.0
                };
                (ease_out_cubic(progress(in_stage, FLAP_DURATION)), card)
            };
            EnvelopePose {
                flap_open,
                card_rise,
                ..EnvelopePose::RESTING
            }
        }
        RevealStage::Opened => {
            let opacity = if reduced_motion {
                1.0
            } else {
                1.0 - ease_out_cubic(progress(in_stage, HIDDEN_DELAY - OPENED_DELAY))
            };
            EnvelopePose {
                flap_open: 1.0,
                card_rise: 1.0,
                opacity,
                scale: 1.0,
            }
        }
        RevealStage::Hidden => EnvelopePose {
            flap_open: 1.0,
            card_rise: 1.0,
            opacity: 0.0,
            scale: 1.0,
        },
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[must_use]
pub fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
