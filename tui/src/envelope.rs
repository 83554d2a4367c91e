//! Full-screen envelope overlay drawn while the reveal is running.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use vivento_engine::{RevealSequencer, RevealStage, UiOptions};

use crate::effects::{EnvelopePose, envelope_pose, scale_rect};
use crate::theme::{EnvelopePalette, Glyphs, Palette, envelope_palette, styles};

const ENVELOPE_MAX_WIDTH: u16 = 56;
const ENVELOPE_MAX_HEIGHT: u16 = 16;
const CARD_HEIGHT: u16 = 5;
const CONFETTI_PIECES: u32 = 30;

pub(crate) fn draw_envelope(
    frame: &mut Frame,
    sequencer: &RevealSequencer,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_overlay)),
        area,
    );

    let pose = envelope_pose(sequencer, options.reduced_motion);
    let colors = envelope_palette(sequencer.color_scheme(), options);

    draw_skip_hint(frame, area, palette, glyphs);

    let base = envelope_rect(area);
    let envelope = scale_rect(base, pose.scale);
    if pose.opacity > 0.05 && envelope.width >= 8 && envelope.height >= 4 {
        let fade = fade_modifier(pose.opacity);
        draw_body(frame, envelope, &colors, fade);
        draw_flap(frame.buffer_mut(), area, envelope, &pose, &colors, fade);
        if sequencer.stage() == RevealStage::Closed {
            draw_seal(frame, envelope, &colors, glyphs, palette);
        }
    }

    if pose.card_rise > 0.0 {
        draw_card(frame, area, base, &pose, &colors);
    }

    if sequencer.stage() == RevealStage::Opened && !options.reduced_motion {
        let t = 1.0 - pose.opacity;
        draw_confetti(frame.buffer_mut(), area, base, t, glyphs, palette);
    }
}

fn envelope_rect(area: Rect) -> Rect {
    let width = ENVELOPE_MAX_WIDTH.min(area.width.saturating_sub(4));
    let height = ENVELOPE_MAX_HEIGHT.min(area.height.saturating_sub(8));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2 + 2,
        width,
        height,
    }
    .intersection(area)
}

fn fade_modifier(opacity: f32) -> Modifier {
    if opacity < 0.5 {
        Modifier::DIM
    } else {
        Modifier::empty()
    }
}

fn draw_skip_hint(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let text = format!("Esc {} keç ", glyphs.cross);
    let width = (text.width() as u16).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1,
    }
    .intersection(area);
    frame.render_widget(
        Paragraph::new(Span::styled(text, styles::key_hint(palette))),
        rect,
    );
}

fn draw_body(frame: &mut Frame, envelope: Rect, colors: &EnvelopePalette, fade: Modifier) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(colors.border).add_modifier(fade))
        .style(Style::default().bg(colors.body));
    frame.render_widget(Clear, envelope);
    frame.render_widget(block, envelope);
}

/// Closed flap hangs as a `V` inside the body; past half-open it folds up above the body as `Λ`.
fn draw_flap(
    buf: &mut Buffer,
    area: Rect,
    envelope: Rect,
    pose: &EnvelopePose,
    colors: &EnvelopePalette,
    fade: Modifier,
) {
    let inner_width = envelope.width.saturating_sub(2);
    let full_height = (envelope.height.saturating_sub(2) / 2).max(1);
    let half = f32::from(inner_width) / 2.0;
    let style = Style::default()
        .fg(colors.border)
        .bg(colors.flap)
        .add_modifier(fade);
    let fill = Style::default().bg(colors.flap);

    let (rows, downward) = if pose.flap_open < 0.5 {
        let shrink = 1.0 - pose.flap_open * 2.0;
        ((f32::from(full_height) * shrink).round() as u16, true)
    } else {
        let grow = (pose.flap_open - 0.5) * 2.0;
        ((f32::from(full_height) * grow).round() as u16, false)
    };
    if rows == 0 {
        return;
    }

    let step = half / f32::from(rows);
    for r in 0..rows {
        let (y, inset) = if downward {
            (envelope.y + 1 + r, (f32::from(r) * step).round() as u16)
        } else {
            let Some(y) = envelope.y.checked_sub(rows - r) else {
                continue;
            };
            (y, (f32::from(rows - 1 - r) * step).round() as u16)
        };
        if y < area.y || y >= area.bottom() {
            continue;
        }
        let left = envelope.x + 1 + inset;
        let right = (envelope.x + envelope.width).saturating_sub(2 + inset);
        if right <= left {
            buf.set_string(left, y, if downward { "V" } else { "Λ" }, style);
            continue;
        }
        let (l, rch) = if downward { ("\\", "/") } else { ("/", "\\") };
        buf.set_string(left, y, l, style);
        for x in left + 1..right {
            buf.set_string(x, y, " ", fill);
        }
        buf.set_string(right, y, rch, style);
    }
}

fn draw_seal(
    frame: &mut Frame,
    envelope: Rect,
    colors: &EnvelopePalette,
    glyphs: &Glyphs,
    palette: &Palette,
) {
    let seal = format!(" {} ", glyphs.seal);
    let seal_width = seal.width() as u16;
    let inner_height = envelope.height.saturating_sub(2);
    let y = envelope.y + 1 + (inner_height / 2).max(1).min(inner_height.saturating_sub(1));
    let x = envelope.x + envelope.width.saturating_sub(seal_width) / 2;
    frame.buffer_mut().set_string(
        x,
        y,
        &seal,
        Style::default()
            .fg(colors.body)
            .bg(colors.border)
            .add_modifier(Modifier::BOLD),
    );

    let prompt = "Açmaq üçün Enter basın";
    let prompt_rect = Rect {
        x: envelope.x,
        y: envelope.bottom(),
        width: envelope.width,
        height: 1,
    }
    .intersection(frame.area());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            prompt,
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center),
        prompt_rect,
    );
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    envelope: Rect,
    pose: &EnvelopePose,
    colors: &EnvelopePalette,
) {
    let width = envelope.width.saturating_sub(8).max(12).min(area.width);
    let start_y = envelope.y + envelope.height / 2;
    let travel = (envelope.height / 2 + CARD_HEIGHT).min(start_y.saturating_sub(area.y));
    let lift = (f32::from(travel) * pose.card_rise).round() as u16;
    let card = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: start_y.saturating_sub(lift),
        width,
        height: CARD_HEIGHT,
    }
    .intersection(area);
    if card.height < 3 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            "Dəvətnamə",
            Style::default()
                .fg(colors.card_ink)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Vivento",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(Color::Rgb(255, 255, 255))),
    );
    frame.render_widget(Clear, card);
    frame.render_widget(paragraph, card);
}

/// Deterministic burst: piece `i` flies out from the envelope center along its own heading.
fn draw_confetti(
    buf: &mut Buffer,
    area: Rect,
    envelope: Rect,
    t: f32,
    glyphs: &Glyphs,
    palette: &Palette,
) {
    let colors = [palette.gold, palette.warning, palette.text_primary, palette.accent];
    let cx = f32::from(envelope.x) + f32::from(envelope.width) / 2.0;
    let cy = f32::from(envelope.y) + f32::from(envelope.height) / 2.0;
    let reach_x = f32::from(area.width) / 2.0;
    let reach_y = f32::from(area.height) / 2.0;

    for i in 0..CONFETTI_PIECES {
        let hash = i.wrapping_mul(2_654_435_761);
        let angle = (hash % 360) as f32 * std::f32::consts::PI / 180.0;
        let speed = 0.4 + (hash >> 9) as f32 % 60.0 / 100.0;
        let dist = t * speed;
        let x = cx + angle.cos() * dist * reach_x;
        let y = cy + angle.sin() * dist * reach_y;
        if x < f32::from(area.x) || y < f32::from(area.y) {
            continue;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let idx = i as usize;
        buf.set_string(
            x,
            y,
            glyphs.confetti[idx % glyphs.confetti.len()],
            Style::default().fg(colors[idx % colors.len()]),
        );
    }
}
