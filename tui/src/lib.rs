//! TUI rendering for Vivento using ratatui.

mod effects;
mod envelope;
mod forgot_password;
mod input;
mod landing;
mod theme;

pub use effects::{EnvelopePose, ease_out_cubic, envelope_pose, pose_for, scale_rect};
pub use input::{InputPump, apply_key, handle_events};
pub use theme::{EnvelopePalette, Glyphs, Palette, envelope_palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use vivento_engine::{App, Page, ToastKind};

const TOAST_MAX_WIDTH: u16 = 48;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    if let Some(sequencer) = app.envelope() {
        envelope::draw_envelope(frame, sequencer, options, &palette, &glyphs);
        return;
    }

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    match app.page() {
        Page::Landing => landing::draw_landing(frame, app, &palette, &glyphs),
        Page::ForgotPassword => {
            forgot_password::draw_forgot_password(frame, app, &palette, &glyphs);
        }
    }

    draw_toasts(frame, app, &palette, &glyphs);
}

/// Stack toasts in the top-right corner, newest at the bottom.
fn draw_toasts(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let width = TOAST_MAX_WIDTH.min(area.width.saturating_sub(2));
    if width < 8 {
        return;
    }
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let mut y = area.y + 1;

    for toast in app.toasts().iter() {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (glyphs.check, palette.success),
            ToastKind::Info => (glyphs.info, palette.accent),
            ToastKind::Error => (glyphs.cross, palette.error),
        };
        let text = format!("{icon} {}", toast.message);
        let rows = text.width().div_ceil(text_width).max(1) as u16;
        let height = rows + 2;
        if y + height > area.bottom() {
            break;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height,
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(palette.text_primary),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(palette.bg_highlight)),
        );
        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
        y += height;
    }
}
