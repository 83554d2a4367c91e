use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use vivento_engine::{App, ResetFormState};

use crate::theme::{Glyphs, Palette, styles};

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 14;
const EMAIL_PLACEHOLDER: &str = "email@example.com";

pub(crate) fn draw_forgot_password(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let height = CARD_HEIGHT.min(area.height);
    let card = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 3,
        width,
        height,
    };
    let content_width = width.saturating_sub(4) as usize;

    let form = app.reset_form();
    let lines = match form.state() {
        ResetFormState::Editing { input, error } => {
            let mut lines = intro_lines(palette);
            lines.push(Line::from(Span::styled("E-poçt", styles::body(palette))));
            lines.push(input_line(input, content_width, palette));
            match error {
                Some(err) => lines.push(Line::from(Span::styled(
                    format!("{} {err}", glyphs.cross),
                    styles::error(palette),
                ))),
                None => lines.push(Line::from("")),
            }
            lines.push(Line::from(""));
            lines.push(hint_line(
                &[("Enter", "Şifrə bərpa linki göndər"), ("Esc", "geri")],
                palette,
            ));
            lines
        }
        ResetFormState::Submitting { email } => {
            let mut lines = intro_lines(palette);
            lines.push(Line::from(Span::styled("E-poçt", styles::body(palette))));
            lines.push(input_line(email.as_str(), content_width, palette));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Göndərilir…",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines
        }
        ResetFormState::Sent { email } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} E-poçtunuzu yoxlayın", glyphs.check),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Əgər ", styles::body(palette)),
                Span::styled(email.as_str().to_string(), styles::heading(palette)),
                Span::styled(
                    " ünvanı ilə hesab mövcuddursa, şifrə bərpa linki göndərildi.",
                    styles::body(palette),
                ),
            ]),
            Line::from(""),
            hint_line(
                &[("t", "Başqa e-poçt yoxla"), ("Esc", "geri qayıt")],
                palette,
            ),
        ],
    };

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles::highlight_border(palette))
                .style(Style::default().bg(palette.bg_panel))
                .title(Span::styled(" Vivento ", styles::brand(palette))),
        );
    frame.render_widget(Clear, card);
    frame.render_widget(widget, card);
}

fn intro_lines(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled("Şifrəni unutdunuz?", styles::heading(palette))),
        Line::from(Span::styled(
            "E-poçt ünvanınızı daxil edin və şifrə bərpa linkini göndərək",
            styles::muted(palette),
        )),
        Line::from(""),
    ]
}

/// Single-line input showing the tail of long addresses, with a block cursor.
fn input_line(value: &str, width: usize, palette: &Palette) -> Line<'static> {
    let field_width = width.saturating_sub(4).max(8);
    if value.is_empty() {
        return Line::from(vec![
            Span::styled("[ ", styles::border(palette)),
            Span::styled(
                format!("{EMAIL_PLACEHOLDER:<field_width$}"),
                styles::muted(palette),
            ),
            Span::styled(" ]", styles::border(palette)),
        ]);
    }

    let mut shown = value.to_string();
    while shown.width() >= field_width {
        let mut chars = shown.chars();
        chars.next();
        shown = chars.as_str().to_string();
    }
    let pad = field_width.saturating_sub(shown.width() + 1);
    Line::from(vec![
        Span::styled("[ ", styles::border(palette)),
        Span::styled(shown, Style::default().fg(palette.text_primary)),
        Span::styled(" ", Style::default().bg(palette.text_primary)),
        Span::raw(" ".repeat(pad)),
        Span::styled(" ]", styles::border(palette)),
    ])
}

fn hint_line(hints: &[(&'static str, &'static str)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key}"), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {label} "), styles::key_hint(palette)));
    }
    Line::from(spans)
}
