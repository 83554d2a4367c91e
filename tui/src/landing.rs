//! Landing page: navbar, hero slider, features, templates, pricing, footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use vivento_engine::{App, FEATURES, PRICING_PLANS, SiteSettings, SliderState};
use vivento_types::truncate_with_ellipsis;

use crate::theme::{Glyphs, Palette, styles};

const BRAND: &str = "Vivento";

pub(crate) fn draw_landing(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Length(9), // Hero
            Constraint::Length(8), // Features
            Constraint::Min(8),    // Templates + pricing
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_navbar(frame, app, chunks[0], palette, glyphs);
    draw_hero(frame, app, chunks[1], palette, glyphs);
    draw_features(frame, chunks[2], palette);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);
    draw_templates(frame, app, lower[0], palette, glyphs);
    draw_pricing(frame, lower[1], palette, glyphs);

    draw_footer(frame, app.site_settings(), chunks[4], palette, glyphs);
    draw_key_hints(frame, chunks[5], palette, glyphs);
}

fn draw_navbar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![Span::styled(format!(" {BRAND}"), styles::brand(palette))];
    if app.settings_loading() {
        spans.push(Span::styled("  yenilənir…", styles::muted(palette)));
    }
    let left = Paragraph::new(Line::from(spans));
    let right = Paragraph::new(Line::from(vec![
        Span::styled("Daxil ol", styles::body(palette)),
        Span::styled(format!(" {} ", glyphs.separator), styles::muted(palette)),
        Span::styled(
            "Qeydiyyat ",
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(left, area);
    frame.render_widget(right, area);
}

fn draw_hero(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::highlight_border(palette))
        .style(Style::default().bg(palette.bg_panel));
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![Line::from("")];
    match app.slider().state() {
        SliderState::Loading => {
            lines.push(Line::from(Span::styled("Yüklənir…", styles::muted(palette))));
        }
        SliderState::Fallback => {
            let settings = app.site_settings();
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(&settings.hero_title, inner_width),
                styles::heading(palette),
            )));
            lines.push(Line::from(Span::styled(
                settings.hero_subtitle.clone(),
                styles::body(palette),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    " Pulsuz başla ",
                    Style::default()
                        .fg(palette.bg_dark)
                        .bg(palette.gold)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(" Daxil ol ", styles::body(palette)),
            ]));
        }
        SliderState::Carousel { slides, current } => {
            let slide = &slides[*current];
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(&slide.title, inner_width),
                styles::heading(palette),
            )));
            if !slide.subtitle.is_empty() {
                lines.push(Line::from(Span::styled(
                    slide.subtitle.clone(),
                    styles::body(palette),
                )));
            }
            lines.push(Line::from(""));
            if let Some((text, link)) = slide.call_to_action() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {text} "),
                        Style::default()
                            .fg(palette.bg_dark)
                            .bg(palette.gold)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {link}"), styles::muted(palette)),
                ]));
            }
            if slides.len() > 1 {
                let mut dots = vec![Span::styled(
                    format!("{} ", glyphs.arrow_left),
                    styles::key_hint(palette),
                )];
                for i in 0..slides.len() {
                    let (glyph, style) = if i == *current {
                        (glyphs.dot_active, Style::default().fg(palette.gold))
                    } else {
                        (glyphs.dot_inactive, styles::muted(palette))
                    };
                    dots.push(Span::styled(format!("{glyph} "), style));
                }
                dots.push(Span::styled(glyphs.arrow_right, styles::key_hint(palette)));
                lines.push(Line::from(dots));
            }
        }
    }

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(hero, area);
}

fn draw_features(frame: &mut Frame, area: Rect, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(area);

    for (row, chunk) in FEATURES.chunks(3).zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*chunk);
        for (feature, col) in row.iter().zip(cols.iter()) {
            let card = Paragraph::new(Line::from(Span::styled(
                feature.description,
                styles::body(palette),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(styles::border(palette))
                    .title(Span::styled(
                        format!(" {} ", feature.title),
                        styles::heading(palette),
                    )),
            );
            frame.render_widget(card, *col);
        }
    }
}

fn draw_templates(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let width = area.width.saturating_sub(8) as usize;
    let mut lines = Vec::new();
    for template in app.featured_templates() {
        let mut spans = vec![
            Span::styled(format!("{} ", glyphs.bullet), styles::muted(palette)),
            Span::styled(
                truncate_with_ellipsis(&template.name, width),
                styles::heading(palette),
            ),
        ];
        if template.is_premium {
            spans.push(Span::styled(
                format!(" {}", glyphs.premium),
                Style::default().fg(palette.gold),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("  {}", template.category.replace('_', " ")),
            styles::muted(palette),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border(palette))
            .title(Span::styled(" Şablonlar ", styles::heading(palette))),
    );
    frame.render_widget(widget, area);
}

fn draw_pricing(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (plan, col) in PRICING_PLANS.iter().zip(cols.iter()) {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} ₼", plan.price),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" /ay", styles::muted(palette)),
        ])];
        for feature in plan.features {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", glyphs.check),
                    Style::default().fg(palette.success),
                ),
                Span::styled(*feature, styles::body(palette)),
            ]));
        }
        let border = if plan.popular {
            styles::highlight_border(palette)
        } else {
            styles::border(palette)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(
                format!(" {} ", plan.name),
                styles::heading(palette),
            ));
        if plan.popular {
            block = block.title_bottom(
                Line::from(Span::styled(" Populyar ", Style::default().fg(palette.gold)))
                    .alignment(Alignment::Center),
            );
        }
        frame.render_widget(Paragraph::new(lines).block(block), *col);
    }
}

fn draw_footer(
    frame: &mut Frame,
    settings: &SiteSettings,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut spans = vec![Span::styled(format!(" © {BRAND}"), styles::muted(palette))];
    for (label, target) in settings.social.entries() {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            styles::muted(palette),
        ));
        spans.push(Span::styled(format!("{label}: "), styles::body(palette)));
        spans.push(Span::styled(target.to_string(), styles::muted(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = [
        (format!("{}/{}", glyphs.arrow_left, glyphs.arrow_right), "slayd"),
        ("1-9".to_string(), "seç"),
        ("f".to_string(), "şifrəni unutdum"),
        ("r".to_string(), "yenilə"),
        ("q".to_string(), "çıxış"),
    ];
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key}"), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {label} "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
