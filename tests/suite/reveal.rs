//! Envelope overlay driven the way a user sees it: key presses and frame time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use vivento_engine::{
    AUTO_START_DELAY, App, CONTENT_REVEAL_DELAY, ColorScheme, HIDDEN_DELAY, LaunchSettings,
    OPENED_DELAY, Page, RevealConfig, RevealSequencer, RevealStage,
};

use crate::common::press;

const UNREACHABLE: &str = "http://127.0.0.1:9";

fn app_with(config: RevealConfig) -> App {
    App::new(&LaunchSettings {
        backend_url: UNREACHABLE.to_string(),
        envelope: Some(config),
        ..LaunchSettings::default()
    })
    .unwrap()
}

fn stage(app: &App) -> Option<RevealStage> {
    app.envelope().map(RevealSequencer::stage)
}

#[test]
fn enter_plays_the_whole_reveal() {
    let mut app = app_with(RevealConfig::default());
    press(&mut app, KeyCode::Enter);
    assert_eq!(stage(&app), Some(RevealStage::Opening));

    app.advance(CONTENT_REVEAL_DELAY);
    assert!(app.envelope().is_some_and(RevealSequencer::content_visible));
    app.advance(OPENED_DELAY - CONTENT_REVEAL_DELAY);
    assert_eq!(stage(&app), Some(RevealStage::Opened));
    assert!(app.overlay_visible());

    app.advance(HIDDEN_DELAY - OPENED_DELAY);
    assert!(!app.overlay_visible());
    assert!(app.envelope().is_none());
    assert_eq!(app.page(), Page::Landing);
}

#[test]
fn space_opens_like_enter() {
    let mut app = app_with(RevealConfig::default());
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(stage(&app), Some(RevealStage::Opening));
}

#[test]
fn repeated_enter_does_not_restart() {
    let mut app = app_with(RevealConfig::default());
    press(&mut app, KeyCode::Enter);
    app.advance(OPENED_DELAY);
    press(&mut app, KeyCode::Enter);
    assert_eq!(stage(&app), Some(RevealStage::Opened));
    app.advance(HIDDEN_DELAY - OPENED_DELAY);
    assert!(!app.overlay_visible());
}

#[test]
fn escape_skips_mid_animation() {
    let mut app = app_with(RevealConfig::default());
    press(&mut app, KeyCode::Enter);
    app.advance(CONTENT_REVEAL_DELAY);
    press(&mut app, KeyCode::Esc);
    assert!(!app.overlay_visible());
    assert!(app.envelope().is_none());
}

#[test]
fn landing_keys_are_swallowed_while_covered() {
    let mut app = app_with(RevealConfig::default());
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.page(), Page::Landing);
    assert_eq!(stage(&app), Some(RevealStage::Closed));
}

#[test]
fn quit_works_from_the_overlay() {
    let mut app = app_with(RevealConfig::default());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_with(RevealConfig::default());
    vivento_tui::apply_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn auto_start_opens_without_input() {
    let mut app = app_with(RevealConfig {
        color_scheme: ColorScheme::Modern,
        auto_start: true,
    });
    app.advance(AUTO_START_DELAY);
    assert_eq!(stage(&app), Some(RevealStage::Opening));
    assert_eq!(
        app.envelope().map(RevealSequencer::color_scheme),
        Some(ColorScheme::Modern)
    );
    app.advance(HIDDEN_DELAY);
    assert!(!app.overlay_visible());
}
