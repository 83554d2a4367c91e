//! Landing and password-reset journeys against a mock backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use vivento_engine::{
    App, LaunchSettings, Page, ResetError, ResetFormState, SiteSettings, SliderState, ToastKind,
    builtin_templates,
};

use crate::common::{
    launch_for, mount_backend_down, mount_forgot_password, mount_landing_content, press,
    pump_until, start_backend, type_text,
};

#[tokio::test]
async fn landing_shows_backend_content() {
    let server = start_backend().await;
    mount_landing_content(&server).await;

    let mut app = App::new(&launch_for(&server, None)).unwrap();
    app.load();
    pump_until(&mut app, |app| app.fetches_in_flight() == 0).await;

    let SliderState::Carousel { slides, current } = app.slider().state() else {
        panic!("expected carousel, got {:?}", app.slider().state());
    };
    assert_eq!(*current, 0);
    let ids: Vec<_> = slides.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2"]);

    let settings = app.site_settings();
    assert_eq!(settings.hero_title, "Xoş gəlmisiniz");
    // Fields the backend left out keep their defaults.
    assert_eq!(settings.hero_subtitle, SiteSettings::default().hero_subtitle);
    assert_eq!(
        settings.social.instagram.as_deref(),
        Some("https://instagram.com/vivento")
    );

    let names: Vec<_> = app
        .featured_templates()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, ["Qızılı Toy", "Bahar"]);
    assert!(app.toasts().is_empty());
}

#[tokio::test]
async fn slide_keys_navigate_and_wrap() {
    let server = start_backend().await;
    mount_landing_content(&server).await;

    let mut app = App::new(&launch_for(&server, None)).unwrap();
    app.load();
    pump_until(&mut app, |app| app.fetches_in_flight() == 0).await;

    press(&mut app, KeyCode::Right);
    assert_eq!(app.slider().current_index(), Some(1));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.slider().current_index(), Some(0));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.slider().current_index(), Some(1));
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.slider().current_index(), Some(0));
    // Out of range: ignored.
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.slider().current_index(), Some(0));
}

#[tokio::test]
async fn unreachable_backend_keeps_defaults() {
    let server = start_backend().await;
    mount_backend_down(&server).await;

    let mut app = App::new(&launch_for(&server, None)).unwrap();
    app.load();
    pump_until(&mut app, |app| app.fetches_in_flight() == 0).await;

    assert_eq!(app.slider().state(), &SliderState::Fallback);
    assert_eq!(app.site_settings(), &SiteSettings::default());
    assert_eq!(app.featured_templates(), builtin_templates().as_slice());
    assert_eq!(
        app.toasts().iter().map(|t| t.kind).collect::<Vec<_>>(),
        [ToastKind::Error]
    );

    // Arrow keys on the fallback hero do nothing.
    press(&mut app, KeyCode::Right);
    assert_eq!(app.slider().current_index(), None);
}

#[tokio::test]
async fn refresh_key_reloads_after_recovery() {
    let server = start_backend().await;
    mount_backend_down(&server).await;

    let mut app = App::new(&launch_for(&server, None)).unwrap();
    app.load();
    pump_until(&mut app, |app| app.fetches_in_flight() == 0).await;
    assert_eq!(app.slider().state(), &SliderState::Fallback);

    server.reset().await;
    mount_landing_content(&server).await;

    press(&mut app, KeyCode::Char('r'));
    assert!(app.slider().is_loading());
    assert!(app.settings_loading());
    pump_until(&mut app, |app| app.fetches_in_flight() == 0).await;

    assert_eq!(app.slider().len(), 2);
    assert_eq!(app.site_settings().hero_title, "Xoş gəlmisiniz");
}

#[tokio::test]
async fn password_reset_round_trip() {
    let server = start_backend().await;
    mount_forgot_password(&server, 200).await;

    let mut app = App::new(&launch_for(&server, None)).unwrap();
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.page(), Page::ForgotPassword);

    type_text(&mut app, "aysel@vivento.az");
    press(&mut app, KeyCode::Enter);
    assert!(app.reset_form().is_submitting());

    pump_until(&mut app, |app| !app.reset_form().is_submitting()).await;
    let ResetFormState::Sent { email } = app.reset_form().state() else {
        panic!("expected Sent, got {:?}", app.reset_form().state());
    };
    assert_eq!(email.as_str(), "aysel@vivento.az");
    assert_eq!(
        app.toasts().iter().map(|t| t.kind).collect::<Vec<_>>(),
        [ToastKind::Success]
    );

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.reset_form().input(), "aysel@vivento.az");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.page(), Page::Landing);
}

#[tokio::test]
async fn failed_reset_request_still_confirms() {
    let server = start_backend().await;
    mount_forgot_password(&server, 404).await;

    let mut app = App::new(&launch_for(&server, None)).unwrap();
    app.show_forgot_password();
    type_text(&mut app, "ramil@example.com");
    press(&mut app, KeyCode::Enter);

    pump_until(&mut app, |app| !app.reset_form().is_submitting()).await;
    assert!(matches!(
        app.reset_form().state(),
        ResetFormState::Sent { .. }
    ));
    assert_eq!(
        app.toasts().iter().map(|t| t.kind).collect::<Vec<_>>(),
        [ToastKind::Info]
    );
}

#[test]
fn invalid_addresses_stay_on_the_form() {
    let mut app = App::new(&LaunchSettings {
        backend_url: "http://127.0.0.1:9".to_string(),
        envelope: None,
        ..LaunchSettings::default()
    })
    .unwrap();
    press(&mut app, KeyCode::Char('f'));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.reset_form().error(), Some(ResetError::EmptyEmail));

    type_text(&mut app, "not-an-email");
    assert_eq!(app.reset_form().error(), None);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.reset_form().error(), Some(ResetError::InvalidEmail));
    assert_eq!(app.fetches_in_flight(), 0);

    vivento_tui::apply_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.reset_form().input(), "");

    type_text(&mut app, "ab");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.reset_form().input(), "a");
}
