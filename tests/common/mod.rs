//! Shared test utilities and fixtures
//!
//! A wiremock stand-in for the Vivento backend plus helpers for driving an
//! [`App`] the way the terminal loop does.

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vivento_engine::{App, LaunchSettings, RevealConfig};

/// Start a mock server that simulates the Vivento backend
pub async fn start_backend() -> MockServer {
    MockServer::start().await
}

pub async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a full, healthy landing backend: two active slides, branding, templates.
pub async fn mount_landing_content(server: &MockServer) {
    mount_get(
        server,
        "/api/slides",
        json!([
            {
                "id": "s2",
                "title": "Nişan dəvətnaməsi",
                "subtitle": "Zərif dizaynlar",
                "order": 2
            },
            {
                "id": "s1",
                "title": "Toy dəvətnaməsi",
                "subtitle": "Bir neçə dəqiqəyə hazır",
                "button_text": "Başla",
                "button_link": "/register",
                "order": 1
            },
            {"id": "s0", "title": "Arxiv", "order": 0, "is_active": false}
        ]),
    )
    .await;
    mount_get(
        server,
        "/api/site/settings",
        json!({
            "hero_title": "Xoş gəlmisiniz",
            "social_links": {"instagram": "https://instagram.com/vivento"}
        }),
    )
    .await;
    mount_get(
        server,
        "/api/templates",
        json!([
            {"id": "t1", "name": "Qızılı Toy", "category": "toy", "is_premium": true},
            {"id": "t2", "name": "Bahar", "category": "nisan"}
        ]),
    )
    .await;
}

/// Every request fails with a 500.
pub async fn mount_backend_down(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

pub async fn mount_forgot_password(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn launch_for(server: &MockServer, envelope: Option<RevealConfig>) -> LaunchSettings {
    LaunchSettings {
        backend_url: server.uri(),
        envelope,
        slider_autoplay: None,
        ..LaunchSettings::default()
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App, code: KeyCode) {
    vivento_tui::apply_key(app, key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Step the app with zero virtual time until `done` holds, letting background fetches land.
pub async fn pump_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
    for _ in 0..300 {
        app.advance(Duration::ZERO);
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("app never reached the expected state");
}
