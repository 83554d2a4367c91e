//! Config file on disk through to a running app.

use std::fs;
use std::time::Duration;

use vivento_engine::{
    App, ColorScheme, ConfigError, LaunchSettings, RevealConfig, RevealSequencer, VivConfig,
};

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn config_file_shapes_the_app() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[app]
backend_url = "http://127.0.0.1:9"
ascii_only = true
reduced_motion = true

[envelope]
color_scheme = "classic"
auto_start = true

[slider]
autoplay_interval_ms = 3000
"#,
    );

    let config = VivConfig::load_from(&path).unwrap();
    let launch = LaunchSettings::resolve_with(Some(&config), |_| None);
    assert_eq!(launch.backend_url, "http://127.0.0.1:9");
    assert!(launch.ui.ascii_only);
    assert!(launch.ui.reduced_motion);
    assert!(!launch.ui.high_contrast);
    assert_eq!(
        launch.envelope,
        Some(RevealConfig {
            color_scheme: ColorScheme::Classic,
            auto_start: true,
        })
    );
    assert_eq!(launch.slider_autoplay, Some(Duration::from_millis(3000)));

    let app = App::new(&launch).unwrap();
    assert!(app.ui_options().ascii_only);
    assert_eq!(
        app.envelope().map(RevealSequencer::color_scheme),
        Some(ColorScheme::Classic)
    );
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[app]
backend_url = "https://staging.vivento.az"

[envelope]
enabled = true
"#,
    );
    let config = VivConfig::load_from(&path).unwrap();

    let launch = LaunchSettings::resolve_with(Some(&config), |key| match key {
        "VIVENTO_BACKEND_URL" => Some("http://localhost:8000".to_string()),
        "VIVENTO_ENVELOPE" => Some("off".to_string()),
        _ => None,
    });
    assert_eq!(launch.backend_url, "http://localhost:8000");
    assert_eq!(launch.envelope, None);

    let app = App::new(&launch).unwrap();
    assert!(!app.overlay_visible());
}

#[test]
fn broken_config_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[app\nbackend_url = 1");

    let err = VivConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn missing_config_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = VivConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
