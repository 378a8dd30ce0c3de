use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_the_stock_viewer() {
    let settings = Settings::default();
    assert_eq!(settings.bind_addr, "127.0.0.1:8765");
    assert_eq!(settings.viewport(), ViewportSize::new(1100, 700));
    assert_eq!(settings.tick(), Duration::from_millis(16));
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
            bind_addr = "0.0.0.0:9000"
            image_path = "photos/street.jpg"
            viewport_width = 640
            tick_ms = 33
        "#,
    );
    assert_eq!(settings.bind_addr, "0.0.0.0:9000");
    assert_eq!(settings.image_path, PathBuf::from("photos/street.jpg"));
    assert_eq!(settings.viewport(), ViewportSize::new(640, 700));
    assert_eq!(settings.tick_ms, 33);
    assert_eq!(settings.command_queue, 256);
}

#[test]
fn invalid_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "viewport_width = \"wide\"");
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file_and_skips_unparseable_numbers() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "bind_addr = \"127.0.0.1:1\"\ntick_ms = 5");
    apply_env(
        &mut settings,
        env(&[
            ("VIEWER_BIND", "127.0.0.1:2"),
            ("APP__VIEWPORT_HEIGHT", " 480 "),
            ("APP__TICK_MS", "soon"),
            ("APP__CROP_DIR", "/tmp/crops"),
        ]),
    );
    assert_eq!(settings.bind_addr, "127.0.0.1:2");
    assert_eq!(settings.viewport_height, 480);
    assert_eq!(settings.tick_ms, 5);
    assert_eq!(settings.crop_dir, PathBuf::from("/tmp/crops"));
}

#[test]
fn app_bind_addr_wins_over_legacy_name() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[("VIEWER_BIND", "127.0.0.1:2"), ("APP__BIND_ADDR", "127.0.0.1:3")]),
    );
    assert_eq!(settings.bind_addr, "127.0.0.1:3");
}

#[test]
fn load_settings_reads_explicit_config_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "viewport_width = 320\nviewport_height = 240\n").expect("write");

    let settings = load_settings(Some(&path));
    assert_eq!(settings.viewport(), ViewportSize::new(320, 240));
}
