use std::path::PathBuf;
use std::time::Duration;
use wave_player::{Settings, SettingsError};

#[test]
fn test_empty_object_uses_defaults() {
    let settings = Settings::from_json("{}").unwrap();
    assert_eq!(settings.device, PathBuf::from("/dev/video0"));
    assert_eq!(settings.delay_ms, 1500);
    assert_eq!(settings.property_store, PathBuf::from("properties.json"));
    assert!(settings.replay_dir.is_none());
    assert!(settings.log_dir.is_none());
    assert!(!settings.playlist.is_empty());
}

#[test]
fn test_partial_settings_override() {
    let settings = Settings::from_json(
        r#"{"device":"/dev/video2","delay_ms":250,"timeout_secs":3,"replay_dir":"frames"}"#,
    )
    .unwrap();

    let camera = settings.camera_config();
    assert_eq!(camera.device(), PathBuf::from("/dev/video2").as_path());
    assert_eq!(camera.width(), 640);
    assert_eq!(settings.capture_config().delay(), Duration::from_millis(250));
    assert_eq!(settings.classifier_config().timeout(), Duration::from_secs(3));
    assert_eq!(settings.replay_dir, Some(PathBuf::from("frames")));
}

#[test]
fn test_classifier_config_follows_settings() {
    let settings =
        Settings::from_json(r#"{"endpoint":"http://localhost:8080/g","artifact_dir":"/tmp/f"}"#)
            .unwrap();
    let config = settings.classifier_config();
    assert_eq!(config.endpoint(), "http://localhost:8080/g");
    assert_eq!(config.artifact_dir(), PathBuf::from("/tmp/f").as_path());
}

#[test]
fn test_wrong_type_is_parse_error() {
    assert!(matches!(
        Settings::from_json(r#"{"delay_ms":"soon"}"#),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("wave-player-no-such-settings.json");
    assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
}
