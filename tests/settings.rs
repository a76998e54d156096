use manifest_validation::Manifest;
use manifest_validation::settings::{
    OutputFormat, Settings, SettingsError, load_settings, save_settings,
};
use manifest_validation::validation::Validator;
use std::fs;

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/config.toml");

    let mut settings = Settings::default();
    settings.output.format = OutputFormat::Json;
    settings.score.optional = 0;
    settings.rules.disabled = vec!["categories-standard".into()];

    let written = save_settings(Some(&path), &settings).unwrap();
    assert_eq!(written, path);
    assert_eq!(load_settings(Some(&path)).unwrap(), settings);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("format = \"json\""));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[score]\nrequired = \"lots\"\n").unwrap();

    assert!(matches!(load_settings(Some(&path)), Err(SettingsError::ParseError(_))));
}

#[tokio::test]
async fn disabled_rules_drop_out_of_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[rules]\ndisabled = [\"icons-png-512\", \"shortcuts\"]\n").unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    let validator = Validator::from_settings(&settings.rules);
    let report = validator.loop_through_keys(&Manifest::new()).await;

    assert!(report.results().iter().all(|v| v.test_name != "icons-png-512"));
    assert!(report.results().iter().all(|v| v.member != "shortcuts"));
    assert_eq!(report.len(), validator.catalog().len() - 2);
}
