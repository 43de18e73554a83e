use projection_core::{
    config::{Config, ConfigManager},
    errors::ProjectionError,
    ProjectionRequest,
};
use tempfile::tempdir;

#[test]
fn missing_config_file_yields_defaults() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path());
    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert!(!manager.path().exists());
}

#[test]
fn saved_config_round_trips() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_path(temp.path().join("nested/dir/config.json"));
    let config = Config {
        currency: "EUR".into(),
        locale: "de-DE".into(),
        default_window_months: 6,
        max_window_months: 18,
        ui_color_enabled: false,
        plain_output: true,
    };
    manager.save(&config).unwrap();
    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn corrupt_config_reports_its_path() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path());
    std::fs::write(manager.path(), "currency = EUR").unwrap();
    match manager.load() {
        Err(ProjectionError::Config(message)) => assert!(message.contains("config.json")),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn window_is_capped_at_two_years() {
    let config = Config {
        max_window_months: 60,
        ..Config::default()
    };
    let request = ProjectionRequest::from_config(&config, Some(4), Some(48));
    assert_eq!(request.window_months, 24);
    assert_eq!(request.horizon(), 29);
    assert_eq!(request.months().collect::<Vec<_>>().len(), 24);
}
