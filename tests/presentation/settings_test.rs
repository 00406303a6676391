use radialog::presentation::config::{DetectionProviderSetting, Environment, Settings};

#[test]
fn given_default_settings_then_matches_documented_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.inference.provider, "ollama_cli");
    assert_eq!(settings.inference.model, "llava");
    assert_eq!(settings.inference.timeout_seconds, 120);
    assert_eq!(settings.detection.provider, DetectionProviderSetting::Disabled);
    assert!(settings.detection.api_key.is_none());
    assert!(settings.session.strict_conversation_lookup);
    assert_eq!(settings.session.default_findings, "brain tumor");
}

#[test]
fn given_no_settings_file_when_loading_test_environment_then_falls_back_to_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.max_upload_mb, 16);
    assert_eq!(settings.detection.timeout_seconds, 60);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!(
        Environment::try_from("Production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("development".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_displayed_then_is_settings_file_suffix() {
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
}
