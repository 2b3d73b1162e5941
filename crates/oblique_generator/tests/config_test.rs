use oblique_error::ObliqueErrorKind;
use oblique_generator::{GeneratorSettings, ObliqueConfig};
use oblique_models::RetryConfig;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = ObliqueConfig::from_toml_str("")?;

    assert_eq!(config.archive().path(), Path::new("docs/questions.json"));
    assert_eq!(config.archive().today_path(), Path::new("docs/today.json"));
    assert_eq!(*config.archive().min_size(), 50);
    assert_eq!(config.generation().model(), "gemini-2.0-flash");
    assert_eq!(
        config.generation().base_url(),
        "https://generativelanguage.googleapis.com/v1"
    );
    assert_eq!(*config.generation().sample_size(), 12);
    assert_eq!(*config.generation().max_output_tokens(), 120);
    assert_eq!(config.generation().timeout(), Duration::from_secs(60));
    assert_eq!(*config.retry().max_attempts(), 3);
    assert_eq!(*config.retry().backoff_step_ms(), 1500);
    assert_eq!(*config.validation().min_chars(), 6);
    assert_eq!(*config.validation().max_chars(), 140);
    Ok(())
}

#[test]
fn test_partial_override_keeps_other_defaults() -> anyhow::Result<()> {
    let config = ObliqueConfig::from_toml_str(
        r#"
        [archive]
        path = "site/questions.json"

        [retry]
        max_attempts = 5
        "#,
    )?;

    assert_eq!(config.archive().path(), Path::new("site/questions.json"));
    assert_eq!(config.archive().today_path(), Path::new("docs/today.json"));
    assert_eq!(*config.retry().max_attempts(), 5);
    assert_eq!(*config.retry().backoff_step_ms(), 1500);
    Ok(())
}

#[test]
fn test_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[generation]\nsample_size = 8\ntemperature = 0.5\n")?;

    let config = ObliqueConfig::from_file(&path)?;
    assert_eq!(*config.generation().sample_size(), 8);
    assert_eq!(*config.generation().temperature(), 0.5);
    Ok(())
}

#[test]
fn test_from_missing_file_fails() {
    let err = ObliqueConfig::from_file("/nonexistent/oblique.toml").unwrap_err();
    assert!(matches!(err.kind(), ObliqueErrorKind::Config(_)));
}

#[test]
fn test_out_of_range_values_rejected() {
    for toml in [
        "[retry]\nmax_attempts = 0\n",
        "[generation]\nsample_size = 0\n",
        "[generation]\nsample_size = 51\n",
        "[validation]\nmin_chars = 200\n",
        "[generation]\nmodel = \" \"\n",
    ] {
        let err = ObliqueConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err.kind(), ObliqueErrorKind::Config(_)), "toml: {}", toml);
    }
}

#[test]
fn test_model_override() -> anyhow::Result<()> {
    let mut config = ObliqueConfig::from_toml_str("")?;

    config.override_model(None);
    assert_eq!(config.generation().model(), "gemini-2.0-flash");

    config.override_model(Some("  ".to_string()));
    assert_eq!(config.generation().model(), "gemini-2.0-flash");

    config.override_model(Some("gemini-2.5-flash".to_string()));
    assert_eq!(config.generation().model(), "gemini-2.5-flash");
    Ok(())
}

#[test]
fn test_generator_settings_from_config() -> anyhow::Result<()> {
    let config = ObliqueConfig::from_toml_str(
        "[retry]\nbackoff_step_ms = 10\n[validation]\nmax_chars = 80\n",
    )?;
    let settings = GeneratorSettings::from(&config);

    assert_eq!(settings.min_archive_size, 50);
    assert_eq!(settings.sample_size, 12);
    assert_eq!(settings.retry, RetryConfig::new(3, Duration::from_millis(10)));
    assert_eq!(settings.model.as_deref(), Some("gemini-2.0-flash"));
    assert!(settings.validator.check(&"問".repeat(81)).is_err());
    assert!(settings.validator.check(&"問".repeat(80)).is_ok());
    Ok(())
}
