use ml_service::{Error, config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokio::fs;

mod common;
use common::{INVALID_CONFIG_YAML, SAMPLE_CONFIG_YAML};

async fn write_config(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, SAMPLE_CONFIG_YAML).await;

    let config = config::from_file(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.app.environment, "production");
    assert_eq!(config.app.registry, "registry.example.com:5000");
    assert_eq!(config.app.namespace, "ml-prod");
    assert!(config.app.build_time.is_none());
}

#[tokio::test]
async fn test_environment_wins_over_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, SAMPLE_CONFIG_YAML).await;

    let mut config = config::from_file(&path).await.unwrap();
    config
        .apply_env_with(|key| (key == "ENVIRONMENT").then(|| "staging".to_string()))
        .unwrap();

    assert_eq!(config.app.environment, "staging");
    assert_eq!(config.app.namespace, "ml-prod");
}

#[tokio::test]
async fn test_empty_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "{}").await;

    let config = config::from_file(&path).await.unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.app.environment, "development");
}

#[tokio::test]
async fn test_invalid_yaml_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, INVALID_CONFIG_YAML).await;

    let result = config::from_file(&path).await;

    assert!(matches!(result, Err(Error::Yaml(_))));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yaml");

    let result = config::from_file(&path.to_string_lossy()).await;

    assert!(matches!(result, Err(Error::Io(_))));
}
