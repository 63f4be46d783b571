mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(config_path) => {
            debug!("Loading configuration from: {}", config_path);
            from_file(&config_path).await?
        }
        Err(_) => Config::default(),
    };

    config.apply_env_with(|key| env::var(key).ok())?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overlays environment variables, read through `lookup`, onto this config.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.app.environment = environment;
        }
        if let Some(registry) = lookup("REGISTRY_URL") {
            self.app.registry = registry;
        }
        if let Some(namespace) = lookup("NAMESPACE") {
            self.app.namespace = namespace;
        }
        if let Some(build_time) = lookup("BUILD_TIME") {
            self.app.build_time = Some(build_time);
        }

        Ok(())
    }
}
