use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub app: AppSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Deployment metadata reported by `/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_registry")]
    pub registry: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Falls back to the process start time when unset.
    #[serde(default)]
    pub build_time: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            registry: default_registry(),
            namespace: default_namespace(),
            build_time: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_registry() -> String {
    "192.168.0.200:5000".to_string()
}

fn default_namespace() -> String {
    "fastapi-ml".to_string()
}
