use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub hostname: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub hostname: String,
    /// Seconds since the service started.
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: &'static str,
    pub hostname: String,
    pub environment: String,
    pub registry: String,
    pub namespace: String,
    pub build_time: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: &'static str,
    pub model_version: &'static str,
    pub confidence: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ModelStatusResponse {
    pub model_loaded: bool,
    pub model_version: &'static str,
    pub last_updated: &'static str,
    pub status: &'static str,
}

/// Body of the readiness and liveness probes.
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
