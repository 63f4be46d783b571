use super::types::{
    ErrorResponse, HealthResponse, InfoResponse, ModelStatusResponse, PingResponse,
    PredictResponse, ProbeResponse, RootResponse,
};
use crate::config::AppSettings;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use std::{sync::Arc, time::Instant};
use tracing::{debug, warn};

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MODEL_VERSION: &str = "v1.0.0";
pub const MODEL_LAST_UPDATED: &str = "2024-01-01T00:00:00Z";

/// Read-only process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub hostname: Arc<str>,
    pub settings: Arc<AppSettings>,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        let hostname = match hostname::get() {
            Ok(name) => name.to_string_lossy().to_string(),
            Err(e) => {
                warn!("Failed to resolve hostname: {}", e);
                "unknown".to_string()
            }
        };

        Self::with_hostname(settings, hostname)
    }

    pub fn with_hostname(mut settings: AppSettings, hostname: impl Into<Arc<str>>) -> Self {
        if settings.build_time.is_none() {
            settings.build_time = Some(timestamp());
        }

        Self {
            started_at: Instant::now(),
            hostname: hostname.into(),
            settings: Arc::new(settings),
        }
    }

    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    debug!("Serving root");

    Json(RootResponse {
        message: "ML service is running!",
        timestamp: timestamp(),
        hostname: state.hostname.to_string(),
        version: APP_VERSION,
    })
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        timestamp: timestamp(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.uptime();
    debug!("Health check, uptime {:.3}s", uptime);

    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp(),
        hostname: state.hostname.to_string(),
        uptime,
    })
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let settings = &state.settings;

    Json(InfoResponse {
        app: APP_NAME,
        version: APP_VERSION,
        hostname: state.hostname.to_string(),
        environment: settings.environment.clone(),
        registry: settings.registry.clone(),
        namespace: settings.namespace.clone(),
        build_time: settings.build_time.clone().unwrap_or_default(),
    })
}

/// Placeholder prediction; no model is loaded.
pub async fn predict() -> Json<PredictResponse> {
    debug!("Serving stub prediction");

    Json(PredictResponse {
        prediction: "placeholder",
        model_version: MODEL_VERSION,
        confidence: 0.95,
        timestamp: timestamp(),
    })
}

pub async fn model_status() -> Json<ModelStatusResponse> {
    Json(ModelStatusResponse {
        model_loaded: true,
        model_version: MODEL_VERSION,
        last_updated: MODEL_LAST_UPDATED,
        status: "ready",
    })
}

pub async fn ready() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "ready" })
}

pub async fn live() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "alive" })
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
}
