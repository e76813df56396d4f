mod rate_limit;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use paisa_agents::ResponderAgent;
use paisa_core::RuleSet;
use paisa_observability::AppMetrics;
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::rate_limit::IpRateLimiter;

const MAX_TEXT_CHARS: usize = 2_000;

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<ResponderAgent>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub limiter: IpRateLimiter,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    rules_loaded: usize,
    metrics: paisa_observability::MetricsSnapshot,
}

#[derive(Debug, Clone, Deserialize)]
struct RespondRequest {
    text: String,
}

/// Assemble the service from environment configuration: the rule table
/// (`PAISA_RULES_PATH`, builtin otherwise), the api key, and rate limits.
pub fn build_app() -> Result<Router> {
    let metrics = AppMetrics::shared();

    let rules = match env::var("PAISA_RULES_PATH") {
        Ok(path) => RuleSet::from_json_file(&path)
            .with_context(|| format!("failed loading rule table from {path}"))?,
        Err(_) => RuleSet::builtin(),
    };

    let agent = Arc::new(ResponderAgent::new(Arc::new(rules), metrics.clone()));

    let api_key = env::var("PAISA_API_KEY").unwrap_or_else(|_| "dev-paisa-key".to_string());
    let rate_limit_window = Duration::from_secs(
        env::var("PAISA_RATE_LIMIT_WINDOW_SECONDS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(60),
    );
    let rate_limit_max = env::var("PAISA_RATE_LIMIT_MAX")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);

    let state = ApiState {
        agent,
        metrics,
        api_key,
        limiter: IpRateLimiter::new(rate_limit_window, rate_limit_max),
    };

    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/respond", post(respond))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(16 * 1024))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        rules_loaded: state.agent.rules().len(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn respond(State(state): State<ApiState>, Json(input): Json<RespondRequest>) -> Response {
    if input.text.chars().count() > MAX_TEXT_CHARS {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "text_too_long",
                "max_chars": MAX_TEXT_CHARS
            })),
        )
            .into_response();
    }

    let outcome = state.agent.respond(&input.text);
    (StatusCode::OK, Json(outcome)).into_response()
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());
    if provided != Some(state.api_key.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "invalid_api_key" })),
        )
            .into_response();
    }

    next.run(request).await
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    let key = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("local")
        .to_string();

    if !state.limiter.allow(&key) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "error": "rate_limited" })),
        )
            .into_response();
    }

    next.run(request).await
}
