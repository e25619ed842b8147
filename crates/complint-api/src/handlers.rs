//! API Handlers
use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Html,
    Json,
};
use chrono::Utc;
use complint_core::{GatewayError, LintRequest, Severity};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{metrics, AppState, SERVICE_NAME};

pub async fn status(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "ok": true,
            "name": SERVICE_NAME,
            "time": Utc::now().to_rfc3339(),
            "uptime": state.started_at.elapsed().as_secs(),
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Debug utility: reflects the request back to the caller.
pub async fn echo(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let mut header_map = serde_json::Map::new();
    for (name, value) in headers.iter() {
        header_map.insert(
            name.to_string(),
            json!(value.to_str().unwrap_or("<non-utf8>")),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "method": method.to_string(),
            "path": uri.path(),
            "headers": header_map,
            "body": body,
        })),
    )
}

/// Wire shape of a lint request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintBody {
    pub language: Option<String>,
    pub code: Option<String>,
    pub targets: Option<String>,
    pub compat_severity: Option<Severity>,
}

pub async fn lint(
    State(state): State<AppState>,
    Json(body): Json<LintBody>,
) -> (StatusCode, Json<Value>) {
    metrics::LINT_REQUESTS.inc();

    let code = match body.code {
        Some(code) if !code.trim().is_empty() => code,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "field 'code' must be a non-empty string" })),
            )
        }
    };

    let request = LintRequest {
        language: body.language,
        code,
        targets: body.targets,
        compat_severity: body.compat_severity,
    };

    match state.gateway.lint(&request) {
        Ok(outcome) => (
            StatusCode::OK,
            Json(json!({
                "ok": true,
                "language": outcome.language,
                "summary": outcome.report.summary,
                "items": outcome.report.items,
            })),
        ),
        Err(GatewayError::InvalidInput(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
        }
        Err(GatewayError::AnalyzerFailure(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal analyzer failure" })),
        ),
    }
}

pub async fn playground() -> Html<&'static str> {
    Html(include_str!("../assets/playground.html"))
}

pub async fn export_metrics() -> (StatusCode, String) {
    match metrics::encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => {
            tracing::error!(error = %e, "metrics encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Not found: {} {}", method, uri.path()) })),
    )
}
