//! HTTP surface: the review form and the JSON endpoints behind its buttons

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::client::Reviewer;
use crate::error::{is_failure_text, render};

const INDEX_HTML: &str = include_str!("../static/index.html");
const DEFAULT_MODEL_SLOT: &str = "{{default_model}}";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState
{   pub reviewer: Reviewer
  , pub default_model: String
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest
{   #[serde(default)]
    pub code: String
  , #[serde(default)]
    pub model: String
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReviewResponse
{   pub issues: String
  , pub improvements: String
  , pub standards: String
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest
{   #[serde(default)]
    pub code: String
  , #[serde(default)]
    pub issues: String
  , #[serde(default)]
    pub improvements: String
  , #[serde(default)]
    pub standards: String
  , #[serde(default)]
    pub model: String
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RewriteResponse
{   pub code: String
}

/// Body returned when a request cannot be decoded
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse
{   pub error: String
}

type Rejected = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse
{   pub status: String
  , pub version: String
}

pub fn create_router(state: AppState) -> Router
{   Router::new()
      .route("/", get(index))
      .route("/health", get(health))
      .route("/api/review", post(review))
      .route("/api/rewrite", post(rewrite))
      .with_state(Arc::new(state))
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String>
{   let model = state.default_model
      .replace('&', "&amp;")
      .replace('"', "&quot;")
      .replace('<', "&lt;");
    Html(INDEX_HTML.replace(DEFAULT_MODEL_SLOT, &model))
}

async fn health() -> Json<HealthResponse>
{   Json(HealthResponse
    {   status: "ok".to_string()
      , version: env!("CARGO_PKG_VERSION").to_string()
    })
}

fn reject(rejection: JsonRejection) -> Rejected
{   warn!("Rejected request body: {}", rejection.body_text());
    (
      rejection.status()
    , Json(ErrorResponse
      {   error: rejection.body_text()
      })
    )
}

/// Labels of the rewrite inputs that are rendered failures, not reports
pub fn failed_reports(req: &RewriteRequest) -> Vec<&'static str>
{   [
      ("issues", &req.issues)
    , ("improvements", &req.improvements)
    , ("standards", &req.standards)
    ]
      .into_iter()
      .filter(|(_, text)| is_failure_text(text))
      .map(|(label, _)| label)
      .collect()
}

async fn review(
  State(state): State<Arc<AppState>>
, payload: Result<Json<ReviewRequest>, JsonRejection>
) -> Result<Json<ReviewResponse>, Rejected>
{   let Json(req) = payload.map_err(reject)?;
    debug!("POST /api/review model={}", req.model);
    let (issues, improvements, standards) = state.reviewer
      .review(&req.code, &req.model)
      .await
      .into_texts();

    Ok(Json(ReviewResponse
    {   issues
      , improvements
      , standards
    }))
}

async fn rewrite(
  State(state): State<Arc<AppState>>
, payload: Result<Json<RewriteRequest>, JsonRejection>
) -> Result<Json<RewriteResponse>, Rejected>
{   let Json(req) = payload.map_err(reject)?;
    debug!("POST /api/rewrite model={}", req.model);
    for label in failed_reports(&req)
    {   warn!("Rewrite input '{}' is a failed report", label);
    }

    let reply = state.reviewer
      .apply_rewrite(
        &req.code,
        &req.issues,
        &req.improvements,
        &req.standards,
        &req.model
      )
      .await;

    Ok(Json(RewriteResponse
    {   code: render(reply)
    }))
}
