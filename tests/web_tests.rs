use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use sealion_review::config::{ProviderConfig, DEFAULT_MODEL};
use sealion_review::request::ChatMessage;
use sealion_review::web::{create_router, failed_reports, AppState, RewriteRequest};
use sealion_review::{CompletionBackend, CompletionReply, Reviewer, SeaLionClient};

/// Answers with the system prompt and the model it was asked for
struct SystemEcho;

#[async_trait]
impl CompletionBackend for SystemEcho
{   async fn complete(
      &self
    , messages: &[ChatMessage]
    , model: &str
    , _temperature: Option<f32>
    ) -> CompletionReply
    {   Ok(format!("{} @ {}", messages[0].content, model))
    }
}

fn app_with(backend: Arc<dyn CompletionBackend>) -> Router
{   create_router(AppState
    {   reviewer: Reviewer::new(backend)
      , default_model: DEFAULT_MODEL.to_string()
    })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value)
{   let request = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_index_serves_form_with_default_model()
{   let app = app_with(Arc::new(SystemEcho));
    let response = app
      .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(&format!("value=\"{}\"", DEFAULT_MODEL)));
    assert!(html.contains("Detected issues"));
    assert!(html.contains("Rewritten code"));
    assert!(!html.contains("{{default_model}}"));
}

#[tokio::test]
async fn test_health()
{   let app = app_with(Arc::new(SystemEcho));
    let response = app
      .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_review_endpoint_returns_three_reports_in_order()
{   let (status, body) = post_json(
      app_with(Arc::new(SystemEcho)),
      "/api/review",
      json!({ "code": "print('hi')", "model": "m1" })
    ).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      body["issues"],
      "You are a helpful coding assistant. Identify bugs. @ m1"
    );
    assert_eq!(
      body["improvements"],
      "You are an expert in code optimisation. @ m1"
    );
    assert_eq!(
      body["standards"],
      "You are a PEP-8 and design-guideline expert. @ m1"
    );
}

#[tokio::test]
async fn test_rewrite_endpoint()
{   let (status, body) = post_json(
      app_with(Arc::new(SystemEcho)),
      "/api/rewrite",
      json!({
        "code": "print('hi')",
        "issues": "none",
        "improvements": "none",
        "standards": "API call failed: HTTP error: boom",
        "model": "m2"
      })
    ).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      body["code"],
      "You are a senior software engineer rewriting the code. @ m2"
    );
}

#[tokio::test]
async fn test_review_endpoint_without_api_key_shows_sentinel()
{   let client = SeaLionClient::new(ProviderConfig::default())
      .expect("client builds");
    let (status, body) = post_json(
      app_with(Arc::new(client)),
      "/api/review",
      json!({ "code": "x = 1", "model": DEFAULT_MODEL })
    ).await;

    assert_eq!(status, StatusCode::OK);
    for key in ["issues", "improvements", "standards"]
    {   assert_eq!(body[key], "SEA_LION_API_KEY is not set");
    }
}

#[tokio::test]
async fn test_malformed_body_gets_json_error()
{   let request = Request::builder()
      .method("POST")
      .uri("/api/review")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{code: 1}"))
      .unwrap();
    let response = app_with(Arc::new(SystemEcho))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes)
      .expect("rejection body is JSON");
    let error = body["error"].as_str().expect("error is a string");
    assert!(error.contains("JSON"), "got: {}", error);
}

#[tokio::test]
async fn test_rewrite_without_json_content_type_gets_json_error()
{   let request = Request::builder()
      .method("POST")
      .uri("/api/rewrite")
      .body(Body::from("{}"))
      .unwrap();
    let response = app_with(Arc::new(SystemEcho))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes)
      .expect("rejection body is JSON");
    assert!(body["error"].is_string());
}

#[test]
fn test_failed_reports_flags_rendered_failures()
{   let req = RewriteRequest
    {   code: "x = 1".to_string()
      , issues: "API call failed: Request timed out: slow".to_string()
      , improvements: "Use a constant.".to_string()
      , standards: "SEA_LION_API_KEY is not set".to_string()
      , model: DEFAULT_MODEL.to_string()
    };
    assert_eq!(failed_reports(&req), vec!["issues", "standards"]);
}

#[test]
fn test_failed_reports_accepts_real_reports()
{   let req = RewriteRequest
    {   code: "x = 1".to_string()
      , issues: "No issues found.".to_string()
      , improvements: String::new()
      , standards: "Follows PEP-8.".to_string()
      , model: DEFAULT_MODEL.to_string()
    };
    assert!(failed_reports(&req).is_empty());
}
