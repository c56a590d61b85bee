//! End-to-end API tests: fixture page server -> analyze -> history/by-id,
//! plus progress delivery and error mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use a11y_status::fetch::HtmlFetcher;
use a11y_status::models::ProgressStep;
use a11y_status::progress::ProgressRegistry;
use a11y_status::server::{build_router, AppState};
use a11y_status::storage::run_migrations;

const ACCESSIBLE_PAGE: &str = r#"<html><head><title>Accessible Page</title></head><body>
    <img src="logo.png" alt="Company logo">
    <label for="q">Query</label>
    <input type="text" id="q">
</body></html>"#;

const INACCESSIBLE_PAGE: &str = r#"<html><head></head><body>
    <img src="logo.png">
    <input type="text" name="q">
</body></html>"#;

/// Serves the HTML fixtures on an ephemeral local port.
async fn start_fixture_server() -> String {
    let app = Router::new()
        .route(
            "/accessible",
            get(|| async { axum::response::Html(ACCESSIBLE_PAGE) }),
        )
        .route(
            "/inaccessible",
            get(|| async { axum::response::Html(INACCESSIBLE_PAGE) }),
        )
        .route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, "gone") }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    AppState {
        pool: Arc::new(pool),
        fetcher: Arc::new(HtmlFetcher::new(Arc::new(reqwest::Client::new()))),
        progress: Arc::new(ProgressRegistry::new()),
    }
}

fn analyze_request(url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(r#"{{"url":"{}"}}"#, url)))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_analyze_accessible_page_scores_100() {
    let base = start_fixture_server().await;
    let router = build_router(test_state().await);

    let response = router
        .oneshot(analyze_request(&format!("{}/accessible", base)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["result"]["score"], 100);
    assert_eq!(json["result"]["passedChecks"], 3);
    assert_eq!(json["result"]["title"]["content"], "Accessible Page");
    assert!(json["id"].as_str().is_some());
    assert!(json["analyzedAt"].as_str().is_some());
    assert!(json["duration"].as_i64().is_some());
}

#[tokio::test]
async fn test_analyze_inaccessible_page_scores_0() {
    let base = start_fixture_server().await;
    let router = build_router(test_state().await);

    let response = router
        .oneshot(analyze_request(&format!("{}/inaccessible", base)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["result"]["score"], 0);
    assert_eq!(json["result"]["passedChecks"], 0);
    assert_eq!(json["result"]["images"]["missingAltImages"][0], "logo.png");
    assert_eq!(json["result"]["inputs"]["inputsWithoutLabel"][0], "q");
}

#[tokio::test]
async fn test_analyze_rejects_invalid_url() {
    let router = build_router(test_state().await);

    let response = router.oneshot(analyze_request("example.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation error");
    assert!(json["details"].as_array().map_or(false, |d| !d.is_empty()));
}

#[tokio::test]
async fn test_analyze_fetch_failure_returns_500_and_persists_nothing() {
    let base = start_fixture_server().await;
    let state = test_state().await;
    let router = build_router(state.clone());

    let response = router
        .oneshot(analyze_request(&format!("{}/gone", base)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to fetch URL: HTTP 404");

    let history = build_router(state)
        .oneshot(Request::builder().uri("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(history).await;
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_history_pagination_and_lookup() {
    let base = start_fixture_server().await;
    let state = test_state().await;

    for _ in 0..3 {
        let response = build_router(state.clone())
            .oneshot(analyze_request(&format!("{}/accessible", base)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = build_router(state.clone())
        .oneshot(
            Request::builder()
                .uri("/history?page=1&limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 2);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Fetch one record by id
    let id = json["data"][0]["id"].as_str().unwrap().to_string();
    let response = build_router(state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/analysis/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id.as_str());

    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/analysis/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_rejects_bad_pagination() {
    let state = test_state().await;

    for uri in ["/history?page=0", "/history?limit=0", "/history?limit=101"] {
        let response = build_router(state.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_progress_events_delivered_to_token_holder() {
    let base = start_fixture_server().await;
    let state = test_state().await;

    // Client subscribes with its token before invoking the analysis
    let mut rx = state.progress.subscribe("client-abc");

    let response = build_router(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-client-id", "client-abc")
                .body(Body::from(format!(
                    r#"{{"url":"{}/accessible"}}"#,
                    base
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut steps = Vec::new();
    while let Ok(event) = rx.try_recv() {
        steps.push((event.step, event.progress));
    }
    assert_eq!(
        steps,
        vec![
            (ProgressStep::Fetching, 10),
            (ProgressStep::Title, 25),
            (ProgressStep::Images, 50),
            (ProgressStep::Inputs, 75),
            (ProgressStep::Complete, 100),
            (ProgressStep::Done, 100),
        ]
    );
}

#[tokio::test]
async fn test_analyze_without_token_still_succeeds() {
    let base = start_fixture_server().await;
    let state = test_state().await;

    // No subscriber, token points nowhere; result must be unaffected
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-client-id", "nobody-listening")
                .body(Body::from(format!(
                    r#"{{"url":"{}/accessible"}}"#,
                    base
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["score"], 100);
}
