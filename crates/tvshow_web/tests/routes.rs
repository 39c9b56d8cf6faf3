//! Route-level tests driven through the router with `oneshot`. The pool is
//! built lazily, so requests that are rejected at the boundary never need a
//! reachable database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tvshow_web::{routes, AppState};

fn app() -> axum::Router {
    let pool = db::pool(&db::DbConfig {
        host: "localhost".to_string(),
        port: 3306,
        user: "nobody".to_string(),
        password: String::new(),
        database: "leisureasy".to_string(),
    });
    routes::router(AppState { db: pool })
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn non_numeric_show_id_is_rejected_with_400() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/tvshow/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("abc"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/nosuchpage")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
