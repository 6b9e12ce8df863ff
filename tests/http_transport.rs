//! HttpTransport against a local fake Coolify API

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use coolify_mcp::platform::api::{CoolifyApiError, CoolifyClient, HttpTransport};
use coolify_mcp::tools::ToolRouter;
use serde_json::{Value, json};
use std::time::Duration;
use tokio::net::TcpListener;

const TOKEN: &str = "secret-token";

async fn list_projects() -> Json<Value> {
    Json(json!({
        "data": [{"id": 1, "uuid": "p-1", "name": "web", "team_id": 0}],
        "links": {"next": null},
        "meta": {"current_page": 1, "total": 1}
    }))
}

async fn create_project() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"message": "Validation failed", "errors": {"name": ["Name is required"]}})),
    )
}

async fn update_project(Path(id): Path<u64>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"id": id, "uuid": format!("p-{}", id), "name": body["name"]}))
}

async fn delete_project(Path(_id): Path<u64>) -> StatusCode {
    StatusCode::OK
}

async fn current_team(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => (
            StatusCode::OK,
            Json(json!({"id": 0, "name": "Root Team", "personal_team": true})),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthenticated."})),
        ),
    }
}

async fn spawn_api() -> String {
    let app = Router::new()
        .route("/api/v1/version", get(|| async { "4.0.0-beta.360" }))
        .route("/api/v1/teams/current", get(current_team))
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route("/api/v1/projects/{id}", put(update_project).delete(delete_project))
        .route(
            "/api/v1/servers",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str, token: &str) -> CoolifyClient<HttpTransport> {
    CoolifyClient::connect(base_url, token, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_envelope_list_is_unwrapped() {
    let base = spawn_api().await;
    let projects = client(&base, TOKEN).list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].uuid, "p-1");
}

#[tokio::test]
async fn test_plain_text_version() {
    let base = spawn_api().await;
    let version = client(&base, TOKEN).get_version().await.unwrap();
    assert_eq!(version.version, "4.0.0-beta.360");
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let base = spawn_api().await;
    let team = client(&base, TOKEN).get_current_team().await.unwrap();
    assert_eq!(team.name, "Root Team");

    let err = client(&base, "wrong").get_current_team().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "Unauthenticated.");
}

#[tokio::test]
async fn test_json_error_body_is_kept() {
    let base = spawn_api().await;
    let router = ToolRouter::new(client(&base, TOKEN));
    let output = router
        .call("create_project", Some(&json!({"name": "x"})))
        .await
        .unwrap();

    assert!(output.is_error);
    assert_eq!(output.joined_text(), "[422] Validation failed\nname: Name is required");
}

#[tokio::test]
async fn test_put_body_reaches_the_server() {
    let base = spawn_api().await;
    let router = ToolRouter::new(client(&base, TOKEN));
    let output = router
        .call("update_project", Some(&json!({"projectId": 4, "name": "renamed"})))
        .await
        .unwrap();

    assert_eq!(
        output.joined_text(),
        "Project updated successfully!\nUUID: p-4\nName: renamed"
    );
}

#[tokio::test]
async fn test_empty_delete_body_is_success() {
    let base = spawn_api().await;
    client(&base, TOKEN).delete_project(4).await.unwrap();
}

#[tokio::test]
async fn test_plain_text_error_uses_generic_message() {
    let base = spawn_api().await;
    let err = client(&base, TOKEN).list_servers().await.unwrap_err();

    assert!(matches!(err, CoolifyApiError::ApiError { status: 502, .. }));
    assert_eq!(err.message(), "Request failed with status code 502");
}

#[tokio::test]
async fn test_unreachable_host_has_no_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr), TOKEN)
        .list_servers()
        .await
        .unwrap_err();
    assert!(matches!(err, CoolifyApiError::HttpError(_)));
    assert_eq!(err.status(), None);
}
