// tests/openapi_integration.rs
use article_gate::presentation::http::openapi::{ApiDoc, docs_router};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt; // for oneshot
use utoipa::OpenApi;

#[tokio::test]
async fn openapi_json_is_served() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc["info"]["title"], "Article Gate API");
    assert!(doc["paths"]["/api/v1/edits/{identifier}"]["post"].is_object());
    assert!(doc["components"]["schemas"]["EditOutcomeDto"].is_object());
}

#[test]
fn basic_auth_and_permission_route_are_documented() {
    let generated = serde_json::to_value(ApiDoc::openapi()).unwrap();
    assert!(generated["paths"]["/api/v1/articles/{id}/permission/{state}"]["put"].is_object());
    assert_eq!(
        generated["components"]["securitySchemes"]["basicAuth"]["scheme"],
        "basic"
    );
}

#[test]
fn id_routes_document_bad_request_for_malformed_ids() {
    let generated = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let permission = &generated["paths"]["/api/v1/articles/{id}/permission"]["get"];
    assert!(permission["responses"]["400"].is_object());
    assert_eq!(permission["responses"]["404"]["description"], "Unknown article.");
    assert_eq!(permission["parameters"][0]["schema"]["type"], "string");

    for path in [
        "/api/v1/articles/{id}/latest",
        "/api/v1/articles/{id}/versions",
        "/api/v1/articles/{id}/permission/history",
    ] {
        assert!(
            generated["paths"][path]["get"]["responses"]["400"].is_object(),
            "{path}"
        );
    }
}
