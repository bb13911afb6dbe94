#![cfg(feature = "axum")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Extension, Router,
};
use pageable_params::{PageRequest, PageableParser, ParserConfig, Problem};
use tower::ServiceExt;

async fn list_items(PageRequest(pageable): PageRequest) -> String {
    let sort = pageable
        .sort()
        .map(|s| s.to_signed_tokens())
        .unwrap_or_else(|| "none".to_string());
    format!("{}/{}/{}", pageable.page(), pageable.size(), sort)
}

fn router() -> Router {
    Router::new().route("/items", get(list_items))
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn extracts_defaults_without_query() {
    let resp = router()
        .oneshot(Request::get("/items").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "0/10/none");
}

#[tokio::test]
async fn extracts_page_size_and_sort() {
    let resp = router()
        .oneshot(
            Request::get("/items?page=2&size=5&sort=name%2Cdesc&sort=id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "2/5/-name,+id");
}

#[tokio::test]
async fn rejects_with_problem_details() {
    let resp = router()
        .oneshot(Request::get("/items?size=0").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/problem+json"
    );

    let problem: Problem = serde_json::from_str(&body_string(resp).await).expect("json");
    assert_eq!(problem.code, "SIZE_VALUE_INVALID");
    assert_eq!(problem.instance, "/items");
}

#[tokio::test]
async fn uses_parser_from_extensions() {
    let parser = PageableParser::new(ParserConfig::new("p", "limit", "order", 0, 50));
    let app = router().layer(Extension(parser));

    let resp = app
        .oneshot(
            Request::get("/items?p=3&order=a%2Casc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "3/50/+a");
}
