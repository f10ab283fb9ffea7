use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_prefix, PageBody, UploadBody};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(uri: &str, field: &str, filename: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(b"--BOUNDARY\r\n");
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n--BOUNDARY--\r\n");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
        .body(Body::from(body))
        .unwrap()
}

async fn call(app: &mut axum::Router, request: Request<Body>) -> axum::response::Response {
    use tower::Service;

    ServiceExt::<Request<Body>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap()
}

// --- page ---

#[tokio::test]
async fn page_empty_store() {
    let resp = app()
        .oneshot(json_request("/admin-api/product/page", r#"{"page":1,"size":10}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"list": [], "total": 0}));
}

#[tokio::test]
async fn page_rejects_non_json() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin-api/product/page")
                .body(Body::from("page=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn unknown_prefix_is_404() {
    let resp = app()
        .oneshot(json_request("/other/product/page", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_prefix_serves_from_root() {
    let resp = app_with_prefix("")
        .oneshot(json_request("/product/page", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// --- saveOrEdit / remove ---

#[tokio::test]
async fn edit_unknown_product_is_404() {
    let resp = app()
        .oneshot(json_request("/admin-api/product/saveOrEdit", r#"{"id":99,"name":"Ghost"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remove_without_ids_is_422() {
    let resp = app()
        .oneshot(json_request("/admin-api/product/remove", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- uploads ---

#[tokio::test]
async fn upload_file_reports_name_and_size() {
    let resp = app()
        .oneshot(multipart_request("/admin-api/common/upload/file", "file", "a.png", b"\x89PNG"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let upload: UploadBody = body_json(resp).await;
    assert_eq!(upload.name, "a.png");
    assert_eq!(upload.size, 4);
    assert!(upload.url.starts_with("/uploads/file/"));
    assert!(upload.url.ends_with("/a.png"));
}

#[tokio::test]
async fn upload_video_uses_video_folder() {
    let resp = app()
        .oneshot(multipart_request("/admin-api/common/upload/video", "file", "clip.mp4", b"0000"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let upload: UploadBody = body_json(resp).await;
    assert!(upload.url.starts_with("/uploads/video/"));
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let resp = app()
        .oneshot(multipart_request("/admin-api/common/upload/file", "avatar", "a.png", b"x"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full product lifecycle ---

#[tokio::test]
async fn product_lifecycle() {
    let mut app = app();

    // create two
    let resp = call(&mut app, json_request("/admin-api/product/saveOrEdit", r#"{"name":"Desk","status":1}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = body_json(resp).await;
    let desk = created["id"].as_i64().unwrap();

    let resp = call(&mut app, json_request("/admin-api/product/saveOrEdit", r#"{"name":"Lamp","status":0}"#)).await;
    let created: Value = body_json(resp).await;
    let lamp = created["id"].as_i64().unwrap();
    assert_ne!(desk, lamp);

    // page with size 1 — total counts everything
    let resp = call(&mut app, json_request("/admin-api/product/page", r#"{"page":1,"size":1}"#)).await;
    let page: PageBody = body_json(resp).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].id, desk);

    // second page
    let resp = call(&mut app, json_request("/admin-api/product/page", r#"{"page":2,"size":1}"#)).await;
    let page: PageBody = body_json(resp).await;
    assert_eq!(page.list[0].id, lamp);

    // filter
    let resp = call(&mut app, json_request("/admin-api/product/page", r#"{"page":1,"size":10,"status":1}"#)).await;
    let page: PageBody = body_json(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].fields["name"], "Desk");

    // edit merges fields
    let resp = call(
        &mut app,
        json_request("/admin-api/product/saveOrEdit", &format!(r#"{{"id":{lamp},"status":1}}"#)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call(&mut app, json_request("/admin-api/product/page", r#"{"status":1}"#)).await;
    let page: PageBody = body_json(resp).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.list[1].fields["name"], "Lamp");

    // remove one real and one unknown id
    let resp = call(&mut app, json_request("/admin-api/product/remove", &format!(r#"{{"ids":[{desk},999]}}"#))).await;
    let removed: Value = body_json(resp).await;
    assert_eq!(removed, json!({"removed": 1}));

    let resp = call(&mut app, json_request("/admin-api/product/page", "{}")).await;
    let page: PageBody = body_json(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, lamp);
}
