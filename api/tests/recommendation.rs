mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};

use common::setup;

fn names(recipes: &Value) -> Vec<String> {
    recipes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_recommend_unions_images_and_ranks_by_preference() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": [ctx.image_url("tomato.jpg"), ctx.image_url("chicken.jpg")],
            "preferences": {"chicken": 5}
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["ingredients"], json!(["chicken", "tomato"]));
    assert_eq!(names(&body["llm"]), vec!["Chicken Soup", "Veg Stew"]);
    assert_eq!(names(&body["db"]), vec!["Chicken Tomato Stew"]);
    assert_eq!(body["db"][0]["source"], "");
    assert!(body.get("failures").is_none());
}

#[tokio::test]
async fn test_recommend_without_preferences_keeps_source_order() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({ "imageUrls": [ctx.image_url("tomato.jpg")] }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(names(&body["llm"]), vec!["Veg Stew", "Chicken Soup"]);
    assert_eq!(body["db"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_recommend_skips_unreadable_images() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": [ctx.image_url("tomato.jpg"), ctx.image_url("missing.jpg")],
            "preferences": {}
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["ingredients"], json!(["tomato"]));
    assert_eq!(body["failures"]["images"][0]["index"], 1);
}

#[tokio::test]
async fn test_recommend_fails_when_no_image_is_recognized() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": [ctx.image_url("missing-1.jpg"), ctx.image_url("broken.jpg")]
        }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "recognition_failed");
    assert_eq!(body["status"], 503);
}

#[tokio::test]
async fn test_recommend_reports_schema_violation_and_keeps_index_results() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({ "imageUrls": [ctx.image_url("durian.jpg")] }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["llm"], json!([]));
    assert_eq!(body["db"], json!([]));
    assert_eq!(body["failures"]["sources"][0]["source"], "generative");
    assert_eq!(body["failures"]["sources"][0]["kind"], "schema_violation");
}

#[tokio::test]
async fn test_recommend_rejects_non_numeric_weight() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": [ctx.image_url("tomato.jpg")],
            "preferences": {"chicken": "lots"}
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "invalid_preference");
}

#[tokio::test]
async fn test_recommend_rejects_non_object_preferences() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": [ctx.image_url("tomato.jpg")],
            "preferences": ["chicken"]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "invalid_preference");
}

#[tokio::test]
async fn test_recommend_rejects_empty_image_list() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({ "imageUrls": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "bad_request");
}

#[tokio::test]
async fn test_recommend_rejects_invalid_url() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({ "imageUrls": ["not a url"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_rejects_non_http_urls() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": ["ftp://example.com/tomato.jpg", "file:///etc/passwd"]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "bad_request");
}

#[tokio::test]
async fn test_recommend_rejects_too_many_images() {
    let ctx = setup(&["--max-images", "1"]).await;

    let response = ctx
        .server
        .post("/recommend")
        .json(&json!({
            "imageUrls": [ctx.image_url("tomato.jpg"), ctx.image_url("chicken.jpg")]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_recommendation() {
    let ctx = setup(&[]).await;

    let form = MultipartForm::new()
        .add_part(
            "image",
            Part::bytes(b"upload:chicken".to_vec())
                .file_name("chicken.jpg")
                .mime_type("image/jpeg"),
        )
        .add_part(
            "image",
            Part::bytes(b"upload:tomato".to_vec())
                .file_name("tomato.jpg")
                .mime_type("image/jpeg"),
        )
        .add_text("preferences", r#"{"chicken": 5}"#);

    let response = ctx.server.post("/recommend/upload").multipart(form).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["ingredients"], json!(["chicken", "tomato"]));
    assert_eq!(names(&body["llm"])[0], "Chicken Soup");
}

#[tokio::test]
async fn test_upload_requires_an_image() {
    let ctx = setup(&[]).await;

    let form = MultipartForm::new().add_text("preferences", "{}");

    let response = ctx.server.post("/recommend/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_oversized_image() {
    let ctx = setup(&["--max-image-bytes", "8"]).await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"upload:tomato".to_vec()).file_name("tomato.jpg"),
    );

    let response = ctx.server.post("/recommend/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
