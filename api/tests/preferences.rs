mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::setup;

#[tokio::test]
async fn test_keywords_from_recipes() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/preferences/keywords")
        .json(&json!({
            "recipes": [
                {
                    "name": "Chicken Soup",
                    "ingredients": ["chicken", "water"],
                    "instructions": "Boil chicken in water",
                    "source": ""
                },
                {
                    "name": "Tomato Soup",
                    "ingredients": ["tomato"],
                    "instructions": "Blend",
                    "source": ""
                }
            ]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["keywords"],
        json!(["chicken", "soup", "water", "boil", "tomato", "blend"])
    );
}

#[tokio::test]
async fn test_keywords_require_recipes() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/preferences/keywords")
        .json(&json!({ "recipes": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_increments_weights() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/preferences/history")
        .json(&json!({
            "preferences": {"chicken": 2},
            "keywords": ["chicken", "soup"]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["preferences"],
        json!({"chicken": 3.0, "soup": 1.0})
    );
}

#[tokio::test]
async fn test_history_rejects_invalid_preferences() {
    let ctx = setup(&[]).await;

    let response = ctx
        .server
        .post("/preferences/history")
        .json(&json!({ "preferences": {"": 1}, "keywords": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "invalid_preference");
}
