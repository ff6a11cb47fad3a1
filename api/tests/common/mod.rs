use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use pantry_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

const SEED_RECIPES: &str = r#"[
    {"title": "Chicken Tomato Stew", "ingredients": "[\"1 chicken\", \"4 tomato\"]", "directions": "Brown the chicken, add tomato, simmer.", "ner": "[\"chicken\", \"tomato\"]"},
    {"title": "Tomato Salad", "ingredients": "[\"3 tomato\", \"olive oil\"]", "directions": "Slice and dress."}
]"#;

/// Answers like the Gemini API: image prompts get the label encoded in the
/// image bytes (`image:tomato.jpg`, `upload:egg`), text prompts get recipes.
async fn gemini(Json(request): Json<Value>) -> Response {
    let parts = &request["contents"][0]["parts"];

    let answer = match parts[1]["inline_data"]["data"].as_str() {
        Some(encoded) => {
            let data = general_purpose::STANDARD.decode(encoded).unwrap_or_default();
            let text = String::from_utf8_lossy(&data).to_string();
            let label = text
                .split_once(':')
                .map(|(_, rest)| rest.trim_end_matches(".jpg").to_string())
                .unwrap_or_default();
            if label == "broken" {
                return (StatusCode::INTERNAL_SERVER_ERROR, "model crashed").into_response();
            }
            json!({ "label": label }).to_string()
        }
        None => {
            let prompt = parts[0]["text"].as_str().unwrap_or_default();
            if prompt.contains("durian") {
                json!({ "recipes": [{ "name": "Durian Cake", "ingredients": ["durian"] }] })
                    .to_string()
            } else {
                json!({
                    "recipes": [
                        {
                            "name": "Veg Stew",
                            "ingredients": ["tomato", "carrot"],
                            "instructions": "Simmer everything.",
                            "source": "https://example.com/veg-stew"
                        },
                        {
                            "name": "Chicken Soup",
                            "ingredients": ["chicken", "tomato"],
                            "instructions": "Boil chicken, add tomato.",
                            "source": "https://example.com/chicken-soup"
                        }
                    ]
                })
                .to_string()
            }
        }
    };

    Json(json!({
        "candidates": [{ "content": { "parts": [{ "text": answer }] } }]
    }))
    .into_response()
}

async fn image(Path(name): Path<String>) -> Response {
    if name.starts_with("missing") {
        return StatusCode::NOT_FOUND.into_response();
    }
    format!("image:{}", name).into_response()
}

/// Serves images under `/images/{name}` and the Gemini API on every other path.
pub async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/images/{name}", get(image))
        .fallback(gemini);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub struct TestContext {
    pub server: TestServer,
    pub stub_url: String,
}

impl TestContext {
    pub fn image_url(&self, name: &str) -> String {
        format!("{}/images/{}", self.stub_url, name)
    }
}

pub async fn setup(extra_args: &[&str]) -> TestContext {
    let stub_url = spawn_stub().await;

    let seed_file = std::env::temp_dir().join(format!("pantry-api-seed-{}.json", uuid::Uuid::new_v4()));
    tokio::fs::write(&seed_file, SEED_RECIPES).await.unwrap();
    let seed_path = seed_file.to_string_lossy().to_string();

    let mut argv = vec![
        "pantry-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        stub_url.as_str(),
        "--database-url",
        "sqlite::memory:",
        "--recipes-seed-file",
        seed_path.as_str(),
    ];
    argv.extend_from_slice(extra_args);

    let args = Arc::new(Args::parse_from(argv));
    let app_state = state(args).await.unwrap();
    let _ = tokio::fs::remove_file(&seed_file).await;

    TestContext {
        server: TestServer::new(router(app_state).unwrap()).unwrap(),
        stub_url,
    }
}
