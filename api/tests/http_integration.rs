use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use nutrimood_api::{
    application::http::server::http_server::{router, state},
    args::{ActionArgs, Args, LlmArgs, LogArgs, ServerArgs},
};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};
use url::Url;

const API_KEY: &str = "test-key";

// 1x1 transparent PNG
const PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn candidate(payload: Value) -> Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": payload.to_string()}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

/// Answers like Gemini would, picking the payload from the prompt it receives.
async fn fake_generate_content(
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if query.get("key").map(String::as_str) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, "bad key").into_response();
    }

    let parts = body["contents"][0]["parts"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    let has_image = parts.iter().any(|p| p.get("inline_data").is_some());
    let prompt: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let response = if has_image {
        candidate(json!({
            "foodItems": ["Cheeseburger", "Fries"],
            "calories": 850,
            "protein": 32,
            "carbs": 90,
            "fat": 45,
            "moodImpact": "Likely a short energy spike followed by sluggishness."
        }))
    } else if prompt.contains("Food Item: Unobtainium") {
        json!({"candidates": []})
    } else if prompt.contains("nutritionist") {
        candidate(json!({
            "calories": 100,
            "protein": 10,
            "carbs": 4,
            "fat": 5,
            "micronutrients": [
                {"name": "Calcium", "amount": "110 mg"},
                {"name": "Vitamin B12", "amount": "0.8 µg"}
            ]
        }))
    } else if prompt.contains("Mood Score") {
        candidate(json!({
            "personalizedMoodImpact": "The heavy, fatty meal likely contributed to your low mood."
        }))
    } else {
        json!({"candidates": []})
    };

    Json(response).into_response()
}

async fn spawn_fake_gemini() -> Url {
    let app = Router::new().route("/v1beta/models/{model_action}", post(fake_generate_content));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/v1beta/", addr)).unwrap()
}

fn test_args(gemini_base_url: Url) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:9002".to_string()],
            enable_metrics: false,
        },
        llm: LlmArgs {
            gemini_api_key: API_KEY.to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_base_url,
            llm_request_timeout_secs: 5,
        },
        action: ActionArgs {
            image_analysis_delay_ms: 0,
            nutrition_delay_ms: 0,
            personalization_delay_ms: 0,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

struct ApiContext {
    server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let base_url = spawn_fake_gemini().await;
        let app_state = state(Arc::new(test_args(base_url))).await.unwrap();
        let app = router(app_state).unwrap();

        ApiContext {
            server: TestServer::new(app).unwrap(),
        }
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_food_image_returns_food_items(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/food-analysis/image")
        .json(&json!({"photoDataUri": format!("data:image/png;base64,{PNG_BASE64}")}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body["data"]["foodItems"].as_array().unwrap();
    assert!(!items.is_empty());
    assert_eq!(body["data"]["calories"], json!(850.0));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_food_image_rejects_invalid_data_uri(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/food-analysis/image")
        .json(&json!({"photoDataUri": "data:text/plain;base64,aGVsbG8="}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_upload_food_image(ctx: &mut ApiContext) {
    let bytes = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec();
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(bytes).file_name("meal.png").mime_type("image/png"),
    );

    let response = ctx
        .server
        .post("/food-analysis/image/upload")
        .multipart(form)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["foodItems"][0], "Cheeseburger");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_upload_without_image_part_is_rejected(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("note", "no image here");

    let response = ctx
        .server
        .post("/food-analysis/image/upload")
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_nutrition(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/nutrition/analyze")
        .json(&json!({"foodName": "Greek yogurt"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["protein"], json!(10.0));
    assert_eq!(body["data"]["micronutrients"]["Calcium"], "110 mg");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_nutrition_without_result_is_bad_gateway(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/nutrition/analyze")
        .json(&json!({"foodName": "Unobtainium"}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["message"], "Nutritional analysis returned no result.");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_nutrition_rejects_empty_name(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/nutrition/analyze")
        .json(&json!({"foodName": ""}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_personalize_mood_impact(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/mood-impact/personalize")
        .json(&json!({
            "foodDescription": "Cheeseburger, Fries",
            "moodScore": 3,
            "nutritionData": "Calories: 850, Protein: 32g, Carbs: 90g, Fat: 45g"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let narrative = body["data"]["personalizedMoodImpact"].as_str().unwrap();
    assert!(!narrative.is_empty());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_personalize_rejects_out_of_range_mood(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/mood-impact/personalize")
        .json(&json!({
            "foodDescription": "Salad",
            "moodScore": 11,
            "nutritionData": ""
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_weekly_report(ctx: &mut ApiContext) {
    let response = ctx.server.get("/reports/weekly").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["logs"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"]["suggestions"].as_array().unwrap().len(), 3);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_weekly_mood_and_profile(ctx: &mut ApiContext) {
    let mood = ctx.server.get("/reports/weekly/mood").await;
    mood.assert_status_ok();
    let body: Value = mood.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 7);

    let profile = ctx.server.get("/profile/me").await;
    profile.assert_status_ok();
    let body: Value = profile.json();
    assert_eq!(body["data"]["name"], "Alex Doe");
    assert_eq!(body["data"]["stats"]["scans"], 42);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health_and_config(ctx: &mut ApiContext) {
    ctx.server.get("/health/live").await.assert_status_ok();

    let ready = ctx.server.get("/health/ready").await;
    ready.assert_status_ok();
    let body: Value = ready.json();
    assert_eq!(body["model"], "gemini-2.0-flash");

    let config = ctx.server.get("/config").await;
    config.assert_status_ok();
    let body: Value = config.json();
    assert_eq!(body["imageAnalysisDelayMs"], 0);
}
