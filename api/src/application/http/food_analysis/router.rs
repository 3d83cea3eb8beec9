use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    upload_food_image::{MAX_IMAGE_SIZE, __path_upload_food_image, upload_food_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

// base64 grows the payload by a third; leave room for the JSON envelope
const MAX_BODY_SIZE: usize = MAX_IMAGE_SIZE * 4 / 3 + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image, upload_food_image))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food-analysis/image", state.args.server.root_path),
            post(analyze_food_image),
        )
        .route(
            &format!("{}/food-analysis/image/upload", state.args.server.root_path),
            post(upload_food_image),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
