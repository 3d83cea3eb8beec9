use axum::extract::{Multipart, State};
use nutrimood_core::domain::{
    action::ports::ActionService,
    food_analysis::value_objects::{ImageDataUri, ImageMimeType},
};

use crate::application::http::{
    food_analysis::handlers::analyze_food_image::AnalyzeFoodImageResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/image/upload",
    tag = "food-analysis",
    summary = "Analyze food from uploaded image",
    description = "Multipart variant of the image analysis: an `image` part (JPEG, PNG or WebP, at most 10MB)",
    responses(
        (status = 200, body = AnalyzeFoodImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn upload_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodImageResponse>, ApiError> {
    let mut image: Option<ImageDataUri> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type: ImageMimeType = field
            .content_type()
            .ok_or_else(|| ApiError::BadRequest("Missing image content type".to_string()))?
            .parse()
            .map_err(ApiError::from)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(ImageDataUri::from_bytes(mime_type, &data).map_err(ApiError::from)?);
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let analysis = state
        .service
        .analyze_food_image_action(image.to_string())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodImageResponse { data: analysis }))
}
