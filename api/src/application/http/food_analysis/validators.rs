use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFoodImageRequest {
    /// `data:<mimetype>;base64,<encoded_data>`
    #[validate(length(min = 1, message = "photoDataUri must not be empty"))]
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQSkZJRg==")]
    pub photo_data_uri: String,
}
