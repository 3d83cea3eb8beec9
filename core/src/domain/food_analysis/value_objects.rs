use std::{fmt, str::FromStr, sync::LazyLock};

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, llm::value_objects::InlineImage};

static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(?P<mime>[A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+);base64,(?P<data>.*)$")
        .expect("data URI pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ImageMimeType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMimeType::Jpeg => "image/jpeg",
            ImageMimeType::Png => "image/png",
            ImageMimeType::Webp => "image/webp",
        }
    }
}

impl FromStr for ImageMimeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMimeType::Jpeg),
            "image/png" => Ok(ImageMimeType::Png),
            "image/webp" => Ok(ImageMimeType::Webp),
            other => Err(CoreError::InvalidDataUri(format!(
                "unsupported image type {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `data:<mime>;base64,<payload>` image with a supported MIME type and a
/// non-empty, decodable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUri {
    mime_type: ImageMimeType,
    payload: String,
}

impl ImageDataUri {
    pub fn from_bytes(mime_type: ImageMimeType, bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.is_empty() {
            return Err(CoreError::InvalidDataUri("image is empty".to_string()));
        }

        Ok(Self {
            mime_type,
            payload: general_purpose::STANDARD.encode(bytes),
        })
    }

    pub fn mime_type(&self) -> ImageMimeType {
        self.mime_type
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_inline_image(self) -> InlineImage {
        InlineImage {
            mime_type: self.mime_type.as_str().to_string(),
            data: self.payload,
        }
    }
}

impl FromStr for ImageDataUri {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = DATA_URI.captures(s.trim()).ok_or_else(|| {
            CoreError::InvalidDataUri(
                "expected format data:<mimetype>;base64,<encoded_data>".to_string(),
            )
        })?;

        let mime_type: ImageMimeType = captures["mime"].parse()?;
        let payload = captures["data"].to_string();

        if payload.is_empty() {
            return Err(CoreError::InvalidDataUri("image payload is empty".to_string()));
        }

        general_purpose::STANDARD
            .decode(&payload)
            .map_err(|e| CoreError::InvalidDataUri(format!("payload is not base64: {}", e)))?;

        Ok(Self { mime_type, payload })
    }
}

impl fmt::Display for ImageDataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeFoodImageInput {
    pub photo_data_uri: String,
}
