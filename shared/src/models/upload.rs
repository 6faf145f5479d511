//! Upload Model

use serde::{Deserialize, Serialize};

/// Response to an image upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(alias = "image_url", alias = "imageUrl")]
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
}
