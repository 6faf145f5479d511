//! Image upload API

use reqwest::multipart::{Form, Part};
use shared::models::UploadResponse;
use std::path::Path;

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::http::RequestOptions;

/// An image ready to be uploaded
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type of the content, e.g. `image/png`
    pub mime: String,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: mime.into(),
        }
    }

    /// Read an image from disk, guessing its type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::File {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }

    fn into_part(self) -> ClientResult<Part> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)?)
    }
}

impl ApiClient {
    /// Upload an image. `kind` tells the backend what it belongs to
    /// (`menu`, `logo`, ...). The reply carries the hosted URL.
    pub async fn upload_image(
        &self,
        image: ImageFile,
        kind: &str,
    ) -> ClientResult<UploadResponse> {
        tracing::debug!(file = %image.file_name, size = image.bytes.len(), kind, "Uploading image");
        let form = Form::new()
            .part("image", image.into_part()?)
            .text("type", kind.to_string());
        let path = self.routes().upload.clone();
        self.call(&path, RequestOptions::post().multipart(form))
            .await
    }
}
