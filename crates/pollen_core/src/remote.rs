//! HTTP-backed classifier for a real model server.
//!
//! Posts the image as multipart form data to `{base_url}/predict` and expects
//! `{ "class": ..., "confidence": ..., "probabilities": { ... } }` back. Any
//! transport, status, or decode failure maps to the generic network error;
//! the cause is logged, never shown to the user.

use crate::{Classifier, ClassifyError, MAX_UPLOAD_BYTES, Prediction, UploadedImage};
use reqwest::blocking::{Client, multipart};
use std::fs;
use std::time::Duration;

pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build the HTTP client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn send(&self, image: &UploadedImage) -> Result<Prediction, ClassifyError> {
        let bytes = fs::read(&image.path).map_err(|e| {
            tracing::warn!("cannot read {} for upload: {e}", image.path.display());
            ClassifyError::Network
        })?;
        let part = multipart::Part::bytes(bytes)
            .file_name(image.name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| {
                tracing::warn!("invalid mime type {}: {e}", image.mime_type);
                ClassifyError::Network
            })?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .multipart(form)
            .send()
            .map_err(|e| {
                tracing::warn!("predict request failed: {e}");
                ClassifyError::Network
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("model server returned status {status}");
            return Err(ClassifyError::Network);
        }

        response.json::<Prediction>().map_err(|e| {
            tracing::warn!("cannot decode predict response: {e}");
            ClassifyError::Network
        })
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, image: &UploadedImage) -> Result<Prediction, ClassifyError> {
        // Same pre-checks as the mock, so the two stay interchangeable and
        // obviously-bad uploads never hit the wire.
        if !image.mime_type.starts_with("image/") {
            return Err(ClassifyError::InvalidFileType);
        }
        if image.size_bytes > MAX_UPLOAD_BYTES {
            return Err(ClassifyError::FileTooLarge);
        }
        self.send(image)
    }
}
