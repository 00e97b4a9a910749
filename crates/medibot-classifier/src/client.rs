use std::path::Path;
use std::time::Duration;

use medibot_core::models::prediction::Prediction;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::error::ClassifierError;
use crate::response::{decode_response, ClassList, ModelInfo};
use crate::upload::ImageUpload;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the classifier service.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Build a client for `base_url` (e.g. `http://localhost:5000`). Only
    /// http/https URLs without embedded credentials are accepted.
    pub fn new(base_url: &str) -> Result<Self, ClassifierError> {
        let cleaned = base_url.trim().trim_end_matches('/');

        let parsed = reqwest::Url::parse(cleaned)
            .map_err(|e| ClassifierError::InvalidUrl(format!("{cleaned}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClassifierError::InvalidUrl(format!(
                "scheme must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(ClassifierError::InvalidUrl(
                "URL must not contain credentials".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: cleaned.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload an image to `POST /predict` as multipart field `file`.
    ///
    /// The body is decoded whatever the status code: the service reports
    /// validation failures as `400` with an `error` message.
    pub async fn predict(&self, upload: ImageUpload) -> Result<Prediction, ClassifierError> {
        let url = format!("{}/predict", self.base_url);
        tracing::info!(
            %url,
            file = upload.file_name(),
            bytes = upload.len(),
            "uploading image for classification"
        );

        let file_name = upload.file_name().to_string();
        let mime = upload.mime();
        let part = Part::bytes(upload.into_bytes())
            .file_name(file_name)
            .mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match decode_response(&body) {
            Ok(prediction) => {
                tracing::info!(
                    status = status.as_u16(),
                    disease = %prediction.predicted_class,
                    confidence = prediction.confidence,
                    "classifier returned a prediction"
                );
                Ok(prediction)
            }
            Err(e) => {
                tracing::warn!(status = status.as_u16(), error = %e, "classification failed");
                Err(e)
            }
        }
    }

    /// Validate and upload an image file.
    pub async fn predict_file(&self, path: &Path) -> Result<Prediction, ClassifierError> {
        let upload = ImageUpload::from_path(path).await?;
        self.predict(upload).await
    }

    /// `GET /api/classes`.
    pub async fn classes(&self) -> Result<Vec<String>, ClassifierError> {
        let list: ClassList = self.get_json("/api/classes").await?;
        Ok(list.classes)
    }

    /// `GET /api/info`.
    pub async fn model_info(&self) -> Result<ModelInfo, ClassifierError> {
        self.get_json("/api/info").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClassifierError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(service_error(&body).unwrap_or_else(|| {
                ClassifierError::MalformedResponse(format!("{url} returned {status}"))
            }));
        }

        serde_json::from_str(&body).map_err(|e| ClassifierError::MalformedResponse(e.to_string()))
    }
}

/// Pull the `error` message out of a failure envelope, if there is one.
fn service_error(body: &str) -> Option<ClassifierError> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("error")?.as_str()?;
    Some(ClassifierError::Service(message.to_string()))
}
