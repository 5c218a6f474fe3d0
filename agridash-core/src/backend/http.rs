use async_trait::async_trait;
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::BackendError,
    model::{CropHealth, CropRecommendation, PestDetection, PestImage, Weather},
};

use super::Backend;

/// Address of the deployed backend. Fixed per deployment; there is no
/// environment override in this version.
pub const DEFAULT_API_URL: &str = "http://172.19.90.149:5000";

/// HTTP implementation of [`Backend`] against the agro service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn decode<T: DeserializeOwned>(res: Response, what: &str) -> Result<T, BackendError> {
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| BackendError::Deserialize {
            context: what.to_string(),
            source,
        })
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn weather(&self, location: &str) -> Result<Weather, BackendError> {
        let url = format!("{}/get-weather", self.base_url);
        debug!(%url, location, "fetching weather");

        let res = self.http.get(&url).query(&[("location", location)]).send().await?;

        Self::decode(res, "weather").await
    }

    async fn crop_recommendation(
        &self,
        location: &str,
    ) -> Result<CropRecommendation, BackendError> {
        let url = format!("{}/get-crop-recommendation", self.base_url);
        debug!(%url, location, "fetching crop recommendation");

        let res = self.http.get(&url).query(&[("location", location)]).send().await?;

        Self::decode(res, "crop recommendation").await
    }

    async fn crop_health(&self) -> Result<CropHealth, BackendError> {
        let url = format!("{}/api/crop-health", self.base_url);
        debug!(%url, "fetching crop health");

        let res = self.http.get(&url).send().await?;

        Self::decode(res, "crop health").await
    }

    async fn pest_detection(&self, image: PestImage) -> Result<PestDetection, BackendError> {
        let url = format!("{}/api/pest-disease-detection", self.base_url);
        debug!(%url, file_name = %image.file_name, bytes = image.bytes.len(), "uploading image");

        let part = Part::bytes(image.bytes).file_name(image.file_name);
        let form = Form::new().part("image", part);

        let res = self.http.post(&url).multipart(form).send().await?;

        Self::decode(res, "pest detection").await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let backend = HttpBackend::with_base_url("http://localhost:5000/");
        assert_eq!(backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn short_error_bodies_pass_through() {
        assert_eq!(truncate_body("not found"), "not found");
    }
}
