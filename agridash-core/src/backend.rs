use crate::{
    error::BackendError,
    model::{CropHealth, CropRecommendation, PestDetection, PestImage, Weather},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

pub use http::HttpBackend;

/// Abstraction over the remote agro service.
///
/// The production implementation is [`HttpBackend`]; tests substitute
/// scripted implementations to drive the dashboard flows without a network.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Current weather for a location. The location text is passed through
    /// verbatim; the empty string is a legal query.
    async fn weather(&self, location: &str) -> Result<Weather, BackendError>;

    /// Crop recommendation for a location.
    async fn crop_recommendation(
        &self,
        location: &str,
    ) -> Result<CropRecommendation, BackendError>;

    /// Crop health status message.
    async fn crop_health(&self) -> Result<CropHealth, BackendError>;

    /// Upload an image and classify pests/diseases on it.
    async fn pest_detection(&self, image: PestImage) -> Result<PestDetection, BackendError>;
}
