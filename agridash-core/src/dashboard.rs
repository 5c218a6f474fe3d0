//! Dashboard state and the four user-triggered flows.
//!
//! Each flow catches its own failures and converts them into a fixed
//! user-visible string; nothing propagates past the flow that hit it. The
//! underlying cause goes to the log at `warn` level.

use tracing::warn;

use crate::{
    backend::Backend,
    error::BackendError,
    model::{CropRecommendation, PestImage, Weather},
};

/// Message shown on the shared error line when the location query fails.
pub const FETCH_FAILED_MSG: &str = "Failed to fetch data. Please try again.";

/// Message stored in the crop health panel when that fetch fails.
pub const CROP_HEALTH_FAILED_MSG: &str = "Failed to fetch crop health data. Please try again.";

/// Message shown when the backend reports an unsuccessful detection run.
pub const PEST_DETECTION_FAILED_MSG: &str = "Error in pest detection.";

/// Message shown when the detection request itself fails.
pub const PEST_FETCH_FAILED_MSG: &str = "Error fetching pest detection data.";

/// Acknowledgment for the not-yet-available NDVI analysis.
pub const NDVI_PLACEHOLDER_MSG: &str = "Feature coming soon!";

/// Everything the dashboard renders.
///
/// The weather and recommendation panels live and die together: a failed
/// location query clears both, so partial results are never shown after an
/// error. The crop health and pest detection panels are independent of that.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Last submitted location text; persists across submits.
    pub location: String,
    pub weather: Option<Weather>,
    pub recommendation: Option<CropRecommendation>,
    pub crop_health: Option<String>,
    pub pest_message: String,
    pub error: Option<String>,
    pub loading: bool,
}

/// Owns the dashboard state and dispatches the four flows against a backend.
#[derive(Debug)]
pub struct Dashboard<B> {
    backend: B,
    state: DashboardState,
}

impl<B: Backend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Location query flow: fetch weather first, then the crop
    /// recommendation, strictly in that order. The recommendation request is
    /// only issued once the weather request has resolved; a weather failure
    /// skips it entirely.
    pub async fn submit(&mut self, location: &str) {
        self.state.location = location.to_string();
        self.state.loading = true;

        if let Err(err) = self.fetch_weather_and_recommendation().await {
            warn!(%err, "location query failed");
            self.state.error = Some(FETCH_FAILED_MSG.to_string());
            self.state.weather = None;
            self.state.recommendation = None;
        }

        self.state.loading = false;
    }

    async fn fetch_weather_and_recommendation(&mut self) -> Result<(), BackendError> {
        let weather = self.backend.weather(&self.state.location).await?;
        self.state.weather = Some(weather);

        let recommendation = self.backend.crop_recommendation(&self.state.location).await?;
        self.state.recommendation = Some(recommendation);

        self.state.error = None;
        Ok(())
    }

    /// Crop health flow. A failure lands in the panel itself; the shared
    /// error line is left alone.
    pub async fn check_crop_health(&mut self) {
        match self.backend.crop_health().await {
            Ok(health) => {
                self.state.crop_health = Some(health.message);
                self.state.error = None;
            }
            Err(err) => {
                warn!(%err, "crop health fetch failed");
                self.state.crop_health = Some(CROP_HEALTH_FAILED_MSG.to_string());
            }
        }
    }

    /// Pest detection flow: upload the image and report the backend verdict.
    /// The shared error line is not touched, whatever the outcome.
    pub async fn detect_pest(&mut self, image: PestImage) {
        match self.backend.pest_detection(image).await {
            Ok(detection) if detection.is_success() => {
                let status = detection.pest_status.unwrap_or_default();
                self.state.pest_message = format!("Pest Status: {status}");
            }
            Ok(_) => {
                self.state.pest_message = PEST_DETECTION_FAILED_MSG.to_string();
            }
            Err(err) => {
                warn!(%err, "pest detection request failed");
                self.state.pest_message = PEST_FETCH_FAILED_MSG.to_string();
            }
        }
    }

    /// NDVI analysis is not implemented server-side yet; no request is made.
    pub fn ndvi_analysis(&self) -> &'static str {
        NDVI_PLACEHOLDER_MSG
    }
}
