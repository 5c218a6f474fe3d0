use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Current weather for a location, as reported by the backend.
///
/// `temperature` is an opaque display string (e.g. `"75F"`); the backend
/// decides units and formatting.
#[derive(Debug, Clone, Deserialize)]
pub struct Weather {
    pub location: String,
    pub temperature: String,
    pub description: String,
}

/// Crop recommendation for a location.
///
/// Humidity and rainfall targets are optional; the backend omits them when it
/// has no data for the region.
#[derive(Debug, Clone, Deserialize)]
pub struct CropRecommendation {
    pub recommended_crop: String,
    #[serde(default)]
    pub ideal_humidity: Option<f64>,
    #[serde(default)]
    pub ideal_rainfall: Option<f64>,
}

/// Crop health status message.
#[derive(Debug, Clone, Deserialize)]
pub struct CropHealth {
    pub message: String,
}

/// Verdict of a pest/disease detection run.
///
/// `status` is the backend's own success marker for the run; `pest_status`
/// carries the classification and is only expected when `status` is
/// `"success"`.
#[derive(Debug, Clone, Deserialize)]
pub struct PestDetection {
    pub status: String,
    #[serde(default)]
    pub pest_status: Option<String>,
}

impl PestDetection {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// An image selected for pest detection, loaded into memory for upload.
#[derive(Debug, Clone)]
pub struct PestImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PestImage {
    /// Read an image from disk. No file-type or size checks are performed;
    /// the backend decides what it accepts.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self { file_name, bytes })
    }
}
