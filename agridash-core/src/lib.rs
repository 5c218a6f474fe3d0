//! Core library for the `agridash` dashboard.
//!
//! This crate defines:
//! - Abstraction over the remote agro backend
//! - The dashboard state container and its flows
//! - Shared domain models (weather, recommendation, detection results)
//!
//! It is used by `agridash-cli`, but can also be reused by other binaries or services.

pub mod backend;
pub mod dashboard;
pub mod error;
pub mod model;

pub use backend::{Backend, HttpBackend};
pub use dashboard::{Dashboard, DashboardState};
pub use error::BackendError;
pub use model::{CropHealth, CropRecommendation, PestDetection, PestImage, Weather};
