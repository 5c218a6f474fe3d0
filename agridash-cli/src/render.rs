//! Text rendering of the dashboard state.
//!
//! The page is rendered top to bottom after every action: title, loading
//! line, weather and recommendation panels, the shared error line, then the
//! crop health and pest detection sections. Absent state renders nothing for
//! its panel.

use std::fmt::Write;

use agridash_core::DashboardState;

pub fn dashboard(state: &DashboardState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Crop and Soil Management System");
    let _ = writeln!(out, "===============================");

    if state.loading {
        let _ = writeln!(out, "Loading...");
    }

    if let Some(weather) = &state.weather {
        let _ = writeln!(out);
        let _ = writeln!(out, "Weather for {}", weather.location);
        let _ = writeln!(out, "Temperature: {}", weather.temperature);
        let _ = writeln!(out, "Description: {}", weather.description);
    }

    if let Some(rec) = &state.recommendation {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommended Crop: {}", rec.recommended_crop);
        if let Some(humidity) = rec.ideal_humidity {
            let _ = writeln!(out, "Ideal Humidity: {humidity}%");
        }
        if let Some(rainfall) = rec.ideal_rainfall {
            let _ = writeln!(out, "Ideal Rainfall: {rainfall} mm/month");
        }
    }

    if let Some(error) = &state.error {
        let _ = writeln!(out);
        let _ = writeln!(out, "{error}");
    }

    if let Some(health) = &state.crop_health {
        let _ = writeln!(out);
        let _ = writeln!(out, "Crop Health Monitoring");
        let _ = writeln!(out, "{health}");
    }

    if !state.pest_message.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Pest Detection");
        let _ = writeln!(out, "{}", state.pest_message);
    }

    out
}
