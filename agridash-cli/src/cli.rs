use std::fmt;
use std::path::Path;

use agridash_core::{Backend, Dashboard, HttpBackend, PestImage};
use clap::Parser;
use inquire::{InquireError, Select, Text};

use crate::render;

/// Top-level CLI struct.
///
/// There are no subcommands: the dashboard is the whole application, so
/// running the binary drops straight into the interactive loop.
#[derive(Debug, Parser)]
#[command(name = "agridash", version, about = "Crop and soil management dashboard")]
pub struct Cli {}

/// One entry in the dashboard's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    WeatherAndRecommendation,
    CropHealth,
    PestDetection,
    NdviAnalysis,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::WeatherAndRecommendation,
        Action::CropHealth,
        Action::PestDetection,
        Action::NdviAnalysis,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::WeatherAndRecommendation => "Get Weather and Recommendation",
            Action::CropHealth => "Check Crop Health",
            Action::PestDetection => "Detect Pests",
            Action::NdviAnalysis => "Analyze Crop Health (NDVI)",
            Action::Quit => "Quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut dashboard = Dashboard::new(HttpBackend::new());
        run_dashboard_loop(&mut dashboard).await
    }
}

/// Render-prompt-dispatch loop. Esc or Ctrl-C at any prompt leaves the loop.
async fn run_dashboard_loop<B: Backend>(dashboard: &mut Dashboard<B>) -> anyhow::Result<()> {
    loop {
        println!("{}", render::dashboard(dashboard.state()));

        let action = match Select::new("What would you like to do?", Action::ALL.to_vec()).prompt()
        {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match action {
            Action::WeatherAndRecommendation => {
                let Some(location) = prompt_text(
                    Text::new("Enter location")
                        .with_initial_value(&dashboard.state().location),
                )?
                else {
                    continue;
                };

                dashboard.submit(&location).await;
            }
            Action::CropHealth => dashboard.check_crop_health().await,
            Action::PestDetection => {
                let Some(path) = prompt_text(Text::new("Path to crop image"))? else {
                    continue;
                };
                if path.trim().is_empty() {
                    continue;
                }

                // The flow only starts once a file has actually been read;
                // an unreadable path leaves the dashboard untouched.
                match PestImage::from_path(Path::new(path.trim())) {
                    Ok(image) => dashboard.detect_pest(image).await,
                    Err(err) => eprintln!("{err:#}"),
                }
            }
            Action::NdviAnalysis => println!("{}", dashboard.ndvi_analysis()),
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Run a text prompt, mapping Esc/Ctrl-C to `None` instead of an error.
fn prompt_text(prompt: Text<'_>) -> anyhow::Result<Option<String>> {
    match prompt.prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
