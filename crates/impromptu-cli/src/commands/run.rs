//! The single analyse-and-price command

use crate::console::{CliConsole, ConsolePresenter};
use impromptu_core::config::Config;
use impromptu_core::error::{ImpromptuError, ImpromptuResult};
use impromptu_core::{
    PriceClient, RunStatus, TripPlanner, TripReport, VideoIntelligenceClient,
    render_hotel_prices_page,
};
use std::path::Path;

/// Options for one run
pub struct RunOptions<'a> {
    pub source: &'a str,
    pub html: Option<&'a Path>,
}

/// Build the clients from `config`, run the planner and report the outcome.
///
/// Returns an error only when the clients cannot be built; run failures are part of the
/// returned status.
pub async fn execute(
    options: RunOptions<'_>,
    config: Config,
    console: CliConsole,
) -> ImpromptuResult<RunStatus> {
    let analyser = VideoIntelligenceClient::new(config.annotation)?;
    let prices = PriceClient::new(&config.prices, config.retry)?;
    let planner = TripPlanner::new(analyser, prices, config.lexicon);

    console.info(&format!("Analysing {}", options.source));
    let presenter = ConsolePresenter::new(console);
    let status = planner.run_to_completion(options.source, &presenter).await;

    match &status {
        RunStatus::Presented(report) => {
            if let Some(path) = options.html {
                match write_html(path, report) {
                    Ok(()) => {
                        console.info(&format!("Hotel prices written to {}", path.display()))
                    }
                    Err(e) => {
                        console.warn(&format!("Could not write hotel price page: {}", e))
                    }
                }
            }
        }
        RunStatus::NoLocation => console.warn("No valid location detected."),
        RunStatus::Failed(err) => console.error(&describe_failure(err)),
    }

    Ok(status)
}

fn write_html(path: &Path, report: &TripReport) -> ImpromptuResult<()> {
    let page = render_hotel_prices_page(&report.location, &report.hotels);
    std::fs::write(path, page).map_err(|e| {
        ImpromptuError::io_with_path(
            format!("Failed to write HTML: {}", e),
            path.display().to_string(),
        )
    })
}

fn describe_failure(err: &ImpromptuError) -> String {
    match err {
        ImpromptuError::NotFound { .. } => format!("Media not found: {}", err),
        ImpromptuError::AccessDenied { .. } => format!("Access denied: {}", err),
        ImpromptuError::MaxRetriesExceeded { attempts, source } => {
            format!("Giving up after {} attempts: {}", attempts, source)
        }
        _ => format!("Trip lookup failed: {}", err),
    }
}
