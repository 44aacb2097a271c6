mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use stats_core::formatting::format_text_report;
use stats_core::settings::{OutputFormat, Settings};
use stats_data::analysis::{AnalysisRun, FileAnalyzer};

fn main() -> Result<ExitCode> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::debug!(
        "number-stats v{} (rounding: {}, format: {:?})",
        env!("CARGO_PKG_VERSION"),
        settings.rounding,
        settings.format
    );

    let analyzer = FileAnalyzer::new(&settings.path)?.with_rounding(settings.rounding);
    let run = analyzer.analyze_file();

    println!("{}", render(&run, &settings)?);

    if run.result.is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Render the run in the format selected on the command line.
fn render(run: &AnalysisRun, settings: &Settings) -> Result<String> {
    let output = match settings.format {
        OutputFormat::Json => serde_json::to_string_pretty(&run.to_json(settings.with_metadata)?)?,
        OutputFormat::Text => format_text_report(&run.report()),
    };
    Ok(output)
}
