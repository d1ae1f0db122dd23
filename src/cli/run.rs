//! Run command implementation.

use super::output::{JsonRunSummary, format_summary};
use super::{CliError, OutputFormat};
use std::path::Path;
use std::time::Duration;
use warlife::render::render_round;
use warlife::{GameRunner, games};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the game fails to load.
pub(crate) fn execute(dir: &Path, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let (grid, config) = games::load_dir(dir)?;
    let mut runner = GameRunner::new(grid, config);

    // Per-round output honors the `output` property; the initial and final
    // grids are always shown in text mode unless --quiet.
    let text = format == OutputFormat::Text;
    let live = text && !quiet && config.output;
    let delay = Duration::from_secs_f64(1.0 / f64::from(config.refresh));

    if text && !quiet {
        println!(
            "{}",
            render_round(runner.grid(), runner.census(), runner.round(), true)
        );
    }

    while runner.advance() {
        if live && !runner.is_over() {
            std::thread::sleep(delay);
            println!(
                "{}",
                render_round(runner.grid(), runner.census(), runner.round(), true)
            );
        }
    }

    let Some(verdict) = runner.verdict() else {
        return Err(CliError::new("run ended without a verdict"));
    };

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!(
                    "{}",
                    render_round(runner.grid(), runner.census(), runner.round(), true)
                );
            }
            print!("{}", format_summary(&verdict, runner.census()));
        }
        OutputFormat::Json => {
            let summary = JsonRunSummary::from_verdict(&verdict, runner.census());
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
