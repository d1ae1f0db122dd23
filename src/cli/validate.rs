//! Validate command implementation.

use super::CliError;
use std::fs;
use std::path::Path;
use warlife::codec::{Properties, decode};
use warlife::{Census, GameConfig, games};

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error describing the first artifact check that fails.
pub(crate) fn execute(dir: &Path) -> Result<(), CliError> {
    println!("Validating: {}", dir.display());
    println!();

    let found = match games::discover(dir) {
        Ok(found) => {
            print_check("game directory (one .config, one .cells)", true);
            found
        }
        Err(e) => {
            print_check("game directory (one .config, one .cells)", false);
            return Err(e.into());
        }
    };

    let props_text = fs::read_to_string(&found.config_path)?;
    let props = match Properties::parse(&props_text) {
        Ok(props) => {
            print_check("properties file", true);
            props
        }
        Err(e) => {
            print_check("properties file", false);
            return Err(e.into());
        }
    };

    let config = match GameConfig::from_properties(&props) {
        Ok(config) => {
            print_check("recognized property values", true);
            config
        }
        Err(e) => {
            print_check("recognized property values", false);
            return Err(e.into());
        }
    };

    let cells_text = fs::read_to_string(&found.cells_path)?;
    let grid = match decode(&cells_text, &config) {
        Ok(grid) => {
            print_check("cells grid", true);
            grid
        }
        Err(e) => {
            print_check("cells grid", false);
            return Err(e.into());
        }
    };

    let census = Census::of(&grid);
    println!();
    println!("Summary:");
    println!("  Grid:      {}x{}", config.width, config.height);
    println!("  Death age: {}", config.death_age);
    println!("  Win round: {}", config.win_round);
    println!("  Teams:     {}", census.teams_alive());
    for (team, count) in census.iter() {
        println!("    {team}: {count} cells");
    }
    if census.teams_alive() < 2 {
        println!();
        println!("note: fewer than two teams; the game ends immediately");
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
