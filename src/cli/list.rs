//! List command implementation.

use super::CliError;
use std::path::Path;
use warlife::games;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the root directory cannot be read.
pub(crate) fn execute(root: &Path) -> Result<(), CliError> {
    let entries = games::list_games(root)?;

    if entries.is_empty() {
        println!("No games found under {}", root.display());
        return Ok(());
    }

    println!("{:<24} {:>9} {:>6}", "NAME", "SIZE", "TEAMS");
    for entry in entries {
        let size = format!("{}x{}", entry.width, entry.height);
        println!("{:<24} {size:>9} {:>6}", entry.name, entry.teams);
    }

    Ok(())
}
