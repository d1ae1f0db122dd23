//! Convert command implementation.

use super::CliError;
use std::path::Path;
use warlife::games;

/// Execute the convert command.
///
/// # Errors
///
/// Returns an error if the map cannot be read, parsed, or written out.
pub(crate) fn execute(file: &Path, force: bool) -> Result<(), CliError> {
    let outcome = games::convert(file, force)?;
    println!("Wrote {}", outcome.cells_path.display());
    println!("Wrote {}", outcome.config_path.display());
    Ok(())
}
