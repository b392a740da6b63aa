use std::path::Path;

use locmap_layout::MapDocument;

use crate::commands::warn_dangling;
use crate::error::CliError;
use crate::io::{read_file, write_file};

/// Encodes a JSON map document as a binary location table.
///
/// Returns the number of locations written.
pub fn handle_encode(input: &Path, output: &Path) -> Result<usize, CliError> {
    let table = MapDocument::from_json(&read_file(input)?)?.to_table()?;
    warn_dangling(&table);
    write_file(output, table.encode())?;
    Ok(table.len())
}
