use std::path::Path;

use locmap_layout::{LocationTable, MapDocument};

use crate::error::CliError;
use crate::io::{read_bytes, write_file};

/// Decodes a binary location table into a pretty-printed map document.
///
/// The document is written to `output` when given and returned either way.
/// Names are not stored in tables, so every item comes back unnamed.
pub fn handle_decode(input: &Path, output: Option<&Path>) -> Result<String, CliError> {
    let table = LocationTable::decode(&read_bytes(input)?)?;
    let json = MapDocument::from_table(&table, None).to_json_pretty()?;
    if let Some(output) = output {
        write_file(output, &json)?;
    }
    Ok(json)
}
