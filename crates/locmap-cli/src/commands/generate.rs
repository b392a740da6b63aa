use std::path::{Path, PathBuf};

use locmap_layout::{header_source, initializer_source, MapDocument};

use crate::commands::warn_dangling;
use crate::config::LocmapConfig;
use crate::error::CliError;
use crate::io::{ensure_dir, read_file, write_file};

/// Paths of everything `generate` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub header: PathBuf,
    pub source: PathBuf,
    pub json: PathBuf,
    pub binary: PathBuf,
}

/// Turns a JSON map document into the C header, C initializer, normalised
/// JSON and binary table under `out_dir`.
///
/// Nothing is written unless the whole document validates.
pub fn handle_generate(
    input: &Path,
    out_dir: &Path,
    config: &LocmapConfig,
) -> Result<GeneratedFiles, CliError> {
    log::info!("Generating map from {}", input.display());

    // 1. Parse and validate before touching the output directory.
    let document = MapDocument::from_json(&read_file(input)?)?;
    let table = document.to_table()?;
    warn_dangling(&table);

    let options = config.emit.to_options();
    let normalised = MapDocument::from_table(&table, Some(&document)).to_json_pretty()?;

    // 2. Write the artefacts.
    ensure_dir(out_dir)?;
    let files = GeneratedFiles {
        header: out_dir.join(&config.output.header_name),
        source: out_dir.join(&config.output.source_name),
        json: out_dir.join(&config.output.json_name),
        binary: out_dir.join(&config.output.binary_name),
    };
    write_file(&files.header, header_source(&options))?;
    write_file(&files.source, initializer_source(&table, &options))?;
    write_file(&files.json, normalised)?;
    write_file(&files.binary, table.encode())?;

    Ok(files)
}
