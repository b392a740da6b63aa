use std::path::Path;

use crate::config::LocmapConfig;
use crate::error::CliError;
use crate::io::read_file;

/// Returns the stored map document, or an empty array if none was generated yet.
pub fn handle_load(out_dir: &Path, config: &LocmapConfig) -> Result<String, CliError> {
    let json_path = out_dir.join(&config.output.json_name);
    if !json_path.is_file() {
        log::info!("No stored map at {}", json_path.display());
        return Ok("[]".to_string());
    }

    let contents = read_file(&json_path)?;
    log::info!("Read {}", json_path.display());
    if contents.trim().is_empty() {
        return Ok("[]".to_string());
    }
    Ok(contents)
}
