use std::fs;
use std::path::Path;

use crate::error::{convert_io_error, CliError};

pub fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| convert_io_error(e, path.to_path_buf(), "reading"))
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|e| convert_io_error(e, path.to_path_buf(), "reading"))
}

pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|e| convert_io_error(e, path.to_path_buf(), "writing"))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Creates `dir` and its parents if they do not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|e| convert_io_error(e, dir.to_path_buf(), "creating directory"))
}
