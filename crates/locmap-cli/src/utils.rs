use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

/// Finds the nearest `locmap.toml` by searching upwards from `start_path`.
pub fn find_config(start_path: &Path) -> Option<PathBuf> {
    let mut current = if start_path.is_dir() {
        start_path.to_path_buf()
    } else {
        start_path
            .parent()
            .map_or_else(|| start_path.to_path_buf(), Path::to_path_buf)
    };

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            log::debug!("Using configuration {}", config_path.display());
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}
