use std::path::{Path, PathBuf};

use locmap_layout::EmitOptions;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::io::read_file;
use crate::utils::find_config;

/// Name of the configuration file searched for by [`LocmapConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "locmap.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocmapConfig {
    /// Where generated artefacts are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Shape of the emitted C source
    #[serde(default)]
    pub emit: EmitConfig,

    /// Directory relative output paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_header_name")]
    pub header_name: String,

    #[serde(default = "default_source_name")]
    pub source_name: String,

    #[serde(default = "default_json_name")]
    pub json_name: String,

    #[serde(default = "default_binary_name")]
    pub binary_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            header_name: default_header_name(),
            source_name: default_source_name(),
            json_name: default_json_name(),
            binary_name: default_binary_name(),
        }
    }
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("generate/map")
}

fn default_header_name() -> String {
    "map_base.h".to_string()
}

fn default_source_name() -> String {
    "map_info.c".to_string()
}

fn default_json_name() -> String {
    "map_info.json".to_string()
}

fn default_binary_name() -> String {
    "map_info.bin".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmitConfig {
    /// Header path used in the generated `#include`
    #[serde(default = "default_include_path")]
    pub include_path: String,

    /// Name of the generated `LOCATION` array
    #[serde(default = "default_array_name")]
    pub array_name: String,

    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        let options = EmitOptions::default();
        Self {
            include_path: options.include_path,
            array_name: options.array_name,
            indent: options.indent,
        }
    }
}

fn default_include_path() -> String {
    EmitOptions::default().include_path
}

fn default_array_name() -> String {
    EmitOptions::default().array_name
}

fn default_indent() -> usize {
    EmitOptions::default().indent
}

impl EmitConfig {
    pub fn to_options(&self) -> EmitOptions {
        EmitOptions {
            include_path: self.include_path.clone(),
            array_name: self.array_name.clone(),
            indent: self.indent,
        }
    }
}

impl LocmapConfig {
    /// Parses a configuration file; relative paths resolve against its directory.
    ///
    /// The `[emit]` names are checked here so bad C never reaches disk.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = read_file(path)?;
        let mut config: Self = toml::from_str(&text).map_err(|source| CliError::ConfigError {
            path: path.to_path_buf(),
            source,
        })?;
        config.emit.to_options().validate()?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Loads the nearest `locmap.toml` above `start`, or the defaults rooted at `start`.
    pub fn discover(start: &Path) -> Result<Self, CliError> {
        match find_config(start) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self {
                    base_dir: start.to_path_buf(),
                    ..Self::default()
                })
            }
        }
    }

    /// The artefact directory, or `override_dir` when given on the command line.
    pub fn output_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.base_dir.join(&self.output.dir),
        }
    }
}
