pub mod decode;
pub mod encode;
pub mod generate;
pub mod load;
pub mod show;

use std::path::Path;

use locmap_layout::{LocationTable, MapDocument, TABLE_MAGIC};

use crate::error::{convert_io_error, CliError};
use crate::io::read_bytes;

/// A map read from disk, in either of its two formats.
#[derive(Debug)]
pub struct LoadedMap {
    pub table: LocationTable,
    /// Present when the source was a JSON document, for its names
    pub document: Option<MapDocument>,
}

/// Reads a `.json` map document or a binary location table.
///
/// Files with another extension are recognised by the table magic.
pub fn load_map(path: &Path) -> Result<LoadedMap, CliError> {
    let bytes = read_bytes(path)?;
    let extension = path.extension().and_then(|ext| ext.to_str());

    let is_table = match extension {
        Some("json") => false,
        Some("bin") => true,
        _ if bytes.starts_with(&TABLE_MAGIC) => true,
        _ if bytes.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[') => false,
        _ => {
            return Err(CliError::UnknownFormat {
                path: path.to_path_buf(),
            })
        }
    };

    if is_table {
        let table = LocationTable::decode(&bytes)?;
        log::info!("Loaded {} locations from table {}", table.len(), path.display());
        return Ok(LoadedMap {
            table,
            document: None,
        });
    }

    let text = String::from_utf8(bytes).map_err(|e| {
        convert_io_error(
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            path.to_path_buf(),
            "reading",
        )
    })?;
    let document = MapDocument::from_json(&text)?;
    let table = document.to_table()?;
    Ok(LoadedMap {
        table,
        document: Some(document),
    })
}

/// Logs every edge that points outside the table.
pub(crate) fn warn_dangling(table: &LocationTable) -> usize {
    let dangling = table.dangling_edges();
    for (source, edge) in &dangling {
        log::warn!(
            "Location {} connects to unknown location {} (length {})",
            source,
            edge.locate,
            edge.length
        );
    }
    dangling.len()
}
