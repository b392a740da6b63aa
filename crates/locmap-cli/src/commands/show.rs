use std::path::Path;

use locmap_layout::{MapDocument, MAX_CONNECTIONS};

use crate::commands::{load_map, warn_dangling};
use crate::error::CliError;

/// Renders a human-readable listing of a map file.
pub fn handle_show(path: &Path) -> Result<String, CliError> {
    let map = load_map(path)?;
    let table = &map.table;
    let mut out = String::new();

    let names = map.document.as_ref().map(MapDocument::names).unwrap_or_default();

    out.push_str(&format!("{} locations\n", table.len()));
    for location in table {
        let name = names.get(&location.id).copied().filter(|name| !name.is_empty());
        match name {
            Some(name) => out.push_str(&format!("location {} ({})", location.id, name)),
            None => out.push_str(&format!("location {}", location.id)),
        }
        out.push_str(&format!(" [{}/{} slots]\n", location.edge_count(), MAX_CONNECTIONS));
        for edge in location.edges() {
            let marker = if table.contains(edge.locate) { "" } else { "  (unknown)" };
            out.push_str(&format!("    -> {} length {}{}\n", edge.locate, edge.length, marker));
        }
    }

    let dangling = warn_dangling(table);
    if dangling > 0 {
        out.push_str(&format!("{} edges point to unknown locations\n", dangling));
    }
    Ok(out)
}
