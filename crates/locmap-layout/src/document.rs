use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::{Length, Location, LocationId, LocationTable, MAX_CONNECTIONS};

/// One edge of a map item, as written by map editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConnect {
    /// Target location id
    pub pos: LocationId,
    /// Edge length
    pub len: Length,
}

/// One location of a map document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapItem {
    pub id: LocationId,

    /// Display name; not part of the binary record
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub connect: Vec<MapConnect>,
}

impl MapItem {
    /// Packs this item's edges into a fixed-slot location.
    pub fn to_location(&self) -> LayoutResult<Location> {
        if self.connect.len() > MAX_CONNECTIONS {
            return Err(LayoutError::TooManyConnections {
                id: self.id,
                count: self.connect.len(),
            });
        }

        let mut location = Location::new(self.id);
        for edge in &self.connect {
            location.connect(edge.pos, edge.len)?;
        }
        Ok(location)
    }
}

/// The JSON interchange form of a map: a bare array of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapDocument {
    pub items: Vec<MapItem>,
}

impl MapDocument {
    pub fn from_json(text: &str) -> LayoutResult<Self> {
        let document: Self = serde_json::from_str(text)?;
        log::info!("Parsed {} map items", document.items.len());
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every item and builds the binary table.
    pub fn to_table(&self) -> LayoutResult<LocationTable> {
        LocationTable::from_locations(
            self.items
                .iter()
                .map(MapItem::to_location)
                .collect::<LayoutResult<Vec<_>>>()?,
        )
    }

    /// Rebuilds a document from a table.
    ///
    /// Names are not stored in records; they are taken from `names` when it
    /// has an item with the same id, and left empty otherwise.
    pub fn from_table(table: &LocationTable, names: Option<&MapDocument>) -> Self {
        let names = names.map(MapDocument::names).unwrap_or_default();
        let items = table
            .iter()
            .map(|location| MapItem {
                id: location.id,
                name: names.get(&location.id).copied().unwrap_or_default().to_string(),
                connect: location
                    .edges()
                    .map(|edge| MapConnect {
                        pos: edge.locate,
                        len: edge.length,
                    })
                    .collect(),
            })
            .collect();
        Self { items }
    }

    /// Item names keyed by id; the first item wins if an id repeats.
    pub fn names(&self) -> FxHashMap<LocationId, &str> {
        let mut names = FxHashMap::default();
        for item in &self.items {
            names.entry(item.id).or_insert(item.name.as_str());
        }
        names
    }

    pub fn name_of(&self, id: LocationId) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Connection;

    const SAMPLE: &str = r#"[
        { "id": 1, "name": "dock", "connect": [ { "pos": 2, "len": 120 }, { "pos": 3, "len": 45 } ] },
        { "id": 2, "name": "aisle", "connect": [ { "pos": 1, "len": 120 } ] },
        { "id": 3, "connect": [] }
    ]"#;

    #[test]
    fn parses_editor_output() {
        let doc = MapDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.items.len(), 3);
        assert_eq!(doc.items[2].name, "");
        assert_eq!(doc.name_of(2), Some("aisle"));
    }

    #[test]
    fn missing_connect_list_is_empty() {
        let doc = MapDocument::from_json(r#"[{ "id": 9, "name": "lone" }]"#).unwrap();
        assert!(doc.items[0].connect.is_empty());
    }

    #[test]
    fn converts_to_table() {
        let table = MapDocument::from_json(SAMPLE).unwrap().to_table().unwrap();
        let dock = table.get(1).unwrap();
        assert_eq!(dock.connections[0], Connection::new(2, 120));
        assert_eq!(dock.connections[1], Connection::new(3, 45));
        assert!(dock.connections[2..].iter().all(Connection::is_vacant));
    }

    #[test]
    fn rejects_nine_connections() {
        let connect: Vec<_> = (1..=9).map(|pos| MapConnect { pos, len: 1 }).collect();
        let doc = MapDocument {
            items: vec![MapItem { id: 1, name: "hub".into(), connect }],
        };
        assert!(matches!(
            doc.to_table(),
            Err(LayoutError::TooManyConnections { id: 1, count: 9 })
        ));
    }

    #[test]
    fn rejects_sentinel_edges_and_duplicates() {
        let doc = MapDocument::from_json(r#"[{ "id": 4, "connect": [{ "pos": 0, "len": 0 }] }]"#).unwrap();
        assert!(matches!(doc.to_table(), Err(LayoutError::VacantEdge { id: 4 })));

        let doc = MapDocument::from_json(r#"[{ "id": 4 }, { "id": 4 }]"#).unwrap();
        assert!(matches!(doc.to_table(), Err(LayoutError::DuplicateId(4))));
    }

    #[test]
    fn rejects_out_of_range_ids() {
        let err = MapDocument::from_json(r#"[{ "id": 70000 }]"#).unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn table_back_to_document_keeps_names() {
        let doc = MapDocument::from_json(SAMPLE).unwrap();
        let table = doc.to_table().unwrap();
        assert_eq!(MapDocument::from_table(&table, Some(&doc)), doc);

        let anonymous = MapDocument::from_table(&table, None);
        assert!(anonymous.items.iter().all(|item| item.name.is_empty()));
        assert_eq!(anonymous.items[0].connect, doc.items[0].connect);
    }

    #[test]
    fn names_carry_over_for_a_full_table() {
        let items: Vec<_> = (0..u16::MAX)
            .map(|id| MapItem {
                id,
                name: format!("node-{id}"),
                connect: vec![MapConnect { pos: id.wrapping_add(1), len: 1 }],
            })
            .collect();
        let doc = MapDocument { items };
        let table = doc.to_table().unwrap();

        let rebuilt = MapDocument::from_table(&table, Some(&doc));
        assert_eq!(rebuilt.items.len(), usize::from(u16::MAX));
        assert_eq!(rebuilt.items[0].name, "node-0");
        assert_eq!(rebuilt.items[65_534].name, "node-65534");
        assert_eq!(rebuilt, doc);
    }

    #[test]
    fn names_index_keeps_first_duplicate() {
        let doc = MapDocument::from_json(r#"[{ "id": 1, "name": "a" }, { "id": 1, "name": "b" }]"#).unwrap();
        assert_eq!(doc.names().get(&1).copied(), Some("a"));
        assert_eq!(doc.name_of(1), Some("a"));
    }

    #[test]
    fn pretty_json_is_a_bare_array() {
        let doc = MapDocument {
            items: vec![MapItem {
                id: 5,
                name: "gate".into(),
                connect: vec![MapConnect { pos: 6, len: 10 }],
            }],
        };
        let text = doc.to_json_pretty().unwrap();
        assert!(text.trim_start().starts_with('['));
        assert_eq!(MapDocument::from_json(&text).unwrap(), doc);
    }
}
