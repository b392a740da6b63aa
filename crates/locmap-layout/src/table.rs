use fxhash::FxHashMap;
use locmap_codec::{ByteReader, ByteWriter};

use crate::error::{LayoutError, LayoutResult};
use crate::{Connection, Location, LocationId, RECORD_SIZE};

/// First four bytes of every encoded table.
pub const TABLE_MAGIC: [u8; 4] = *b"LMAP";

/// Current table format version.
pub const TABLE_VERSION: u16 = 1;

/// Magic, version and record count.
pub const TABLE_HEADER_SIZE: usize = 8;

/// An ordered set of locations with unique ids.
///
/// Encoded as:
///
/// ```text
/// magic "LMAP" | version u16 | count u16 | count x Location record
/// ```
///
/// with every integer big-endian.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationTable {
    /// Locations in insertion order
    locations: Vec<Location>,

    /// Location id -> position in `locations`
    index: FxHashMap<LocationId, usize>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table, rejecting duplicate ids.
    pub fn from_locations<I>(locations: I) -> LayoutResult<Self>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut table = Self::new();
        for location in locations {
            table.push(location)?;
        }
        Ok(table)
    }

    /// Appends a location.
    pub fn push(&mut self, location: Location) -> LayoutResult<()> {
        if self.locations.len() >= usize::from(u16::MAX) {
            return Err(LayoutError::TooManyLocations(self.locations.len() + 1));
        }
        if self.index.contains_key(&location.id) {
            return Err(LayoutError::DuplicateId(location.id));
        }
        self.index.insert(location.id, self.locations.len());
        self.locations.push(location);
        Ok(())
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.index.get(&id).map(|&i| &self.locations[i])
    }

    /// Mutable access for populating connections after insertion.
    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        let i = *self.index.get(&id)?;
        self.locations.get_mut(i)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Edges whose target id is not in this table, as `(source id, edge)`.
    pub fn dangling_edges(&self) -> Vec<(LocationId, Connection)> {
        self.locations
            .iter()
            .flat_map(|location| location.edges().map(move |edge| (location.id, *edge)))
            .filter(|(_, edge)| !self.contains(edge.locate))
            .collect()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(TABLE_HEADER_SIZE + self.len() * RECORD_SIZE);
        writer.put_bytes(&TABLE_MAGIC);
        writer.put_u16(TABLE_VERSION);
        // `push` keeps the count within u16
        writer.put_u16(self.len() as u16);
        for location in &self.locations {
            location.write_to(&mut writer);
        }
        log::debug!("encoded {} locations into {} bytes", self.len(), writer.len());
        writer.into_inner()
    }

    pub fn decode(bytes: &[u8]) -> LayoutResult<Self> {
        let mut reader = ByteReader::new(bytes);

        let magic = reader.read_array::<4>()?;
        if magic != TABLE_MAGIC {
            return Err(LayoutError::BadMagic {
                expected: TABLE_MAGIC,
                found: magic,
            });
        }

        let version = reader.read_u16()?;
        if version != TABLE_VERSION {
            return Err(LayoutError::UnsupportedVersion(version));
        }

        let count = reader.read_u16()?;
        let mut table = Self {
            locations: Vec::with_capacity(usize::from(count)),
            index: FxHashMap::default(),
        };
        for _ in 0..count {
            table.push(Location::read_from(&mut reader)?)?;
        }
        reader.finish()?;

        log::debug!("decoded {} locations", table.len());
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a LocationTable {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locmap_codec::CodecError;

    fn two_node_table() -> LocationTable {
        let mut a = Location::new(1);
        a.connect(2, 100).unwrap();
        let mut b = Location::new(2);
        b.connect(1, 100).unwrap();
        b.connect(7, 30).unwrap();
        LocationTable::from_locations([a, b]).unwrap()
    }

    #[test]
    fn header_layout() {
        let bytes = two_node_table().encode();
        assert_eq!(bytes.len(), TABLE_HEADER_SIZE + 2 * RECORD_SIZE);
        assert_eq!(&bytes[..8], b"LMAP\x00\x01\x00\x02");
        assert_eq!(&bytes[8..10], &[0x00, 0x01]);
    }

    #[test]
    fn decode_restores_table() {
        let table = two_node_table();
        let decoded = LocationTable::decode(&table.encode()).unwrap();
        assert_eq!(decoded, table);
        assert_eq!(decoded.get(2).map(Location::edge_count), Some(2));
    }

    #[test]
    fn empty_table_is_header_only() {
        let bytes = LocationTable::new().encode();
        assert_eq!(bytes, b"LMAP\x00\x01\x00\x00");
        assert!(LocationTable::decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = LocationTable::from_locations([Location::new(4), Location::new(4)]).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateId(4)));
    }

    #[test]
    fn holds_exactly_u16_max_locations() {
        let mut table = LocationTable::from_locations((0..u16::MAX).map(Location::new)).unwrap();
        assert_eq!(table.len(), 65_535);

        let err = table.push(Location::new(u16::MAX)).unwrap_err();
        assert!(matches!(err, LayoutError::TooManyLocations(65_536)));
        assert_eq!(table.len(), 65_535);

        let bytes = table.encode();
        assert_eq!(&bytes[6..8], &[0xFF, 0xFF]);
        assert_eq!(LocationTable::decode(&bytes).unwrap().len(), 65_535);
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let mut bytes = two_node_table().encode();
        bytes[0] = b'X';
        assert!(matches!(
            LocationTable::decode(&bytes),
            Err(LayoutError::BadMagic { found, .. }) if &found == b"XMAP"
        ));
    }

    #[test]
    fn decode_rejects_other_versions() {
        let mut bytes = two_node_table().encode();
        bytes[5] = 2;
        assert!(matches!(
            LocationTable::decode(&bytes),
            Err(LayoutError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn decode_rejects_truncation() {
        let bytes = two_node_table().encode();
        let err = LocationTable::decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Codec(CodecError::UnexpectedEof { offset: 58, needed: 50, available: 49 })
        ));
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let mut bytes = two_node_table().encode();
        bytes.push(0);
        assert!(matches!(
            LocationTable::decode(&bytes),
            Err(LayoutError::Codec(CodecError::TrailingBytes { remaining: 1, .. }))
        ));
    }

    #[test]
    fn decode_rejects_duplicate_records() {
        let mut bytes = two_node_table().encode();
        // Rewrite the second record's id to match the first
        bytes[58..60].copy_from_slice(&[0x00, 0x01]);
        assert!(matches!(
            LocationTable::decode(&bytes),
            Err(LayoutError::DuplicateId(1))
        ));
    }

    #[test]
    fn dangling_edges_are_reported() {
        let table = two_node_table();
        assert_eq!(table.dangling_edges(), vec![(2, Connection::new(7, 30))]);
    }

    #[test]
    fn get_mut_populates_in_place() {
        let mut table = two_node_table();
        table.get_mut(1).unwrap().connect(7, 5).unwrap();
        assert_eq!(table.get(1).unwrap().edge_count(), 2);
        assert!(table.get_mut(99).is_none());
    }
}
