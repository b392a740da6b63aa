use locmap_codec::{decode16, encode16, ByteReader, ByteWriter, CodecError};

use crate::error::{LayoutError, LayoutResult};
use crate::{Connection, Length, LocationId, CONNECTION_SIZE, MAX_CONNECTIONS, RECORD_SIZE};

/// A graph node with a fixed array of outgoing connection slots.
///
/// Slots not carrying an edge hold [`Connection::VACANT`]. The slot count is
/// part of the type, so a location always has exactly [`MAX_CONNECTIONS`].
///
/// The encoded record is the id followed by every slot in order, big-endian
/// and unpadded ([`RECORD_SIZE`] bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub id: LocationId,
    pub connections: [Connection; MAX_CONNECTIONS],
}

impl Location {
    /// Creates a location with every slot vacant.
    pub const fn new(id: LocationId) -> Self {
        Self {
            id,
            connections: [Connection::VACANT; MAX_CONNECTIONS],
        }
    }

    pub const fn with_connections(id: LocationId, connections: [Connection; MAX_CONNECTIONS]) -> Self {
        Self { id, connections }
    }

    /// Stores an edge in the first vacant slot and returns that slot's index.
    pub fn connect(&mut self, locate: LocationId, length: Length) -> LayoutResult<usize> {
        let connection = Connection::new(locate, length);
        if connection.is_vacant() {
            return Err(LayoutError::VacantEdge { id: self.id });
        }

        let slot = self
            .connections
            .iter()
            .position(Connection::is_vacant)
            .ok_or(LayoutError::ConnectionsFull { id: self.id })?;
        self.connections[slot] = connection;
        log::trace!("location {}: slot {} -> {} ({})", self.id, slot, locate, length);
        Ok(slot)
    }

    /// Clears a slot, returning the edge it held.
    ///
    /// Returns `None` for an out-of-range or already vacant slot.
    pub fn disconnect(&mut self, slot: usize) -> Option<Connection> {
        let existing = self.connections.get_mut(slot)?;
        if existing.is_vacant() {
            return None;
        }
        Some(std::mem::replace(existing, Connection::VACANT))
    }

    /// Edges in slot order, skipping vacant slots.
    pub fn edges(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.iter().filter(|c| !c.is_vacant())
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[..2].copy_from_slice(&encode16(self.id));
        for (chunk, connection) in out[2..]
            .chunks_exact_mut(CONNECTION_SIZE)
            .zip(self.connections.iter())
        {
            chunk.copy_from_slice(&connection.encode());
        }
        out
    }

    pub fn decode(bytes: &[u8; RECORD_SIZE]) -> Self {
        let id = decode16([bytes[0], bytes[1]]);
        let mut connections = [Connection::VACANT; MAX_CONNECTIONS];
        for (connection, chunk) in connections
            .iter_mut()
            .zip(bytes[2..].chunks_exact(CONNECTION_SIZE))
        {
            let mut raw = [0u8; CONNECTION_SIZE];
            raw.copy_from_slice(chunk);
            *connection = Connection::decode(raw);
        }
        Self { id, connections }
    }

    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.put_u16(self.id);
        for connection in &self.connections {
            connection.write_to(writer);
        }
    }

    pub fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let record = reader.read_array::<RECORD_SIZE>()?;
        Ok(Self::decode(&record))
    }
}
