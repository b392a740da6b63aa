use locmap_codec::{decode16, decode32, encode16, encode32, ByteReader, ByteWriter, CodecError};

use crate::{Length, LocationId, CONNECTION_SIZE};

/// A directed, weighted edge from one location to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Connection {
    /// Identifier of the target location
    pub locate: LocationId,
    /// Distance or weight of the edge
    pub length: Length,
}

impl Connection {
    /// The value of an unused slot, as left by a C zero-initialiser.
    pub const VACANT: Connection = Connection { locate: 0, length: 0 };

    pub const fn new(locate: LocationId, length: Length) -> Self {
        Self { locate, length }
    }

    /// True if this slot carries no edge.
    pub const fn is_vacant(&self) -> bool {
        self.locate == 0 && self.length == 0
    }

    /// `locate` then `length`, both big-endian.
    pub fn encode(&self) -> [u8; CONNECTION_SIZE] {
        let [l0, l1] = encode16(self.locate);
        let [w0, w1, w2, w3] = encode32(self.length);
        [l0, l1, w0, w1, w2, w3]
    }

    pub fn decode(bytes: [u8; CONNECTION_SIZE]) -> Self {
        Self {
            locate: decode16([bytes[0], bytes[1]]),
            length: decode32([bytes[2], bytes[3], bytes[4], bytes[5]]),
        }
    }

    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.put_u16(self.locate);
        writer.put_u32(self.length);
    }

    pub fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let locate = reader.read_u16()?;
        let length = reader.read_u32()?;
        Ok(Self { locate, length })
    }
}
