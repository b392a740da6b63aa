//! Location graph records for locmap.
//!
//! A map is a set of [`Location`]s, each holding exactly [`MAX_CONNECTIONS`]
//! outgoing [`Connection`] slots. This crate is responsible for:
//! - The fixed in-memory and on-wire layout of those records
//! - The binary [`LocationTable`] format that stores a whole map
//! - The JSON [`MapDocument`] exchanged with map editors
//! - Emitting the C header and initializer consumed by firmware
//!
//! ## Unused slots
//!
//! A slot holding [`Connection::VACANT`] (`locate == 0 && length == 0`) is
//! unused. This is the value C leaves in slots an initializer omits, so the
//! emitted source and the binary records agree on it.

mod connection;
mod document;
mod emit;
mod error;
mod location;
mod table;

pub use connection::Connection;
pub use document::{MapConnect, MapDocument, MapItem};
pub use emit::{header_source, initializer_source, EmitOptions};
pub use error::{LayoutError, LayoutResult};
pub use location::Location;
pub use table::{LocationTable, TABLE_HEADER_SIZE, TABLE_MAGIC, TABLE_VERSION};

/// Identifier of a location.
pub type LocationId = u16;

/// Weight of a connection.
pub type Length = u32;

/// Number of connection slots in every location.
pub const MAX_CONNECTIONS: usize = 8;

/// Encoded size of a [`Connection`]: `locate` (2) then `length` (4).
pub const CONNECTION_SIZE: usize = locmap_codec::U16_WIDTH + locmap_codec::U32_WIDTH;

/// Encoded size of a [`Location`]: `id` (2) then every slot.
pub const RECORD_SIZE: usize = locmap_codec::U16_WIDTH + MAX_CONNECTIONS * CONNECTION_SIZE;
