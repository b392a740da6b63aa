use locmap_codec::CodecError;
use miette::Diagnostic;
use thiserror::Error;

use crate::{LocationId, MAX_CONNECTIONS};

/// Errors that can occur when building, encoding or decoding location data.
#[derive(Debug, Error, Diagnostic)]
pub enum LayoutError {
    /// Every connection slot of a location is already in use
    #[error("Location {id} already has {max} connections", max = MAX_CONNECTIONS)]
    #[diagnostic(
        code("LAYOUT-001"),
        help("A location holds at most 8 outgoing connections")
    )]
    ConnectionsFull { id: LocationId },

    /// The edge is indistinguishable from an unused slot
    #[error("Location {id} cannot hold a zero-length connection to location 0")]
    #[diagnostic(
        code("LAYOUT-002"),
        help("An all-zero connection marks an unused slot; give the edge a non-zero length")
    )]
    VacantEdge { id: LocationId },

    /// A map item lists more connections than a record can hold
    #[error("Location {id} lists {count} connections, at most {max} are allowed", max = MAX_CONNECTIONS)]
    #[diagnostic(code("LAYOUT-003"), help("Split the location or drop some connections"))]
    TooManyConnections { id: LocationId, count: usize },

    /// Two locations share an identifier
    #[error("Duplicate location id {0}")]
    #[diagnostic(code("LAYOUT-004"), help("Location ids must be unique within a map"))]
    DuplicateId(LocationId),

    /// The table cannot be described by a 16-bit record count
    #[error("Too many locations: {0}")]
    #[diagnostic(code("LAYOUT-005"), help("A table holds at most 65535 locations"))]
    TooManyLocations(usize),

    /// The input does not start with the table magic
    #[error("Not a location table: expected magic {expected:?}, found {found:?}")]
    #[diagnostic(code("LAYOUT-006"), help("Binary tables are produced by `locmap encode` or `locmap generate`"))]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    /// The table was written by an incompatible encoder
    #[error("Unsupported table version {0}")]
    #[diagnostic(code("LAYOUT-007"))]
    UnsupportedVersion(u16),

    /// An emit option would produce C that does not compile
    #[error("Invalid emit option {key} = {value:?}: {reason}")]
    #[diagnostic(
        code("LAYOUT-009"),
        help("`array_name` must be a C identifier; `include_path` must not contain quotes, angle brackets or control characters")
    )]
    InvalidEmitOption {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The underlying byte buffer was malformed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Codec(#[from] CodecError),

    /// The JSON map document could not be parsed or written
    #[error("Invalid map document: {0}")]
    #[diagnostic(code("LAYOUT-008"), help("Expected a JSON array of items with `id`, `name` and a `connect` list of `pos`/`len` pairs"))]
    Json(#[from] serde_json::Error),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
