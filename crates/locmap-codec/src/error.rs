use miette::Diagnostic;
use thiserror::Error;

/// Errors raised when a buffer does not hold exactly what a reader expects.
///
/// The fixed-width conversions themselves never fail; these only come from
/// [`ByteReader`](crate::ByteReader) walking a buffer of untrusted length.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before a fixed-width field was complete
    #[error("unexpected end of input at byte {offset}: needed {needed} bytes, {available} available")]
    #[diagnostic(
        code("CODEC-001"),
        help("The input is truncated or was not produced by a locmap encoder")
    )]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Bytes were left over after the last expected field
    #[error("{remaining} trailing bytes after offset {offset}")]
    #[diagnostic(
        code("CODEC-002"),
        help("The record count in the header does not match the payload length")
    )]
    TrailingBytes { offset: usize, remaining: usize },
}
