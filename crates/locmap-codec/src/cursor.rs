use crate::{decode16, decode32, encode16, encode32, CodecError, U16_WIDTH, U32_WIDTH};

/// Appends big-endian fields to an owned buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with room for `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&encode16(value));
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&encode32(value));
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads big-endian fields from a borrowed buffer, front to back.
///
/// Every read is bounds-checked; a short buffer yields
/// [`CodecError::UnexpectedEof`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Takes the next `N` bytes as a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Takes the next `len` bytes as a subslice of the input.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::UnexpectedEof {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.buf[start..self.pos])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        self.read_array::<U16_WIDTH>().map(decode16)
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.read_array::<U32_WIDTH>().map(decode32)
    }

    /// Consumes the reader, failing if any input was left unread.
    pub fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(CodecError::TrailingBytes {
                offset: self.pos,
                remaining,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_emits_fields_in_order() {
        let mut writer = ByteWriter::with_capacity(6);
        writer.put_u16(0x0102);
        writer.put_u32(0x0304_0506);
        assert_eq!(writer.len(), 6);
        assert_eq!(writer.into_inner(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reader_reads_what_writer_wrote() {
        let mut writer = ByteWriter::new();
        writer.put_u32(0xCAFE_F00D);
        writer.put_u16(7);
        writer.put_bytes(b"ok");

        let mut reader = ByteReader::new(writer.as_slice());
        assert_eq!(reader.read_u32(), Ok(0xCAFE_F00D));
        assert_eq!(reader.read_u16(), Ok(7));
        assert_eq!(reader.read_bytes(2), Ok(&b"ok"[..]));
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.finish(), Ok(()));
    }

    #[test]
    fn short_read_reports_offset_and_keeps_position() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u16(), Ok(0xAABB));

        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            CodecError::UnexpectedEof {
                offset: 2,
                needed: 4,
                available: 1,
            }
        );
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn finish_rejects_leftovers() {
        let data = [0u8; 5];
        let mut reader = ByteReader::new(&data);
        reader.read_u32().unwrap();
        assert_eq!(
            reader.finish(),
            Err(CodecError::TrailingBytes {
                offset: 4,
                remaining: 1,
            })
        );
    }

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert!(writer.is_empty());
        assert!(ByteReader::new(writer.as_slice()).finish().is_ok());
    }
}
