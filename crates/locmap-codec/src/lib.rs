//! Fixed-width big-endian integer codec.
//!
//! This crate provides the byte-level building blocks for locmap records:
//! - Four total, allocation-free conversions between `u16`/`u32` and their
//!   big-endian byte arrays
//! - A bounds-checked [`ByteReader`] and a growable [`ByteWriter`] for
//!   composing those conversions over whole buffers
//!
//! The conversions take and return fixed-size arrays, so a buffer of the
//! wrong width is rejected by the compiler rather than at runtime.

mod cursor;
mod error;

pub use cursor::{ByteReader, ByteWriter};
pub use error::CodecError;

/// Width in bytes of an encoded `u16`.
pub const U16_WIDTH: usize = 2;

/// Width in bytes of an encoded `u32`.
pub const U32_WIDTH: usize = 4;

/// Encodes a `u16` most-significant byte first.
#[inline]
#[must_use]
pub const fn encode16(value: u16) -> [u8; U16_WIDTH] {
    [(value >> 8) as u8, (value & 0xFF) as u8]
}

/// Decodes a big-endian `u16`. Inverse of [`encode16`].
#[inline]
#[must_use]
pub const fn decode16(bytes: [u8; U16_WIDTH]) -> u16 {
    (bytes[0] as u16) << 8 | bytes[1] as u16
}

/// Encodes a `u32` most-significant byte first.
#[inline]
#[must_use]
pub const fn encode32(value: u32) -> [u8; U32_WIDTH] {
    [
        (value >> 24) as u8,
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ]
}

/// Decodes a big-endian `u32`. Inverse of [`encode32`].
#[inline]
#[must_use]
pub const fn decode32(bytes: [u8; U32_WIDTH]) -> u32 {
    (bytes[0] as u32) << 24
        | (bytes[1] as u32) << 16
        | (bytes[2] as u32) << 8
        | bytes[3] as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode16_known_values() {
        assert_eq!(encode16(0x1234), [0x12, 0x34]);
        assert_eq!(encode16(0), [0x00, 0x00]);
        assert_eq!(encode16(u16::MAX), [0xFF, 0xFF]);
        assert_eq!(encode16(0x00FF), [0x00, 0xFF]);
        assert_eq!(encode16(0xFF00), [0xFF, 0x00]);
    }

    #[test]
    fn encode32_known_values() {
        assert_eq!(encode32(0x1234_5678), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(encode32(1), [0x00, 0x00, 0x00, 0x01]);
        assert_eq!(encode32(0x8000_0000), [0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn decode32_extremes() {
        assert_eq!(decode32([0x00, 0x00, 0x00, 0x00]), 0);
        assert_eq!(decode32([0xFF, 0xFF, 0xFF, 0xFF]), 4_294_967_295);
    }

    #[test]
    fn matches_std_big_endian() {
        for value in [0u32, 1, 0xDEAD_BEEF, 0x0102_0304, u32::MAX - 1] {
            assert_eq!(encode32(value), value.to_be_bytes());
        }
        for value in [0u16, 1, 0xBEEF, 0x0102, u16::MAX - 1] {
            assert_eq!(encode16(value), value.to_be_bytes());
        }
    }

    #[test]
    fn u16_round_trip_is_exhaustive() {
        for value in 0..=u16::MAX {
            assert_eq!(decode16(encode16(value)), value);
        }
    }

    #[test]
    fn u32_round_trip_over_strided_domain() {
        // Every high/low half combination the stride reaches, plus both ends.
        let mut value: u32 = 0;
        loop {
            assert_eq!(decode32(encode32(value)), value);
            match value.checked_add(65_521) {
                Some(next) => value = next,
                None => break,
            }
        }
        assert_eq!(decode32(encode32(u32::MAX)), u32::MAX);
    }

    #[test]
    fn u16_encoding_preserves_order() {
        let mut previous = encode16(0);
        for value in 1..=u16::MAX {
            let current = encode16(value);
            assert!(previous < current, "order broken at {value:#06x}");
            previous = current;
        }
    }

    #[test]
    fn u32_encoding_preserves_order_on_samples() {
        let samples = [0u32, 1, 0xFF, 0x100, 0xFFFF, 0x1_0000, 0x00FF_FFFF, 0x0100_0000, u32::MAX];
        for pair in samples.windows(2) {
            assert!(encode32(pair[0]) < encode32(pair[1]));
        }
    }
}
