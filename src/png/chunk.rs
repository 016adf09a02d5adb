// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! PNG chunk records.
//!
//! Every chunk on the wire is laid out as:
//!
//! ```text
//! [4 bytes ] data length (big-endian u32, at most 2^31 - 1)
//! [4 bytes ] chunk type (ASCII letters)
//! [N bytes ] data
//! [4 bytes ] CRC-32 over type + data
//! ```
//!
//! [`Chunk`] stores only the type and data. Length and CRC are derived on
//! demand, so a modified chunk can never be written with a stale checksum.

use core::fmt;

use super::error::{PngError, Result};

/// Largest data length a PNG chunk may declare.
pub const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

/// Bytes of framing around the chunk data: length(4) + type(4) + crc(4).
pub const CHUNK_OVERHEAD: usize = 12;

/// A four-letter chunk type code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);

#[allow(non_upper_case_globals)]
impl ChunkType {
    pub const IHDR: Self = Self(*b"IHDR");
    pub const PLTE: Self = Self(*b"PLTE");
    pub const IDAT: Self = Self(*b"IDAT");
    pub const IEND: Self = Self(*b"IEND");
    pub const tEXt: Self = Self(*b"tEXt");
    pub const iTXt: Self = Self(*b"iTXt");
    pub const zTXt: Self = Self(*b"zTXt");

    /// Validate raw type bytes. PNG restricts each byte to `A-Z` / `a-z`.
    pub fn try_from_bytes(bytes: [u8; 4]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_alphabetic) {
            Ok(Self(bytes))
        } else {
            Err(PngError::InvalidChunkType(bytes))
        }
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Critical chunks (uppercase first letter) must be understood by a decoder.
    pub fn is_critical(&self) -> bool {
        self.0[0].is_ascii_uppercase()
    }

    /// Public chunks (uppercase second letter) are registered by the PNG spec.
    pub fn is_public(&self) -> bool {
        self.0[1].is_ascii_uppercase()
    }

    /// Safe-to-copy chunks (lowercase fourth letter) may be carried over by
    /// editors that modify critical chunks without understanding this one.
    pub fn is_safe_to_copy(&self) -> bool {
        self.0[3].is_ascii_lowercase()
    }

    /// Text metadata chunks: tEXt, iTXt or zTXt.
    pub fn is_text(&self) -> bool {
        matches!(*self, Self::tEXt | Self::iTXt | Self::zTXt)
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// One chunk of a PNG stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub chunk_type: ChunkType,
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> Self {
        Self { chunk_type, data }
    }

    /// Data length in bytes (the value written to the length field).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// CRC-32 over type + data, as stored in the chunk trailer.
    pub fn crc(&self) -> u32 {
        chunk_crc(&self.chunk_type, &self.data)
    }

    /// Size of this chunk on the wire, including framing.
    pub fn encoded_len(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }

    /// Append the wire form of this chunk to `out`. The CRC is always
    /// recomputed from the current type and data.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        let len = u32::try_from(self.data.len())
            .ok()
            .filter(|&l| l as usize <= MAX_CHUNK_LEN)
            .ok_or(PngError::ChunkTooLarge(self.data.len()))?;
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(self.chunk_type.as_bytes());
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
        Ok(())
    }
}

/// CRC-32 (ISO-HDLC, the polynomial mandated by PNG) over `type || data`.
pub fn chunk_crc(chunk_type: &ChunkType, data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type.as_bytes());
    hasher.update(data);
    hasher.finalize()
}

/// Read one chunk starting at `pos`.
///
/// Returns the chunk and the offset of the byte following its CRC. The stored
/// CRC is verified against the computed one.
pub fn read_chunk(data: &[u8], pos: usize) -> Result<(Chunk, usize)> {
    let header_end = pos
        .checked_add(8)
        .filter(|&end| end <= data.len())
        .ok_or(PngError::UnexpectedEof { offset: pos })?;

    let length = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
    if length > MAX_CHUNK_LEN {
        return Err(PngError::ChunkTooLarge(length));
    }
    let chunk_type = ChunkType::try_from_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])?;

    let data_end = header_end + length;
    let crc_end = data_end
        .checked_add(4)
        .filter(|&end| end <= data.len())
        .ok_or(PngError::UnexpectedEof { offset: pos })?;

    let body = &data[header_end..data_end];
    let stored = u32::from_be_bytes([data[data_end], data[data_end + 1], data[data_end + 2], data[data_end + 3]]);
    let computed = chunk_crc(&chunk_type, body);
    if stored != computed {
        tracing::debug!(%chunk_type, offset = pos, stored, computed, "chunk CRC mismatch");
        return Err(PngError::CrcMismatch { chunk_type, stored, computed });
    }

    Ok((Chunk::new(chunk_type, body.to_vec()), crc_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iend_crc_matches_reference() {
        // Every PNG ends with 00 00 00 00 49 45 4E 44 AE 42 60 82.
        assert_eq!(Chunk::new(ChunkType::IEND, Vec::new()).crc(), 0xAE42_6082);
    }

    #[test]
    fn write_then_read() {
        let chunk = Chunk::new(ChunkType::tEXt, b"Comment\0hello".to_vec());
        let mut out = Vec::new();
        chunk.write_to(&mut out).unwrap();
        assert_eq!(out.len(), chunk.encoded_len());
        assert_eq!(&out[..4], &13u32.to_be_bytes());
        assert_eq!(&out[4..8], b"tEXt");

        let (parsed, next) = read_chunk(&out, 0).unwrap();
        assert_eq!(parsed, chunk);
        assert_eq!(next, out.len());
    }

    #[test]
    fn corrupted_crc_detected() {
        let mut out = Vec::new();
        Chunk::new(ChunkType::IDAT, vec![1, 2, 3]).write_to(&mut out).unwrap();
        let last = out.len() - 1;
        out[last] ^= 0xFF;
        assert!(matches!(
            read_chunk(&out, 0),
            Err(PngError::CrcMismatch { chunk_type: ChunkType::IDAT, .. })
        ));
    }

    #[test]
    fn truncated_body_is_eof() {
        let mut out = Vec::new();
        Chunk::new(ChunkType::IDAT, vec![0u8; 16]).write_to(&mut out).unwrap();
        out.truncate(10);
        assert_eq!(read_chunk(&out, 0), Err(PngError::UnexpectedEof { offset: 0 }));
    }

    #[test]
    fn oversized_length_rejected() {
        let mut bytes = vec![0x80, 0x00, 0x00, 0x00];
        bytes.extend_from_slice(b"IDAT");
        assert_eq!(read_chunk(&bytes, 0), Err(PngError::ChunkTooLarge(0x8000_0000)));
    }

    #[test]
    fn non_letter_type_rejected() {
        assert_eq!(
            ChunkType::try_from_bytes(*b"ID4T"),
            Err(PngError::InvalidChunkType(*b"ID4T"))
        );
    }

    #[test]
    fn property_bits() {
        assert!(ChunkType::IHDR.is_critical());
        assert!(!ChunkType::tEXt.is_critical());
        assert!(ChunkType::tEXt.is_public());
        assert!(ChunkType::tEXt.is_safe_to_copy());
        assert!(!ChunkType::IDAT.is_safe_to_copy());
        assert!(ChunkType::iTXt.is_text());
        assert!(!ChunkType::IEND.is_text());
    }

    #[test]
    fn display_is_ascii() {
        assert_eq!(ChunkType::tEXt.to_string(), "tEXt");
        assert_eq!(format!("{:?}", ChunkType::IEND), "IEND");
    }
}
