// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Pure-Rust PNG chunk codec.
//!
//! Splits a PNG byte stream into its chunk sequence and writes it back without
//! touching image data. Pixel data is never decompressed; IDAT and every other
//! chunk are carried as opaque bytes. This is the foundation for hiding an
//! export payload in a text chunk.
//!
//! Supports:
//! - Signature check, chunk CRC verification, IHDR-first / IEND-last checks
//! - Byte-for-byte round-trip for unmodified images (including any bytes that
//!   trail the IEND chunk)
//! - Reading tEXt and uncompressed iTXt payloads, writing tEXt
//!
//! Does NOT support:
//! - Compressed text (zTXt, compressed iTXt) -- skipped when reading
//! - Pixel decoding of any kind

pub mod error;
pub mod chunk;
pub mod text;

use chunk::{read_chunk, Chunk, ChunkType};
use error::{PngError, Result};
use text::{decode_itxt_payload, decode_text_payload, TextChunk};

/// The fixed 8-byte PNG signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// `true` iff `data` starts with the PNG signature. Short buffers are `false`.
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= SIGNATURE.len() && data[..SIGNATURE.len()] == SIGNATURE
}

/// Walk the chunk stream. Returns the chunks up to and including IEND, and the
/// offset just past the IEND chunk.
fn iterate_chunks(data: &[u8]) -> Result<(Vec<Chunk>, usize)> {
    if !is_png(data) {
        return Err(PngError::InvalidSignature);
    }

    let mut chunks = Vec::new();
    let mut pos = SIGNATURE.len();

    loop {
        if pos == data.len() {
            return Err(PngError::MissingIend);
        }
        let (chunk, next) = read_chunk(data, pos)?;

        if chunks.is_empty() && chunk.chunk_type != ChunkType::IHDR {
            return Err(PngError::MissingIhdr { found: chunk.chunk_type });
        }
        tracing::trace!(chunk_type = %chunk.chunk_type, len = chunk.len(), offset = pos, "chunk");

        let is_end = chunk.chunk_type == ChunkType::IEND;
        chunks.push(chunk);
        pos = next;

        if is_end {
            return Ok((chunks, pos));
        }
    }
}

/// Parse a PNG byte stream into its ordered chunks (IHDR first, IEND last).
///
/// # Errors
/// - [`PngError::InvalidSignature`] if the first 8 bytes are not the PNG signature.
/// - [`PngError::UnexpectedEof`] / [`PngError::MissingIend`] on truncated input.
/// - [`PngError::CrcMismatch`] if any chunk fails its checksum.
pub fn parse_chunks(data: &[u8]) -> Result<Vec<Chunk>> {
    iterate_chunks(data).map(|(chunks, _)| chunks)
}

/// Write the PNG signature followed by every chunk, recomputing each CRC.
///
/// Either the whole stream is produced or an error is returned; no partial
/// output escapes.
pub fn serialize_chunks(chunks: &[Chunk]) -> Result<Vec<u8>> {
    let total = SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&SIGNATURE);
    for chunk in chunks {
        chunk.write_to(&mut out)?;
    }
    Ok(out)
}

/// Decode the payload of a text chunk. Returns `None` for non-text chunks and
/// for text chunks this codec cannot read.
pub fn decode_text_chunk(chunk: &Chunk) -> Option<TextChunk> {
    match chunk.chunk_type {
        ChunkType::tEXt => decode_text_payload(&chunk.data),
        ChunkType::iTXt => decode_itxt_payload(&chunk.data),
        ChunkType::zTXt => {
            tracing::debug!("skipping zTXt payload");
            None
        }
        _ => None,
    }
}

/// `true` if `chunk` is a text chunk whose raw keyword bytes equal `keyword`.
fn has_keyword(chunk: &Chunk, keyword: &str) -> bool {
    chunk.chunk_type.is_text() && chunk.data.split(|&b| b == 0).next() == Some(keyword.as_bytes())
}

/// Compact description of one chunk, for listing a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    pub chunk_type: ChunkType,
    pub len: usize,
    pub crc: u32,
}

/// A parsed PNG image giving access to its chunk sequence.
///
/// Created with [`PngContainer::from_bytes`]. After inserting or removing
/// chunks, call [`PngContainer::to_bytes`] to re-encode. Bytes found after
/// IEND are kept and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngContainer {
    chunks: Vec<Chunk>,
    trailing: Vec<u8>,
}

impl PngContainer {
    /// Parse a PNG from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (chunks, end) = iterate_chunks(data)?;
        let trailing = data[end..].to_vec();
        if !trailing.is_empty() {
            tracing::warn!(bytes = trailing.len(), "data after IEND chunk");
        }
        tracing::debug!(chunks = chunks.len(), bytes = data.len(), "parsed PNG");
        Ok(Self { chunks, trailing })
    }

    /// Build a container from chunks with no trailing data.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self { chunks, trailing: Vec::new() }
    }

    /// Re-encode the container.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = serialize_chunks(&self.chunks)?;
        out.extend_from_slice(&self.trailing);
        Ok(out)
    }

    /// Chunks in stream order, IHDR first.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Mutable access to the chunk data. CRCs are recomputed by `to_bytes`, so
    /// edited chunks need no further bookkeeping.
    pub fn chunks_mut(&mut self) -> &mut [Chunk] {
        &mut self.chunks
    }

    /// Bytes that followed the IEND chunk in the source.
    pub fn trailing(&self) -> &[u8] {
        &self.trailing
    }

    /// Insert `chunk` immediately before IEND, or append it if there is none.
    pub fn insert_before_iend(&mut self, chunk: Chunk) {
        match self.chunks.iter().rposition(|c| c.chunk_type == ChunkType::IEND) {
            Some(idx) => self.chunks.insert(idx, chunk),
            None => self.chunks.push(chunk),
        }
    }

    /// All readable text payloads, in stream order.
    pub fn text_chunks(&self) -> impl Iterator<Item = TextChunk> + '_ {
        self.chunks.iter().filter_map(decode_text_chunk)
    }

    /// First text payload carrying `keyword`. Keywords are compared as raw
    /// bytes, before any lossy UTF-8 decoding.
    pub fn find_text(&self, keyword: &str) -> Option<TextChunk> {
        self.chunks
            .iter()
            .filter(|c| has_keyword(c, keyword))
            .find_map(decode_text_chunk)
    }

    /// Remove every readable text chunk carrying `keyword`. Returns how many
    /// chunks were removed.
    pub fn remove_text(&mut self, keyword: &str) -> usize {
        let before = self.chunks.len();
        self.chunks
            .retain(|c| !(has_keyword(c, keyword) && decode_text_chunk(c).is_some()));
        before - self.chunks.len()
    }

    /// Type, length and CRC of every chunk.
    pub fn summary(&self) -> Vec<ChunkSummary> {
        self.chunks
            .iter()
            .map(|c| ChunkSummary {
                chunk_type: c.chunk_type,
                len: c.len(),
                crc: c.crc(),
            })
            .collect()
    }
}
