// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for PNG container parsing and serialization.

use thiserror::Error;

use super::chunk::ChunkType;

/// Errors that can occur while parsing or writing a PNG chunk stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PngError {
    /// The first 8 bytes are not the PNG signature.
    #[error("missing PNG signature (not a PNG)")]
    InvalidSignature,
    /// A chunk header or body runs past the end of the buffer.
    #[error("unexpected end of PNG data at offset {offset}")]
    UnexpectedEof { offset: usize },
    /// The buffer ended on a chunk boundary without an IEND chunk.
    #[error("missing IEND chunk")]
    MissingIend,
    /// The first chunk is not IHDR.
    #[error("first chunk is {found:?}, expected IHDR")]
    MissingIhdr { found: ChunkType },
    /// A chunk type contains bytes outside `A-Z` / `a-z`.
    #[error("invalid chunk type bytes {0:02X?}")]
    InvalidChunkType([u8; 4]),
    /// Declared or actual chunk length exceeds 2^31 - 1.
    #[error("chunk length {0} exceeds the PNG maximum")]
    ChunkTooLarge(usize),
    /// Stored CRC does not match the CRC computed over type + data.
    #[error("CRC mismatch in {chunk_type:?} chunk: stored {stored:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        chunk_type: ChunkType,
        stored: u32,
        computed: u32,
    },
}

impl PngError {
    /// `true` when the input is not a PNG at all, as opposed to a PNG that is
    /// truncated or corrupt. Callers use this to decide between reporting
    /// damage and silently falling back to a default asset.
    pub fn is_foreign_format(&self) -> bool {
        matches!(self, Self::InvalidSignature)
    }
}

pub type Result<T> = std::result::Result<T, PngError>;
