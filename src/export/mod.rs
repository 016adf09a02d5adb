// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Hiding and recovering an export payload in a PNG.
//!
//! - **embed** (`embed` / `embed_with` / `embed_record`): write the text as a
//!   tEXt chunk just before IEND, tagged with the configured keyword.
//! - **extract** (`extract` / `extract_with` / `extract_record`): return the
//!   text of the first tEXt or uncompressed iTXt chunk with that keyword.
//!
//! Every function takes the image bytes and returns new bytes; nothing is
//! read from or written to disk here.

pub mod error;
pub mod config;
pub mod record;

pub use config::{CodecConfig, EmbedPolicy, RESERVED_KEYWORD};
pub use error::ExportError;
pub use record::{ExportRecord, StoredEntry};

use crate::png::chunk::{Chunk, ChunkType};
use crate::png::text::encode_text_payload;
use crate::png::PngContainer;

/// Embed `text` under [`RESERVED_KEYWORD`], replacing any earlier export.
pub fn embed(png: &[u8], text: &str) -> Result<Vec<u8>, ExportError> {
    embed_with(png, text, &CodecConfig::default())
}

/// Embed `text` under `config.keyword`, following `config.policy`.
///
/// # Errors
/// - [`ExportError::InvalidPng`] if `png` does not parse.
/// - [`ExportError::InvalidKeyword`] if the keyword is empty, contains NUL or
///   exceeds 79 bytes.
pub fn embed_with(png: &[u8], text: &str, config: &CodecConfig) -> Result<Vec<u8>, ExportError> {
    let payload = encode_text_payload(&config.keyword, text)?;
    let mut container = PngContainer::from_bytes(png)?;

    if config.policy == EmbedPolicy::Replace {
        let removed = container.remove_text(&config.keyword);
        if removed > 0 {
            tracing::debug!(removed, keyword = %config.keyword, "replaced existing payload");
        }
    }
    container.insert_before_iend(Chunk::new(ChunkType::tEXt, payload));

    let out = container.to_bytes()?;
    tracing::debug!(text_bytes = text.len(), input = png.len(), output = out.len(), "embedded payload");
    Ok(out)
}

/// Return the text stored under [`RESERVED_KEYWORD`], or `None` if absent.
pub fn extract(png: &[u8]) -> Result<Option<String>, ExportError> {
    extract_with(png, &CodecConfig::default())
}

/// Return the text stored under `config.keyword`, or `None` if absent.
pub fn extract_with(png: &[u8], config: &CodecConfig) -> Result<Option<String>, ExportError> {
    let container = PngContainer::from_bytes(png)?;
    let found = container.find_text(&config.keyword).map(|t| t.text);
    if found.is_none() {
        tracing::debug!(keyword = %config.keyword, "no payload found");
    }
    Ok(found)
}

/// Serialize `record` to JSON and embed it.
pub fn embed_record(png: &[u8], record: &ExportRecord) -> Result<Vec<u8>, ExportError> {
    embed(png, &record.to_json()?)
}

/// Extract and parse an export document. `Ok(None)` if the image has none.
pub fn extract_record(png: &[u8]) -> Result<Option<ExportRecord>, ExportError> {
    extract(png)?
        .map(|json| ExportRecord::from_json(&json))
        .transpose()
        .map_err(ExportError::from)
}
