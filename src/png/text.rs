// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Text metadata payloads (tEXt and iTXt).
//!
//! A tEXt payload is a keyword and a text separated by one `0x00` byte:
//!
//! ```text
//! [1-79 bytes] keyword (UTF-8, no NUL)
//! [0x00]       separator
//! [N bytes ]   text (UTF-8)
//! ```
//!
//! iTXt adds compression and language fields between keyword and text:
//!
//! ```text
//! keyword 0x00 compression_flag compression_method language 0x00 translated_keyword 0x00 text
//! ```
//!
//! Only uncompressed iTXt is decoded; compressed iTXt and zTXt are skipped.

use thiserror::Error;

/// Maximum keyword length in bytes.
pub const MAX_KEYWORD_LEN: usize = 79;

/// Errors for caller-supplied keywords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("keyword is {0} bytes, maximum is 79")]
    KeywordTooLong(usize),
    #[error("keyword is empty")]
    KeywordEmpty,
    #[error("keyword contains a NUL byte")]
    KeywordContainsNul,
}

/// A decoded (keyword, text) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub keyword: String,
    pub text: String,
}

/// Check keyword rules: 1 to 79 bytes, no NUL.
pub fn validate_keyword(keyword: &str) -> Result<(), TextError> {
    let len = keyword.len();
    if len == 0 {
        return Err(TextError::KeywordEmpty);
    }
    if len > MAX_KEYWORD_LEN {
        return Err(TextError::KeywordTooLong(len));
    }
    if keyword.as_bytes().contains(&0) {
        return Err(TextError::KeywordContainsNul);
    }
    Ok(())
}

/// Encode `keyword || 0x00 || text` for a tEXt chunk.
pub fn encode_text_payload(keyword: &str, text: &str) -> Result<Vec<u8>, TextError> {
    validate_keyword(keyword)?;
    let mut out = Vec::with_capacity(keyword.len() + 1 + text.len());
    out.extend_from_slice(keyword.as_bytes());
    out.push(0);
    out.extend_from_slice(text.as_bytes());
    Ok(out)
}

/// Split a tEXt payload at its first `0x00`.
///
/// Returns `None` when there is no separator. Invalid UTF-8 in either half is
/// replaced with U+FFFD rather than rejected.
pub fn decode_text_payload(data: &[u8]) -> Option<TextChunk> {
    let sep = data.iter().position(|&b| b == 0)?;
    Some(TextChunk {
        keyword: String::from_utf8_lossy(&data[..sep]).into_owned(),
        text: String::from_utf8_lossy(&data[sep + 1..]).into_owned(),
    })
}

/// Decode an uncompressed iTXt payload. Returns `None` for compressed or
/// malformed payloads.
pub fn decode_itxt_payload(data: &[u8]) -> Option<TextChunk> {
    let key_end = data.iter().position(|&b| b == 0)?;
    let rest = &data[key_end + 1..];
    let (&compression_flag, rest) = rest.split_first()?;
    let (_method, rest) = rest.split_first()?;
    if compression_flag != 0 {
        tracing::debug!("skipping compressed iTXt payload");
        return None;
    }
    let lang_end = rest.iter().position(|&b| b == 0)?;
    let rest = &rest[lang_end + 1..];
    let translated_end = rest.iter().position(|&b| b == 0)?;
    let text = &rest[translated_end + 1..];

    Some(TextChunk {
        keyword: String::from_utf8_lossy(&data[..key_end]).into_owned(),
        text: String::from_utf8_lossy(text).into_owned(),
    })
}
