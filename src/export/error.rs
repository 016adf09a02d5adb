// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the export/import bridge.
//!
//! [`ExportError`] covers all failure modes from PNG parsing through keyword
//! validation and JSON decoding. A missing payload is not an error; the
//! extract functions return `Ok(None)` for it.

use thiserror::Error;

use crate::png::error::PngError;
use crate::png::text::TextError;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The image could not be parsed as a valid PNG.
    #[error("invalid PNG: {0}")]
    InvalidPng(#[from] PngError),
    /// The keyword is not usable for a text chunk.
    #[error("invalid keyword: {0}")]
    InvalidKeyword(#[from] TextError),
    /// The embedded text is not a valid export document.
    #[error("invalid export document: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

impl ExportError {
    /// `true` when the input is not a PNG at all.
    pub fn is_foreign_format(&self) -> bool {
        matches!(self, Self::InvalidPng(e) if e.is_foreign_format())
    }
}
