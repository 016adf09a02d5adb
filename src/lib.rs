// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # chatskin-core
//!
//! Pure-Rust codec for carrying a chat-theme export inside a PNG image.
//!
//! - **png**: splits a PNG into its chunks and writes it back byte-for-byte,
//!   with CRC verification and tEXt/iTXt payload helpers.
//! - **export**: embeds the JSON export of the user's customizations as a
//!   tEXt chunk tagged with a reserved keyword, and recovers it again.
//!
//! All processing works on in-memory buffers. Reading the image from disk or
//! the network is left to the caller.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chatskin_core::{embed, extract};
//!
//! let cover = std::fs::read("background.png").unwrap();
//! let out = embed(&cover, "{\"records\":[]}").unwrap();
//! assert_eq!(extract(&out).unwrap().as_deref(), Some("{\"records\":[]}"));
//! ```

pub mod png;
pub mod export;

pub use png::error::{PngError, Result as PngResult};
pub use png::chunk::{Chunk, ChunkType};
pub use png::text::{decode_text_payload, encode_text_payload, TextChunk, TextError, MAX_KEYWORD_LEN};
pub use png::{is_png, parse_chunks, serialize_chunks, PngContainer, SIGNATURE};
pub use export::{embed, embed_with, extract, extract_with, embed_record, extract_record, ExportError};
pub use export::{CodecConfig, EmbedPolicy, ExportRecord, StoredEntry, RESERVED_KEYWORD};
