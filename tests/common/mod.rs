// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

#![allow(dead_code)]

use chatskin_core::{serialize_chunks, Chunk, ChunkType};

/// 1x1 RGBA PNG, 70 bytes.
pub const TINY_PNG: [u8; 70] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64, 0x60, 0xF8, 0x5F,
    0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, 0xBA, 0x92, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45,
    0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// A PNG with several IDAT chunks and some ancillary chunks, built from
/// arbitrary (not decodable) pixel bytes. Only chunk structure matters here.
pub fn multi_chunk_png() -> Vec<u8> {
    serialize_chunks(&[
        Chunk::new(ChunkType::IHDR, vec![0, 0, 0, 4, 0, 0, 0, 4, 8, 2, 0, 0, 0]),
        Chunk::new(ChunkType(*b"gAMA"), 45455u32.to_be_bytes().to_vec()),
        Chunk::new(ChunkType::tEXt, b"Software\0paint".to_vec()),
        Chunk::new(ChunkType::IDAT, (0u8..=200).collect()),
        Chunk::new(ChunkType::IDAT, vec![0xAB; 300]),
        Chunk::new(ChunkType::IEND, Vec::new()),
    ])
    .unwrap()
}
