// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! PNG codec round-trip tests verifying byte-for-byte parse/re-serialize fidelity.

mod common;

use chatskin_core::{is_png, parse_chunks, serialize_chunks, ChunkType, PngContainer, PngError};
use common::{multi_chunk_png, TINY_PNG};

#[test]
fn roundtrip_tiny() {
    let chunks = parse_chunks(&TINY_PNG).unwrap();
    let output = serialize_chunks(&chunks).unwrap();
    assert_eq!(TINY_PNG.to_vec(), output);
}

#[test]
fn roundtrip_multi_chunk() {
    let data = multi_chunk_png();
    let png = PngContainer::from_bytes(&data).unwrap();
    assert_eq!(png.chunks().len(), 6);
    assert_eq!(png.to_bytes().unwrap(), data, "multi-chunk round-trip failed");
}

#[test]
fn existing_text_chunks_are_readable() {
    let png = PngContainer::from_bytes(&multi_chunk_png()).unwrap();
    let texts: Vec<_> = png.text_chunks().collect();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].keyword, "Software");
    assert_eq!(texts[0].text, "paint");
}

#[test]
fn altered_signature_every_byte() {
    for i in 0..8 {
        let mut data = TINY_PNG;
        data[i] ^= 0x01;
        assert!(!is_png(&data));
        assert_eq!(parse_chunks(&data), Err(PngError::InvalidSignature), "byte {i}");
    }
}

#[test]
fn truncation_at_every_offset_fails() {
    let data = multi_chunk_png();
    for len in 0..data.len() {
        let err = parse_chunks(&data[..len]).unwrap_err();
        if len < 8 {
            assert_eq!(err, PngError::InvalidSignature);
        } else {
            assert!(
                matches!(err, PngError::UnexpectedEof { .. } | PngError::MissingIend),
                "len {len}: {err:?}"
            );
        }
    }
}

#[test]
fn flipped_data_byte_is_crc_mismatch() {
    let mut data = TINY_PNG;
    // First byte of IDAT data (zlib header).
    data[41] ^= 0x10;
    assert!(matches!(
        parse_chunks(&data),
        Err(PngError::CrcMismatch { chunk_type: ChunkType::IDAT, stored: 0xEB47_BA92, .. })
    ));
}
