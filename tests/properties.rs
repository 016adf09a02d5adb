// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Property-based tests for the PNG codec and embed/extract.

mod common;

use chatskin_core::{
    decode_text_payload, embed, embed_with, encode_text_payload, extract, extract_with, is_png, parse_chunks,
    serialize_chunks, Chunk, ChunkType, CodecConfig, EmbedPolicy,
};
use common::TINY_PNG;
use proptest::prelude::*;

fn arb_png() -> impl Strategy<Value = Vec<u8>> {
    let ancillary = (
        prop::sample::select(vec![*b"tEXt", *b"gAMA", *b"pHYs", *b"bKGD", *b"prVt"]),
        prop::collection::vec(any::<u8>(), 0..64),
    );
    (
        prop::collection::vec(ancillary, 0..4),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 1..4),
    )
        .prop_map(|(extra, idats)| {
            let mut chunks = vec![Chunk::new(ChunkType::IHDR, vec![0, 0, 0, 2, 0, 0, 0, 2, 8, 6, 0, 0, 0])];
            chunks.extend(extra.into_iter().map(|(t, d)| Chunk::new(ChunkType(t), d)));
            chunks.extend(idats.into_iter().map(|d| Chunk::new(ChunkType::IDAT, d)));
            chunks.push(Chunk::new(ChunkType::IEND, Vec::new()));
            serialize_chunks(&chunks).unwrap()
        })
}

proptest! {
    #[test]
    fn embed_then_extract(png in arb_png(), text in ".*") {
        let out = embed(&png, &text).unwrap();
        prop_assert!(is_png(&out));
        prop_assert_eq!(extract(&out).unwrap(), Some(text));
    }

    #[test]
    fn embed_then_extract_custom_keyword(
        keyword in "[A-Za-z][A-Za-z0-9 ]{0,78}",
        text in ".*",
        append in any::<bool>(),
    ) {
        let policy = if append { EmbedPolicy::Append } else { EmbedPolicy::Replace };
        let config = CodecConfig { keyword, policy };
        let out = embed_with(&TINY_PNG, &text, &config).unwrap();
        prop_assert_eq!(extract_with(&out, &config).unwrap(), Some(text));
    }

    #[test]
    fn parse_serialize_identity(png in arb_png()) {
        let chunks = parse_chunks(&png).unwrap();
        prop_assert_eq!(serialize_chunks(&chunks).unwrap(), png);
    }

    #[test]
    fn truncation_never_parses(png in arb_png(), cut in any::<prop::sample::Index>()) {
        let len = cut.index(png.len());
        prop_assert!(parse_chunks(&png[..len]).is_err());
    }

    #[test]
    fn text_payload_decodes(keyword in "[a-zA-Z0-9 _éü💬-]{1,20}", text in ".*") {
        prop_assume!(keyword.len() <= 79);
        let data = encode_text_payload(&keyword, &text).unwrap();
        let chunk = decode_text_payload(&data).unwrap();
        prop_assert_eq!(chunk.keyword, keyword);
        prop_assert_eq!(chunk.text, text);
    }

    #[test]
    fn no_separator_is_none(data in prop::collection::vec(1u8..=255, 0..128)) {
        prop_assert!(decode_text_payload(&data).is_none());
    }

    #[test]
    fn is_png_never_panics(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let _ = is_png(&data);
    }
}
