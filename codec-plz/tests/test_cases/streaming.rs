use bytes::BytesMut;
use codec_plz::{
    CodecError, Transform, decode, decode_transform, encode, encode_transform,
};

use crate::{ALL_COMPRESSIONS, INPUT, encode_chain, run_chain};

const TOKENS: [&str; 5] = ["gzip", "deflate", "br", "zstd", "base64"];

#[test]
fn test_empty_spec_builds_no_chain() {
    assert!(encode_transform(None, None).unwrap().is_none());
    assert!(decode_transform(None).unwrap().is_none());
    assert!(encode_transform(Some("identity"), None).unwrap().is_none());
    assert!(decode_transform(Some("utf-8, none")).unwrap().is_none());
}

// Feeding arbitrary chunks through a decode chain must reproduce what the
// buffered API computes on the unsplit buffer.
#[test]
fn test_stream_decode_matches_buffered() {
    for token in TOKENS {
        let encoded = encode(INPUT, token, None).unwrap();
        for chunk in [1, 2, 3, 7, encoded.len()] {
            let mut chain =
                decode_transform(Some(token)).unwrap().unwrap();
            let plain = run_chain(&mut chain, &encoded, chunk).unwrap();
            assert_eq!(plain.as_ref(), INPUT, "token {token} chunk {chunk}");
        }
    }
}

#[test]
fn test_stream_encode_round_trips() {
    for token in TOKENS {
        for chunk in [1, 3, 4, INPUT.len()] {
            let mut chain =
                encode_transform(Some(token), None).unwrap().unwrap();
            let encoded = run_chain(&mut chain, INPUT, chunk).unwrap();
            let plain = decode(&encoded, Some(token)).unwrap();
            assert_eq!(plain.as_ref(), INPUT, "token {token} chunk {chunk}");
        }
    }
}

// Base64 output is deterministic, so streamed output must be byte-identical
// to the buffered result even when chunks split 3-byte groups.
#[test]
fn test_stream_base64_byte_identical() {
    let buffered = encode(INPUT, "base64", None).unwrap();
    for chunk in 1..=INPUT.len() {
        let mut chain =
            encode_transform(Some("base64"), None).unwrap().unwrap();
        let streamed = run_chain(&mut chain, INPUT, chunk).unwrap();
        assert_eq!(streamed, buffered, "chunk {chunk}");
    }
    for chunk in 1..=buffered.len() {
        let mut chain = decode_transform(Some("base64")).unwrap().unwrap();
        let plain = run_chain(&mut chain, &buffered, chunk).unwrap();
        assert_eq!(plain.as_ref(), INPUT, "chunk {chunk}");
    }
}

#[test]
fn test_stream_multi_token_chain() {
    let body = encode_chain(INPUT, ALL_COMPRESSIONS);
    for chunk in [1, 5, body.len()] {
        let mut chain =
            decode_transform(Some(ALL_COMPRESSIONS)).unwrap().unwrap();
        let plain = run_chain(&mut chain, &body, chunk).unwrap();
        assert_eq!(plain.as_ref(), INPUT, "chunk {chunk}");
    }

    let mut chain =
        encode_transform(Some(ALL_COMPRESSIONS), None).unwrap().unwrap();
    let streamed = run_chain(&mut chain, INPUT, 2).unwrap();
    let plain = decode(&streamed, Some(ALL_COMPRESSIONS)).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_stream_larger_payload() {
    let data = INPUT.repeat(1000);
    for token in TOKENS {
        let mut enc = encode_transform(Some(token), None).unwrap().unwrap();
        let encoded = run_chain(&mut enc, &data, 509).unwrap();
        let mut dec = decode_transform(Some(token)).unwrap().unwrap();
        let plain = run_chain(&mut dec, &encoded, 389).unwrap();
        assert_eq!(plain.as_ref(), &data[..], "token {token}");
    }
}

#[test]
fn test_stream_error_identifies_stage() {
    let mut chain =
        decode_transform(Some("gzip, base64")).unwrap().unwrap();
    let mut out = BytesMut::new();
    // valid base64 of garbage, the gzip stage downstream must reject it
    let bad = encode(b"not gzip data", "base64", None).unwrap();
    let mut result = chain.update(&bad, &mut out);
    if result.is_ok() {
        result = chain.finish(&mut out);
    }
    match result.unwrap_err() {
        CodecError::Engine { coding, .. } => assert_eq!(coding, "gzip"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_stream_no_output_after_error() {
    let mut chain = decode_transform(Some("base64")).unwrap().unwrap();
    let mut out = BytesMut::new();
    assert!(chain.update(b"####", &mut out).is_err());
    assert!(matches!(
        chain.update(b"aGVs", &mut out),
        Err(CodecError::Terminated)
    ));
    assert!(matches!(
        chain.finish(&mut out),
        Err(CodecError::Terminated)
    ));
}
