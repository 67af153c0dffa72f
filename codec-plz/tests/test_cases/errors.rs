use bytes::BytesMut;
use codec_plz::{
    CodecError, Transform, decode, decode_transform, encode,
    encode_transform,
};

use crate::{INPUT, init_tracing};

#[test]
fn test_unknown_token_buffered() {
    init_tracing();
    assert!(encode(INPUT, "randomized", None).unwrap_err().is_unsupported());
    assert!(
        decode(INPUT, Some("randomized")).unwrap_err().is_unsupported()
    );
}

#[test]
fn test_unknown_token_streaming() {
    assert!(
        encode_transform(Some("randomized"), None)
            .unwrap_err()
            .is_unsupported()
    );
    assert!(
        decode_transform(Some("randomized"))
            .unwrap_err()
            .is_unsupported()
    );
}

#[test]
fn test_unknown_token_mid_spec() {
    let err = decode_transform(Some("gzip, randomized, br")).unwrap_err();
    match err {
        CodecError::Unsupported(token) => assert_eq!(token, "randomized"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_corrupt_gzip_body() {
    let err = decode(b"clearly not gzip", Some("gzip")).unwrap_err();
    assert!(matches!(err, CodecError::Engine { coding: "gzip", .. }));
}

// A body cut off mid-stream must never finish cleanly, whatever the codec.
#[test]
fn test_truncated_stream_errors_at_finish() {
    init_tracing();
    let data = INPUT.repeat(50);
    for token in ["gzip", "deflate", "br", "zstd"] {
        let encoded = encode(&data, token, None).unwrap();
        let cut = &encoded[..encoded.len() / 2];
        let mut chain = decode_transform(Some(token)).unwrap().unwrap();
        let mut out = BytesMut::new();
        let mut result = chain.update(cut, &mut out);
        if result.is_ok() {
            result = chain.finish(&mut out);
        }
        assert!(
            matches!(result, Err(CodecError::Engine { .. })),
            "token {token}"
        );
    }
}

#[test]
fn test_truncated_stream_in_chain() {
    let body = encode(&encode(INPUT, "zstd", None).unwrap(), "base64", None)
        .unwrap();
    let cut = &body[..body.len() - 8];
    let mut chain =
        decode_transform(Some("zstd, base64")).unwrap().unwrap();
    let mut out = BytesMut::new();
    let mut result = chain.update(cut, &mut out);
    if result.is_ok() {
        result = chain.finish(&mut out);
    }
    assert!(result.is_err());
}

#[test]
fn test_corrupt_body_no_partial_result() {
    // outer coding decodes fine, inner one must still abort the call
    let bad = encode(b"not really compressed", "base64", None).unwrap();
    assert!(decode(&bad, Some("zstd, base64")).is_err());
}
