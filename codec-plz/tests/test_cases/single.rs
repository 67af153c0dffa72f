use std::io::Write;

use codec_plz::{decode, encode};

use crate::INPUT;

#[test]
fn test_round_trip_gzip() {
    let compressed = encode(INPUT, "gzip", None).unwrap();
    let plain = decode(&compressed, Some("gzip")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_round_trip_deflate() {
    let compressed = encode(INPUT, "deflate", None).unwrap();
    let plain = decode(&compressed, Some("deflate")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_round_trip_brotli() {
    let compressed = encode(INPUT, "br", None).unwrap();
    let plain = decode(&compressed, Some("br")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_round_trip_zstd() {
    let compressed = encode(INPUT, "zstd", None).unwrap();
    let plain = decode(&compressed, Some("zstd")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_round_trip_base64() {
    let encoded = encode(INPUT, "base64", None).unwrap();
    let plain = decode(&encoded, Some("base64")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_x_prefixed_tokens() {
    let compressed = encode(INPUT, "x-gzip", None).unwrap();
    let plain = decode(&compressed, Some("x-gzip")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);

    let compressed = encode(INPUT, "x-deflate", None).unwrap();
    let plain = decode(&compressed, Some("x-deflate")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_tokens_case_insensitive() {
    let compressed = encode(INPUT, "GZIP", None).unwrap();
    let plain = decode(&compressed, Some("GzIp")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_noop_aliases_pass_through() {
    for alias in
        ["identity", "amz-1.0", "none", "text", "binary", "utf8", "utf-8"]
    {
        let encoded = encode(INPUT, alias, None).unwrap();
        assert_eq!(encoded.as_ref(), INPUT, "alias {alias}");
        let decoded = decode(INPUT, Some(alias)).unwrap();
        assert_eq!(decoded.as_ref(), INPUT, "alias {alias}");
    }
}

// "deflate" must decode the same plaintext whether or not the sender used
// the zlib wrapper.
#[test]
fn test_deflate_framing_ambiguity() {
    let wrapped = encode(INPUT, "deflate", None).unwrap();

    let mut raw = Vec::new();
    let mut encoder = flate2::write::DeflateEncoder::new(
        &mut raw,
        flate2::Compression::default(),
    );
    encoder.write_all(INPUT).unwrap();
    encoder.finish().unwrap();

    assert_eq!(decode(&wrapped, Some("deflate")).unwrap().as_ref(), INPUT);
    assert_eq!(decode(&raw, Some("deflate")).unwrap().as_ref(), INPUT);
}
