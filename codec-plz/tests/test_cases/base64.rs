use codec_plz::{CodecError, decode, encode};

use crate::INPUT;

#[test]
fn test_base64_known_vector() {
    let encoded = encode(INPUT, "base64", None).unwrap();
    assert_eq!(encoded.as_ref(), b"aGVsbG8gd29ybGQ=");
}

#[test]
fn test_base64_decode_without_padding() {
    let plain = decode(b"SGk", Some("base64")).unwrap();
    assert_eq!(plain.as_ref(), b"Hi");
}

#[test]
fn test_base64_decode_invalid_byte() {
    let err = decode(b"aG# ", Some("base64")).unwrap_err();
    match err {
        CodecError::InvalidByte { position, byte } => {
            assert_eq!(position, 2);
            assert_eq!(byte, b'#');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_base64_decode_mixed_alphabets() {
    // '+' and '-' both mean 62, '/' and '_' both mean 63
    let standard = decode(b"+/+/", Some("base64")).unwrap();
    let url_safe = decode(b"-_-_", Some("base64")).unwrap();
    assert_eq!(standard, url_safe);
}

#[test]
fn test_base64_decode_with_line_breaks() {
    let plain =
        decode(b"aGVsbG8g\r\nd29ybGQ=\n", Some("base64")).unwrap();
    assert_eq!(plain.as_ref(), INPUT);
}

#[test]
fn test_base64_binary_round_trip() {
    let data: Vec<u8> = (0..=255u8).collect();
    let encoded = encode(&data, "base64", None).unwrap();
    let plain = decode(&encoded, Some("base64")).unwrap();
    assert_eq!(plain.as_ref(), &data[..]);
}
