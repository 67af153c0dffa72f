use bytes::BytesMut;
use encoding_plz::ContentCoding;

use crate::error::CodecError;
use crate::registry::Registry;
use crate::spec_codings;

pub mod single;
pub mod sniff;

// Applies exactly one coding. Composing a multi-coding body is the caller's
// business, one call per token.
pub fn encode(
    input: &[u8],
    token: &str,
    level: Option<u32>,
) -> Result<BytesMut, CodecError> {
    let coding = ContentCoding::from(token);
    Registry::global().compress(&coding, input, level)
}

pub fn decode(
    input: &[u8],
    spec: Option<&str>,
) -> Result<BytesMut, CodecError> {
    let codings = spec_codings(spec);
    decode_list(input, &codings)
}

// The last listed coding was applied last, so decoding walks the list
// backwards, each stage feeding the next. Any unresolvable token aborts the
// whole call, no partial body comes back.
pub fn decode_list(
    input: &[u8],
    codings: &[ContentCoding],
) -> Result<BytesMut, CodecError> {
    let registry = Registry::global();
    let mut decoded: Option<BytesMut> = None;
    for coding in codings.iter().rev() {
        let current: &[u8] = decoded.as_deref().unwrap_or(input);
        decoded = Some(registry.decompress(coding, current)?);
    }
    Ok(decoded.unwrap_or_else(|| BytesMut::from(input)))
}
