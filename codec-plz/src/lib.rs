pub mod base64;
pub mod buffered;
pub mod error;
pub mod registry;
pub mod stream;

pub use buffered::{decode, decode_list, encode};
pub use encoding_plz::{ContentCoding, coding, list, parse};
pub use error::CodecError;
pub use stream::Transform;
pub use stream::chain::TransformChain;

// An empty or all-no-op spec means no transformation, callers pass the
// source through untouched.
pub fn encode_transform(
    spec: Option<&str>,
    level: Option<u32>,
) -> Result<Option<TransformChain>, CodecError> {
    stream::chain::build_encode_chain(&spec_codings(spec), level)
}

pub fn decode_transform(
    spec: Option<&str>,
) -> Result<Option<TransformChain>, CodecError> {
    stream::chain::build_decode_chain(&spec_codings(spec))
}

pub(crate) fn spec_codings(spec: Option<&str>) -> Vec<ContentCoding> {
    spec.map(encoding_plz::parse).unwrap_or_default()
}
