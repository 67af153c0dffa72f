use std::io;

use encoding_plz::ContentCoding;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    // Token not in the registry and not a no-op alias
    #[error("unsupported| {0}")]
    Unsupported(String),
    #[error("base64| invalid byte 0x{byte:02x} at offset {position}")]
    InvalidByte { position: u64, byte: u8 },
    #[error("base64| truncated group at offset {position}")]
    Truncated { position: u64 },
    #[error("{coding}| {source}")]
    Engine {
        coding: &'static str,
        #[source]
        source: io::Error,
    },
    // Chain already surfaced its terminal error
    #[error("stream| terminated")]
    Terminated,
}

impl CodecError {
    pub fn engine(coding: &'static str, source: io::Error) -> Self {
        CodecError::Engine { coding, source }
    }

    pub fn corrupt(coding: &'static str) -> Self {
        let err = io::Error::from(io::ErrorKind::InvalidData);
        CodecError::Engine { coding, source: err }
    }

    pub fn unsupported(coding: &ContentCoding) -> Self {
        CodecError::Unsupported(coding.as_ref().to_string())
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, CodecError::Unsupported(_))
    }
}
