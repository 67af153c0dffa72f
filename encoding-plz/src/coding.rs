pub const BASE64: &str = "base64";
pub const BROTLI: &str = "br";
pub const DEFLATE: &str = "deflate";
pub const GZIP: &str = "gzip";
pub const IDENTITY: &str = "identity";
pub const X_DEFLATE: &str = "x-deflate";
pub const X_GZIP: &str = "x-gzip";
pub const ZSTD: &str = "zstd";

// Tokens that denote unencoded content despite not being "identity".
pub const NOOP_ALIASES: [&str; 6] =
    ["amz-1.0", "none", "text", "binary", "utf8", "utf-8"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContentCoding {
    Base64,
    Brotli,
    Deflate,
    Gzip,
    Identity,
    Zstd,
    Unknown(String),
}

impl AsRef<str> for ContentCoding {
    fn as_ref(&self) -> &str {
        use ContentCoding::*;
        match self {
            Base64 => BASE64,
            Brotli => BROTLI,
            Deflate => DEFLATE,
            Gzip => GZIP,
            Identity => IDENTITY,
            Zstd => ZSTD,
            Unknown(s) => s,
        }
    }
}

impl From<&str> for ContentCoding {
    fn from(s: &str) -> Self {
        use ContentCoding::*;
        // Token matching is case-insensitive.
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            BASE64 => Base64,
            BROTLI => Brotli,
            DEFLATE | X_DEFLATE => Deflate,
            GZIP | X_GZIP => Gzip,
            IDENTITY => Identity,
            ZSTD => Zstd,
            other if NOOP_ALIASES.contains(&other) => Identity,
            other => Unknown(other.to_string()),
        }
    }
}

impl ContentCoding {
    // Canonical token for known codings, None for Unknown.
    pub fn label(&self) -> Option<&'static str> {
        use ContentCoding::*;
        match self {
            Base64 => Some(BASE64),
            Brotli => Some(BROTLI),
            Deflate => Some(DEFLATE),
            Gzip => Some(GZIP),
            Identity => Some(IDENTITY),
            Zstd => Some(ZSTD),
            Unknown(_) => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, ContentCoding::Identity)
    }
}
