use std::io::copy;
use std::sync::OnceLock;

use bytes::{BufMut, BytesMut};
use encoding_plz::ContentCoding;
use encoding_plz::coding::IDENTITY;
use tracing::error;

use crate::base64;
use crate::base64::stream::{Base64Decoder, Base64Encoder};
use crate::buffered::single;
use crate::error::CodecError;
use crate::stream::Transform;
use crate::stream::brotli::{BrotliDecoder, BrotliEncoder};
use crate::stream::flate::{
    DeflateDecoder, DeflateEncoder, GzipDecoder, GzipEncoder,
};
use crate::stream::zstd::{ZstdDecoder, ZstdEncoder};

// Engine defaults, forwarded untouched when the caller gives no level
const DEFAULT_FLATE_LEVEL: u32 = 6;
const DEFAULT_BROTLI_QUALITY: u32 = 5;
const DEFAULT_ZSTD_LEVEL: u32 = 3;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

// Process-wide codec table. Built once on first use, immutable afterwards,
// every call site shares the same handle.
pub struct Registry {
    flate_level: u32,
    brotli_quality: u32,
    zstd_level: u32,
}

impl Registry {
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(|| Registry {
            flate_level: DEFAULT_FLATE_LEVEL,
            brotli_quality: DEFAULT_BROTLI_QUALITY,
            zstd_level: DEFAULT_ZSTD_LEVEL,
        })
    }

    pub fn compress(
        &self,
        coding: &ContentCoding,
        input: &[u8],
        level: Option<u32>,
    ) -> Result<BytesMut, CodecError> {
        let mut buf = BytesMut::new();
        let mut writer = (&mut buf).writer();
        let _ = match coding {
            ContentCoding::Base64 => {
                base64::encode_base64(input, &mut writer)?
            }
            ContentCoding::Brotli => single::compress_brotli(
                input,
                &mut writer,
                level.unwrap_or(self.brotli_quality),
            )?,
            ContentCoding::Deflate => single::compress_deflate(
                input,
                &mut writer,
                level.unwrap_or(self.flate_level),
            )?,
            ContentCoding::Gzip => single::compress_gzip(
                input,
                &mut writer,
                level.unwrap_or(self.flate_level),
            )?,
            ContentCoding::Zstd => single::compress_zstd(
                input,
                &mut writer,
                level.unwrap_or(self.zstd_level),
            )?,
            ContentCoding::Identity => copy(&mut &input[..], &mut writer)
                .map_err(|e| CodecError::engine(IDENTITY, e))?,
            ContentCoding::Unknown(token) => {
                error!("unsupported| {token}");
                return Err(CodecError::Unsupported(token.clone()));
            }
        };
        Ok(buf)
    }

    pub fn decompress(
        &self,
        coding: &ContentCoding,
        input: &[u8],
    ) -> Result<BytesMut, CodecError> {
        let mut buf = BytesMut::new();
        let mut writer = (&mut buf).writer();
        let _ = match coding {
            ContentCoding::Base64 => {
                base64::decode_base64(input, &mut writer)?
            }
            ContentCoding::Brotli => {
                single::decompress_brotli(input, &mut writer)?
            }
            ContentCoding::Deflate => {
                single::decompress_deflate(input, &mut writer)?
            }
            ContentCoding::Gzip => {
                single::decompress_gzip(input, &mut writer)?
            }
            ContentCoding::Zstd => {
                single::decompress_zstd(input, &mut writer)?
            }
            ContentCoding::Identity => copy(&mut &input[..], &mut writer)
                .map_err(|e| CodecError::engine(IDENTITY, e))?,
            ContentCoding::Unknown(token) => {
                error!("unsupported| {token}");
                return Err(CodecError::Unsupported(token.clone()));
            }
        };
        Ok(buf)
    }

    // Incremental stages. No-op codings never reach a resolved codec list,
    // asking for one is a caller bug and resolves like an unknown token.
    pub fn encoder(
        &self,
        coding: &ContentCoding,
        level: Option<u32>,
    ) -> Result<Box<dyn Transform>, CodecError> {
        match coding {
            ContentCoding::Base64 => Ok(Box::new(Base64Encoder::new())),
            ContentCoding::Brotli => Ok(Box::new(BrotliEncoder::new(
                level.unwrap_or(self.brotli_quality),
            ))),
            ContentCoding::Deflate => Ok(Box::new(DeflateEncoder::new(
                level.unwrap_or(self.flate_level),
            ))),
            ContentCoding::Gzip => Ok(Box::new(GzipEncoder::new(
                level.unwrap_or(self.flate_level),
            ))),
            ContentCoding::Zstd => Ok(Box::new(ZstdEncoder::new(
                level.unwrap_or(self.zstd_level),
            )?)),
            ContentCoding::Identity | ContentCoding::Unknown(_) => {
                Err(CodecError::unsupported(coding))
            }
        }
    }

    pub fn decoder(
        &self,
        coding: &ContentCoding,
    ) -> Result<Box<dyn Transform>, CodecError> {
        match coding {
            ContentCoding::Base64 => Ok(Box::new(Base64Decoder::new())),
            ContentCoding::Brotli => Ok(Box::new(BrotliDecoder::new())),
            ContentCoding::Deflate => Ok(Box::new(DeflateDecoder::new())),
            ContentCoding::Gzip => Ok(Box::new(GzipDecoder::new())),
            ContentCoding::Zstd => Ok(Box::new(ZstdDecoder::new()?)),
            ContentCoding::Identity | ContentCoding::Unknown(_) => {
                Err(CodecError::unsupported(coding))
            }
        }
    }
}
