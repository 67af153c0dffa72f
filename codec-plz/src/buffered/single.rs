use std::io::Write;
use std::io::copy;

use encoding_plz::coding::{BROTLI, DEFLATE, GZIP, ZSTD};
use flate2::Compression;

use crate::buffered::sniff::is_zlib_framed;
use crate::error::CodecError;

pub fn compress_gzip<W>(
    input: &[u8],
    mut buf: W,
    level: u32,
) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(
        &mut flate2::read::GzEncoder::new(input, Compression::new(level)),
        &mut buf,
    )
    .map_err(|e| CodecError::engine(GZIP, e))
}

pub fn decompress_gzip<W>(input: &[u8], mut buf: W) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(&mut flate2::read::GzDecoder::new(input), &mut buf)
        .map_err(|e| CodecError::engine(GZIP, e))
}

// "deflate" on the wire is zlib-framed
pub fn compress_deflate<W>(
    input: &[u8],
    mut buf: W,
    level: u32,
) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(
        &mut flate2::read::ZlibEncoder::new(input, Compression::new(level)),
        &mut buf,
    )
    .map_err(|e| CodecError::engine(DEFLATE, e))
}

// Sniffs the zlib wrapper, some peers send raw deflate under the same token
pub fn decompress_deflate<W>(
    input: &[u8],
    mut buf: W,
) -> Result<u64, CodecError>
where
    W: Write,
{
    if is_zlib_framed(input) {
        copy(&mut flate2::read::ZlibDecoder::new(input), &mut buf)
    } else {
        copy(&mut flate2::read::DeflateDecoder::new(input), &mut buf)
    }
    .map_err(|e| CodecError::engine(DEFLATE, e))
}

pub fn decompress_deflate_raw<W>(
    input: &[u8],
    mut buf: W,
) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(&mut flate2::read::DeflateDecoder::new(input), &mut buf)
        .map_err(|e| CodecError::engine(DEFLATE, e))
}

pub fn compress_brotli<W>(
    input: &[u8],
    mut buf: W,
    quality: u32,
) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(
        &mut brotli::CompressorReader::new(input, 4096, quality, 22),
        &mut buf,
    )
    .map_err(|e| CodecError::engine(BROTLI, e))
}

pub fn decompress_brotli<W>(
    input: &[u8],
    mut buf: W,
) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(&mut brotli::Decompressor::new(input, 4096), &mut buf)
        .map_err(|e| CodecError::engine(BROTLI, e))
}

pub fn compress_zstd<W>(
    input: &[u8],
    mut buf: W,
    level: u32,
) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(
        &mut zstd::stream::read::Encoder::new(input, level as i32)
            .map_err(|e| CodecError::engine(ZSTD, e))?,
        &mut buf,
    )
    .map_err(|e| CodecError::engine(ZSTD, e))
}

pub fn decompress_zstd<W>(input: &[u8], mut buf: W) -> Result<u64, CodecError>
where
    W: Write,
{
    copy(
        &mut zstd::stream::read::Decoder::new(input)
            .map_err(|e| CodecError::engine(ZSTD, e))?,
        &mut buf,
    )
    .map_err(|e| CodecError::engine(ZSTD, e))
}
