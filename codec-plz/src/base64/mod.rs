use std::io::Write;

use bytes::BytesMut;
use encoding_plz::coding::BASE64;

use crate::error::CodecError;
use crate::stream::Transform;

pub mod stream;

pub(crate) const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// Byte classes for decoding
pub(crate) const PAD: u8 = 0xfe;
pub(crate) const WS: u8 = 0xfd;
pub(crate) const BAD: u8 = 0xff;

// Accepts the standard and url-safe alphabets at the same time, real-world
// inputs mix the two. Space, tab, CR and LF are skipped silently.
pub(crate) static DECODE_CLASS: [u8; 256] = decode_class();

const fn decode_class() -> [u8; 256] {
    let mut table = [BAD; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table[b'-' as usize] = 62;
    table[b'_' as usize] = 63;
    table[b'=' as usize] = PAD;
    table[b' ' as usize] = WS;
    table[b'\t' as usize] = WS;
    table[b'\r' as usize] = WS;
    table[b'\n' as usize] = WS;
    table
}

// Input is walked in fixed batches independent of caller chunking. Output
// is byte-identical for any batch size, only the emission cadence differs.
pub(crate) const BATCH: usize = 48 * 1024;

pub fn encode_base64<W>(input: &[u8], mut buf: W) -> Result<u64, CodecError>
where
    W: Write,
{
    let mut out = BytesMut::with_capacity(input.len().div_ceil(3) * 4);
    let mut encoder = stream::Base64Encoder::new();
    encoder.update(input, &mut out)?;
    encoder.finish(&mut out)?;
    let written = out.len() as u64;
    buf.write_all(&out).map_err(|e| CodecError::engine(BASE64, e))?;
    Ok(written)
}

pub fn decode_base64<W>(input: &[u8], mut buf: W) -> Result<u64, CodecError>
where
    W: Write,
{
    let mut out = BytesMut::with_capacity(input.len() / 4 * 3 + 2);
    let mut decoder = stream::Base64Decoder::new();
    decoder.update(input, &mut out)?;
    decoder.finish(&mut out)?;
    let written = out.len() as u64;
    buf.write_all(&out).map_err(|e| CodecError::engine(BASE64, e))?;
    Ok(written)
}
