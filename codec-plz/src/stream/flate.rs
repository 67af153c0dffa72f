use std::io::Write;

use bytes::BytesMut;
use encoding_plz::coding::{DEFLATE, GZIP};
use flate2::Compression;

use crate::buffered::sniff::is_zlib_framed;
use crate::error::CodecError;
use crate::stream::{SharedBuf, Transform};

pub struct GzipEncoder {
    inner: Option<flate2::write::GzEncoder<SharedBuf>>,
    buf: SharedBuf,
}

impl GzipEncoder {
    pub fn new(level: u32) -> Self {
        let buf = SharedBuf::default();
        let inner =
            flate2::write::GzEncoder::new(buf.clone(), Compression::new(level));
        GzipEncoder {
            inner: Some(inner),
            buf,
        }
    }
}

impl Transform for GzipEncoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.as_mut() {
            enc.write_all(input)
                .map_err(|e| CodecError::engine(GZIP, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.take() {
            enc.finish().map_err(|e| CodecError::engine(GZIP, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }
}

pub struct GzipDecoder {
    inner: Option<flate2::write::GzDecoder<SharedBuf>>,
    buf: SharedBuf,
}

impl Default for GzipDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GzipDecoder {
    pub fn new() -> Self {
        let buf = SharedBuf::default();
        let inner = flate2::write::GzDecoder::new(buf.clone());
        GzipDecoder {
            inner: Some(inner),
            buf,
        }
    }
}

impl Transform for GzipDecoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if let Some(dec) = self.inner.as_mut() {
            dec.write_all(input)
                .map_err(|e| CodecError::engine(GZIP, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        if let Some(dec) = self.inner.take() {
            dec.finish().map_err(|e| CodecError::engine(GZIP, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }
}

// zlib-framed, the wire meaning of "deflate"
pub struct DeflateEncoder {
    inner: Option<flate2::write::ZlibEncoder<SharedBuf>>,
    buf: SharedBuf,
}

impl DeflateEncoder {
    pub fn new(level: u32) -> Self {
        let buf = SharedBuf::default();
        let inner = flate2::write::ZlibEncoder::new(
            buf.clone(),
            Compression::new(level),
        );
        DeflateEncoder {
            inner: Some(inner),
            buf,
        }
    }
}

impl Transform for DeflateEncoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.as_mut() {
            enc.write_all(input)
                .map_err(|e| CodecError::engine(DEFLATE, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.take() {
            enc.finish().map_err(|e| CodecError::engine(DEFLATE, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }
}

enum Inflate {
    // Framing unknown until the first byte arrives
    Pending,
    Zlib(flate2::write::ZlibDecoder<SharedBuf>),
    Raw(flate2::write::DeflateDecoder<SharedBuf>),
    Done,
}

// Sniffs zlib vs raw framing off the first chunk, exactly like the buffered
// path does off the whole buffer.
pub struct DeflateDecoder {
    inner: Inflate,
    buf: SharedBuf,
}

impl Default for DeflateDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeflateDecoder {
    pub fn new() -> Self {
        DeflateDecoder {
            inner: Inflate::Pending,
            buf: SharedBuf::default(),
        }
    }
}

impl Transform for DeflateDecoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if input.is_empty() {
            return Ok(());
        }
        if matches!(self.inner, Inflate::Pending) {
            self.inner = if is_zlib_framed(input) {
                Inflate::Zlib(flate2::write::ZlibDecoder::new(
                    self.buf.clone(),
                ))
            } else {
                Inflate::Raw(flate2::write::DeflateDecoder::new(
                    self.buf.clone(),
                ))
            };
        }
        match &mut self.inner {
            Inflate::Zlib(dec) => dec.write_all(input),
            Inflate::Raw(dec) => dec.write_all(input),
            Inflate::Pending | Inflate::Done => return Ok(()),
        }
        .map_err(|e| CodecError::engine(DEFLATE, e))?;
        out.unsplit(self.buf.take());
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        match std::mem::replace(&mut self.inner, Inflate::Done) {
            // no input at all is not a valid deflate stream
            Inflate::Pending => return Err(CodecError::corrupt(DEFLATE)),
            Inflate::Zlib(dec) => dec.finish().map(|_| ()),
            Inflate::Raw(dec) => dec.finish().map(|_| ()),
            Inflate::Done => return Ok(()),
        }
        .map_err(|e| CodecError::engine(DEFLATE, e))?;
        out.unsplit(self.buf.take());
        Ok(())
    }
}
