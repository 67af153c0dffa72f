use std::io::Write;

use bytes::BytesMut;
use encoding_plz::coding::ZSTD;
use zstd::stream::raw::{Decoder as RawDecoder, Operation};
use zstd::zstd_safe::{InBuffer, OutBuffer};

use crate::error::CodecError;
use crate::stream::{SharedBuf, Transform};

pub struct ZstdEncoder {
    inner: Option<zstd::stream::write::Encoder<'static, SharedBuf>>,
    buf: SharedBuf,
}

impl ZstdEncoder {
    pub fn new(level: u32) -> Result<Self, CodecError> {
        let buf = SharedBuf::default();
        let inner =
            zstd::stream::write::Encoder::new(buf.clone(), level as i32)
                .map_err(|e| CodecError::engine(ZSTD, e))?;
        Ok(ZstdEncoder {
            inner: Some(inner),
            buf,
        })
    }
}

impl Transform for ZstdEncoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.as_mut() {
            enc.write_all(input)
                .map_err(|e| CodecError::engine(ZSTD, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.take() {
            enc.finish().map_err(|e| CodecError::engine(ZSTD, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }
}

// Driven through the raw streaming op so the frame state is visible. The
// hint returned by each run is the byte count the engine still expects,
// zero only on a frame boundary.
pub struct ZstdDecoder {
    inner: RawDecoder<'static>,
    hint: usize,
}

impl ZstdDecoder {
    pub fn new() -> Result<Self, CodecError> {
        let inner =
            RawDecoder::new().map_err(|e| CodecError::engine(ZSTD, e))?;
        Ok(ZstdDecoder { inner, hint: 0 })
    }
}

impl Transform for ZstdDecoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        let mut src = InBuffer::around(input);
        let mut scratch = [0u8; 4096];
        loop {
            let mut dst = OutBuffer::around(&mut scratch[..]);
            self.hint = self
                .inner
                .run(&mut src, &mut dst)
                .map_err(|e| CodecError::engine(ZSTD, e))?;
            let produced = dst.pos();
            out.extend_from_slice(&scratch[..produced]);
            if src.pos == input.len() && produced < scratch.len() {
                return Ok(());
            }
        }
    }

    fn finish(&mut self, _out: &mut BytesMut) -> Result<(), CodecError> {
        // input stopped mid-frame
        if self.hint != 0 {
            return Err(CodecError::corrupt(ZSTD));
        }
        Ok(())
    }
}
