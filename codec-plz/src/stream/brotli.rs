use std::io::Write;

use brotli::enc::StandardAlloc;
use brotli::{BrotliDecompressStream, BrotliResult, BrotliState};
use bytes::BytesMut;
use encoding_plz::coding::BROTLI;

use crate::error::CodecError;
use crate::stream::{SharedBuf, Transform};

pub struct BrotliEncoder {
    inner: Option<brotli::CompressorWriter<SharedBuf>>,
    buf: SharedBuf,
}

impl BrotliEncoder {
    pub fn new(quality: u32) -> Self {
        let buf = SharedBuf::default();
        let inner =
            brotli::CompressorWriter::new(buf.clone(), 4096, quality, 22);
        BrotliEncoder {
            inner: Some(inner),
            buf,
        }
    }
}

impl Transform for BrotliEncoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if let Some(enc) = self.inner.as_mut() {
            enc.write_all(input)
                .map_err(|e| CodecError::engine(BROTLI, e))?;
            out.unsplit(self.buf.take());
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        if let Some(mut enc) = self.inner.take() {
            enc.flush().map_err(|e| CodecError::engine(BROTLI, e))?;
            // the final metablock is written on drop
            drop(enc);
            out.unsplit(self.buf.take());
        }
        Ok(())
    }
}

// Driven through the raw decode state machine so end-of-stream is visible.
// A stream is only complete once the engine reports success, anything short
// of that at finish is a truncated body.
pub struct BrotliDecoder {
    state: Box<BrotliState<StandardAlloc, StandardAlloc, StandardAlloc>>,
    done: bool,
}

impl Default for BrotliDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BrotliDecoder {
    pub fn new() -> Self {
        BrotliDecoder {
            state: Box::new(BrotliState::new(
                StandardAlloc::default(),
                StandardAlloc::default(),
                StandardAlloc::default(),
            )),
            done: false,
        }
    }
}

impl Transform for BrotliDecoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if self.done {
            // trailing bytes after the end of the stream
            if input.is_empty() {
                return Ok(());
            }
            return Err(CodecError::corrupt(BROTLI));
        }
        let mut scratch = [0u8; 4096];
        let mut available_in = input.len();
        let mut input_offset = 0usize;
        loop {
            let mut available_out = scratch.len();
            let mut output_offset = 0usize;
            let mut total_out = 0usize;
            let result = BrotliDecompressStream(
                &mut available_in,
                &mut input_offset,
                input,
                &mut available_out,
                &mut output_offset,
                &mut scratch,
                &mut total_out,
                &mut self.state,
            );
            out.extend_from_slice(&scratch[..output_offset]);
            match result {
                BrotliResult::ResultSuccess => {
                    self.done = true;
                    if available_in > 0 {
                        return Err(CodecError::corrupt(BROTLI));
                    }
                    return Ok(());
                }
                BrotliResult::NeedsMoreInput => return Ok(()),
                BrotliResult::NeedsMoreOutput => continue,
                BrotliResult::ResultFailure => {
                    return Err(CodecError::corrupt(BROTLI));
                }
            }
        }
    }

    fn finish(&mut self, _out: &mut BytesMut) -> Result<(), CodecError> {
        if !self.done {
            return Err(CodecError::corrupt(BROTLI));
        }
        Ok(())
    }
}
