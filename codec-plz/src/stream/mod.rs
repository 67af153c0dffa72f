use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use bytes::BytesMut;

use crate::error::CodecError;

pub mod brotli;
pub mod chain;
pub mod flate;
pub mod zstd;

// One incremental codec direction. Input chunks are borrowed and never
// retained, carry state lives inside the transform. finish drains whatever
// the codec still buffers and is a no-op when called again.
pub trait Transform {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError>;

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError>;
}

impl std::fmt::Debug for dyn Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Transform")
    }
}

// Write sink shared between an engine writer and the transform owning it.
// The engine keeps one clone, the transform drains the other after every
// call, including the final flush some engines only emit on drop.
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(Rc<RefCell<BytesMut>>);

impl SharedBuf {
    pub(crate) fn take(&self) -> BytesMut {
        self.0.borrow_mut().split()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
