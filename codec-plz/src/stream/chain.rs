use bytes::BytesMut;
use encoding_plz::ContentCoding;
use tracing::error;

use crate::error::CodecError;
use crate::registry::Registry;
use crate::stream::Transform;

pub(crate) struct Stage {
    coding: &'static str,
    transform: Box<dyn Transform>,
}

impl Stage {
    pub(crate) fn new(
        coding: &'static str,
        transform: Box<dyn Transform>,
    ) -> Self {
        Stage { coding, transform }
    }
}

// An ordered list of codec stages driven as one transform. Chunks are folded
// through every stage synchronously, so a stage never holds more than the
// chunk currently in flight and upstream output is naturally paced by
// downstream consumption. After the first error the chain is dead.
pub struct TransformChain {
    stages: Vec<Stage>,
    failed: bool,
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field(
                "stages",
                &self.stages.iter().map(|s| s.coding).collect::<Vec<_>>(),
            )
            .field("failed", &self.failed)
            .finish()
    }
}

impl TransformChain {
    pub(crate) fn new(stages: Vec<Stage>) -> Self {
        debug_assert!(!stages.is_empty());
        TransformChain {
            stages,
            failed: false,
        }
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    fn push_through(
        &mut self,
        start: usize,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        let last = self.stages.len() - 1;
        let mut intermediate: Option<BytesMut> = None;
        for i in start..=last {
            let src: &[u8] = intermediate.as_deref().unwrap_or(input);
            let mut next = BytesMut::new();
            let sink = if i == last { &mut *out } else { &mut next };
            let stage = &mut self.stages[i];
            if let Err(e) = stage.transform.update(src, sink) {
                error!("{}| {}", stage.coding, e);
                self.failed = true;
                return Err(e);
            }
            intermediate = Some(next);
        }
        Ok(())
    }
}

impl Transform for TransformChain {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        if self.failed {
            return Err(CodecError::Terminated);
        }
        self.push_through(0, input, out)
    }

    // Stages drain in order: stage i is flushed, its tail output runs
    // through stages i+1.. as ordinary input, and only then does i+1 see
    // end-of-input.
    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        if self.failed {
            return Err(CodecError::Terminated);
        }
        let last = self.stages.len() - 1;
        for i in 0..=last {
            let mut flushed = BytesMut::new();
            {
                let sink = if i == last { &mut *out } else { &mut flushed };
                let stage = &mut self.stages[i];
                if let Err(e) = stage.transform.finish(sink) {
                    error!("{}| {}", stage.coding, e);
                    self.failed = true;
                    return Err(e);
                }
            }
            if i < last {
                self.push_through(i + 1, &flushed, out)?;
            }
        }
        Ok(())
    }
}

// Encoding applies the listed codings left to right.
pub fn build_encode_chain(
    codings: &[ContentCoding],
    level: Option<u32>,
) -> Result<Option<TransformChain>, CodecError> {
    let registry = Registry::global();
    let mut stages = Vec::with_capacity(codings.len());
    for coding in codings {
        if coding.is_noop() {
            continue;
        }
        stages.push(Stage::new(
            stage_label(coding)?,
            registry.encoder(coding, level)?,
        ));
    }
    Ok(build(stages))
}

// Decoding undoes the most recently applied coding first, so the listed
// order is reversed.
pub fn build_decode_chain(
    codings: &[ContentCoding],
) -> Result<Option<TransformChain>, CodecError> {
    let registry = Registry::global();
    let mut stages = Vec::with_capacity(codings.len());
    for coding in codings.iter().rev() {
        if coding.is_noop() {
            continue;
        }
        stages.push(Stage::new(
            stage_label(coding)?,
            registry.decoder(coding)?,
        ));
    }
    Ok(build(stages))
}

fn build(stages: Vec<Stage>) -> Option<TransformChain> {
    if stages.is_empty() {
        None
    } else {
        Some(TransformChain::new(stages))
    }
}

fn stage_label(coding: &ContentCoding) -> Result<&'static str, CodecError> {
    coding
        .label()
        .ok_or_else(|| CodecError::unsupported(coding))
}
