use bytes::{BufMut, BytesMut};

use super::{ALPHABET, BAD, BATCH, DECODE_CLASS, PAD, WS};
use crate::error::CodecError;
use crate::stream::Transform;

// 3 input bytes map to 4 symbols. A chunk boundary can fall anywhere inside
// a group, so up to 2 bytes are carried to the next call and padding is
// emitted only at finish.
pub struct Base64Encoder {
    carry: [u8; 3],
    carry_len: usize,
}

impl Default for Base64Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Base64Encoder {
    pub fn new() -> Self {
        Base64Encoder {
            carry: [0; 3],
            carry_len: 0,
        }
    }

    fn put_group(group: &[u8], out: &mut BytesMut) {
        out.put_slice(&[
            ALPHABET[(group[0] >> 2) as usize],
            ALPHABET[(((group[0] & 0x03) << 4) | (group[1] >> 4)) as usize],
            ALPHABET[(((group[1] & 0x0f) << 2) | (group[2] >> 6)) as usize],
            ALPHABET[(group[2] & 0x3f) as usize],
        ]);
    }
}

impl Transform for Base64Encoder {
    fn update(
        &mut self,
        mut input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        out.reserve((self.carry_len + input.len()).div_ceil(3) * 4);

        // top up the group left over from the previous chunk
        if self.carry_len > 0 {
            let take = (3 - self.carry_len).min(input.len());
            self.carry[self.carry_len..self.carry_len + take]
                .copy_from_slice(&input[..take]);
            self.carry_len += take;
            input = &input[take..];
            if self.carry_len < 3 {
                return Ok(());
            }
            let group = self.carry;
            Self::put_group(&group, out);
            self.carry_len = 0;
        }

        let full = input.len() / 3 * 3;
        for batch in input[..full].chunks(BATCH) {
            for group in batch.chunks_exact(3) {
                Self::put_group(group, out);
            }
        }

        let rest = &input[full..];
        self.carry[..rest.len()].copy_from_slice(rest);
        self.carry_len = rest.len();
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        match self.carry_len {
            1 => {
                let b0 = self.carry[0];
                out.put_slice(&[
                    ALPHABET[(b0 >> 2) as usize],
                    ALPHABET[((b0 & 0x03) << 4) as usize],
                    b'=',
                    b'=',
                ]);
            }
            2 => {
                let (b0, b1) = (self.carry[0], self.carry[1]);
                out.put_slice(&[
                    ALPHABET[(b0 >> 2) as usize],
                    ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize],
                    ALPHABET[((b1 & 0x0f) << 2) as usize],
                    b'=',
                ]);
            }
            _ => {}
        }
        self.carry_len = 0;
        Ok(())
    }
}

// Collects 6-bit values into groups of 4, carrying an incomplete group
// across chunk boundaries. Padding closes a group early, a trailing group
// of 2 or 3 symbols is accepted at finish.
pub struct Base64Decoder {
    quad: [u8; 4],
    quad_len: usize,
    pads: usize,
    // absolute input offset, whitespace included
    offset: u64,
    last_symbol_at: u64,
}

impl Default for Base64Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Base64Decoder {
    pub fn new() -> Self {
        Base64Decoder {
            quad: [0; 4],
            quad_len: 0,
            pads: 0,
            offset: 0,
            last_symbol_at: 0,
        }
    }

    fn drain_group(&mut self, out: &mut BytesMut) {
        let q = &self.quad;
        match self.quad_len {
            2 => out.put_u8((q[0] << 2) | (q[1] >> 4)),
            3 => out.put_slice(&[
                (q[0] << 2) | (q[1] >> 4),
                (q[1] << 4) | (q[2] >> 2),
            ]),
            4 => out.put_slice(&[
                (q[0] << 2) | (q[1] >> 4),
                (q[1] << 4) | (q[2] >> 2),
                (q[2] << 6) | q[3],
            ]),
            _ => {}
        }
        self.quad_len = 0;
        self.pads = 0;
    }
}

impl Transform for Base64Decoder {
    fn update(
        &mut self,
        input: &[u8],
        out: &mut BytesMut,
    ) -> Result<(), CodecError> {
        out.reserve(input.len() / 4 * 3 + 2);
        for batch in input.chunks(BATCH) {
            for &byte in batch {
                let position = self.offset;
                self.offset += 1;
                match DECODE_CLASS[byte as usize] {
                    WS => {}
                    BAD => {
                        return Err(CodecError::InvalidByte {
                            position,
                            byte,
                        });
                    }
                    PAD => {
                        // '=' is only legal once 2 symbols of the group are in
                        if self.quad_len + self.pads < 2 {
                            return Err(CodecError::InvalidByte {
                                position,
                                byte,
                            });
                        }
                        self.pads += 1;
                        if self.quad_len + self.pads == 4 {
                            self.drain_group(out);
                        }
                    }
                    value => {
                        if self.pads > 0 {
                            return Err(CodecError::InvalidByte {
                                position,
                                byte,
                            });
                        }
                        self.quad[self.quad_len] = value;
                        self.quad_len += 1;
                        self.last_symbol_at = position;
                        if self.quad_len == 4 {
                            self.drain_group(out);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut BytesMut) -> Result<(), CodecError> {
        match self.quad_len {
            0 => Ok(()),
            1 => Err(CodecError::Truncated {
                position: self.last_symbol_at,
            }),
            _ => {
                self.drain_group(out);
                Ok(())
            }
        }
    }
}
