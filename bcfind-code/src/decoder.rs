use bcfind_isa::{OperandShape, lookup};

use crate::insn::{DecodedInstruction, Operands};

/// Errors from [`Decoder::decode_one`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the instruction's operand shape requires.
    /// The offset is the start of the offending instruction.
    #[error("truncated instruction at offset {0}")]
    Truncated(usize),
    /// The byte at the given offset is not a defined opcode.
    #[error("unknown opcode {opcode:#04x} at offset {offset}")]
    UnknownOpcode { offset: usize, opcode: u8 },
}

/// Cursor over a raw code byte slice, decoding one instruction per call.
///
/// The `wide` prefix is tracked as decoder-local state: decoding `wide`
/// arms a flag that widens the next local-variable operand to 16 bits and
/// is cleared by that decode. The flag never outlives the decoder, so
/// concurrent decodes of different streams cannot interfere.
pub struct Decoder<'a> {
    code: &'a [u8],
    pos: usize,
    wide: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(code: &'a [u8]) -> Self {
        Decoder {
            code,
            pos: 0,
            wide: false,
        }
    }

    /// Current byte position within the stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode the instruction at the current position.
    ///
    /// Returns `Ok(None)` at a clean end of stream. On error the cursor is
    /// left mid-instruction and the decode pass must be abandoned.
    pub fn decode_one(&mut self) -> Result<Option<DecodedInstruction>, DecodeError> {
        if self.pos >= self.code.len() {
            return Ok(None);
        }
        let anchor = self.pos;
        let truncated = DecodeError::Truncated(anchor);
        let raw = self.code[anchor];
        let info = lookup(raw).ok_or(DecodeError::UnknownOpcode {
            offset: anchor,
            opcode: raw,
        })?;
        self.pos += 1;

        // One-instruction look-behind: consume the flag armed by a
        // preceding `wide` before decoding this instruction's operands.
        let wide = std::mem::take(&mut self.wide);

        let operands = match info.shape() {
            OperandShape::None => Operands::None,
            OperandShape::Imm8 => Operands::Imm(self.read_i8().ok_or(truncated)? as i32),
            OperandShape::Imm16 => Operands::Imm(self.read_i16().ok_or(truncated)? as i32),
            OperandShape::CpIndex8 => {
                Operands::CpIndex(self.read_u8().ok_or(truncated)? as u16)
            }
            OperandShape::CpIndex16 => Operands::CpIndex(self.read_u16().ok_or(truncated)?),
            OperandShape::CpIndex16Count => {
                let index = self.read_u16().ok_or(truncated)?;
                let count = self.read_u8().ok_or(truncated)?;
                self.read_u8().ok_or(truncated)?;
                Operands::CpIndexCount { index, count }
            }
            OperandShape::CpIndex16Zero2 => {
                let index = self.read_u16().ok_or(truncated)?;
                self.read_u16().ok_or(truncated)?;
                Operands::CpIndex(index)
            }
            OperandShape::CpIndex16Dims => {
                let index = self.read_u16().ok_or(truncated)?;
                let dims = self.read_u8().ok_or(truncated)?;
                Operands::CpIndexDims { index, dims }
            }
            OperandShape::Local => {
                let index = if wide {
                    self.read_u16().ok_or(truncated)?
                } else {
                    self.read_u8().ok_or(truncated)? as u16
                };
                Operands::Local(index)
            }
            OperandShape::LocalConst => {
                if wide {
                    let index = self.read_u16().ok_or(truncated)?;
                    let delta = self.read_i16().ok_or(truncated)?;
                    Operands::LocalConst { index, delta }
                } else {
                    let index = self.read_u8().ok_or(truncated)? as u16;
                    let delta = self.read_i8().ok_or(truncated)? as i16;
                    Operands::LocalConst { index, delta }
                }
            }
            OperandShape::Branch16 => {
                let rel = self.read_i16().ok_or(truncated)? as i64;
                Operands::Branch {
                    target: anchor as i64 + rel,
                }
            }
            OperandShape::Branch32 => {
                let rel = self.read_i32().ok_or(truncated)? as i64;
                Operands::Branch {
                    target: anchor as i64 + rel,
                }
            }
            OperandShape::TableSwitch => {
                self.skip_padding().ok_or(truncated)?;
                let default = anchor as i64 + self.read_i32().ok_or(truncated)? as i64;
                let low = self.read_i32().ok_or(truncated)?;
                let high = self.read_i32().ok_or(truncated)?;
                // low > high means a negative entry count; no remaining
                // bytes can satisfy the table.
                if low > high {
                    return Err(truncated);
                }
                let count = (high as i64 - low as i64 + 1) as usize;
                let mut targets = Vec::with_capacity(count.min(self.remaining() / 4 + 1));
                for _ in 0..count {
                    targets.push(anchor as i64 + self.read_i32().ok_or(truncated)? as i64);
                }
                Operands::TableSwitch {
                    default,
                    low,
                    high,
                    targets,
                }
            }
            OperandShape::LookupSwitch => {
                self.skip_padding().ok_or(truncated)?;
                let default = anchor as i64 + self.read_i32().ok_or(truncated)? as i64;
                let npairs = self.read_i32().ok_or(truncated)?;
                if npairs < 0 {
                    return Err(truncated);
                }
                let npairs = npairs as usize;
                let mut pairs = Vec::with_capacity(npairs.min(self.remaining() / 8 + 1));
                for _ in 0..npairs {
                    let key = self.read_i32().ok_or(truncated)?;
                    let target = anchor as i64 + self.read_i32().ok_or(truncated)? as i64;
                    pairs.push((key, target));
                }
                Operands::LookupSwitch { default, pairs }
            }
            OperandShape::Wide => {
                self.wide = true;
                Operands::None
            }
        };

        Ok(Some(DecodedInstruction {
            opcode: info.opcode(),
            offset: anchor as u32,
            size: (self.pos - anchor) as u32,
            operands,
        }))
    }

    fn remaining(&self) -> usize {
        self.code.len() - self.pos.min(self.code.len())
    }

    /// Skip 0-3 padding bytes so the next read is 4-byte aligned relative
    /// to the stream origin.
    fn skip_padding(&mut self) -> Option<()> {
        let pad = (4 - self.pos % 4) % 4;
        if self.pos + pad > self.code.len() {
            return None;
        }
        self.pos += pad;
        Some(())
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let bytes = self.code.get(self.pos..self.pos + n)?;
        self.pos += n;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        let b = self.take(1)?;
        Some(b[0])
    }

    fn read_i8(&mut self) -> Option<i8> {
        Some(self.read_u8()? as i8)
    }

    fn read_u16(&mut self) -> Option<u16> {
        let b = self.take(2)?;
        Some(u16::from_be_bytes([b[0], b[1]]))
    }

    fn read_i16(&mut self) -> Option<i16> {
        Some(self.read_u16()? as i16)
    }

    fn read_i32(&mut self) -> Option<i32> {
        let b = self.take(4)?;
        Some(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
