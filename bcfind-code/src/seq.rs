use std::slice;

use crate::Result;
use crate::decoder::Decoder;
use crate::insn::DecodedInstruction;

/// An ordered, positionally addressable linearization of a decoded stream.
///
/// Positions (and anything derived from them, such as search matches) are
/// only meaningful against the sequence they were produced from. The sole
/// mutation path is [`rebuild`](InstructionSequence::rebuild), which takes
/// `&mut self`; the borrow checker therefore rejects any use of a match or
/// instruction reference across a rebuild.
#[derive(Debug, Clone)]
pub struct InstructionSequence {
    insns: Vec<DecodedInstruction>,
}

impl InstructionSequence {
    /// Decode an entire code stream.
    ///
    /// Fails with the decoder's error if any single decode fails; no
    /// partial sequence is returned.
    pub fn decode(code: &[u8]) -> Result<Self> {
        let mut decoder = Decoder::new(code);
        let mut insns = Vec::new();
        while let Some(insn) = decoder.decode_one()? {
            insns.push(insn);
        }
        Ok(InstructionSequence { insns })
    }

    /// Re-decode after the caller has structurally altered the underlying
    /// byte stream. On error the sequence is left unchanged.
    ///
    /// There is no incremental update: callers that edit bytes and skip the
    /// rebuild will search against stale positions.
    pub fn rebuild(&mut self, code: &[u8]) -> Result<()> {
        self.insns = InstructionSequence::decode(code)?.insns;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.insns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// The instruction at a sequence position.
    pub fn get(&self, pos: usize) -> Option<&DecodedInstruction> {
        self.insns.get(pos)
    }

    /// Absolute byte offset of the instruction at `pos` within the source
    /// stream.
    pub fn byte_offset(&self, pos: usize) -> Option<u32> {
        self.insns.get(pos).map(|insn| insn.offset)
    }

    pub fn instructions(&self) -> &[DecodedInstruction] {
        &self.insns
    }

    pub fn iter(&self) -> slice::Iter<'_, DecodedInstruction> {
        self.insns.iter()
    }
}

impl<'a> IntoIterator for &'a InstructionSequence {
    type Item = &'a DecodedInstruction;
    type IntoIter = slice::Iter<'a, DecodedInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
