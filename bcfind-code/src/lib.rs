//! Variable-length bytecode decoding.
//!
//! [`Decoder`] walks a raw code byte slice one instruction at a time,
//! handling alignment padding, multi-byte operands, and the `wide` prefix.
//! [`InstructionSequence`] is the full linearization of a stream; it is the
//! unit the pattern-search engine operates on.

mod decoder;
mod insn;
mod seq;

pub use decoder::{DecodeError, Decoder};
pub use insn::{DecodedInstruction, Operands};
pub use seq::InstructionSequence;

pub type Result<T> = std::result::Result<T, DecodeError>;
