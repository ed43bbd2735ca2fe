//! Instruction pattern search over decoded bytecode.
//!
//! Every instruction of a sequence is mapped to a single private-use
//! character, a textual pattern of mnemonics and category aliases is
//! compiled to a regular expression over that token alphabet, and match
//! spans translate one-to-one back to sequence positions.
//!
//! ```
//! use bcfind_code::InstructionSequence;
//! use bcfind_finder::{Finder, Pattern};
//!
//! // bipush 5, bipush 10, iadd, ireturn
//! let code = [0x10, 0x05, 0x10, 0x0a, 0x60, 0xac];
//! let seq = InstructionSequence::decode(&code)?;
//! let finder = Finder::new(&seq);
//! let pattern = Pattern::compile(
//!     "ConstantPushInstruction ConstantPushInstruction ArithmeticInstruction",
//! )?;
//! let matches: Vec<_> = finder.search(&pattern).collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].positions(), 0..3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod pattern;
mod search;
mod token;

pub use pattern::{Pattern, PatternError};
pub use search::{Finder, Match, Matches};
pub use token::{opcode_for, token_for, tokenize};
