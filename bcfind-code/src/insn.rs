use std::fmt;

use bcfind_isa::Opcode;

/// Decoded operand payload of a single instruction.
///
/// Branch and switch targets are stored as absolute stream offsets (the
/// instruction's own offset plus the raw relative value), not as the raw
/// relative operands found in the byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    /// No operand bytes.
    None,
    /// Signed immediate (`bipush`, `sipush`, `newarray` type code).
    Imm(i32),
    /// Constant-pool index (`ldc` through `instanceof`, `invokedynamic`).
    CpIndex(u16),
    /// Constant-pool index plus argument count (`invokeinterface`).
    CpIndexCount { index: u16, count: u8 },
    /// Constant-pool index plus dimension count (`multianewarray`).
    CpIndexDims { index: u16, dims: u8 },
    /// Local-variable index (`iload` .. `astore`, `ret`).
    Local(u16),
    /// Local-variable index plus signed increment (`iinc`).
    LocalConst { index: u16, delta: i16 },
    /// Absolute branch target.
    Branch { target: i64 },
    /// `tableswitch` jump table; `targets[i]` is the absolute target for
    /// key `low + i`.
    TableSwitch {
        default: i64,
        low: i32,
        high: i32,
        targets: Vec<i64>,
    },
    /// `lookupswitch` match/target pairs, in stream order.
    LookupSwitch {
        default: i64,
        pairs: Vec<(i32, i64)>,
    },
}

/// A single decoded instruction.
///
/// `size` counts every byte the instruction occupies in the stream,
/// including any alignment padding consumed by a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// The opcode.
    pub opcode: Opcode,
    /// Byte offset of the opcode within the source stream.
    pub offset: u32,
    /// Total instruction size in bytes.
    pub size: u32,
    /// Decoded operands.
    pub operands: Operands,
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        match &self.operands {
            Operands::None => Ok(()),
            Operands::Imm(v) => write!(f, " {v}"),
            Operands::CpIndex(index) => write!(f, " #{index}"),
            Operands::CpIndexCount { index, count } => write!(f, " #{index}, count {count}"),
            Operands::CpIndexDims { index, dims } => write!(f, " #{index}, dims {dims}"),
            Operands::Local(index) => write!(f, " {index}"),
            Operands::LocalConst { index, delta } => write!(f, " {index}, {delta}"),
            Operands::Branch { target } => write!(f, " -> {target}"),
            Operands::TableSwitch {
                default,
                low,
                high,
                targets,
            } => {
                write!(f, " {low}..={high} -> [")?;
                for (i, t) in targets.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{t}")?;
                }
                write!(f, "], default -> {default}")
            }
            Operands::LookupSwitch { default, pairs } => {
                write!(f, " [")?;
                for (i, (key, t)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} -> {t}")?;
                }
                write!(f, "], default -> {default}")
            }
        }
    }
}
