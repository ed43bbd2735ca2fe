/// Operand layout of an instruction, one variant per distinct encoding.
///
/// The decoder matches exhaustively over this enum; every defined opcode
/// carries exactly one shape in the static table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandShape {
    /// No operand bytes.
    None,
    /// One signed immediate byte (`bipush`, `newarray` type code).
    Imm8,
    /// One signed immediate short (`sipush`).
    Imm16,
    /// Unsigned 8-bit constant-pool index (`ldc`).
    CpIndex8,
    /// Unsigned 16-bit constant-pool index (`ldc_w` .. `instanceof`).
    CpIndex16,
    /// 16-bit constant-pool index, then a count byte and a zero byte
    /// (`invokeinterface`).
    CpIndex16Count,
    /// 16-bit constant-pool index, then two zero bytes (`invokedynamic`).
    CpIndex16Zero2,
    /// 16-bit constant-pool index, then a dimension count byte
    /// (`multianewarray`).
    CpIndex16Dims,
    /// Unsigned local-variable index; 8-bit, or 16-bit under the `wide`
    /// prefix.
    Local,
    /// Local-variable index plus signed increment (`iinc`); both widen from
    /// 8 to 16 bits under the `wide` prefix.
    LocalConst,
    /// Signed 16-bit branch offset, relative to the opcode byte.
    Branch16,
    /// Signed 32-bit branch offset, relative to the opcode byte
    /// (`goto_w`, `jsr_w`).
    Branch32,
    /// `tableswitch`: alignment padding, default/low/high, jump table.
    TableSwitch,
    /// `lookupswitch`: alignment padding, default/npairs, match-offset pairs.
    LookupSwitch,
    /// The `wide` prefix itself; modifies the operand width of the next
    /// local-variable instruction.
    Wide,
}
