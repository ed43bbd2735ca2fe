//! Decoder failure modes: truncation and undefined opcodes.

use bcfind_code::{DecodeError, InstructionSequence};

#[test]
fn decode_empty_is_ok() {
    let seq = InstructionSequence::decode(&[]).unwrap();
    assert!(seq.is_empty());
}

#[test]
fn unknown_opcode_at_start() {
    // 0xca is the reserved breakpoint opcode.
    let err = InstructionSequence::decode(&[0xca]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownOpcode {
            offset: 0,
            opcode: 0xca
        }
    );
}

#[test]
fn unknown_opcode_mid_stream() {
    // nop, iadd, then an undefined byte.
    let err = InstructionSequence::decode(&[0x00, 0x60, 0xff]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownOpcode {
            offset: 2,
            opcode: 0xff
        }
    );
}

#[test]
fn truncated_single() {
    // bipush with no operand byte.
    let err = InstructionSequence::decode(&[0x10]).unwrap_err();
    assert_eq!(err, DecodeError::Truncated(0));
}

#[test]
fn truncated_mid_stream() {
    // nop, then sipush with only one of two operand bytes.
    let err = InstructionSequence::decode(&[0x00, 0x11, 0x01]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Truncated(1),
        "truncation should be reported at the start of the second instruction"
    );
}

#[test]
fn truncated_inside_switch_padding() {
    // tableswitch at offset 0 needs 3 padding bytes before its first field.
    let err = InstructionSequence::decode(&[0xaa]).unwrap_err();
    assert_eq!(err, DecodeError::Truncated(0));
}

#[test]
fn truncated_switch_fields() {
    // Padding present but the default/low/high fields are cut short.
    let err = InstructionSequence::decode(&[0xaa, 0, 0, 0, 0, 0, 0, 20]).unwrap_err();
    assert_eq!(err, DecodeError::Truncated(0));
}

#[test]
fn negative_lookupswitch_pair_count_is_truncated() {
    let mut code = vec![0xab, 0, 0, 0];
    code.extend_from_slice(&20i32.to_be_bytes());
    code.extend_from_slice(&(-1i32).to_be_bytes());
    let err = InstructionSequence::decode(&code).unwrap_err();
    assert_eq!(err, DecodeError::Truncated(0));
}

#[test]
fn inverted_tableswitch_bounds_are_truncated() {
    let mut code = vec![0xaa, 0, 0, 0];
    code.extend_from_slice(&20i32.to_be_bytes());
    code.extend_from_slice(&5i32.to_be_bytes()); // low
    code.extend_from_slice(&4i32.to_be_bytes()); // high < low
    let err = InstructionSequence::decode(&code).unwrap_err();
    assert_eq!(err, DecodeError::Truncated(0));
}

#[test]
fn truncated_wide_form() {
    // wide iload needs a 16-bit index; only one byte follows.
    let err = InstructionSequence::decode(&[0xc4, 0x15, 0x01]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Truncated(1),
        "the widened instruction, not the prefix, is the truncated one"
    );
}
