//! Operand decoding round-trips for every shape, plus sequence bookkeeping.

use bcfind_code::{InstructionSequence, Operands};
use bcfind_isa::Opcode;

fn decode(code: &[u8]) -> InstructionSequence {
    InstructionSequence::decode(code).expect("stream should decode")
}

#[test]
fn immediates_are_sign_extended() {
    let seq = decode(&[0x10, 0x05, 0x10, 0xfd, 0x11, 0xff, 0xfe]);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.get(0).unwrap().operands, Operands::Imm(5));
    assert_eq!(seq.get(1).unwrap().operands, Operands::Imm(-3));
    assert_eq!(seq.get(2).unwrap().operands, Operands::Imm(-2));
}

#[test]
fn branch_target_is_relative_to_opcode_byte() {
    // goto at offset 10 with raw relative +5 targets absolute offset 15.
    let mut code = vec![0x00; 10];
    code.extend_from_slice(&[0xa7, 0x00, 0x05]);
    let seq = decode(&code);
    let goto = seq.get(10).unwrap();
    assert_eq!(goto.opcode, Opcode::GOTO);
    assert_eq!(goto.offset, 10);
    assert_eq!(goto.operands, Operands::Branch { target: 15 });
}

#[test]
fn backward_branch() {
    let mut code = vec![0x00; 4];
    code.extend_from_slice(&[0xa7, 0xff, 0xfc]); // goto -4
    let seq = decode(&code);
    assert_eq!(
        seq.get(4).unwrap().operands,
        Operands::Branch { target: 0 }
    );
}

#[test]
fn wide_goto_uses_a_32_bit_offset() {
    let mut code = vec![0xc8];
    code.extend_from_slice(&70000i32.to_be_bytes());
    let seq = decode(&code);
    let goto_w = seq.get(0).unwrap();
    assert_eq!(goto_w.size, 5);
    assert_eq!(goto_w.operands, Operands::Branch { target: 70000 });
}

#[test]
fn constant_pool_shapes() {
    let seq = decode(&[
        0x12, 0x07, // ldc #7
        0x13, 0x01, 0x02, // ldc_w #258
        0xb9, 0x00, 0x04, 0x02, 0x00, // invokeinterface #4, count 2
        0xba, 0x00, 0x09, 0x00, 0x00, // invokedynamic #9
        0xc5, 0x00, 0x07, 0x02, // multianewarray #7, dims 2
    ]);
    assert_eq!(seq.get(0).unwrap().operands, Operands::CpIndex(7));
    assert_eq!(seq.get(1).unwrap().operands, Operands::CpIndex(258));
    assert_eq!(
        seq.get(2).unwrap().operands,
        Operands::CpIndexCount { index: 4, count: 2 }
    );
    assert_eq!(seq.get(3).unwrap().operands, Operands::CpIndex(9));
    assert_eq!(
        seq.get(4).unwrap().operands,
        Operands::CpIndexDims { index: 7, dims: 2 }
    );
}

#[test]
fn local_variable_and_iinc_forms() {
    let seq = decode(&[
        0x15, 0x04, // iload 4
        0x84, 0x02, 0xfb, // iinc 2, -5
        0xa9, 0x01, // ret 1
    ]);
    assert_eq!(seq.get(0).unwrap().operands, Operands::Local(4));
    assert_eq!(
        seq.get(1).unwrap().operands,
        Operands::LocalConst { index: 2, delta: -5 }
    );
    assert_eq!(seq.get(2).unwrap().operands, Operands::Local(1));
}

#[test]
fn wide_prefix_widens_exactly_one_instruction() {
    let seq = decode(&[
        0xc4, 0x15, 0x01, 0x05, // wide iload 261
        0x15, 0x04, // iload 4 (back to 8-bit)
    ]);
    assert_eq!(seq.len(), 3, "the prefix is its own sequence element");
    let wide = seq.get(0).unwrap();
    assert_eq!(wide.opcode, Opcode::WIDE);
    assert_eq!(wide.size, 1);
    let iload = seq.get(1).unwrap();
    assert_eq!(iload.operands, Operands::Local(261));
    assert_eq!(iload.size, 3);
    assert_eq!(seq.get(2).unwrap().operands, Operands::Local(4));
}

#[test]
fn wide_iinc_form() {
    let mut code = vec![0xc4, 0x84];
    code.extend_from_slice(&256u16.to_be_bytes());
    code.extend_from_slice(&(-200i16).to_be_bytes());
    let seq = decode(&code);
    assert_eq!(
        seq.get(1).unwrap().operands,
        Operands::LocalConst {
            index: 256,
            delta: -200
        }
    );
    assert_eq!(seq.get(1).unwrap().size, 5);
}

fn tableswitch_at(anchor: usize) -> Vec<u8> {
    let mut code = vec![0x00; anchor];
    code.push(0xaa);
    let pad = (4 - (anchor + 1) % 4) % 4;
    code.extend(std::iter::repeat_n(0u8, pad));
    code.extend_from_slice(&20i32.to_be_bytes()); // default
    code.extend_from_slice(&0i32.to_be_bytes()); // low
    code.extend_from_slice(&1i32.to_be_bytes()); // high
    code.extend_from_slice(&12i32.to_be_bytes());
    code.extend_from_slice(&16i32.to_be_bytes());
    code
}

#[test]
fn tableswitch_padding_at_every_alignment() {
    for anchor in 0..4 {
        let code = tableswitch_at(anchor);
        let seq = decode(&code);
        let ts = seq.get(anchor).unwrap();
        let pad = (4 - (anchor + 1) % 4) % 4;
        assert_eq!(
            ts.size as usize,
            1 + pad + 20,
            "switch at offset {anchor} should consume {pad} padding bytes"
        );
        assert_eq!(
            ts.operands,
            Operands::TableSwitch {
                default: anchor as i64 + 20,
                low: 0,
                high: 1,
                targets: vec![anchor as i64 + 12, anchor as i64 + 16],
            },
            "targets must be anchored at the switch opcode (offset {anchor})"
        );
    }
}

#[test]
fn lookupswitch_pairs_and_targets() {
    let mut code = vec![0xab, 0, 0, 0];
    code.extend_from_slice(&24i32.to_be_bytes()); // default
    code.extend_from_slice(&2i32.to_be_bytes()); // npairs
    code.extend_from_slice(&(-1i32).to_be_bytes());
    code.extend_from_slice(&28i32.to_be_bytes());
    code.extend_from_slice(&10i32.to_be_bytes());
    code.extend_from_slice(&32i32.to_be_bytes());
    let seq = decode(&code);
    let ls = seq.get(0).unwrap();
    assert_eq!(ls.size as usize, code.len());
    assert_eq!(
        ls.operands,
        Operands::LookupSwitch {
            default: 24,
            pairs: vec![(-1, 28), (10, 32)],
        }
    );
}

#[test]
fn sequence_records_byte_offsets() {
    let seq = decode(&[
        0x10, 0x05, // bipush 5 at 0
        0x00, // nop at 2
        0x11, 0x00, 0x07, // sipush 7 at 3
        0xb1, // return at 6
    ]);
    assert_eq!(seq.len(), 4);
    let offsets: Vec<u32> = (0..seq.len()).map(|p| seq.byte_offset(p).unwrap()).collect();
    assert_eq!(offsets, vec![0, 2, 3, 6]);
    assert_eq!(seq.byte_offset(4), None);
}

#[test]
fn rebuild_replaces_contents() {
    let mut seq = decode(&[0x00, 0x00]);
    seq.rebuild(&[0x10, 0x05]).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.get(0).unwrap().opcode, Opcode::BIPUSH);
}

#[test]
fn failed_rebuild_leaves_sequence_unchanged() {
    let mut seq = decode(&[0x00, 0x60]);
    assert!(seq.rebuild(&[0x10]).is_err());
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.get(1).unwrap().opcode, Opcode::IADD);
}

#[test]
fn display_renders_a_listing_line() {
    let seq = decode(&[0x10, 0x05]);
    assert_eq!(seq.get(0).unwrap().to_string(), "bipush 5");
    let mut code = vec![0x00; 10];
    code.extend_from_slice(&[0xa7, 0x00, 0x05]);
    let seq = decode(&code);
    assert_eq!(seq.get(10).unwrap().to_string(), "goto -> 15");
}
