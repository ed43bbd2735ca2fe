//! Search-engine semantics: non-overlap, predicates, span translation.

use bcfind_code::InstructionSequence;
use bcfind_finder::{Finder, Pattern};
use bcfind_isa::Opcode;

fn sequence(code: &[u8]) -> InstructionSequence {
    InstructionSequence::decode(code).expect("stream should decode")
}

#[test]
fn token_string_length_equals_sequence_length() {
    // Mixed widths, switch padding, and a wide prefix in one stream.
    let mut code = vec![
        0x10, 0x05, // bipush
        0xc4, 0x15, 0x01, 0x00, // wide iload
        0x00, // nop
    ];
    code.push(0xaa); // tableswitch at offset 7, no padding
    code.extend_from_slice(&16i32.to_be_bytes());
    code.extend_from_slice(&0i32.to_be_bytes());
    code.extend_from_slice(&0i32.to_be_bytes());
    code.extend_from_slice(&12i32.to_be_bytes());
    let seq = sequence(&code);
    let finder = Finder::new(&seq);
    assert_eq!(finder.tokens().chars().count(), seq.len());
}

#[test]
fn end_to_end_constant_fold_candidate() {
    // bipush 5, bipush 10, iadd, ireturn
    let seq = sequence(&[0x10, 0x05, 0x10, 0x0a, 0x60, 0xac]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile(
        "ConstantPushInstruction ConstantPushInstruction ArithmeticInstruction",
    )
    .unwrap();
    let matches: Vec<_> = finder.search(&pattern).collect();
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.positions(), 0..3);
    let mnemonics: Vec<_> = m
        .instructions()
        .iter()
        .map(|insn| insn.opcode.to_string())
        .collect();
    assert_eq!(mnemonics, ["bipush", "bipush", "iadd"]);
}

#[test]
fn matches_are_non_overlapping_and_ordered() {
    let seq = sequence(&[0x00; 5]); // five nops
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("nop nop").unwrap();
    let matches: Vec<_> = finder.search(&pattern).collect();
    assert_eq!(matches.len(), 2);
    for window in matches.windows(2) {
        assert!(window[0].end() <= window[1].start(), "overlap detected");
        assert!(window[0].start() < window[1].start());
    }
    assert_eq!(matches[0].positions(), 0..2);
    assert_eq!(matches[1].positions(), 2..4);
}

#[test]
fn search_from_skips_earlier_matches() {
    let seq = sequence(&[0x10, 0x01, 0x10, 0x02, 0x10, 0x03]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("bipush").unwrap();
    let matches: Vec<_> = finder.search_from(&pattern, 1).collect();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].start(), 1);
    assert_eq!(matches[1].start(), 2);
}

#[test]
fn always_rejecting_predicate_terminates_with_no_matches() {
    let seq = sequence(&[0x10, 0x01, 0x10, 0x02, 0x60, 0x00, 0x00, 0x00]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("instruction").unwrap();
    let matches: Vec<_> = finder
        .search_filtered(&pattern, 0, |_| false)
        .collect();
    assert!(matches.is_empty());
}

#[test]
fn rejected_candidate_still_consumes_its_span() {
    // Four bipush instructions; reject the first candidate pair.
    let seq = sequence(&[0x10, 0x01, 0x10, 0x02, 0x10, 0x03, 0x10, 0x04]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("bipush bipush").unwrap();
    let mut first = true;
    let matches: Vec<_> = finder
        .search_filtered(&pattern, 0, |_| !std::mem::take(&mut first))
        .collect();
    // The pair starting at position 1 is forfeited along with the
    // rejected 0..2 candidate; the next candidate starts at 2.
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].positions(), 2..4);
}

#[test]
fn predicate_sees_decoded_operands() {
    let seq = sequence(&[0x10, 0x05, 0x10, 0x0a, 0x60, 0xac]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("bipush").unwrap();
    let matches: Vec<_> = finder
        .search_filtered(&pattern, 0, |m| {
            matches!(
                m.instructions()[0].operands,
                bcfind_code::Operands::Imm(v) if v >= 10
            )
        })
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start(), 1);
}

#[test]
fn branch_aliases_match_decoded_branches() {
    // iload_0, ifeq -> 6, return
    let seq = sequence(&[0x1a, 0x99, 0x00, 0x05, 0xb1]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("LoadInstruction IfInstruction").unwrap();
    let matches: Vec<_> = finder.search(&pattern).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].positions(), 0..2);
    assert_eq!(matches[0].instructions()[1].opcode, Opcode::IFEQ);
}

#[test]
fn quantified_patterns_span_variable_runs() {
    // nop, bipush, bipush, bipush, iadd
    let seq = sequence(&[0x00, 0x10, 0x01, 0x10, 0x02, 0x10, 0x03, 0x60]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("nop ConstantPushInstruction+ ArithmeticInstruction").unwrap();
    let matches: Vec<_> = finder.search(&pattern).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].positions(), 0..5);
}

#[test]
fn no_match_yields_an_empty_iterator() {
    let seq = sequence(&[0x00, 0x00]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("iadd").unwrap();
    assert_eq!(finder.search(&pattern).count(), 0);
}

#[test]
fn finder_over_empty_sequence() {
    let seq = sequence(&[]);
    let finder = Finder::new(&seq);
    let pattern = Pattern::compile("instruction").unwrap();
    assert_eq!(finder.search(&pattern).count(), 0);
}
