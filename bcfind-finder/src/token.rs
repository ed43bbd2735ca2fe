use bcfind_code::InstructionSequence;
use bcfind_isa::{Opcode, lookup};

/// First code point of the token alphabet. `U+E000 + raw` keeps every token
/// inside the Unicode private-use area, where no regex metacharacter can
/// live, and distinct opcodes get distinct tokens.
pub(crate) const TOKEN_BASE: u32 = 0xE000;

/// Every token code point is in `U+E000..=U+E0FF` and therefore encodes to
/// exactly this many UTF-8 bytes; regex byte spans divide down to sequence
/// positions.
pub(crate) const TOKEN_UTF8_LEN: usize = 3;

/// The token character for an opcode.
pub fn token_for(opcode: Opcode) -> char {
    // The private-use block contains no surrogates; the conversion cannot
    // fail for any u8.
    char::from_u32(TOKEN_BASE + u32::from(opcode.raw())).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Reverse mapping: the defined opcode a token character stands for.
pub fn opcode_for(token: char) -> Option<Opcode> {
    let raw = u32::from(token).checked_sub(TOKEN_BASE)?;
    let raw = u8::try_from(raw).ok()?;
    lookup(raw).map(|info| info.opcode())
}

/// Map a sequence to its token string, one character per instruction in
/// sequence order. `tokenize(seq).chars().count() == seq.len()` always;
/// that identity is what lets match spans double as position spans.
pub fn tokenize(seq: &InstructionSequence) -> String {
    seq.iter().map(|insn| token_for(insn.opcode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcfind_isa::opcode_table;

    #[test]
    fn tokens_are_injective_over_the_table() {
        let mut seen = std::collections::HashSet::new();
        for info in opcode_table() {
            assert!(
                seen.insert(token_for(info.opcode())),
                "token collision for '{}'",
                info.mnemonic()
            );
        }
    }

    #[test]
    fn tokens_roundtrip() {
        for info in opcode_table() {
            assert_eq!(opcode_for(token_for(info.opcode())), Some(info.opcode()));
        }
        assert_eq!(opcode_for('a'), None);
        // 0xca is reserved: a valid code point in the block, but no opcode.
        assert_eq!(opcode_for('\u{E0CA}'), None);
    }

    #[test]
    fn tokens_encode_to_three_utf8_bytes() {
        for info in opcode_table() {
            assert_eq!(token_for(info.opcode()).len_utf8(), TOKEN_UTF8_LEN);
        }
    }
}
