use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use bcfind_isa::{Categories, Opcode, by_name, opcode_table};

use crate::token::token_for;

/// Errors from [`Pattern::compile`].
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// An identifier in the pattern text is neither an opcode mnemonic nor
    /// an alias name.
    #[error("unknown instruction or alias name '{0}'")]
    UnknownName(String),
    /// The metacharacter composition is not a valid regular expression.
    #[error("pattern syntax error: {0}")]
    Syntax(#[from] regex::Error),
}

/// One alias per category flag. Alias names follow the instruction-class
/// naming the pattern grammar inherits; members are exactly the opcodes
/// carrying the flag in the static table.
static CATEGORY_ALIASES: &[(&str, Categories)] = &[
    ("branchinstruction", Categories::BRANCH),
    ("loadinstruction", Categories::LOAD),
    ("storeinstruction", Categories::STORE),
    ("arithmeticinstruction", Categories::ARITHMETIC),
    ("conversioninstruction", Categories::CONVERSION),
    ("stackinstruction", Categories::STACK),
    ("fieldinstruction", Categories::FIELD),
    ("cpinstruction", Categories::CP),
    ("returninstruction", Categories::RETURN),
    ("constantpushinstruction", Categories::CONSTANT_PUSH),
    ("exceptionthrower", Categories::EXCEPTION_THROWER),
    ("loadclass", Categories::LOAD_CLASS),
    ("pushinstruction", Categories::PUSH),
    ("popinstruction", Categories::POP),
    ("unconditionalbranch", Categories::UNCONDITIONAL),
    ("variablelengthinstruction", Categories::VARIABLE_LENGTH),
    ("indexedinstruction", Categories::INDEXED),
    ("typedinstruction", Categories::TYPED),
    ("stackproducer", Categories::STACK_PRODUCER),
    ("stackconsumer", Categories::STACK_CONSUMER),
    ("instructiontargeter", Categories::TARGETER),
    ("allocationinstruction", Categories::ALLOCATION),
    ("jsrinstruction", Categories::JSR),
    ("select", Categories::SELECT),
    ("ifinstruction", Categories::IF),
];

/// Typed load/store families: the generic indexed form plus `_0..=_3`.
static FAMILIES: &[&str] = &[
    "iload", "lload", "fload", "dload", "aload", "istore", "lstore", "fstore", "dstore", "astore",
    "iconst", "lconst", "fconst", "dconst",
];

static ALIASES: Lazy<HashMap<&'static str, String>> = Lazy::new(build_alias_table);

fn alternation(tokens: impl Iterator<Item = char>) -> String {
    let mut out = String::from("(");
    for (i, token) in tokens.enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push(token);
    }
    out.push(')');
    out
}

fn category_alternation(cat: Categories) -> String {
    alternation(
        opcode_table()
            .iter()
            .filter(|info| info.is(cat))
            .map(|info| token_for(info.opcode())),
    )
}

/// `family("iload")` covers `iload` and `iload_0..=iload_3`;
/// `family("iconst")` covers the fixed forms `iconst_m1..=iconst_5`.
fn family_alternation(prefix: &str) -> String {
    alternation(
        opcode_table()
            .iter()
            .filter(|info| {
                info.mnemonic() == prefix
                    || info
                        .mnemonic()
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('_'))
            })
            .map(|info| token_for(info.opcode())),
    )
}

fn explicit_alternation(opcodes: &[Opcode]) -> String {
    alternation(opcodes.iter().map(|&op| token_for(op)))
}

fn build_alias_table() -> HashMap<&'static str, String> {
    let mut map = HashMap::new();
    for &(name, cat) in CATEGORY_ALIASES {
        map.insert(name, category_alternation(cat));
    }
    for &prefix in FAMILIES {
        map.insert(prefix, family_alternation(prefix));
    }
    map.insert(
        "if_icmp",
        explicit_alternation(&[
            Opcode::IF_ICMPEQ,
            Opcode::IF_ICMPNE,
            Opcode::IF_ICMPLT,
            Opcode::IF_ICMPGE,
            Opcode::IF_ICMPGT,
            Opcode::IF_ICMPLE,
        ]),
    );
    map.insert(
        "if_acmp",
        explicit_alternation(&[Opcode::IF_ACMPEQ, Opcode::IF_ACMPNE]),
    );
    map.insert(
        "if",
        explicit_alternation(&[
            Opcode::IFEQ,
            Opcode::IFNE,
            Opcode::IFLT,
            Opcode::IFGE,
            Opcode::IFGT,
            Opcode::IFLE,
        ]),
    );
    map.insert(
        "instruction",
        alternation(opcode_table().iter().map(|info| token_for(info.opcode()))),
    );
    map
}

/// A compiled instruction pattern: a regular expression over the token
/// alphabet, reusable across any number of searches.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    token_pattern: String,
    re: Regex,
}

impl Pattern {
    /// Compile a pattern text of whitespace-separated instruction
    /// mnemonics, category aliases, and regex metacharacters.
    ///
    /// Names resolve case-insensitively, alias table first: `iload` means
    /// the whole `iload|iload_0..=iload_3` family, not just the generic
    /// form. Metacharacters pass through to the regex engine verbatim, so
    /// the full composition syntax (`()`, `|`, `*`, `+`, `?`, `.`) is
    /// available over instruction names.
    pub fn compile(text: &str) -> Result<Pattern, PatternError> {
        let token_pattern = translate(text)?;
        let re = Regex::new(&token_pattern)?;
        Ok(Pattern {
            source: text.to_string(),
            token_pattern,
            re,
        })
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The translated regular expression over the token alphabet.
    pub fn token_pattern(&self) -> &str {
        &self.token_pattern
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.re
    }
}

/// Substitute every identifier in the pattern text with its token-alphabet
/// sub-pattern. Whitespace separates identifiers and is dropped; all other
/// characters pass through unchanged.
fn translate(text: &str) -> Result<String, PatternError> {
    let lower = text.to_ascii_lowercase();
    let mut out = String::new();
    let mut rest = lower.as_str();
    while let Some(ch) = rest.chars().next() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            let end = rest
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(rest.len());
            let ident = &rest[..end];
            rest = &rest[end..];
            if let Some(sub) = ALIASES.get(ident) {
                out.push_str(sub);
            } else if let Some(info) = by_name(ident) {
                out.push(token_for(info.opcode()));
            } else {
                return Err(PatternError::UnknownName(ident.to_string()));
            }
        } else {
            rest = &rest[ch.len_utf8()..];
            if !ch.is_whitespace() {
                out.push(ch);
            }
        }
    }
    Ok(out)
}
