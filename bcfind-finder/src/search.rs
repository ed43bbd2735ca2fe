use std::ops::Range;

use bcfind_code::{DecodedInstruction, InstructionSequence};

use crate::pattern::Pattern;
use crate::token::{TOKEN_UTF8_LEN, tokenize};

/// One non-overlapping pattern occurrence: a contiguous run of sequence
/// positions and the instructions at them.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    start: usize,
    insns: &'a [DecodedInstruction],
}

impl<'a> Match<'a> {
    /// First matched sequence position.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last matched sequence position.
    pub fn end(&self) -> usize {
        self.start + self.insns.len()
    }

    pub fn len(&self) -> usize {
        self.insns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// The matched run of sequence positions.
    pub fn positions(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The matched instructions, in sequence order.
    pub fn instructions(&self) -> &'a [DecodedInstruction] {
        self.insns
    }
}

/// Search session over one instruction sequence.
///
/// Owns the token string for the sequence it borrows; dropping and
/// recreating the finder is the way to pick up a rebuilt sequence (the
/// borrow makes forgetting that a compile error rather than a silent
/// stale-handle bug).
pub struct Finder<'a> {
    seq: &'a InstructionSequence,
    tokens: String,
}

impl<'a> Finder<'a> {
    pub fn new(seq: &'a InstructionSequence) -> Self {
        Finder {
            seq,
            tokens: tokenize(seq),
        }
    }

    pub fn sequence(&self) -> &'a InstructionSequence {
        self.seq
    }

    /// The token string, one character per instruction.
    pub fn tokens(&self) -> &str {
        &self.tokens
    }

    /// All matches of `pattern`, left to right from position 0.
    pub fn search<'f>(&'f self, pattern: &'f Pattern) -> Matches<'f, 'a, fn(&Match<'a>) -> bool> {
        self.search_from(pattern, 0)
    }

    /// All matches of `pattern` starting at or after `start`.
    pub fn search_from<'f>(
        &'f self,
        pattern: &'f Pattern,
        start: usize,
    ) -> Matches<'f, 'a, fn(&Match<'a>) -> bool> {
        self.search_filtered(pattern, start, accept_all as fn(&Match<'a>) -> bool)
    }

    /// Like [`search_from`](Finder::search_from), with a semantic filter on
    /// each candidate.
    ///
    /// A rejected candidate is not emitted, but the search still resumes at
    /// the end of the rejected span, so a match beginning inside it is
    /// forfeited. This mirrors the classic peephole-matcher behavior and
    /// keeps every emitted match non-overlapping with every candidate seen.
    pub fn search_filtered<'f, P>(
        &'f self,
        pattern: &'f Pattern,
        start: usize,
        predicate: P,
    ) -> Matches<'f, 'a, P>
    where
        P: FnMut(&Match<'a>) -> bool,
    {
        Matches {
            finder: self,
            pattern,
            pos: start,
            predicate,
        }
    }
}

fn accept_all(_: &Match<'_>) -> bool {
    true
}

/// Lazy iterator over non-overlapping matches, strictly left to right.
pub struct Matches<'f, 'a, P> {
    finder: &'f Finder<'a>,
    pattern: &'f Pattern,
    pos: usize,
    predicate: P,
}

impl<'a, P> Iterator for Matches<'_, 'a, P>
where
    P: FnMut(&Match<'a>) -> bool,
{
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        loop {
            let byte_pos = self.pos.checked_mul(TOKEN_UTF8_LEN)?;
            if byte_pos > self.finder.tokens.len() {
                return None;
            }
            let m = self.pattern.regex().find_at(&self.finder.tokens, byte_pos)?;
            // Every token is TOKEN_UTF8_LEN bytes, so spans divide evenly.
            debug_assert_eq!(m.start() % TOKEN_UTF8_LEN, 0);
            debug_assert_eq!(m.end() % TOKEN_UTF8_LEN, 0);
            let start = m.start() / TOKEN_UTF8_LEN;
            let end = m.end() / TOKEN_UTF8_LEN;
            // Advance past the candidate whether or not it is kept; a
            // zero-width match still advances by one so iteration
            // terminates.
            self.pos = if end > start { end } else { end + 1 };
            let found = Match {
                start,
                insns: &self.finder.seq.instructions()[start..end],
            };
            if (self.predicate)(&found) {
                return Some(found);
            }
            log::trace!("predicate rejected candidate at positions {start}..{end}");
        }
    }
}
