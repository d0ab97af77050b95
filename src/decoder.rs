use crate::error::{CrackError, CrackResult};
use crate::ranking::{fold_lower, fold_upper, FrequencyRanking, IgnoreSet};
use std::collections::HashMap;
use tracing::trace;

/// One rewritten character, reported in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Character as it appeared in the ciphertext.
    pub cipher: char,
    /// Rank of the folded letter in the cipher ranking.
    pub index: usize,
    /// Character emitted, case already restored.
    pub plain: char,
}

/// Rewrites ciphertext by aligning the cipher ranking with the reference ranking.
pub struct Decoder<'a> {
    cipher: &'a FrequencyRanking,
    reference: &'a FrequencyRanking,
    ignore: &'a IgnoreSet,
    ranks: HashMap<char, usize>,
}

impl<'a> Decoder<'a> {
    pub fn new(
        cipher: &'a FrequencyRanking,
        reference: &'a FrequencyRanking,
        ignore: &'a IgnoreSet,
    ) -> Self {
        let ranks = cipher
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        Self {
            cipher,
            reference,
            ignore,
            ranks,
        }
    }

    /// Cipher letter -> reference letter for every rank of the cipher ranking.
    /// `None` marks ranks the reference table is too short to cover.
    pub fn correspondence(&self) -> Vec<(char, Option<char>)> {
        self.cipher
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, self.reference.get(i)))
            .collect()
    }

    pub fn decode(&self, text: &str) -> CrackResult<String> {
        self.decode_with(text, |_| {})
    }

    /// Decodes `text`, handing every substitution to `observe`.
    /// Aborts on the first letter that has no rank or no reference counterpart.
    pub fn decode_with<F>(&self, text: &str, mut observe: F) -> CrackResult<String>
    where
        F: FnMut(&Substitution),
    {
        let mut out = String::with_capacity(text.len());

        for (offset, c) in text.chars().enumerate() {
            if self.ignore.contains(c) {
                out.push(c);
                continue;
            }

            let letter = fold_upper(c);
            let index = *self
                .ranks
                .get(&letter)
                .ok_or(CrackError::UnknownLetter { letter, offset })?;
            let decoded = self
                .reference
                .get(index)
                .ok_or(CrackError::RankOutOfRange {
                    letter,
                    index,
                    reference_len: self.reference.len(),
                })?;

            let plain = if c.is_lowercase() {
                fold_lower(decoded)
            } else {
                decoded
            };

            let sub = Substitution {
                cipher: c,
                index,
                plain,
            };
            trace!("{} -> #{} -> {}", sub.cipher, sub.index, sub.plain);
            observe(&sub);
            out.push(plain);
        }

        Ok(out)
    }
}
