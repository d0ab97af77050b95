use crate::error::{CrackError, CrackResult};
use std::collections::HashSet;
use std::fmt;

/// Characters that are neither counted nor substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    chars: HashSet<char>,
}

impl IgnoreSet {
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Builds the set from a flag/config value, expanding `\n`, `\r`, `\t` and `\\`.
    /// A trailing lone backslash is kept as a literal backslash.
    pub fn parse(spec: &str) -> Self {
        let mut chars = HashSet::new();
        let mut it = spec.chars();
        while let Some(c) = it.next() {
            if c != '\\' {
                chars.insert(c);
                continue;
            }
            match it.next() {
                Some('n') => chars.insert('\n'),
                Some('r') => chars.insert('\r'),
                Some('t') => chars.insert('\t'),
                Some(other) => {
                    chars.insert('\\');
                    chars.insert(other)
                }
                None => chars.insert('\\'),
            };
        }
        Self { chars }
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Members in code point order, independent of how the set was written.
    pub fn canonical(&self) -> String {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::parse(crate::config::DEFAULT_IGNORE_CHARS)
    }
}

/// Uppercases a single character, leaving it alone when the uppercase form
/// is not exactly one character (e.g. `ß`).
pub fn fold_upper(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lowercase counterpart of [`fold_upper`].
pub fn fold_lower(c: char) -> char {
    let mut low = c.to_lowercase();
    match (low.next(), low.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Letters ordered from most to least frequent. Every letter is uppercase and appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyRanking {
    letters: Vec<char>,
}

impl FrequencyRanking {
    /// Validates and folds the letters. Duplicates (after folding) are rejected.
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> CrackResult<Self> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (rank, c) in letters.into_iter().enumerate() {
            let up = fold_upper(c);
            if !seen.insert(up) {
                return Err(CrackError::Validation(format!(
                    "Letter '{}' appears more than once in ranking (rank {})",
                    up, rank
                )));
            }
            out.push(up);
        }
        Ok(Self { letters: out })
    }

    /// Caller guarantees the letters are already folded and unique.
    pub(crate) fn from_unique(letters: Vec<char>) -> Self {
        debug_assert!(letters.iter().all(|&c| fold_upper(c) == c));
        Self { letters }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<char> {
        self.letters.get(rank).copied()
    }

    pub fn rank_of(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == letter)
    }
}

impl fmt::Display for FrequencyRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// A table cell must hold exactly one character. Surrounding spaces are
/// trimmed unless the cell is nothing but a space.
pub(crate) fn single_char(cell: &str, row: usize) -> CrackResult<char> {
    let trimmed = if cell.trim().is_empty() { cell } else { cell.trim() };
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CrackError::Validation(format!(
            "Row {}: expected a single letter, found '{}'",
            row + 1,
            cell
        ))),
    }
}
