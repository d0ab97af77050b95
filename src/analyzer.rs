use crate::config::{CachePolicy, TableFormat};
use crate::error::CrackResult;
use crate::ranking::{fold_upper, FrequencyRanking, IgnoreSet};
use crate::table::{read_table, write_ranking};
use crate::util::{cache_digest, digest_path};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use strum_macros::Display;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
    /// Share of all counted letters, 0..=100.
    pub percent: f64,
}

/// Letter counts of a ciphertext, most frequent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterFrequencies {
    pub rows: Vec<LetterCount>,
    pub total: usize,
}

impl LetterFrequencies {
    pub fn ranking(&self) -> FrequencyRanking {
        FrequencyRanking::from_unique(self.rows.iter().map(|r| r.letter).collect())
    }
}

/// Counts every non-ignored character, case-folded to uppercase.
/// Ties are ordered alphabetically.
pub fn count_letters(text: &str, ignore: &IgnoreSet) -> LetterFrequencies {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0;

    for c in text.chars().filter(|&c| !ignore.contains(c)) {
        *counts.entry(fold_upper(c)).or_default() += 1;
        total += 1;
    }

    let mut rows: Vec<LetterCount> = counts
        .into_iter()
        .map(|(letter, count)| LetterCount {
            letter,
            count,
            percent: 100.0 * count as f64 / total as f64,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.letter.cmp(&b.letter)));

    LetterFrequencies { rows, total }
}

pub fn rank_ciphertext(text: &str, ignore: &IgnoreSet) -> FrequencyRanking {
    count_letters(text, ignore).ranking()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RankingSource {
    Cache,
    Computed,
}

#[derive(Debug, Clone)]
pub struct CipherAnalysis {
    pub ranking: FrequencyRanking,
    /// Only available when the ranking was computed in this run.
    pub frequencies: Option<LetterFrequencies>,
    pub source: RankingSource,
}

/// Returns the cipher ranking, reusing the cache at `cache_path` when `policy` allows.
/// A freshly computed ranking is persisted together with a digest of the
/// ciphertext, the ignore set and the letter column.
///
/// Under [`CachePolicy::Trust`] an unreadable cache is an error, not a recompute.
pub fn analyze_cipher<P: AsRef<Path>>(
    text: &str,
    ignore: &IgnoreSet,
    cache_path: P,
    format: &TableFormat,
    policy: CachePolicy,
) -> CrackResult<CipherAnalysis> {
    let cache_path = cache_path.as_ref();
    let sidecar = digest_path(cache_path);
    let digest = cache_digest(text, ignore, &format.letter_column);

    if cache_path.exists() {
        let usable = match policy {
            CachePolicy::Trust => true,
            CachePolicy::Refresh => false,
            CachePolicy::Verify => match fs::read_to_string(&sidecar) {
                Ok(recorded) if recorded.trim() == digest => true,
                Ok(_) => {
                    warn!(
                        "♻️  Cached ranking '{}' was built from different inputs, recomputing",
                        cache_path.display()
                    );
                    false
                }
                Err(_) => {
                    warn!(
                        "♻️  Cached ranking '{}' has no digest, recomputing",
                        cache_path.display()
                    );
                    false
                }
            },
        };

        if usable {
            let ranking = read_table(File::open(cache_path)?, format)?.into_ranking()?;
            info!(
                "📂 Loaded cipher ranking from cache '{}' ({} letters)",
                cache_path.display(),
                ranking.len()
            );
            return Ok(CipherAnalysis {
                ranking,
                frequencies: None,
                source: RankingSource::Cache,
            });
        }
    }

    let frequencies = count_letters(text, ignore);
    let ranking = frequencies.ranking();
    debug!(
        "Counted {} characters over {} distinct letters",
        frequencies.total,
        ranking.len()
    );

    let file = File::create(cache_path)?;
    write_ranking(BufWriter::new(file), &ranking, &format.letter_column)?;
    fs::write(&sidecar, &digest)?;
    info!(
        "💾 Saved cipher ranking to '{}' ({} letters)",
        cache_path.display(),
        ranking.len()
    );

    Ok(CipherAnalysis {
        ranking,
        frequencies: Some(frequencies),
        source: RankingSource::Computed,
    })
}
