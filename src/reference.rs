use crate::config::TableFormat;
use crate::error::CrackResult;
use crate::ranking::FrequencyRanking;
use crate::table::{read_table, write_ranking};
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;
use strum_macros::Display;
use tracing::{debug, info};

/// Whether loading had to sort and strip the frequency column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Reduction {
    /// Frequencies were present; the table was ranked and is due to be rewritten.
    Reduced,
    /// The table only had the letter column and is used as-is.
    AlreadyReduced,
}

#[derive(Debug, Clone)]
pub struct ReferenceTable {
    pub ranking: FrequencyRanking,
    pub reduction: Reduction,
}

/// Ranks a reference table without touching storage.
pub fn read_reference<R: Read>(reader: R, format: &TableFormat) -> CrackResult<ReferenceTable> {
    let raw = read_table(reader, format)?;
    let reduction = if raw.freqs.is_some() {
        Reduction::Reduced
    } else {
        Reduction::AlreadyReduced
    };
    Ok(ReferenceTable {
        ranking: raw.into_ranking()?,
        reduction,
    })
}

/// Loads the reference table and, on its first run, rewrites it in reduced form.
pub fn load_reference<P: AsRef<Path>>(path: P, format: &TableFormat) -> CrackResult<ReferenceTable> {
    let path = path.as_ref();
    debug!("Loading reference table from: {}", path.display());

    let table = read_reference(File::open(path)?, format)?;

    match table.reduction {
        Reduction::Reduced => {
            let file = File::create(path)?;
            write_ranking(BufWriter::new(file), &table.ranking, &format.letter_column)?;
            info!(
                "📉 Reduced reference table '{}' to {} ranked letters",
                path.display(),
                table.ranking.len()
            );
        }
        Reduction::AlreadyReduced => {
            debug!(
                "Reference table has no '{}' column, using it as-is",
                format.freq_column
            );
        }
    }

    Ok(table)
}
