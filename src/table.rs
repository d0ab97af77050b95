use crate::config::TableFormat;
use crate::error::{CrackError, CrackResult};
use crate::ranking::{fold_upper, single_char, FrequencyRanking};
use std::io::{Read, Write};
use tracing::debug;

/// A letter table as read from disk, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub letters: Vec<char>,
    /// `None` when the table has no frequency column (already reduced).
    pub freqs: Option<Vec<f64>>,
}

impl RawTable {
    /// Orders letters by descending frequency, ties alphabetically.
    /// A table without frequencies keeps its row order.
    pub fn into_ranking(self) -> CrackResult<FrequencyRanking> {
        match self.freqs {
            None => FrequencyRanking::new(self.letters),
            Some(freqs) => {
                let mut rows: Vec<(char, f64)> = self
                    .letters
                    .into_iter()
                    .map(fold_upper)
                    .zip(freqs)
                    .collect();
                sort_by_frequency(&mut rows);
                FrequencyRanking::new(rows.into_iter().map(|(c, _)| c))
            }
        }
    }
}

/// Descending by value, ties broken by ascending letter.
pub fn sort_by_frequency(rows: &mut [(char, f64)]) {
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

pub fn read_table<R: Read>(reader: R, format: &TableFormat) -> CrackResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let letter_idx = column_index(&headers, &format.letter_column)
        .ok_or_else(|| CrackError::MissingColumn(format.letter_column.clone()))?;
    let freq_idx = column_index(&headers, &format.freq_column);

    let mut letters = Vec::new();
    let mut freqs = freq_idx.map(|_| Vec::new());

    for (row, result) in rdr.records().enumerate() {
        let rec = result?;
        let cell = rec.get(letter_idx).ok_or_else(|| {
            CrackError::Validation(format!(
                "Row {}: no value in '{}' column",
                row + 1,
                format.letter_column
            ))
        })?;
        letters.push(single_char(cell, row)?);

        if let (Some(idx), Some(values)) = (freq_idx, freqs.as_mut()) {
            let raw = rec.get(idx).unwrap_or("").trim();
            let value: f64 = raw.parse().map_err(|_| {
                CrackError::Validation(format!(
                    "Row {}: '{}' is not a number in '{}' column",
                    row + 1,
                    raw,
                    format.freq_column
                ))
            })?;
            if !value.is_finite() {
                return Err(CrackError::Validation(format!(
                    "Row {}: frequency '{}' is not finite",
                    row + 1,
                    raw
                )));
            }
            values.push(value);
        }
    }

    debug!(
        "Read {} rows (frequency column: {})",
        letters.len(),
        freqs.is_some()
    );

    Ok(RawTable { letters, freqs })
}

/// Writes the single-column form: a header followed by one letter per row.
pub fn write_ranking<W: Write>(
    writer: W,
    ranking: &FrequencyRanking,
    column: &str,
) -> CrackResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([column])?;
    for c in ranking.letters() {
        wtr.write_record([c.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
