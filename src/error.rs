use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrackError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Missing Column: table has no '{0}' column")]
    MissingColumn(String),

    #[error("Unknown Letter: '{letter}' at offset {offset} has no rank in the cipher ranking")]
    UnknownLetter { letter: char, offset: usize },

    #[error(
        "Rank Out Of Range: '{letter}' has rank {index} but the reference ranking only has {reference_len} letters"
    )]
    RankOutOfRange {
        letter: char,
        index: usize,
        reference_len: usize,
    },
}

pub type CrackResult<T> = Result<T, CrackError>;
