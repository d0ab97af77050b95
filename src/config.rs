use crate::error::{CrackError, CrackResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString};

/// Punctuation and whitespace skipped by the analyzer and copied verbatim by the decoder.
/// Escapes (`\n`, `\r`, `\t`, `\\`) are expanded by [`crate::ranking::IgnoreSet::parse`].
pub const DEFAULT_IGNORE_CHARS: &str = ".,!?;:-()\"'\\n\\r ";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub paths: DataPaths,
    #[command(flatten)]
    pub table: TableFormat,
    #[command(flatten)]
    pub analysis: AnalysisParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Ciphertext to decode
    #[arg(global = true, short, long, default_value = "original.txt")]
    pub input: PathBuf,
    /// Reference letter-frequency table (reduced in place after the first run)
    #[arg(global = true, short, long, default_value = "freqs.csv")]
    pub reference: PathBuf,
    /// Cached cipher ranking
    #[arg(global = true, long, default_value = "freq_cipher.csv")]
    pub cache: PathBuf,
    /// Where the plaintext is written
    #[arg(global = true, short, long, default_value = "decodificado.txt")]
    pub output: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from("original.txt"),
            reference: PathBuf::from("freqs.csv"),
            cache: PathBuf::from("freq_cipher.csv"),
            output: PathBuf::from("decodificado.txt"),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFormat {
    #[arg(global = true, long, default_value = "Letra")]
    pub letter_column: String,
    #[arg(global = true, long, default_value = "Freq")]
    pub freq_column: String,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            letter_column: "Letra".to_string(),
            freq_column: "Freq".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    #[arg(global = true, long, default_value = DEFAULT_IGNORE_CHARS)]
    pub ignore_chars: String,
    #[arg(global = true, long, value_enum, default_value_t = CachePolicy::Verify)]
    pub cache_policy: CachePolicy,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            ignore_chars: DEFAULT_IGNORE_CHARS.to_string(),
            cache_policy: CachePolicy::Verify,
        }
    }
}

/// How a persisted cipher ranking is reused.
#[derive(
    ValueEnum,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CachePolicy {
    /// Load any existing cache without checking it against the ciphertext.
    Trust,
    /// Reuse the cache only when its recorded digest matches the ciphertext,
    /// ignore set and letter column of this run.
    #[default]
    Verify,
    /// Always recompute and overwrite the cache.
    Refresh,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CrackResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CrackError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields with values the user typed on the command line.
    /// Defaults filled in by clap do not count, so a config file keeps its values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(paths.input);
        update_if_present!(paths.reference);
        update_if_present!(paths.cache);
        update_if_present!(paths.output);

        update_if_present!(table.letter_column);
        update_if_present!(table.freq_column);

        update_if_present!(analysis.ignore_chars);
        update_if_present!(analysis.cache_policy);
    }
}
