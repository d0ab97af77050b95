use crate::analyzer::{analyze_cipher, CipherAnalysis};
use crate::config::Config;
use crate::decoder::{Decoder, Substitution};
use crate::error::{CrackError, CrackResult};
use crate::ranking::IgnoreSet;
use crate::reference::{load_reference, ReferenceTable};
use std::fs;
use tracing::info;

/// Everything the decoder needs, loaded from the configured paths.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub ciphertext: String,
    pub reference: ReferenceTable,
    pub cipher: CipherAnalysis,
}

/// Loader -> Analyzer -> Decoder over the files named in a [`Config`].
pub struct Pipeline {
    config: Config,
    ignore: IgnoreSet,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let ignore = IgnoreSet::parse(&config.analysis.ignore_chars);
        Self { config, ignore }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn read_ciphertext(&self) -> CrackResult<String> {
        let path = &self.config.paths.input;
        fs::read_to_string(path).map_err(|e| {
            CrackError::Config(format!(
                "Could not read ciphertext '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn prepare(&self) -> CrackResult<Prepared> {
        let ciphertext = self.read_ciphertext()?;
        info!(
            "📂 Loaded ciphertext '{}' ({} chars)",
            self.config.paths.input.display(),
            ciphertext.chars().count()
        );

        let reference = load_reference(&self.config.paths.reference, &self.config.table)?;
        let cipher = analyze_cipher(
            &ciphertext,
            &self.ignore,
            &self.config.paths.cache,
            &self.config.table,
            self.config.analysis.cache_policy,
        )?;

        Ok(Prepared {
            ciphertext,
            reference,
            cipher,
        })
    }

    pub fn decoder<'a>(&'a self, prepared: &'a Prepared) -> Decoder<'a> {
        Decoder::new(
            &prepared.cipher.ranking,
            &prepared.reference.ranking,
            &self.ignore,
        )
    }

    /// Decodes and writes the plaintext. Nothing is written if decoding fails.
    pub fn decode_with<F>(&self, prepared: &Prepared, observe: F) -> CrackResult<String>
    where
        F: FnMut(&Substitution),
    {
        let plaintext = self
            .decoder(prepared)
            .decode_with(&prepared.ciphertext, observe)?;
        fs::write(&self.config.paths.output, &plaintext)?;
        info!(
            "✅ Wrote plaintext to '{}'",
            self.config.paths.output.display()
        );
        Ok(plaintext)
    }

    pub fn run(&self) -> CrackResult<String> {
        let prepared = self.prepare()?;
        self.decode_with(&prepared, |_| {})
    }
}
