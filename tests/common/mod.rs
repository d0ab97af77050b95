#![allow(dead_code)]

use freqcrack::config::{CachePolicy, Config};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Portuguese letter frequencies, unsorted on purpose.
pub const PT_FREQS: &str = "Letra,Freq\n\
B,1.04\nA,14.63\nC,3.88\nD,4.99\nE,12.57\nF,1.02\nG,1.30\nH,1.28\nI,6.18\n\
J,0.40\nK,0.02\nL,2.78\nM,4.74\nN,5.05\nO,10.73\nP,2.52\nQ,1.20\nR,6.53\n\
S,7.81\nT,4.34\nU,4.63\nV,1.67\nW,0.01\nX,0.21\nY,0.01\nZ,0.47\n";

pub const PT_RANKING: &str = "AEOSRINDMUTCLPVGHQBFZJXKWY";

/// A scratch directory holding the four files the pipeline works with.
pub struct TestContext {
    pub dir: TempDir,
    pub input: PathBuf,
    pub reference: PathBuf,
    pub cache: PathBuf,
    pub output: PathBuf,
}

impl TestContext {
    pub fn new(ciphertext: &str, reference_csv: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("original.txt");
        let reference = dir.path().join("freqs.csv");
        let cache = dir.path().join("freq_cipher.csv");
        let output = dir.path().join("decodificado.txt");

        fs::write(&input, ciphertext).unwrap();
        fs::write(&reference, reference_csv).unwrap();

        Self {
            dir,
            input,
            reference,
            cache,
            output,
        }
    }

    pub fn config(&self, policy: CachePolicy) -> Config {
        let mut config = Config::default();
        config.paths.input = self.input.clone();
        config.paths.reference = self.reference.clone();
        config.paths.cache = self.cache.clone();
        config.paths.output = self.output.clone();
        config.analysis.cache_policy = policy;
        config
    }

    pub fn read(&self, path: &PathBuf) -> String {
        fs::read_to_string(path).unwrap()
    }
}
