use crate::ranking::IgnoreSet;
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Digest recorded next to a cached cipher ranking. Covers every input the
/// ranking depends on: the ciphertext, the ignored characters (in canonical
/// order) and the letter column name. Parts are length-prefixed so no two
/// distinct inputs share a byte stream.
pub fn cache_digest(text: &str, ignore: &IgnoreSet, letter_column: &str) -> String {
    let ignored = ignore.canonical();
    let mut hasher = Sha256::new();
    for part in [text, ignored.as_str(), letter_column] {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// `freq_cipher.csv` -> `freq_cipher.csv.sha256`
pub fn digest_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut s: OsString = path.as_ref().as_os_str().to_owned();
    s.push(".sha256");
    PathBuf::from(s)
}
