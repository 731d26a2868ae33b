//! Runner for the NIST NSRL sample vectors.
//!
//! A vector directory holds `byte-hashes.sha1`, one known digest per line in
//! the form `DA39A3EE5E6B4B0D3255BFEF95601890AFD80709 ^`, and the data files
//! `byte0000.dat`, `byte0001.dat`, ... in the same order as the digests.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use hash::known_answer;

/// Name of the digest list inside a vector directory.
pub const HASH_LIST: &'static str = "byte-hashes.sha1";

/// Environment variable naming a vector directory for the optional NSRL run.
pub const DIR_VAR: &'static str = "SHA1_NSRL_DIR";

/// Extract the digest from one line of the digest list. Lines not of the form
/// `<40 hex chars> ^` carry no digest.
pub fn parse_hash_line(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.len() >= 42 && bytes[40] == b' ' && bytes[41] == b'^' {
        line.get(..40)
    } else {
        None
    }
}

/// Read the known digests listed in `dir`, in file order.
pub fn read_hash_list<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
    let path = dir.as_ref().join(HASH_LIST);
    let file = File::open(&path).map_err(|e| annotate(&path, e))?;

    let mut hashes = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| annotate(&path, e))?;
        if let Some(hash) = parse_hash_line(&line) {
            hashes.push(hash.to_owned());
        }
    }
    info!("hash count: {}", hashes.len());
    Ok(hashes)
}

/// Path of the data file for the digest at `idx`.
pub fn data_path<P: AsRef<Path>>(dir: P, idx: usize) -> PathBuf {
    dir.as_ref().join(format!("byte{:04}.dat", idx))
}

/// Hash every listed data file and return the total mismatch count.
///
/// A missing digest list or data file aborts the run with an error.
pub fn run<P, F, E>(dir: P, digest: &F) -> io::Result<usize>
    where P: AsRef<Path>,
          F: Fn(&[u8]) -> Result<(Vec<u8>, String), E>,
          E: fmt::Display
{
    let dir = dir.as_ref();
    let hashes = read_hash_list(dir)?;

    let mut failures = 0;
    for (idx, known) in hashes.iter().enumerate() {
        let path = data_path(dir, idx);
        let data = fs::read(&path).map_err(|e| annotate(&path, e))?;
        debug!("File: {}", path.display());
        failures += known_answer(digest, &data, known);
    }
    Ok(failures)
}

fn annotate(path: &Path, e: io::Error) -> io::Error {
    error!("Error opening {}: {}", path.display(), e);
    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::{data_path, parse_hash_line};
    use std::path::Path;

    #[test]
    fn hash_line_needs_caret_marker() {
        let line = "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709 ^";
        assert_eq!(parse_hash_line(line),
                   Some("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"));
        assert_eq!(parse_hash_line("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709 ^ trailing"),
                   Some("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"));
        assert_eq!(parse_hash_line("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"), None);
        assert_eq!(parse_hash_line("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709 *"), None);
        assert_eq!(parse_hash_line("# comment"), None);
        assert_eq!(parse_hash_line(""), None);
    }

    #[test]
    fn data_files_are_zero_padded() {
        assert_eq!(data_path("vectors", 0), Path::new("vectors").join("byte0000.dat"));
        assert_eq!(data_path("vectors", 42), Path::new("vectors").join("byte0042.dat"));
        assert_eq!(data_path("vectors", 12345), Path::new("vectors").join("byte12345.dat"));
    }
}
