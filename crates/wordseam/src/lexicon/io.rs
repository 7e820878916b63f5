//! # Dictionary Artifact IO
//!
//! A dictionary artifact is a sequence of lowercase words, one per
//! line, ordered by descending frequency, optionally gzip-compressed.
//! An English artifact may end with a lone `'s` sentinel line; it is
//! loaded like any other word.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

use flate2::bufread::GzDecoder;

use crate::errors::{WSResult, WordseamError};

/// Gzip stream magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Load a ranked word list from an artifact file.
///
/// Gzip compression is detected from the stream's magic bytes, so both
/// compressed and plain-text artifacts are accepted regardless of
/// extension.
///
/// ## Arguments
/// * `path` - the path to the artifact.
///
/// ## Returns
/// The word list in artifact order, or an error if the path does not
/// exist or the contents are not valid UTF-8 lines.
pub fn load_word_list_path<P: AsRef<Path>>(path: P) -> WSResult<Vec<String>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(WordseamError::ArtifactNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = BufReader::new(File::open(path)?);

    let compressed = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    if compressed {
        read_word_lines(BufReader::new(GzDecoder::new(reader)))
    } else {
        read_word_lines(reader)
    }
}

/// Read a ranked word list from a line reader.
///
/// Blank lines are skipped; lines holding several whitespace-separated
/// entries contribute each entry in order.
///
/// ## Arguments
/// * `reader` - the line reader over the (decompressed) artifact.
pub fn read_word_lines<R: BufRead>(reader: R) -> WSResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData | ErrorKind::InvalidInput => {
                WordseamError::MalformedArtifact(e.to_string())
            }
            _ => WordseamError::Io(e),
        })?;

        words.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(words)
}
