//! Wordlist normalization.
//!
//! Turns a loosely formatted word file into a clean wordlist: every line loses
//! all of its whitespace, the lines are sorted, comment entries (starting with
//! `#`) and entries shorter than two characters are dropped, and each surviving
//! entry is written on its own line.
//!
//! # Example
//!
//! ```
//! use wordlist::{Options, normalize};
//!
//! let wordlist = normalize("banana\n# comment\na p p l e\n\nz\ncherry\n", &Options::default());
//! assert_eq!(wordlist.entries(), ["apple", "banana", "cherry"]);
//! ```
//!
//! [`run`] performs the complete file-to-file operation, writing to
//! [`DEFAULT_OUTPUT_FILE`] unless the [`Options`] say otherwise.
use std::{io::Read, path::Path};

mod constants;
mod decode;
mod error;
mod normalize;
mod options;
mod wordlist;

#[cfg(test)]
mod proptests;

pub use constants::{COMMENT_MARKER, DEFAULT_OUTPUT_FILE, MIN_ENTRY_LENGTH};
pub use error::Error;
pub use normalize::{Lines, is_comment, normalize_line, split_lines};
pub use options::{Options, OptionsBuilder};
pub use wordlist::{Summary, Wordlist};

/// Normalize in-memory text.
#[must_use]
pub fn normalize(input: &str, options: &Options) -> Wordlist {
    Wordlist::from_text(input, options)
}

/// Read everything from `reader` as UTF-8, then normalize it.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the data is not valid UTF-8.
#[tracing::instrument(skip(reader))]
pub fn normalize_from_reader<R: Read>(reader: &mut R, options: &Options) -> Result<Wordlist, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(|e| {
        tracing::error!(error = ?e, "failed to read from reader");
        e
    })?;
    Ok(normalize(&input, options))
}

/// Read and decode the file at `file_path`, then normalize it.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read and
/// [`Error::UnrecognizedEncoding`] if it is neither UTF-8 nor BOM-marked UTF-16.
#[tracing::instrument(skip(file_path), fields(path = %file_path.as_ref().display()))]
pub fn normalize_file<P: AsRef<Path>>(file_path: P, options: &Options) -> Result<Wordlist, Error> {
    let input = decode::read_and_decode_file(file_path.as_ref())?;
    Ok(normalize(&input, options))
}

/// Normalize `input_path` and overwrite [`Options::output`] with the result.
///
/// # Errors
///
/// Fails if the input cannot be read or decoded, or the output cannot be written.
/// Nothing is written when reading fails.
#[tracing::instrument(skip(input_path), fields(input = %input_path.as_ref().display()))]
pub fn run<P: AsRef<Path>>(input_path: P, options: &Options) -> Result<Summary, Error> {
    let wordlist = normalize_file(input_path, options)?;
    wordlist.to_file(&options.output)?;
    Ok(wordlist.summary())
}
