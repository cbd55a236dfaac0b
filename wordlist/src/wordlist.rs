use std::{
    fmt,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    Error, Options,
    normalize::{is_comment, is_long_enough, normalize_line, split_lines},
};

/// Counts gathered while building a [`Wordlist`].
///
/// Every input line lands in exactly one bucket, so
/// `comments + too_short + kept == lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read from the input.
    pub lines: usize,
    /// Entries dropped because they start with the comment marker.
    pub comments: usize,
    /// Entries dropped by the length filter (including blank lines).
    pub too_short: usize,
    /// Entries written to the output.
    pub kept: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines: {} kept, {} comments, {} too short",
            self.lines, self.kept, self.comments, self.too_short
        )
    }
}

/// A normalized, filtered and sorted list of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    entries: Vec<String>,
    summary: Summary,
}

impl Wordlist {
    /// Run the whole pipeline over in-memory text.
    ///
    /// Each line loses all of its whitespace, the list is sorted, then entries
    /// starting with the comment marker are dropped, then entries shorter than the
    /// minimum length.
    #[tracing::instrument(skip(input))]
    #[must_use]
    pub fn from_text(input: &str, options: &Options) -> Self {
        let mut entries: Vec<String> = split_lines(input).map(normalize_line).collect();
        let lines = entries.len();
        entries.sort_unstable();

        entries.retain(|entry| !is_comment(entry, options.comment_marker));
        let comments = lines - entries.len();

        entries.retain(|entry| is_long_enough(entry, options.min_length));
        let too_short = lines - comments - entries.len();

        let summary = Summary {
            lines,
            comments,
            too_short,
            kept: entries.len(),
        };
        tracing::debug!(%summary, "normalized wordlist");

        Self { entries, summary }
    }

    /// Entries in output order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consume the wordlist, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Counts gathered while the wordlist was built.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Number of entries kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry survived the filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry followed by a single `\n`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in &self.entries {
            writer.write_all(entry.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Create (or truncate) `path` and write the wordlist into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be created, written or flushed.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display(), entries = self.len()))]
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| {
            tracing::error!(path = ?path.display(), error = ?source, "failed to write wordlist");
            Error::Write {
                path: path.to_path_buf(),
                source,
            }
        };

        let file = std::fs::File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
