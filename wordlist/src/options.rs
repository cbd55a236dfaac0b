use std::path::{Path, PathBuf};

use crate::constants::{COMMENT_MARKER, DEFAULT_OUTPUT_FILE, MIN_ENTRY_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// Destination written by [`crate::run`]. Truncated on every run.
    pub output: PathBuf,
    /// Entries whose first character is this marker are dropped.
    pub comment_marker: char,
    /// Entries shorter than this many characters are dropped.
    pub min_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            comment_marker: COMMENT_MARKER,
            min_length: MIN_ENTRY_LENGTH,
        }
    }
}

impl Options {
    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlist::Options;
    ///
    /// let options = Options::builder()
    ///     .with_output("words.txt")
    ///     .with_min_length(3)
    ///     .build();
    /// assert_eq!(options.min_length, 3);
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Create a new `Options` with default settings.
    ///
    /// Equivalent to `Options::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `Options` that writes to `output`, keeping every other default.
    #[must_use]
    pub fn with_output<P: AsRef<Path>>(output: P) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            ..Default::default()
        }
    }
}

/// Builder for `Options`.
///
/// Create an `OptionsBuilder` using `Options::builder()`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct OptionsBuilder {
    output: PathBuf,
    comment_marker: char,
    min_length: usize,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        let Options {
            output,
            comment_marker,
            min_length,
        } = Options::default();
        Self {
            output,
            comment_marker,
            min_length,
        }
    }
}

impl OptionsBuilder {
    /// Set the file the normalized wordlist is written to.
    #[must_use]
    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    /// Set the character that marks an entry as a comment.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlist::Options;
    ///
    /// let options = Options::builder()
    ///     .with_comment_marker(';')
    ///     .build();
    /// assert_eq!(options.comment_marker, ';');
    /// ```
    #[must_use]
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Set the shortest entry length, in characters, that is kept.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Build the `Options` from this builder.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            output: self.output,
            comment_marker: self.comment_marker,
            min_length: self.min_length,
        }
    }
}
