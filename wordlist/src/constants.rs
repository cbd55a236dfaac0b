// Defaults used when an `Options` value does not override them.
//
// These mirror the conventions of the wordlists consumed by the word tree
// loader: one entry per line, `#` comments, single letters dropped.

/// File the normalized wordlist is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Leading character that marks an entry as a comment.
pub const COMMENT_MARKER: char = '#';

/// Shortest entry, in characters, that survives the length filter.
pub const MIN_ENTRY_LENGTH: usize = 2;
