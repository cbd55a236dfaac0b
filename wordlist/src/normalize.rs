//! Per-line normalization primitives.

/// Remove every whitespace character from `line`.
///
/// The line is split on Unicode whitespace and on the ASCII information
/// separators (`\x1c` to `\x1f`), and the pieces are joined back together, so
/// separators at the edges and in the middle disappear alike.
///
/// ```
/// assert_eq!(wordlist::normalize_line("  a p\tp le \r"), "apple");
/// ```
#[must_use]
pub fn normalize_line(line: &str) -> String {
    line.split(is_separator).collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Whether a normalized entry starts with `marker`. The empty entry is never a comment.
#[must_use]
pub fn is_comment(entry: &str, marker: char) -> bool {
    entry.starts_with(marker)
}

/// Whether `entry` holds at least `min_length` characters.
#[must_use]
pub(crate) fn is_long_enough(entry: &str, min_length: usize) -> bool {
    entry.chars().take(min_length).count() == min_length
}

/// Split `input` into lines using universal newline rules.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The terminator is not part of the
/// yielded line, and a terminator at the very end does not produce an extra empty
/// line.
#[must_use]
pub fn split_lines(input: &str) -> Lines<'_> {
    Lines { remaining: input }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    remaining: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        match self.remaining.find(['\n', '\r']) {
            Some(end) => {
                let (line, rest) = self.remaining.split_at(end);
                let rest = rest
                    .strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                    .or_else(|| rest.strip_prefix('\r'))
                    .unwrap_or(rest);
                self.remaining = rest;
                Some(line)
            }
            None => {
                let line = self.remaining;
                self.remaining = "";
                Some(line)
            }
        }
    }
}
