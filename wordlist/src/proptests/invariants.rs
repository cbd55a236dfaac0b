//! Normalization invariants checked with property-based testing

use proptest::prelude::*;

use crate::{Options, normalize, normalize_line, split_lines};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// Normalizing twice gives the same result as normalizing once.
    #[test]
    fn whitespace_removal_is_idempotent(line in any_text()) {
        let once = normalize_line(&line);
        prop_assert!(!once.chars().any(char::is_whitespace));
        prop_assert_eq!(normalize_line(&once), once);
    }

    /// Output entries are sorted, never comments, never shorter than two characters.
    #[test]
    fn output_is_sorted_and_filtered(input in wordlist_text()) {
        let wordlist = normalize(&input, &Options::default());
        let entries = wordlist.entries();
        prop_assert!(entries.windows(2).all(|pair| matches!(pair, [a, b] if a <= b)));
        for entry in entries {
            prop_assert!(!entry.starts_with('#'), "comment survived: {entry:?}");
            prop_assert!(entry.chars().count() >= 2, "short entry survived: {entry:?}");
        }
    }

    /// Every written line ends with exactly one newline and contains no other.
    #[test]
    fn written_lines_are_newline_terminated(input in any_text()) {
        let wordlist = normalize(&input, &Options::default());
        let mut output = Vec::new();
        prop_assert!(wordlist.write_to(&mut output).is_ok());
        let text = String::from_utf8(output).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(text.matches('\n').count(), wordlist.len());
        prop_assert!(text.is_empty() || text.ends_with('\n'));
        prop_assert!(!text.contains("\n\n"));
        prop_assert!(!text.starts_with('\n'));
    }

    /// Every input line is accounted for exactly once in the summary.
    #[test]
    fn summary_accounts_for_every_line(input in any_text()) {
        let summary = normalize(&input, &Options::default()).summary();
        prop_assert_eq!(summary.lines, split_lines(&input).count());
        prop_assert_eq!(summary.comments + summary.too_short + summary.kept, summary.lines);
    }

    /// Splitting never yields a line containing a terminator.
    #[test]
    fn split_lines_strips_terminators(input in any_text()) {
        for line in split_lines(&input) {
            prop_assert!(!line.contains(['\n', '\r']));
        }
    }
}
