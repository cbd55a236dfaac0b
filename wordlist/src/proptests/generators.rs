//! Input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Any string at all, including control characters and every kind of newline.
pub fn any_text() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Wordlist-shaped text: short lines mixing words, spaces, comments and blanks,
/// joined with a mix of line terminators.
pub fn wordlist_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop_oneof![
                Just(String::new()),
                Just("#".to_string()),
                Just("z".to_string()),
                prop::string::string_regex(r"#[a-z ]{0,8}").expect("Failed to create comment"),
                prop::string::string_regex(r"[ \t]{0,2}[A-Za-z#é]{1,6}( [a-z]{1,4}){0,2}[ \t]{0,2}")
                    .expect("Failed to create word line"),
            ],
            prop_oneof![Just("\n"), Just("\r\n"), Just("\r")],
        ),
        0..40,
    )
    .prop_map(|lines| {
        lines
            .into_iter()
            .map(|(line, terminator)| line + terminator)
            .collect()
    })
}
