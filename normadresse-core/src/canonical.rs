//! Address canonicalization
//!
//! Folds raw input onto the alphabet the rule tables are written against:
//! uppercase Latin letters, digits and spaces.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonicalize a raw address line.
///
/// 1. NFD-decompose and drop combining marks (`É` becomes `E`)
/// 2. Uppercase
/// 3. Replace anything outside `A-Z`, `0-9` and space with a space
/// 4. Collapse the first double space, and only the first one
///
/// Any further double spaces are kept; the word selector drops the empty
/// words they produce.
pub fn canonicalize(raw: &str) -> String {
    let stripped: String = raw.nfd().filter(|&c| !is_combining_mark(c)).collect();

    let folded: String = stripped
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect();

    collapse_first_double_space(folded)
}

fn collapse_first_double_space(mut text: String) -> String {
    if let Some(pos) = text.find("  ") {
        text.remove(pos);
    }
    text
}
