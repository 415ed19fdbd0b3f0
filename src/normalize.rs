//! Diacritic stripping for ASCII-safe output.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics from a string, keeping only ASCII code points.
///
/// Decomposes to NFD, drops combining marks, then drops anything that is
/// still outside the ASCII range. Idempotent.
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii())
        .collect()
}
