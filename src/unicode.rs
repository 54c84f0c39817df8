//! Character-level classification used by the converter and tooling.

/// CJK Unified Ideographs, Extension A, Extension B, and U+3007 (〇).
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || c == '\u{3007}'
}

/// ASCII letter or digit. Anything else, including full-width digits, is not.
pub fn is_ascii_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
