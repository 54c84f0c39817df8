#![cfg(test)]

use crate::dict::PinyinDict;
use crate::engine::{ConvertOptions, Tables};
use crate::resolve::{resolve, RenderMode};

use super::scan;

/// Shared test tables for converter tests.
///
/// Covers plain, neutral-tone, ü and vowel-initial syllables, plus an entry
/// with an empty syllable (一).
pub fn test_tables() -> Tables {
    let dict: PinyinDict = [
        ('你', "nǐ"),
        ('好', "hǎo"),
        ('中', "zhōng"),
        ('国', "guó"),
        ('世', "shì"),
        ('界', "jiè"),
        ('们', "men"),
        ('女', "nǚ"),
        ('阿', "ā"),
        ('一', ""),
    ]
    .into_iter()
    .map(|(c, s)| (c, s.to_string()))
    .collect();
    Tables::new(dict)
}

pub fn convert_with(tables: &Tables, text: &str, options: &ConvertOptions) -> String {
    scan(text, &options.separator, |c| resolve(tables, c, options.mode))
}

pub fn convert_mode(text: &str, mode: RenderMode) -> String {
    let tables = test_tables();
    convert_with(&tables, text, &ConvertOptions::default().with_mode(mode))
}

pub fn convert_sep(text: &str, separator: &str) -> String {
    let tables = test_tables();
    convert_with(
        &tables,
        text,
        &ConvertOptions::default().with_separator(separator),
    )
}
