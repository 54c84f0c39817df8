//! Tone-mark table for pinyin vowels.
//!
//! Each toned vowel glyph maps to its plain ASCII letter and its tone class.
//! Classes follow the conventional numbering: 1 = level (ā), 2 = rising (á),
//! 3 = falling-rising (ǎ), 4 = falling (à). Every ü variant maps to `v`.

use std::collections::HashMap;

const TONE_GROUPS: [[char; 12]; 4] = [
    ['ā', 'ē', 'ī', 'ō', 'ū', 'ǖ', 'Ā', 'Ē', 'Ī', 'Ō', 'Ū', 'Ǖ'],
    ['á', 'é', 'í', 'ó', 'ú', 'ǘ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ǘ'],
    ['ǎ', 'ě', 'ǐ', 'ǒ', 'ǔ', 'ǚ', 'Ǎ', 'Ě', 'Ǐ', 'Ǒ', 'Ǔ', 'Ǚ'],
    ['à', 'è', 'ì', 'ò', 'ù', 'ǜ', 'À', 'È', 'Ì', 'Ò', 'Ù', 'Ǜ'],
];

const PLAIN: [char; 12] = ['a', 'e', 'i', 'o', 'u', 'v', 'A', 'E', 'I', 'O', 'U', 'V'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneEntry {
    pub plain: char,
    pub tone: u8,
}

#[derive(Debug, Clone)]
pub struct ToneTable {
    entries: HashMap<char, ToneEntry>,
}

impl ToneTable {
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(TONE_GROUPS.len() * PLAIN.len());
        for (class, group) in TONE_GROUPS.iter().enumerate() {
            for (&glyph, &plain) in group.iter().zip(PLAIN.iter()) {
                entries.insert(
                    glyph,
                    ToneEntry {
                        plain,
                        tone: class as u8 + 1,
                    },
                );
            }
        }
        Self { entries }
    }

    pub fn get(&self, glyph: char) -> Option<ToneEntry> {
        self.entries.get(&glyph).copied()
    }

    pub fn plain(&self, glyph: char) -> Option<char> {
        self.get(glyph).map(|e| e.plain)
    }

    pub fn tone_class(&self, glyph: char) -> Option<u8> {
        self.get(glyph).map(|e| e.tone)
    }

    /// Replace every toned glyph with its plain letter; other characters are
    /// copied through.
    pub fn strip(&self, syllable: &str) -> String {
        syllable
            .chars()
            .map(|c| self.plain(c).unwrap_or(c))
            .collect()
    }

    /// Tone class of the first toned glyph, or `None` for a neutral-tone syllable.
    pub fn syllable_tone(&self, syllable: &str) -> Option<u8> {
        syllable.chars().find_map(|c| self.tone_class(c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToneTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_has_one_class() {
        let table = ToneTable::new();
        assert_eq!(table.len(), 48);
        for (i, group) in TONE_GROUPS.iter().enumerate() {
            for &glyph in group {
                assert_eq!(table.tone_class(glyph), Some(i as u8 + 1), "glyph {glyph}");
            }
        }
    }

    #[test]
    fn test_plain_forms() {
        let table = ToneTable::new();
        assert_eq!(table.plain('ǎ'), Some('a'));
        assert_eq!(table.plain('È'), Some('E'));
        assert_eq!(table.plain('ǚ'), Some('v'));
        assert_eq!(table.plain('Ǖ'), Some('V'));
        assert_eq!(table.plain('a'), None);
        assert_eq!(table.plain('ü'), None);
    }

    #[test]
    fn test_plain_forms_are_vowels() {
        let table = ToneTable::new();
        for group in &TONE_GROUPS {
            for &glyph in group {
                let plain = table.plain(glyph).unwrap();
                assert!("aeiouvAEIOUV".contains(plain), "{glyph} -> {plain}");
            }
        }
    }

    #[test]
    fn test_strip() {
        let table = ToneTable::new();
        assert_eq!(table.strip("zhōng"), "zhong");
        assert_eq!(table.strip("guó"), "guo");
        assert_eq!(table.strip("nǚ"), "nv");
        assert_eq!(table.strip("men"), "men");
        assert_eq!(table.strip(""), "");
    }

    #[test]
    fn test_syllable_tone() {
        let table = ToneTable::new();
        assert_eq!(table.syllable_tone("mā"), Some(1));
        assert_eq!(table.syllable_tone("má"), Some(2));
        assert_eq!(table.syllable_tone("mǎ"), Some(3));
        assert_eq!(table.syllable_tone("mà"), Some(4));
        assert_eq!(table.syllable_tone("ma"), None);
    }
}
