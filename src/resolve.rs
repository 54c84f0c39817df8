//! Per-character syllable lookup and rendering.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Tables;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// `zhōng`
    WithToneMarks,
    /// `zhong`
    #[default]
    WithoutToneMarks,
    /// `Zhong`
    WithoutToneMarksCapitalized,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [
        RenderMode::WithToneMarks,
        RenderMode::WithoutToneMarks,
        RenderMode::WithoutToneMarksCapitalized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::WithToneMarks => "with_tone_marks",
            RenderMode::WithoutToneMarks => "without_tone_marks",
            RenderMode::WithoutToneMarksCapitalized => "without_tone_marks_capitalized",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render mode: {0} (expected tone, plain or capitalized)")]
pub struct ParseModeError(String);

impl FromStr for RenderMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tone" | "with_tone_marks" => Ok(RenderMode::WithToneMarks),
            "plain" | "without_tone_marks" => Ok(RenderMode::WithoutToneMarks),
            "capitalized" | "without_tone_marks_capitalized" => {
                Ok(RenderMode::WithoutToneMarksCapitalized)
            }
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Rendered text for one input character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'t> {
    pub text: Cow<'t, str>,
    /// The character has a dictionary entry.
    pub recognized: bool,
}

impl<'t> Resolved<'t> {
    pub fn passthrough(c: char) -> Self {
        Self {
            text: Cow::Owned(c.to_string()),
            recognized: false,
        }
    }

    pub fn syllable(text: impl Into<Cow<'t, str>>) -> Self {
        Self {
            text: text.into(),
            recognized: true,
        }
    }
}

/// Look up `c` and render its syllable in `mode`. Characters without a
/// dictionary entry come back unchanged with `recognized == false`.
pub fn resolve(tables: &Tables, c: char, mode: RenderMode) -> Resolved<'_> {
    let Some(toned) = tables.dict.get(c) else {
        return Resolved::passthrough(c);
    };
    match mode {
        RenderMode::WithToneMarks => Resolved::syllable(toned),
        RenderMode::WithoutToneMarks => Resolved::syllable(tables.tones.strip(toned)),
        RenderMode::WithoutToneMarksCapitalized => {
            Resolved::syllable(shift_initial(tables.tones.strip(toned)))
        }
    }
}

/// Subtract 32 from the first code point when it is above 32. This upper-cases
/// ASCII lowercase letters and nothing else reliably. A result in the
/// surrogate range is not a `char`; the character is then kept as it was
/// rather than replaced with U+FFFD.
fn shift_initial(plain: String) -> String {
    let mut chars = plain.chars();
    let Some(first) = chars.next() else {
        return plain;
    };
    let code = first as u32;
    if code <= 32 {
        return plain;
    }
    match char::from_u32(code - 32) {
        Some(shifted) => {
            let mut out = String::with_capacity(plain.len());
            out.push(shifted);
            out.push_str(chars.as_str());
            out
        }
        None => plain,
    }
}
