//! Left-to-right scan that joins resolved syllables into the output string.
//!
//! The only state carried between characters is [`ScanState`]: whether the
//! previous character was an ASCII letter/digit and whether it produced a
//! pinyin syllable. Those two bits decide if a syllable gets the configured
//! separator, a plain space, or nothing in front of it.

pub(crate) mod testutil;

use crate::resolve::Resolved;
use crate::unicode::is_ascii_alnum;

const SPACE: &str = " ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub prev_alnum: bool,
    pub prev_syllable: bool,
}

impl ScanState {
    /// Emit output for `c` into `out` and return the state for the next
    /// character. `resolve` is only called when `c` is not consumed by the
    /// collision guard.
    pub fn step<'t, F>(self, c: char, separator: &str, out: &mut String, resolve: F) -> ScanState
    where
        F: FnOnce(char) -> Resolved<'t>,
    {
        let alnum = is_ascii_alnum(c);

        // A letter or digit right after a syllable would read as part of it.
        if alnum && self.prev_syllable && c != ' ' {
            out.push_str(SPACE);
            out.push(c);
            return ScanState {
                prev_alnum: alnum,
                prev_syllable: false,
            };
        }

        let Resolved { text, recognized } = resolve(c);
        let prev_syllable = if !text.is_empty() && !is_single_char(&text, c) {
            if recognized && text != SPACE {
                if self.prev_alnum {
                    out.push_str(SPACE);
                } else if self.prev_syllable {
                    out.push_str(separator);
                }
            }
            out.push_str(&text);
            recognized
        } else {
            out.push_str(&text);
            false
        };

        ScanState {
            prev_alnum: alnum,
            prev_syllable,
        }
    }
}

fn is_single_char(text: &str, c: char) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

/// Run the scan over `input`, resolving each character with `resolve`.
pub fn scan<'t, F>(input: &str, separator: &str, mut resolve: F) -> String
where
    F: FnMut(char) -> Resolved<'t>,
{
    let mut out = String::with_capacity(input.len() * 2);
    input.chars().fold(ScanState::default(), |state, c| {
        state.step(c, separator, &mut out, &mut resolve)
    });
    out
}
