//! Built lookup tables behind a one-time initialization gate.

use std::sync::OnceLock;

use tracing::debug_span;

use crate::converter::scan;
use crate::dict::PinyinDict;
use crate::error::ConvertError;
use crate::resolve::{resolve, RenderMode};
use crate::tone::ToneTable;

/// Tone table plus dictionary. Read-only once built.
#[derive(Debug, Clone)]
pub struct Tables {
    pub tones: ToneTable,
    pub dict: PinyinDict,
}

impl Tables {
    pub fn new(dict: PinyinDict) -> Self {
        Self {
            tones: ToneTable::new(),
            dict,
        }
    }
}

/// Per-request conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub separator: String,
    pub mode: RenderMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            mode: RenderMode::WithoutToneMarks,
        }
    }
}

impl ConvertOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Debug, Default)]
pub struct Engine {
    tables: OnceLock<Tables>,
}

impl Engine {
    /// An engine whose tables have not been built. Conversions fail with
    /// [`ConvertError::NotInitialized`] until [`Engine::initialize`] runs.
    pub const fn uninitialized() -> Self {
        Self {
            tables: OnceLock::new(),
        }
    }

    pub fn new(dict: PinyinDict) -> Self {
        let engine = Self::uninitialized();
        engine.initialize(dict);
        engine
    }

    /// Get or initialize the global engine from the embedded dictionary, or
    /// from the source registered with [`PinyinDict::init_custom`].
    pub fn global() -> &'static Engine {
        static INSTANCE: OnceLock<Engine> = OnceLock::new();
        INSTANCE.get_or_init(|| Engine::new(PinyinDict::parse(PinyinDict::global_source())))
    }

    /// Build the tables. Only the first call has an effect; later calls
    /// return the tables already in place.
    pub fn initialize(&self, dict: PinyinDict) -> &Tables {
        self.tables.get_or_init(|| Tables::new(dict))
    }

    pub fn is_ready(&self) -> bool {
        self.tables.get().is_some()
    }

    pub fn tables(&self) -> Result<&Tables, ConvertError> {
        self.tables.get().ok_or(ConvertError::NotInitialized)
    }

    pub fn convert(&self, text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        let tables = self.tables()?;
        let _span = debug_span!(
            "convert",
            char_count = text.chars().count(),
            mode = options.mode.as_str()
        )
        .entered();
        Ok(scan(text, &options.separator, |c| {
            resolve(tables, c, options.mode)
        }))
    }
}
