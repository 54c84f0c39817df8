//! Hanzi to pinyin transliteration.
//!
//! Each ideograph with a dictionary entry is replaced by its syllable; every
//! other character is copied through. Adjacent syllables are joined with a
//! separator, and a space keeps ASCII letters and digits from running into a
//! neighbouring syllable.
//!
//! ```
//! use pinyin_engine::{Pinyin, RenderMode};
//!
//! assert_eq!(pinyin_engine::convert("你好").unwrap(), "ni hao");
//! let toned = Pinyin::new("你好").mode(RenderMode::WithToneMarks).convert().unwrap();
//! assert_eq!(toned, "nǐ hǎo");
//! ```

pub mod converter;
pub mod dict;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod settings;
pub mod tone;
pub mod trace_init;
pub mod unicode;

pub use engine::{ConvertOptions, Engine, Tables};
pub use error::ConvertError;
pub use resolve::{resolve, RenderMode, Resolved};
pub use settings::Settings;

/// Convert with the process-wide engine and the process-wide settings. Under
/// the embedded settings that means tone marks removed and syllables
/// separated by a single space.
pub fn convert(text: &str) -> Result<String, ConvertError> {
    Pinyin::new(text).convert()
}

/// A single conversion request. Setters consume the request and return the
/// updated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pinyin<'a> {
    text: &'a str,
    options: ConvertOptions,
}

impl<'a> Pinyin<'a> {
    /// Start a request with the defaults from [`settings::settings()`].
    pub fn new(text: &'a str) -> Self {
        Self::with_settings(text, settings::settings())
    }

    pub fn with_settings(text: &'a str, settings: &Settings) -> Self {
        Self {
            text,
            options: settings.convert_options(),
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.options.mode = mode;
        self
    }

    pub fn options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Run against the process-wide engine.
    pub fn convert(&self) -> Result<String, ConvertError> {
        self.convert_with(Engine::global())
    }

    pub fn convert_with(&self, engine: &Engine) -> Result<String, ConvertError> {
        engine.convert(self.text, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_default() {
        assert_eq!(convert("你好").unwrap(), "ni hao");
        assert_eq!(convert("你3").unwrap(), "ni 3");
        assert_eq!(convert("plain ascii").unwrap(), "plain ascii");
    }

    #[test]
    fn test_builder_separator() {
        let out = Pinyin::new("你好")
            .separator("-")
            .mode(RenderMode::WithoutToneMarks)
            .convert()
            .unwrap();
        assert_eq!(out, "ni-hao");
    }

    #[test]
    fn test_builder_tone_marks() {
        let out = Pinyin::new("你好")
            .mode(RenderMode::WithToneMarks)
            .convert()
            .unwrap();
        assert_eq!(out, "nǐ hǎo");
    }

    #[test]
    fn test_builder_capitalized() {
        let out = Pinyin::new("中国人")
            .mode(RenderMode::WithoutToneMarksCapitalized)
            .separator("")
            .convert()
            .unwrap();
        assert_eq!(out, "ZhongGuoRen");
    }

    #[test]
    fn test_builder_values_are_independent() {
        let base = Pinyin::new("你好");
        let dashed = base.clone().separator("-");
        assert_eq!(base.convert().unwrap(), "ni hao");
        assert_eq!(dashed.convert().unwrap(), "ni-hao");
    }

    #[test]
    fn test_default_phrase() {
        assert_eq!(convert("中华人民共和国").unwrap(), "zhong hua ren min gong he guo");
        assert_eq!(
            convert("我们到北京去发展经济").unwrap(),
            "wo men dao bei jing qu fa zhan jing ji"
        );
        let toned = Pinyin::new("中华人民共和国")
            .mode(RenderMode::WithToneMarks)
            .convert()
            .unwrap();
        assert_eq!(toned, "zhōng huá rén mín gòng hé guó");
    }

    #[test]
    fn test_new_uses_global_settings() {
        let from_global = Pinyin::with_settings("你好", settings::settings());
        assert_eq!(Pinyin::new("你好"), from_global);
        assert_eq!(Pinyin::new("你好").convert().unwrap(), "ni hao");
    }

    #[test]
    fn test_with_custom_settings() {
        let custom = settings::parse_settings_toml(
            "[convert]\nseparator = \"_\"\nmode = \"without_tone_marks_capitalized\"\n",
        )
        .unwrap();
        let out = Pinyin::with_settings("你好世界", &custom).convert().unwrap();
        assert_eq!(out, "Ni_Hao_Shi_Jie");
        // Setters still override the settings defaults.
        let out = Pinyin::with_settings("你好", &custom)
            .separator(" ")
            .convert()
            .unwrap();
        assert_eq!(out, "Ni Hao");
    }

    #[test]
    fn test_builder_on_uninitialized_engine() {
        let engine = Engine::uninitialized();
        assert_eq!(
            Pinyin::new("你好").convert_with(&engine),
            Err(ConvertError::NotInitialized)
        );
    }

    #[test]
    fn test_end_of_input_is_defined() {
        assert_eq!(ConvertError::EndOfInput.to_string(), "end of input");
        assert_eq!(ConvertError::NotInitialized.to_string(), "not yet initialized");
    }
}
