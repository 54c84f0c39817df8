//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::engine::ConvertOptions;
use crate::resolve::RenderMode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub convert: ConvertSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    pub separator: String,
    #[serde(default)]
    pub mode: RenderMode,
}

impl Settings {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            separator: self.convert.separator.clone(),
            mode: self.convert.mode,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.convert.separator.contains(|c: char| c == '\n' || c == '\r') {
        return Err(SettingsError::InvalidValue {
            field: "convert.separator".to_string(),
            reason: "must not contain a line break".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.convert.separator, " ");
        assert_eq!(s.convert.mode, RenderMode::WithoutToneMarks);
        assert_eq!(s.convert_options(), ConvertOptions::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[convert]
separator = "-"
mode = "with_tone_marks"
"#;
        let s = parse_settings_toml(toml).unwrap();
        let opts = s.convert_options();
        assert_eq!(opts.separator, "-");
        assert_eq!(opts.mode, RenderMode::WithToneMarks);
    }

    #[test]
    fn mode_defaults_when_omitted() {
        let s = parse_settings_toml("[convert]\nseparator = \"\"\n").unwrap();
        assert_eq!(s.convert.mode, RenderMode::WithoutToneMarks);
        assert_eq!(s.convert.separator, "");
    }

    #[test]
    fn error_unknown_mode() {
        let toml = r#"
[convert]
separator = " "
mode = "shouting"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_separator_with_newline() {
        let toml = r#"
[convert]
separator = "a\nb"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("convert.separator"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[other]\nx = 1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_default() {
        assert_eq!(settings().convert_options(), ConvertOptions::default());
    }
}
