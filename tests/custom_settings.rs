//! Process-wide settings registered before first use change the defaults of
//! every request. Kept in its own test binary so the global stays isolated.

use pinyin_engine::settings::{self, SettingsError};
use pinyin_engine::{convert, Pinyin, RenderMode};

#[test]
fn custom_settings_change_defaults() {
    let toml = r#"
[convert]
separator = "-"
mode = "with_tone_marks"
"#;
    settings::init_custom(toml.to_string()).unwrap();

    assert_eq!(convert("你好").unwrap(), "nǐ-hǎo");
    assert_eq!(
        Pinyin::new("你好")
            .mode(RenderMode::WithoutToneMarks)
            .convert()
            .unwrap(),
        "ni-hao"
    );

    let err = settings::init_custom("[convert]\nseparator = \" \"\n".to_string()).unwrap_err();
    assert!(matches!(err, SettingsError::AlreadyInitialized));
    assert_eq!(settings::settings().convert.separator, "-");
}
