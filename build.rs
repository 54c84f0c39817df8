const SETTINGS_PATH: &str = "src/default_settings.toml";
const DICT_PATH: &str = "src/dict/default_pinyin.txt";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");
    println!("cargo:rerun-if-changed={DICT_PATH}");

    if include_str!("src/default_settings.toml")
        .parse::<toml::Value>()
        .is_err()
    {
        panic!("{SETTINGS_PATH} contains invalid TOML");
    }
    check_dict(include_str!("src/dict/default_pinyin.txt"));
}

/// The runtime parser drops bad lines silently, so the embedded asset is
/// checked here: every line must be `<hex scalar>=>syllable`.
fn check_dict(content: &str) {
    for (n, line) in content.lines().enumerate() {
        let Some((hex, syllable)) = line.split_once("=>") else {
            panic!("{DICT_PATH}:{}: missing `=>`", n + 1);
        };
        let valid_key = u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .is_some();
        if !valid_key {
            panic!("{DICT_PATH}:{}: bad code point {hex:?}", n + 1);
        }
        if syllable.is_empty() || syllable.contains(char::is_whitespace) {
            panic!("{DICT_PATH}:{}: bad syllable {syllable:?}", n + 1);
        }
    }
}
