//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::books::BOOKS;
use crate::katakana::DiphthongBreathing;

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

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
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
    pub corpus: CorpusSettings,
    pub katakana: KatakanaSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusSettings {
    pub delimiter: String,
    pub min_fields: usize,
    pub punctuation: String,
}

impl CorpusSettings {
    /// The delimiter as a single char, or `None` for whitespace splitting.
    pub fn delimiter_char(&self) -> Option<char> {
        self.delimiter.chars().next()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KatakanaSettings {
    pub diphthong_breathing: DiphthongBreathing,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub pretty: bool,
    pub combined_file: String,
    pub source: String,
    pub license: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! invalid {
        ($field:literal, $reason:literal) => {
            return Err(SettingsError::InvalidValue {
                field: $field.to_string(),
                reason: $reason.to_string(),
            })
        };
    }

    if s.corpus.delimiter.chars().count() > 1 {
        invalid!("corpus.delimiter", "must be empty or a single character");
    }
    // The lemma is the seventh field; fewer would yield empty lemmas.
    if s.corpus.min_fields < 7 {
        invalid!("corpus.min_fields", "must be at least 7");
    }
    if s.output.combined_file.is_empty() {
        invalid!("output.combined_file", "must not be empty");
    }
    if s.output.combined_file.contains(['/', '\\']) {
        invalid!("output.combined_file", "must be a bare file name");
    }
    // Book output is written as `<id>.json` next to the combined file.
    let combined = s.output.combined_file.as_str();
    if BOOKS
        .iter()
        .any(|b| combined.strip_suffix(".json") == Some(b.id))
    {
        invalid!("output.combined_file", "must not match a book output file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.corpus.delimiter_char(), None);
        assert_eq!(s.corpus.min_fields, 7);
        assert!(s.corpus.punctuation.contains('\u{0387}'));
        assert!(s.corpus.punctuation.contains(','));
        assert!(!s.corpus.punctuation.contains(':'));
        assert_eq!(s.katakana.diphthong_breathing, DiphthongBreathing::First);
        assert!(s.output.pretty);
        assert_eq!(s.output.combined_file, "greek-nt.json");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[corpus]
delimiter = "\t"
min_fields = 8
punctuation = ","

[katakana]
diphthong_breathing = "either"

[output]
pretty = false
combined_file = "all.json"
source = "test"
license = "none"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.corpus.delimiter_char(), Some('\t'));
        assert_eq!(s.katakana.diphthong_breathing, DiphthongBreathing::Either);
        assert!(!s.output.pretty);
    }

    #[test]
    fn error_long_delimiter() {
        let toml = DEFAULT_SETTINGS_TOML.replace("delimiter = \"\"", "delimiter = \"ab\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("corpus.delimiter"));
    }

    #[test]
    fn error_too_few_fields() {
        let toml = DEFAULT_SETTINGS_TOML.replace("min_fields = 7", "min_fields = 6");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("corpus.min_fields"));
    }

    #[test]
    fn error_combined_file_with_path() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"greek-nt.json\"", "\"out/greek-nt.json\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("output.combined_file"));
    }

    #[test]
    fn error_combined_file_shadows_book() {
        for name in ["john.json", "revelation.json"] {
            let toml = DEFAULT_SETTINGS_TOML.replace("greek-nt.json", name);
            let err = parse_settings_toml(&toml).unwrap_err();
            assert!(err.to_string().contains("must not match a book output file"));
        }
        let toml = DEFAULT_SETTINGS_TOML.replace("greek-nt.json", "john.txt");
        assert!(parse_settings_toml(&toml).is_ok());
    }

    #[test]
    fn error_unknown_breathing_mode() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"first\"", "\"second\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[corpus]\ndelimiter = \"\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
