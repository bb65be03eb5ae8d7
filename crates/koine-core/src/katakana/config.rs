use std::collections::BTreeMap;

use serde::Deserialize;

/// Embedded default reading table.
pub const DEFAULT_TOML: &str = include_str!("default_katakana.toml");

#[derive(Debug, Deserialize)]
pub(super) struct KatakanaConfig {
    pub vowels: BTreeMap<String, String>,
    pub rough_vowels: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub diphthongs: BTreeMap<String, String>,
    pub rough_diphthongs: BTreeMap<String, String>,
    pub syllables: BTreeMap<String, String>,
    pub nasalization: NasalizationConfig,
}

#[derive(Debug, Deserialize)]
pub(super) struct NasalizationConfig {
    pub letter: String,
    pub before: Vec<String>,
    pub mora: String,
}

#[derive(Debug, thiserror::Error)]
pub enum KatakanaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("[{table}] key {key:?} must be {expected} letter(s)")]
    KeyLength {
        table: &'static str,
        key: String,
        expected: usize,
    },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("[{table}] key {key:?} has no plain counterpart in [{plain}]")]
    Orphan {
        table: &'static str,
        key: String,
        plain: &'static str,
    },
}

/// Parse and validate a reading table.
pub(super) fn parse_config(toml_str: &str) -> Result<KatakanaConfig, KatakanaConfigError> {
    let config: KatakanaConfig =
        toml::from_str(toml_str).map_err(|e| KatakanaConfigError::Parse(e.to_string()))?;

    check_table("vowels", &config.vowels, 1)?;
    check_table("rough_vowels", &config.rough_vowels, 1)?;
    check_table("consonants", &config.consonants, 1)?;
    check_table("diphthongs", &config.diphthongs, 2)?;
    check_table("rough_diphthongs", &config.rough_diphthongs, 2)?;
    check_table("syllables", &config.syllables, 2)?;

    for key in config.rough_vowels.keys() {
        if !config.vowels.contains_key(key) {
            return Err(KatakanaConfigError::Orphan {
                table: "rough_vowels",
                key: key.clone(),
                plain: "vowels",
            });
        }
    }
    for key in config.rough_diphthongs.keys() {
        if !config.diphthongs.contains_key(key) {
            return Err(KatakanaConfigError::Orphan {
                table: "rough_diphthongs",
                key: key.clone(),
                plain: "diphthongs",
            });
        }
    }

    let nasal = &config.nasalization;
    if nasal.letter.chars().count() != 1 {
        return Err(KatakanaConfigError::KeyLength {
            table: "nasalization",
            key: nasal.letter.clone(),
            expected: 1,
        });
    }
    for key in &nasal.before {
        if key.chars().count() != 1 {
            return Err(KatakanaConfigError::KeyLength {
                table: "nasalization",
                key: key.clone(),
                expected: 1,
            });
        }
    }
    if nasal.mora.is_empty() {
        return Err(KatakanaConfigError::EmptyValue("nasalization.mora".to_string()));
    }

    Ok(config)
}

fn check_table(
    name: &'static str,
    table: &BTreeMap<String, String>,
    key_len: usize,
) -> Result<(), KatakanaConfigError> {
    if table.is_empty() {
        return Err(KatakanaConfigError::Empty(name));
    }
    for (key, value) in table {
        if key.chars().count() != key_len {
            return Err(KatakanaConfigError::KeyLength {
                table: name,
                key: key.clone(),
                expected: key_len,
            });
        }
        if value.is_empty() {
            return Err(KatakanaConfigError::EmptyValue(key.clone()));
        }
    }
    Ok(())
}
