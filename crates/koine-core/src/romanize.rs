//! Per-glyph Latin transliteration.
//!
//! Unlike the katakana engine there is no lookahead: every precomposed
//! glyph maps independently and digraphs simply read as consecutive Latin
//! letters (ου → "oy").

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_TOML: &str = include_str!("default_romanization.toml");

#[derive(Deserialize)]
struct RomanizationConfig {
    glyphs: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomanizationConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[glyphs] table is empty")]
    Empty,
    #[error("key is not a single glyph: {0:?}")]
    NotAGlyph(String),
}

/// Parse TOML text into a glyph → Latin map.
pub fn parse_romanization_toml(
    toml_str: &str,
) -> Result<HashMap<char, String>, RomanizationConfigError> {
    let config: RomanizationConfig =
        toml::from_str(toml_str).map_err(|e| RomanizationConfigError::Parse(e.to_string()))?;

    if config.glyphs.is_empty() {
        return Err(RomanizationConfigError::Empty);
    }

    let mut map = HashMap::with_capacity(config.glyphs.len());
    for (key, value) in config.glyphs {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => {
                map.insert(glyph, value);
            }
            _ => return Err(RomanizationConfigError::NotAGlyph(key)),
        }
    }
    Ok(map)
}

fn table() -> &'static HashMap<char, String> {
    static INSTANCE: OnceLock<HashMap<char, String>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_romanization_toml(DEFAULT_TOML).expect("romanization TOML must be valid")
    })
}

/// Latin transliteration of a single glyph, if it has a table entry.
pub fn glyph(c: char) -> Option<&'static str> {
    table().get(&c).map(String::as_str)
}

/// Transliterate a wordform glyph by glyph. Unmapped glyphs are kept.
pub fn transliterate(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for c in word.nfc() {
        match glyph(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }
    result
}
