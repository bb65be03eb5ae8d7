//! Greek-to-katakana phonetic transcription.
//!
//! A single left-to-right pass with one character of lookahead turns an
//! accented Greek wordform into an approximate katakana reading, handling
//! γ-nasalization (ἄγγελος → アンゲロス), diphthongs, consonant+vowel
//! syllables and the rough breathing (ὁ → ホ).

mod config;
mod convert;
mod table;

pub use config::{KatakanaConfigError, DEFAULT_TOML};
pub use convert::{to_katakana, to_katakana_with, unmapped_chars};
pub use table::KatakanaTable;

use serde::Deserialize;

/// Which glyph of a diphthong is checked for a rough breathing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiphthongBreathing {
    /// Only the first vowel of the pair.
    #[default]
    First,
    /// Either vowel. Polytonic orthography writes the breathing on the
    /// second vowel (οὗτος, αἱ), so this reads those as h-onset.
    Either,
}
