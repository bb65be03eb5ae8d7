use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use super::config::{parse_config, KatakanaConfig, KatakanaConfigError, DEFAULT_TOML};

/// Compiled reading table, keyed by bare base letters.
#[derive(Debug)]
pub struct KatakanaTable {
    vowels: HashMap<char, String>,
    rough_vowels: HashMap<char, String>,
    consonants: HashMap<char, String>,
    diphthongs: HashMap<(char, char), String>,
    rough_diphthongs: HashMap<(char, char), String>,
    syllables: HashMap<(char, char), String>,
    nasal_letter: char,
    nasal_before: HashSet<char>,
    nasal_mora: String,
}

impl KatakanaTable {
    /// Get or initialize the global table built from the embedded TOML.
    pub fn global() -> &'static KatakanaTable {
        static INSTANCE: OnceLock<KatakanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            KatakanaTable::from_toml(DEFAULT_TOML).expect("katakana TOML must be valid")
        })
    }

    /// Parse, validate and compile a reading table.
    pub fn from_toml(toml_str: &str) -> Result<Self, KatakanaConfigError> {
        parse_config(toml_str).map(Self::from_config)
    }

    fn from_config(config: KatakanaConfig) -> Self {
        let nasal_letter = first_char(&config.nasalization.letter);
        let nasal_before = config
            .nasalization
            .before
            .iter()
            .map(|s| first_char(s))
            .collect();

        Self {
            vowels: single_keys(config.vowels),
            rough_vowels: single_keys(config.rough_vowels),
            consonants: single_keys(config.consonants),
            diphthongs: pair_keys(config.diphthongs),
            rough_diphthongs: pair_keys(config.rough_diphthongs),
            syllables: pair_keys(config.syllables),
            nasal_letter,
            nasal_before,
            nasal_mora: config.nasalization.mora,
        }
    }

    /// Nasal mora for `current` when followed by `next`, if the pair nasalizes.
    pub fn nasal(&self, current: char, next: Option<char>) -> Option<&str> {
        let next = next?;
        (current == self.nasal_letter && self.nasal_before.contains(&next))
            .then_some(self.nasal_mora.as_str())
    }

    pub fn diphthong(&self, first: char, second: char, rough: bool) -> Option<&str> {
        let key = (first, second);
        let plain = self.diphthongs.get(&key)?;
        if rough {
            if let Some(h) = self.rough_diphthongs.get(&key) {
                return Some(h);
            }
        }
        Some(plain)
    }

    pub fn syllable(&self, consonant: char, vowel: char) -> Option<&str> {
        self.syllables.get(&(consonant, vowel)).map(String::as_str)
    }

    pub fn vowel(&self, vowel: char, rough: bool) -> Option<&str> {
        let plain = self.vowels.get(&vowel)?;
        if rough {
            if let Some(h) = self.rough_vowels.get(&vowel) {
                return Some(h);
            }
        }
        Some(plain)
    }

    pub fn consonant(&self, consonant: char) -> Option<&str> {
        self.consonants.get(&consonant).map(String::as_str)
    }
}

// Keys are validated for length in `parse_config`.
fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or_default()
}

fn single_keys(map: BTreeMap<String, String>) -> HashMap<char, String> {
    map.into_iter().map(|(k, v)| (first_char(&k), v)).collect()
}

fn pair_keys(map: BTreeMap<String, String>) -> HashMap<(char, char), String> {
    map.into_iter()
        .map(|(k, v)| {
            let mut chars = k.chars();
            let a = chars.next().unwrap_or_default();
            let b = chars.next().unwrap_or_default();
            ((a, b), v)
        })
        .collect()
}
