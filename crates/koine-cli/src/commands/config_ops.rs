use std::fs;

use koine_core::lexicon::glosses;
use koine_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: corpus.min_fields={}, katakana.diphthong_breathing={:?}, output.combined_file={}",
        s.corpus.min_fields, s.katakana.diphthong_breathing, s.output.combined_file
    );
}

pub fn gloss_export() {
    print!("{}", glosses::default_toml());
}

pub fn gloss_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(glosses::parse_gloss_toml(&content), "Error: {}");
    println!("OK: {} glosses", map.len());
}

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

/// Install a custom gloss table before the first lookup.
pub fn load_glosses(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        glosses::GlossTable::init_custom(content),
        "Error in {file}: {}"
    );
}
