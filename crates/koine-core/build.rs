fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/katakana/default_katakana.toml",
        include_str!("src/katakana/default_katakana.toml"),
    );
    validate_toml(
        "src/default_romanization.toml",
        include_str!("src/default_romanization.toml"),
    );
    validate_toml(
        "src/lexicon/default_glosses.toml",
        include_str!("src/lexicon/default_glosses.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    println!("cargo:rerun-if-changed={path}");
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
