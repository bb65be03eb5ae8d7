use std::process;

use koine_core::katakana::{self, DiphthongBreathing};
use koine_core::morphology::{self, PartOfSpeech};
use koine_core::romanize;
use koine_core::settings::settings;

pub fn katakana_cmd(words: &[String], either_breathing: bool) {
    let breathing = if either_breathing {
        DiphthongBreathing::Either
    } else {
        settings().katakana.diphthong_breathing
    };
    for word in words {
        println!("{word}\t{}", katakana::to_katakana_with(word, breathing));
        let unmapped = katakana::unmapped_chars(word);
        if !unmapped.is_empty() {
            eprintln!("  unmapped: {unmapped:?}");
        }
    }
}

pub fn translit_cmd(words: &[String]) {
    for word in words {
        println!("{word}\t{}", romanize::transliterate(word));
    }
}

pub fn decode_cmd(pos_tag: &str, code: &str) {
    let pos = PartOfSpeech::from_tag(pos_tag).unwrap_or_else(|| {
        let known: Vec<&str> = PartOfSpeech::all().map(PartOfSpeech::tag).collect();
        eprintln!("Error: unknown part of speech '{pos_tag}' (known: {})", known.join(" "));
        process::exit(1);
    });

    let m = morphology::decode(code, pos);
    println!("{} ({})", pos.name_ja(), pos.tag());
    if m.is_empty() {
        println!("  (no features)");
        return;
    }
    println!("  {}", m.labels_ja().join(" "));
    let json = die!(serde_json::to_string(&m), "Error: {}");
    println!("  {json}");
}
