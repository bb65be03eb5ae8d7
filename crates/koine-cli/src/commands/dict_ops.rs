use std::fs;
use std::path::Path;
use std::process;

use koine_core::lexicon::source;
use koine_core::lexicon::Dictionary;

pub fn compile(source_name: &str, input_file: &str, output_file: &str) {
    let dict_source = source::from_name(source_name).unwrap_or_else(|| {
        eprintln!("Error: unknown source '{source_name}' (available: strongs, tsv)");
        process::exit(1);
    });

    eprintln!("Source: {source_name}");
    let entries = die!(
        dict_source.parse_file(Path::new(input_file)),
        "Error parsing dictionary: {}"
    );
    if entries.is_empty() {
        eprintln!("Error: no entries found in {input_file}");
        process::exit(1);
    }

    let dict = Dictionary::from_entries(entries);
    eprintln!("Writing {} entries...", dict.len());
    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} KB)",
        file_size as f64 / 1024.0
    );
}

pub fn info(dict_file: &str) {
    let dict = die!(
        Dictionary::load(Path::new(dict_file)),
        "Error opening dictionary: {}"
    );
    println!("Entries: {}", dict.len());

    let with_usage = dict.iter().filter(|(_, r)| !r.usage_note.is_empty()).count();
    let with_definition = dict.iter().filter(|(_, r)| !r.definition.is_empty()).count();
    println!("With definition: {with_definition}");
    println!("With usage note: {with_usage}");

    println!("\nSample entries:");
    for (lemma, r) in dict.iter().take(5) {
        println!("  {lemma}\t{}\t{}", r.id, r.usage_note);
    }
}

pub fn lookup(dict_file: &str, lemma: &str) {
    let dict = die!(
        Dictionary::load(Path::new(dict_file)),
        "Error opening dictionary: {}"
    );
    match dict.lookup(lemma) {
        Some(r) => {
            println!("{lemma} ({})", r.id);
            if !r.definition.is_empty() {
                println!("  definition: {}", r.definition);
            }
            if !r.usage_note.is_empty() {
                println!("  usage: {}", r.usage_note);
            }
        }
        None => println!("{lemma}: not found"),
    }
}
