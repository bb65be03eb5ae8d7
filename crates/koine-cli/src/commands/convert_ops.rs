use std::path::PathBuf;

use koine_core::pipeline::{self, RunConfig};

pub fn convert(input: &str, output_dir: &str, dictionary: Option<&str>, books: Option<&str>) {
    let config = RunConfig {
        input: PathBuf::from(input),
        dictionary: dictionary.map(PathBuf::from),
        output_dir: PathBuf::from(output_dir),
        books: books.map(split_books),
    };

    let stats = die!(pipeline::run(&config), "Error: {}");
    eprintln!(
        "Converted {} words in {} book(s) ({} lines, {} skipped)",
        stats.words, stats.books, stats.lines, stats.skipped
    );
    if stats.unmapped_chars > 0 {
        eprintln!(
            "  {} character(s) had no katakana mapping and were kept as-is",
            stats.unmapped_chars
        );
    }
    if stats.books == 0 {
        eprintln!("Nothing converted, {output_dir} left unchanged");
    } else {
        eprintln!("Wrote {output_dir}");
    }
}

/// Split a comma-separated book list, ignoring blanks.
pub fn split_books(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
