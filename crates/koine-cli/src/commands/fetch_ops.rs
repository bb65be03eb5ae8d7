use std::path::Path;

use koine_core::books::BOOKS;
use koine_core::pipeline::resolve_books;

use super::convert_ops::split_books;
use crate::fetch;

pub fn fetch(output_dir: &str, books: &str) {
    let ids = split_books(books);
    let selected = die!(resolve_books(Some(ids.as_slice())), "Error: {}");
    let books: Vec<_> = match selected {
        Some(books) => books,
        None => BOOKS.iter().collect(),
    };

    eprintln!(
        "Downloading {} book(s) and Strong's dictionary to {output_dir}...",
        books.len()
    );
    let summary = die!(
        fetch::fetch(Path::new(output_dir), &books),
        "Error fetching corpus: {}"
    );
    eprintln!(
        "Done: {} downloaded, {} already present",
        summary.downloaded.len(),
        summary.skipped.len()
    );
}
