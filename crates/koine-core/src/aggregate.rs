//! Grouping of annotated words into books, chapters and verses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::annotate::WordAnnotation;
use crate::books::BookInfo;
use crate::corpus::Reference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub verse: u16,
    pub words: Vec<WordAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: u16,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    /// Canonical book number (40–66).
    pub number: u8,
    pub chapters: Vec<Chapter>,
}

type VerseMap = BTreeMap<u16, Vec<WordAnnotation>>;

/// Collects annotations in arrival order and emits them sorted by book,
/// chapter and verse. Words pushed to an existing verse are appended.
#[derive(Debug, Default)]
pub struct Aggregator {
    books: BTreeMap<u8, (&'static BookInfo, BTreeMap<u16, VerseMap>)>,
    words: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reference: Reference, word: WordAnnotation) {
        let (_, chapters) = self
            .books
            .entry(reference.book.number)
            .or_insert_with(|| (reference.book, BTreeMap::new()));
        chapters
            .entry(reference.chapter)
            .or_default()
            .entry(reference.verse)
            .or_default()
            .push(word);
        self.words += 1;
    }

    /// Number of words pushed so far.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn finish(self) -> Vec<Book> {
        self.books
            .into_values()
            .map(|(info, chapters)| Book {
                id: info.id.to_string(),
                name: info.name.to_string(),
                number: info.number,
                chapters: chapters
                    .into_iter()
                    .map(|(chapter, verses)| Chapter {
                        chapter,
                        verses: verses
                            .into_iter()
                            .map(|(verse, words)| Verse { verse, words })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse_reference;
    use crate::morphology::PartOfSpeech;

    fn word(surface: &str) -> WordAnnotation {
        WordAnnotation {
            surface_with_punctuation: surface.to_string(),
            surface_clean: surface.to_string(),
            lemma: surface.to_string(),
            transliteration_latin: String::new(),
            transliteration_katakana: String::new(),
            part_of_speech: PartOfSpeech::Noun,
            part_of_speech_name: PartOfSpeech::Noun.name_ja().to_string(),
            morphology: None,
            morphology_code: "--------".to_string(),
            gloss: None,
            dictionary_ref: None,
        }
    }

    fn push(agg: &mut Aggregator, key: &str, surface: &str) {
        agg.push(parse_reference(key).unwrap(), word(surface));
    }

    fn surfaces(verse: &Verse) -> Vec<&str> {
        verse.words.iter().map(|w| w.surface_clean.as_str()).collect()
    }

    #[test]
    fn test_arrival_order_within_verse() {
        let mut agg = Aggregator::new();
        push(&mut agg, "040101", "Ἐν");
        push(&mut agg, "040101", "ἀρχῇ");
        push(&mut agg, "040101", "ἦν");
        assert_eq!(agg.word_count(), 3);

        let books = agg.finish();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "john");
        assert_eq!(books[0].number, 43);
        assert_eq!(surfaces(&books[0].chapters[0].verses[0]), ["Ἐν", "ἀρχῇ", "ἦν"]);
    }

    #[test]
    fn test_repeated_verse_appends() {
        let mut agg = Aggregator::new();
        push(&mut agg, "040101", "a");
        push(&mut agg, "040102", "b");
        push(&mut agg, "040101", "c");

        let books = agg.finish();
        let verses = &books[0].chapters[0].verses;
        assert_eq!(verses.len(), 2);
        assert_eq!(surfaces(&verses[0]), ["a", "c"]);
        assert_eq!(surfaces(&verses[1]), ["b"]);
    }

    #[test]
    fn test_ascending_order() {
        let mut agg = Aggregator::new();
        push(&mut agg, "270101", "rev");
        push(&mut agg, "040210", "jn-2-10");
        push(&mut agg, "040201", "jn-2-1");
        push(&mut agg, "040101", "jn-1-1");
        // Canonical numbering lands in the same book.
        push(&mut agg, "430102", "jn-1-2");

        let books = agg.finish();
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["john", "revelation"]);

        let john = &books[0];
        let chapters: Vec<u16> = john.chapters.iter().map(|c| c.chapter).collect();
        assert_eq!(chapters, [1, 2]);
        let verses: Vec<u16> = john.chapters[0].verses.iter().map(|v| v.verse).collect();
        assert_eq!(verses, [1, 2]);
        let verses: Vec<u16> = john.chapters[1].verses.iter().map(|v| v.verse).collect();
        assert_eq!(verses, [1, 10]);
    }

    #[test]
    fn test_empty() {
        let agg = Aggregator::new();
        assert_eq!(agg.word_count(), 0);
        assert!(agg.finish().is_empty());
    }
}
