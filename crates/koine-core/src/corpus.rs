//! Corpus line parsing.
//!
//! Line format (MorphGNT):
//! `reference pos morphology surface+punct surface normalized lemma`
//! e.g. `040101 P- -------- Ἐν Ἐν ἐν ἐν`.

use crate::books::BookInfo;
use crate::morphology::PartOfSpeech;
use crate::settings::CorpusSettings;

/// Book, chapter and verse addressed by a reference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub book: &'static BookInfo,
    pub chapter: u16,
    pub verse: u16,
}

/// One token of the corpus, borrowing from its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub reference: Reference,
    pub pos: PartOfSpeech,
    pub morphology_code: &'a str,
    pub surface_with_punctuation: &'a str,
    pub surface: &'a str,
    pub normalized: &'a str,
    pub lemma: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected at least {required} fields, found {found}")]
    TooFewFields { found: usize, required: usize },
    #[error("field {0} is empty")]
    EmptyField(usize),
    #[error("invalid reference key: {0:?}")]
    InvalidReference(String),
    #[error("unknown book number {0}")]
    UnknownBook(u8),
    #[error("unknown part-of-speech tag: {0:?}")]
    UnknownPartOfSpeech(String),
}

/// Parse a six-digit `BBCCVV` reference key.
///
/// `BB` may be a MorphGNT (01–27) or canonical (40–66) book number.
/// Chapter and verse must be positive.
pub fn parse_reference(key: &str) -> Result<Reference, LineError> {
    let invalid = || LineError::InvalidReference(key.to_string());
    if key.len() != 6 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let book_number: u8 = key[0..2].parse().map_err(|_| invalid())?;
    let chapter: u16 = key[2..4].parse().map_err(|_| invalid())?;
    let verse: u16 = key[4..6].parse().map_err(|_| invalid())?;
    if chapter == 0 || verse == 0 {
        return Err(invalid());
    }

    let book = BookInfo::from_number(book_number).ok_or(LineError::UnknownBook(book_number))?;
    Ok(Reference {
        book,
        chapter,
        verse,
    })
}

/// Fields read by [`parse_line`]; anything after the lemma is ignored.
const REQUIRED_FIELDS: usize = 7;

/// Split a corpus line and type its fields.
pub fn parse_line<'a>(line: &'a str, settings: &CorpusSettings) -> Result<Token<'a>, LineError> {
    let fields: Vec<&str> = match settings.delimiter_char() {
        Some(d) => line.split(d).map(str::trim).collect(),
        None => line.split_whitespace().collect(),
    };

    let required = settings.min_fields.max(REQUIRED_FIELDS);
    if fields.len() < required {
        return Err(LineError::TooFewFields {
            found: fields.len(),
            required,
        });
    }

    // Only reachable with an explicit delimiter; whitespace splitting never
    // yields empty fields.
    if let Some(idx) = fields[..REQUIRED_FIELDS].iter().position(|f| f.is_empty()) {
        return Err(LineError::EmptyField(idx + 1));
    }

    let reference = parse_reference(fields[0])?;
    let pos = PartOfSpeech::from_tag(fields[1])
        .ok_or_else(|| LineError::UnknownPartOfSpeech(fields[1].to_string()))?;

    Ok(Token {
        reference,
        pos,
        morphology_code: fields[2],
        surface_with_punctuation: fields[3],
        surface: fields[4],
        normalized: fields[5],
        lemma: fields[6],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::settings;

    fn corpus() -> CorpusSettings {
        settings().corpus.clone()
    }

    #[test]
    fn test_parse_line() {
        let token = parse_line("040101 P- -------- Ἐν Ἐν ἐν ἐν", &corpus()).unwrap();
        assert_eq!(token.reference.book.id, "john");
        assert_eq!(token.reference.chapter, 1);
        assert_eq!(token.reference.verse, 1);
        assert_eq!(token.pos, PartOfSpeech::Preposition);
        assert_eq!(token.morphology_code, "--------");
        assert_eq!(token.surface_with_punctuation, "Ἐν");
        assert_eq!(token.normalized, "ἐν");
        assert_eq!(token.lemma, "ἐν");
    }

    #[test]
    fn test_parse_line_extra_whitespace() {
        let token = parse_line("  040101  N-   ----DSF-  ἀρχῇ, ἀρχῇ ἀρχῇ ἀρχή ", &corpus()).unwrap();
        assert_eq!(token.surface_with_punctuation, "ἀρχῇ,");
        assert_eq!(token.lemma, "ἀρχή");
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_line("040101 P- -------- Ἐν Ἐν ἐν", &corpus()).unwrap_err();
        assert_eq!(err, LineError::TooFewFields { found: 6, required: 7 });
        let err = parse_line("", &corpus()).unwrap_err();
        assert!(matches!(err, LineError::TooFewFields { found: 0, .. }));
    }

    #[test]
    fn test_custom_delimiter() {
        let mut settings = corpus();
        settings.delimiter = "\t".to_string();
        let line = "430101\tV-\t3IAI----\tἦν\tἦν\tἦν\tεἰμί";
        let token = parse_line(line, &settings).unwrap();
        assert_eq!(token.reference.book.number, 43);
        assert_eq!(token.pos, PartOfSpeech::Verb);
        assert_eq!(token.lemma, "εἰμί");
    }

    #[test]
    fn test_delimited_empty_column_is_rejected() {
        let mut settings = corpus();
        settings.delimiter = "\t".to_string();
        // Empty morphology column: must not shift the surface into its place.
        let line = "430101\tV-\t\tἦν\tἦν\tἦν\tεἰμί";
        assert_eq!(parse_line(line, &settings), Err(LineError::EmptyField(3)));

        // Trailing delimiter after the lemma is harmless.
        let line = "430101\tV-\t3IAI----\tἦν\tἦν\tἦν\tεἰμί\t";
        assert_eq!(parse_line(line, &settings).unwrap().lemma, "εἰμί");

        // A missing column leaves too few fields.
        let line = "430101\tV-\t3IAI----\tἦν\tἦν\tεἰμί";
        assert!(matches!(
            parse_line(line, &settings),
            Err(LineError::TooFewFields { found: 6, .. })
        ));
    }

    #[test]
    fn test_unknown_pos() {
        let err = parse_line("040101 ZZ -------- a a a a", &corpus()).unwrap_err();
        assert_eq!(err, LineError::UnknownPartOfSpeech("ZZ".to_string()));
    }

    #[test]
    fn test_reference_keys() {
        let r = parse_reference("041234").unwrap();
        assert_eq!((r.book.number, r.chapter, r.verse), (43, 12, 34));
        let r = parse_reference("430101").unwrap();
        assert_eq!(r.book.id, "john");
        assert_eq!(parse_reference("300101"), Err(LineError::UnknownBook(30)));
        assert!(matches!(parse_reference("04010"), Err(LineError::InvalidReference(_))));
        assert!(matches!(parse_reference("04a101"), Err(LineError::InvalidReference(_))));
        assert!(matches!(parse_reference("040001"), Err(LineError::InvalidReference(_))));
        assert!(matches!(parse_reference("040100"), Err(LineError::InvalidReference(_))));
    }
}
