//! End-to-end corpus conversion: read MorphGNT files, annotate every token,
//! aggregate, and write JSON.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info, warn};

use crate::aggregate::{Aggregator, Book};
use crate::annotate::Annotator;
use crate::books::BookInfo;
use crate::corpus::parse_line;
use crate::katakana;
use crate::lexicon::{DictError, Dictionary, GlossTable, Lexicon};
use crate::settings::{settings, Settings};


/// Suffix shared by the upstream MorphGNT SBLGNT book files.
pub const CORPUS_FILE_SUFFIX: &str = "-morphgnt.txt";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no corpus files found in {}", .0.display())]
    NoInput(PathBuf),

    #[error("unknown book id: {0}")]
    UnknownBook(String),

    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PipelineError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub license: String,
}

/// The whole annotated corpus, books in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub books: Vec<Book>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Non-blank lines read.
    pub lines: usize,
    /// Malformed lines dropped.
    pub skipped: usize,
    pub words: usize,
    /// Characters the katakana engine passed through unchanged.
    pub unmapped_chars: usize,
    pub books: usize,
}

pub struct RunConfig {
    /// A single corpus file, or a directory of `*-morphgnt.txt` files.
    pub input: PathBuf,
    /// Compiled, Strong's XML or TSV dictionary.
    pub dictionary: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Book ids to convert. `None` converts everything found.
    pub books: Option<Vec<String>>,
}

/// One corpus text with the name used in log messages.
pub struct CorpusSource {
    pub name: String,
    pub text: String,
}

/// Incremental corpus assembly.
pub struct CorpusBuilder<'a> {
    annotator: Annotator<'a>,
    settings: &'a Settings,
    books: Option<BTreeSet<u8>>,
    aggregator: Aggregator,
    stats: RunStats,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(lexicon: Lexicon<'a>, settings: &'a Settings) -> Self {
        Self {
            annotator: Annotator::new(lexicon, settings),
            settings,
            books: None,
            aggregator: Aggregator::new(),
            stats: RunStats::default(),
        }
    }

    /// Keep only tokens of these books.
    pub fn with_books(mut self, books: &[&BookInfo]) -> Self {
        self.books = Some(books.iter().map(|b| b.number).collect());
        self
    }

    pub fn add_source(&mut self, name: &str, text: &str) {
        let _span = debug_span!("add_source", name).entered();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            self.stats.lines += 1;

            let token = match parse_line(line, &self.settings.corpus) {
                Ok(token) => token,
                Err(e) => {
                    warn!(source = name, line = idx + 1, error = %e, "skipping malformed line");
                    self.stats.skipped += 1;
                    continue;
                }
            };
            if let Some(books) = &self.books {
                if !books.contains(&token.reference.book.number) {
                    continue;
                }
            }

            let unmapped = katakana::unmapped_chars(token.normalized);
            if !unmapped.is_empty() {
                debug!(word = token.normalized, chars = ?unmapped, "unmapped katakana input");
                self.stats.unmapped_chars += unmapped.len();
            }

            let word = self.annotator.annotate(&token);
            self.aggregator.push(token.reference, word);
        }
    }

    pub fn finish(self) -> (Corpus, RunStats) {
        let mut stats = self.stats;
        stats.words = self.aggregator.word_count();
        let books = self.aggregator.finish();
        stats.books = books.len();

        let corpus = Corpus {
            books,
            metadata: Metadata {
                source: self.settings.output.source.clone(),
                license: self.settings.output.license.clone(),
            },
        };
        (corpus, stats)
    }
}

/// Annotate and aggregate `sources` in order.
pub fn build_corpus(
    sources: &[CorpusSource],
    lexicon: Lexicon<'_>,
    settings: &Settings,
) -> (Corpus, RunStats) {
    let mut builder = CorpusBuilder::new(lexicon, settings);
    for source in sources {
        builder.add_source(&source.name, &source.text);
    }
    builder.finish()
}

/// Resolve requested book ids. `all` (or nothing) means every book.
pub fn resolve_books(
    ids: Option<&[String]>,
) -> Result<Option<Vec<&'static BookInfo>>, PipelineError> {
    let Some(ids) = ids else {
        return Ok(None);
    };
    if ids.is_empty() || ids.iter().any(|id| id == "all") {
        return Ok(None);
    }
    ids.iter()
        .map(|id| BookInfo::from_id(id).ok_or_else(|| PipelineError::UnknownBook(id.clone())))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// The book an upstream corpus file holds, from its file name.
fn file_book(path: &Path) -> Option<&'static BookInfo> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(BookInfo::from_file_name)
}

/// List the corpus files to read, sorted by name.
///
/// A directory yields its `*-morphgnt.txt` files, restricted to `books` when
/// given. Missing requested books are logged and skipped.
pub fn input_files(
    input: &Path,
    books: Option<&[&BookInfo]>,
) -> Result<Vec<PathBuf>, PipelineError> {
    let meta = fs::metadata(input).map_err(|e| PipelineError::io(input, e))?;
    if meta.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input)
        .map_err(|e| PipelineError::io(input, e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(CORPUS_FILE_SUFFIX))
        })
        .collect();
    files.sort();

    if let Some(books) = books {
        let wanted = |path: &Path| {
            file_book(path).is_some_and(|found| books.iter().any(|b| b.number == found.number))
        };
        files.retain(|p| wanted(p));
        for book in books {
            if !files.iter().any(|p| file_book(p).is_some_and(|f| f.number == book.number)) {
                warn!(book = book.id, file = book.file, "corpus file not found, skipping");
            }
        }
    }

    if files.is_empty() {
        return Err(PipelineError::NoInput(input.to_path_buf()));
    }
    Ok(files)
}

/// Load the dictionary, or an empty one when none is configured or the
/// file does not exist.
pub fn load_dictionary(path: Option<&Path>) -> Result<Dictionary, PipelineError> {
    let Some(path) = path else {
        return Ok(Dictionary::default());
    };
    if !path.exists() {
        warn!(path = %path.display(), "dictionary not found, continuing without it");
        return Ok(Dictionary::default());
    }
    let dict = Dictionary::load(path)?;
    info!(path = %path.display(), entries = dict.len(), "loaded dictionary");
    Ok(dict)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<Vec<u8>, PipelineError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Atomic write: write to .tmp then rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).map_err(|e| PipelineError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| PipelineError::io(path, e))
}

/// Write `<book-id>.json` for every book and the combined corpus file.
/// Returns the written paths.
pub fn write_output(
    corpus: &Corpus,
    output_dir: &Path,
    settings: &Settings,
) -> Result<Vec<PathBuf>, PipelineError> {
    let _span = debug_span!("write_output", books = corpus.books.len()).entered();
    fs::create_dir_all(output_dir).map_err(|e| PipelineError::io(output_dir, e))?;

    let pretty = settings.output.pretty;
    let mut written = Vec::with_capacity(corpus.books.len() + 1);
    for book in &corpus.books {
        let path = output_dir.join(format!("{}.json", book.id));
        write_atomic(&path, &to_json(book, pretty)?)?;
        debug!(path = %path.display(), "wrote book");
        written.push(path);
    }

    let path = output_dir.join(&settings.output.combined_file);
    write_atomic(&path, &to_json(corpus, pretty)?)?;
    written.push(path);
    Ok(written)
}

/// Run the whole conversion with the global settings and gloss table.
///
/// No file is written when no word survives parsing and book filtering.
pub fn run(config: &RunConfig) -> Result<RunStats, PipelineError> {
    let _span = debug_span!("run", input = %config.input.display()).entered();
    let settings = settings();

    let books = resolve_books(config.books.as_deref())?;
    let files = input_files(&config.input, books.as_deref())?;
    let dictionary = load_dictionary(config.dictionary.as_deref())?;
    let glosses = GlossTable::global();

    let mut builder = CorpusBuilder::new(Lexicon::new(glosses, &dictionary), settings);
    if let Some(books) = &books {
        builder = builder.with_books(books);
    }
    for path in &files {
        let text = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        info!(file = %name, "converting");
        builder.add_source(&name, &text);
    }

    let (corpus, stats) = builder.finish();
    // Leave earlier output untouched when nothing was converted.
    if corpus.books.is_empty() {
        warn!(lines = stats.lines, "no words converted, nothing written");
        return Ok(stats);
    }
    write_output(&corpus, &config.output_dir, settings)?;
    info!(
        lines = stats.lines,
        skipped = stats.skipped,
        words = stats.words,
        books = stats.books,
        "conversion finished"
    );
    Ok(stats)
}
