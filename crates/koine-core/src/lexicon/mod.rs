//! Lemma-keyed lookups: curated Japanese glosses and the external
//! dictionary (Strong's numbers, English definitions).

mod dictionary;
pub mod glosses;
pub mod source;

pub use dictionary::{DictError, Dictionary, DictionaryRef};
pub use glosses::GlossTable;

/// Everything the annotator consults by exact lemma.
pub struct Lexicon<'a> {
    pub glosses: &'a GlossTable,
    pub dictionary: &'a Dictionary,
}

impl<'a> Lexicon<'a> {
    pub fn new(glosses: &'a GlossTable, dictionary: &'a Dictionary) -> Self {
        Self {
            glosses,
            dictionary,
        }
    }

    pub fn gloss(&self, lemma: &str) -> Option<&'a str> {
        self.glosses.get(lemma)
    }

    pub fn dictionary_ref(&self, lemma: &str) -> Option<&'a DictionaryRef> {
        self.dictionary.lookup(lemma)
    }
}
