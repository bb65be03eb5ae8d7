//! Per-token annotation: one corpus token in, one [`WordAnnotation`] out.

use serde::{Deserialize, Serialize};

use crate::corpus::Token;
use crate::katakana::{self, DiphthongBreathing};
use crate::lexicon::{DictionaryRef, Lexicon};
use crate::morphology::{self, Morphology, PartOfSpeech};
use crate::normalize::strip_chars;
use crate::romanize;
use crate::settings::Settings;

/// Everything known about one word occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnnotation {
    pub surface_with_punctuation: String,
    /// Surface form with the configured punctuation removed.
    pub surface_clean: String,
    pub lemma: String,
    pub transliteration_latin: String,
    pub transliteration_katakana: String,
    pub part_of_speech: PartOfSpeech,
    pub part_of_speech_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morphology: Option<Morphology>,
    pub morphology_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_ref: Option<DictionaryRef>,
}

/// Merges the engines and lexicon lookups into annotations.
pub struct Annotator<'a> {
    lexicon: Lexicon<'a>,
    punctuation: &'a str,
    breathing: DiphthongBreathing,
}

impl<'a> Annotator<'a> {
    pub fn new(lexicon: Lexicon<'a>, settings: &'a Settings) -> Self {
        Self {
            lexicon,
            punctuation: &settings.corpus.punctuation,
            breathing: settings.katakana.diphthong_breathing,
        }
    }

    /// Annotate one token. Both transliterations are computed from the
    /// normalized wordform so that casing and elision marks in the running
    /// text do not leak into them.
    pub fn annotate(&self, token: &Token<'_>) -> WordAnnotation {
        let morphology = morphology::decode(token.morphology_code, token.pos);

        WordAnnotation {
            surface_with_punctuation: token.surface_with_punctuation.to_string(),
            surface_clean: strip_chars(token.surface_with_punctuation, self.punctuation),
            lemma: token.lemma.to_string(),
            transliteration_latin: romanize::transliterate(token.normalized),
            transliteration_katakana: katakana::to_katakana_with(token.normalized, self.breathing),
            part_of_speech: token.pos,
            part_of_speech_name: token.pos.name_ja().to_string(),
            morphology: (!morphology.is_empty()).then_some(morphology),
            morphology_code: token.morphology_code.to_string(),
            gloss: self.lexicon.gloss(token.lemma).map(str::to_string),
            dictionary_ref: self.lexicon.dictionary_ref(token.lemma).cloned(),
        }
    }
}
