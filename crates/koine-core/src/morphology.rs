//! Part-of-speech tags and the 8-position morphology code.
//!
//! Code layout (MorphGNT): `person tense voice mood case number gender
//! degree`, one symbol per position, `-` for "not applicable". Verbs use
//! positions 1–4 (plus 5–7 for participles); every other part of speech
//! uses positions 5–8.

use serde::{Deserialize, Serialize};

/// Morphology code with every position blank.
pub const PLACEHOLDER: &str = "--------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartOfSpeech {
    Adjective,
    Conjunction,
    Adverb,
    Interjection,
    Noun,
    Preposition,
    Article,
    Demonstrative,
    Interrogative,
    PersonalPronoun,
    RelativePronoun,
    Verb,
    Particle,
}

/// Corpus tag, variant, Japanese display name.
const POS_TABLE: &[(&str, PartOfSpeech, &str)] = &[
    ("A-", PartOfSpeech::Adjective, "形容詞"),
    ("C-", PartOfSpeech::Conjunction, "接続詞"),
    ("D-", PartOfSpeech::Adverb, "副詞"),
    ("I-", PartOfSpeech::Interjection, "間投詞"),
    ("N-", PartOfSpeech::Noun, "名詞"),
    ("P-", PartOfSpeech::Preposition, "前置詞"),
    ("RA", PartOfSpeech::Article, "冠詞"),
    ("RD", PartOfSpeech::Demonstrative, "指示代名詞"),
    ("RI", PartOfSpeech::Interrogative, "疑問代名詞"),
    ("RP", PartOfSpeech::PersonalPronoun, "人称代名詞"),
    ("RR", PartOfSpeech::RelativePronoun, "関係代名詞"),
    ("V-", PartOfSpeech::Verb, "動詞"),
    ("X-", PartOfSpeech::Particle, "不変化詞"),
];

impl PartOfSpeech {
    /// Look up a two-character corpus tag such as `N-` or `RA`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        POS_TABLE
            .iter()
            .find(|(t, _, _)| *t == tag)
            .map(|&(_, pos, _)| pos)
    }

    pub fn tag(self) -> &'static str {
        self.entry().0
    }

    pub fn name_ja(self) -> &'static str {
        self.entry().2
    }

    pub fn all() -> impl Iterator<Item = PartOfSpeech> {
        POS_TABLE.iter().map(|&(_, pos, _)| pos)
    }

    fn entry(self) -> &'static (&'static str, PartOfSpeech, &'static str) {
        // Every variant has exactly one row.
        POS_TABLE
            .iter()
            .find(|(_, p, _)| *p == self)
            .unwrap_or(&POS_TABLE[0])
    }
}

/// Declares a feature enum with its code symbol and Japanese label.
macro_rules! feature {
    ($name:ident { $($variant:ident = $code:literal, $ja:literal;)+ }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn from_code(code: char) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn label_ja(self) -> &'static str {
                match self {
                    $(Self::$variant => $ja,)+
                }
            }
        }
    };
}

feature!(Person {
    First = '1', "1人称";
    Second = '2', "2人称";
    Third = '3', "3人称";
});

feature!(Tense {
    Present = 'P', "現在";
    Imperfect = 'I', "未完了";
    Future = 'F', "未来";
    Aorist = 'A', "アオリスト";
    Perfect = 'R', "完了";
    Pluperfect = 'L', "過去完了";
});

feature!(Voice {
    Active = 'A', "能動態";
    Middle = 'M', "中動態";
    Passive = 'P', "受動態";
});

feature!(Mood {
    Indicative = 'I', "直説法";
    Subjunctive = 'S', "接続法";
    Optative = 'O', "希求法";
    Imperative = 'M', "命令法";
    Infinitive = 'N', "不定詞";
    Participle = 'P', "分詞";
});

feature!(Case {
    Nominative = 'N', "主格";
    Genitive = 'G', "属格";
    Dative = 'D', "与格";
    Accusative = 'A', "対格";
    Vocative = 'V', "呼格";
});

feature!(Number {
    Singular = 'S', "単数";
    Plural = 'P', "複数";
});

feature!(Gender {
    Masculine = 'M', "男性";
    Feminine = 'F', "女性";
    Neuter = 'N', "中性";
});

feature!(Degree {
    Comparative = 'C', "比較級";
    Superlative = 'S', "最上級";
});

/// Sparse grammatical feature record. Absent fields are simply unknown or
/// not applicable for the word's part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Morphology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<Degree>,
}

impl Morphology {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_verbal_features(&self) -> bool {
        self.person.is_some()
            || self.tense.is_some()
            || self.voice.is_some()
            || self.mood.is_some()
    }

    pub fn has_nominal_features(&self) -> bool {
        self.case.is_some() || self.number.is_some() || self.gender.is_some()
    }

    /// Japanese labels of the present features, in code-position order.
    pub fn labels_ja(&self) -> Vec<&'static str> {
        [
            self.person.map(Person::label_ja),
            self.tense.map(Tense::label_ja),
            self.voice.map(Voice::label_ja),
            self.mood.map(Mood::label_ja),
            self.case.map(Case::label_ja),
            self.number.map(Number::label_ja),
            self.gender.map(Gender::label_ja),
            self.degree.map(Degree::label_ja),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Decode a morphology code for a word of the given part of speech.
///
/// Symbols outside a position's table are omitted; a short code leaves the
/// missing positions empty. The placeholder code yields an empty record.
pub fn decode(code: &str, pos: PartOfSpeech) -> Morphology {
    if code == PLACEHOLDER {
        return Morphology::default();
    }

    let symbols: Vec<char> = code.chars().collect();
    let at = |i: usize| symbols.get(i).copied();
    let mut m = Morphology::default();

    if pos == PartOfSpeech::Verb {
        m.person = at(0).and_then(Person::from_code);
        m.tense = at(1).and_then(Tense::from_code);
        m.voice = at(2).and_then(Voice::from_code);
        m.mood = at(3).and_then(Mood::from_code);
        // Participles decline like adjectives.
        if m.mood == Some(Mood::Participle) {
            m.case = at(4).and_then(Case::from_code);
            m.number = at(5).and_then(Number::from_code);
            m.gender = at(6).and_then(Gender::from_code);
        }
    } else {
        m.case = at(4).and_then(Case::from_code);
        m.number = at(5).and_then(Number::from_code);
        m.gender = at(6).and_then(Gender::from_code);
        m.degree = at(7).and_then(Degree::from_code);
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tags() {
        assert_eq!(PartOfSpeech::from_tag("N-"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_tag("RP"), Some(PartOfSpeech::PersonalPronoun));
        assert_eq!(PartOfSpeech::from_tag("V-"), Some(PartOfSpeech::Verb));
        assert_eq!(PartOfSpeech::from_tag("ZZ"), None);
        assert_eq!(PartOfSpeech::all().count(), 13);
        for pos in PartOfSpeech::all() {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
        }
        assert_eq!(PartOfSpeech::Article.name_ja(), "冠詞");
    }

    #[test]
    fn test_pos_serializes_kebab_case() {
        let json = serde_json::to_string(&PartOfSpeech::PersonalPronoun).unwrap();
        assert_eq!(json, "\"personal-pronoun\"");
    }

    #[test]
    fn test_finite_verb() {
        // ἦν: 3rd imperfect active indicative
        let m = decode("3IAI----", PartOfSpeech::Verb);
        assert_eq!(m.person, Some(Person::Third));
        assert_eq!(m.tense, Some(Tense::Imperfect));
        assert_eq!(m.voice, Some(Voice::Active));
        assert_eq!(m.mood, Some(Mood::Indicative));
        assert!(!m.has_nominal_features());
        assert_eq!(m.degree, None);
    }

    #[test]
    fn test_finite_verb_ignores_nominal_positions() {
        let m = decode("3AAINSM-", PartOfSpeech::Verb);
        assert!(m.has_verbal_features());
        assert!(!m.has_nominal_features());
    }

    #[test]
    fn test_participle_carries_both_groups() {
        // ὤν: present active participle, nominative singular masculine
        let m = decode("-PAPNSM-", PartOfSpeech::Verb);
        assert_eq!(m.mood, Some(Mood::Participle));
        assert_eq!(m.case, Some(Case::Nominative));
        assert_eq!(m.number, Some(Number::Singular));
        assert_eq!(m.gender, Some(Gender::Masculine));
        assert_eq!(m.person, None);
        assert!(m.has_verbal_features());
        assert!(m.has_nominal_features());
    }

    #[test]
    fn test_noun_ignores_verbal_positions() {
        let m = decode("3IAIDSF-", PartOfSpeech::Noun);
        assert!(!m.has_verbal_features());
        assert_eq!(m.case, Some(Case::Dative));
        assert_eq!(m.number, Some(Number::Singular));
        assert_eq!(m.gender, Some(Gender::Feminine));
    }

    #[test]
    fn test_adjective_degree() {
        let m = decode("----NPMC", PartOfSpeech::Adjective);
        assert_eq!(m.degree, Some(Degree::Comparative));
        let m = decode("----ASNS", PartOfSpeech::Adjective);
        assert_eq!(m.degree, Some(Degree::Superlative));
    }

    #[test]
    fn test_placeholder_is_empty_for_every_pos() {
        for pos in PartOfSpeech::all() {
            assert!(decode(PLACEHOLDER, pos).is_empty(), "{pos:?}");
        }
    }

    #[test]
    fn test_unknown_symbols_are_omitted() {
        let m = decode("9QZQXXX-", PartOfSpeech::Verb);
        assert!(m.is_empty());
        let m = decode("----NQM-", PartOfSpeech::Noun);
        assert_eq!(m.case, Some(Case::Nominative));
        assert_eq!(m.number, None);
        assert_eq!(m.gender, Some(Gender::Masculine));
    }

    #[test]
    fn test_short_code() {
        let m = decode("3P", PartOfSpeech::Verb);
        assert_eq!(m.person, Some(Person::Third));
        assert_eq!(m.tense, Some(Tense::Present));
        assert_eq!(m.voice, None);
        assert!(decode("", PartOfSpeech::Noun).is_empty());
    }

    #[test]
    fn test_labels_ja() {
        let m = decode("----DSF-", PartOfSpeech::Noun);
        assert_eq!(m.labels_ja(), vec!["与格", "単数", "女性"]);
    }

    #[test]
    fn test_sparse_serialization() {
        let m = decode("----NSM-", PartOfSpeech::Noun);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"case":"nominative","number":"singular","gender":"masculine"}"#
        );
    }
}
