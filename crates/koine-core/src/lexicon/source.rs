//! Raw dictionary formats.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::DictionaryRef;

/// A pluggable dictionary source that parses a raw dictionary file into
/// lemma → reference entries.
pub trait DictSource {
    fn name(&self) -> &'static str;

    fn parse_str(&self, text: &str) -> Result<BTreeMap<String, DictionaryRef>, DictSourceError>;

    fn parse_file(&self, path: &Path) -> Result<BTreeMap<String, DictionaryRef>, DictSourceError> {
        let text = fs::read_to_string(path)?;
        self.parse_str(&text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Look up a source by its command-line name.
pub fn from_name(name: &str) -> Option<Box<dyn DictSource>> {
    match name {
        "strongs" => Some(Box::new(StrongsXmlSource)),
        "tsv" => Some(Box::new(TsvSource)),
        _ => None,
    }
}

/// Pick a source from the file extension: `.xml` is Strong's, anything else TSV.
pub fn for_path(path: &Path) -> Box<dyn DictSource> {
    let is_xml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    if is_xml {
        Box::new(StrongsXmlSource)
    } else {
        Box::new(TsvSource)
    }
}

/// Strong's Greek dictionary XML (`strongsgreek.xml`).
///
/// Only the fields the annotator needs are extracted: the headword from the
/// first `unicode="..."` attribute, `<strongs_def>` and `<kjv_def>`. Later
/// entries with the same headword replace earlier ones.
pub struct StrongsXmlSource;

struct StrongsPatterns {
    entry: Regex,
    unicode: Regex,
    def: Regex,
    kjv: Regex,
    tag: Regex,
}

fn strongs_patterns() -> &'static StrongsPatterns {
    static PATTERNS: OnceLock<StrongsPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let re = |p: &str| Regex::new(p).expect("static regex must compile");
        StrongsPatterns {
            entry: re(r#"(?s)<entry strongs="(\d+)">(.*?)</entry>"#),
            unicode: re(r#"unicode="([^"]+)""#),
            def: re(r"(?s)<strongs_def>(.*?)</strongs_def>"),
            kjv: re(r"(?s)<kjv_def>(.*?)</kjv_def>"),
            tag: re(r"<[^>]+>"),
        }
    })
}

impl StrongsXmlSource {
    fn element_text(patterns: &StrongsPatterns, re: &Regex, content: &str) -> String {
        re.captures(content)
            .map(|c| patterns.tag.replace_all(&c[1], "").trim().to_string())
            .unwrap_or_default()
    }
}

impl DictSource for StrongsXmlSource {
    fn name(&self) -> &'static str {
        "strongs"
    }

    fn parse_str(&self, text: &str) -> Result<BTreeMap<String, DictionaryRef>, DictSourceError> {
        let p = strongs_patterns();
        let mut entries = BTreeMap::new();

        for cap in p.entry.captures_iter(text) {
            let number: u32 = cap[1]
                .parse()
                .map_err(|_| DictSourceError::Parse(format!("bad entry number {:?}", &cap[1])))?;
            let content = &cap[2];
            let Some(lemma) = p.unicode.captures(content) else {
                continue;
            };

            let definition = Self::element_text(p, &p.def, content);
            let kjv = Self::element_text(p, &p.kjv, content);
            let usage_note = kjv.strip_prefix(":--").unwrap_or(&kjv).trim().to_string();

            entries.insert(
                lemma[1].to_string(),
                DictionaryRef {
                    id: format!("G{number}"),
                    definition,
                    usage_note,
                },
            );
        }

        Ok(entries)
    }
}

/// Tab-separated `lemma<TAB>id<TAB>definition<TAB>usage`.
///
/// Blank lines and lines starting with `#` are ignored; definition and usage
/// may be omitted.
pub struct TsvSource;

impl DictSource for TsvSource {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn parse_str(&self, text: &str) -> Result<BTreeMap<String, DictionaryRef>, DictSourceError> {
        let mut entries = BTreeMap::new();

        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let (lemma, id) = match fields.as_slice() {
                [lemma, id, ..] if !lemma.trim().is_empty() && !id.trim().is_empty() => {
                    (lemma.trim(), id.trim())
                }
                _ => {
                    return Err(DictSourceError::Parse(format!(
                        "line {}: expected lemma and id",
                        lineno + 1
                    )))
                }
            };
            let field = |i: usize| fields.get(i).map(|f| f.trim().to_string()).unwrap_or_default();

            entries.insert(
                lemma.to_string(),
                DictionaryRef {
                    id: id.to_string(),
                    definition: field(2),
                    usage_note: field(3),
                },
            );
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONGS_SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<strongsdictionary>
<entries>
<entry strongs="00746">
  <strongs>746</strongs>  <greek BETA="A)RXH/" unicode="ἀρχή" translit="archḗ"/> <pronunciation strongs="ar-khay'"/>
  <strongs_derivation>from <strongsref language="GREEK" strongs="0756"/>;</strongs_derivation><strongs_def> (properly abstract) a commencement, or
  (concretely) chief (in various applications of order, time, place, or rank)</strongs_def><kjv_def>:--beginning, corner, (at the, the) first
  (estate), magistrate, power, principality, principle, rule.</kjv_def>
</entry>
<entry strongs="03056">
  <strongs>3056</strongs>  <greek BETA="LO/GOS" unicode="λόγος" translit="lógos"/>
  <strongs_def> something said (including the thought); by implication, a <i>topic</i></strongs_def><kjv_def>:--account, cause, communication.</kjv_def>
</entry>
<entry strongs="09999">
  <strongs>9999</strongs>
</entry>
</entries>
</strongsdictionary>
"#;

    #[test]
    fn test_strongs_entries() {
        let entries = StrongsXmlSource.parse_str(STRONGS_SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);

        let logos = &entries["λόγος"];
        assert_eq!(logos.id, "G3056");
        assert_eq!(
            logos.definition,
            "something said (including the thought); by implication, a topic"
        );
        assert_eq!(logos.usage_note, "account, cause, communication.");

        let arche = &entries["ἀρχή"];
        assert_eq!(arche.id, "G746");
        assert!(arche.definition.starts_with("(properly abstract) a commencement"));
        assert!(arche.usage_note.starts_with("beginning, corner"));
    }

    #[test]
    fn test_strongs_empty_document() {
        let entries = StrongsXmlSource.parse_str("<entries></entries>").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_tsv_entries() {
        let text = "# comment\n\nθεός\tG2316\ta deity\tGod\nκαί\tG2532\n";
        let entries = TsvSource.parse_str(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["θεός"].usage_note, "God");
        assert_eq!(entries["καί"].id, "G2532");
        assert_eq!(entries["καί"].definition, "");
    }

    #[test]
    fn test_tsv_missing_id() {
        let err = TsvSource.parse_str("θεός\n").unwrap_err();
        assert!(matches!(err, DictSourceError::Parse(msg) if msg.starts_with("line 1")));
    }

    #[test]
    fn test_from_name_and_path() {
        assert_eq!(from_name("strongs").map(|s| s.name()), Some("strongs"));
        assert_eq!(from_name("tsv").map(|s| s.name()), Some("tsv"));
        assert!(from_name("mozc").is_none());
        assert_eq!(for_path(Path::new("strongsgreek.XML")).name(), "strongs");
        assert_eq!(for_path(Path::new("dict.tsv")).name(), "tsv");
    }
}
