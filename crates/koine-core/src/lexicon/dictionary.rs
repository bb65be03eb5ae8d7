use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::source::{self, DictSourceError};

const MAGIC: &[u8; 4] = b"KNDX";
const VERSION: u8 = 1;

/// Unified error type for loading and saving dictionaries.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KNDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error(transparent)]
    Source(#[from] DictSourceError),
}

/// Dictionary cross-reference attached to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryRef {
    /// Strong's number, e.g. `G3056`.
    pub id: String,
    pub definition: String,
    pub usage_note: String,
}

/// Exact-lemma dictionary. Entries are kept sorted so the compiled file is
/// byte-identical for identical input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    entries: BTreeMap<String, DictionaryRef>,
}

impl Dictionary {
    pub fn from_entries(entries: BTreeMap<String, DictionaryRef>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, lemma: &str) -> Option<&DictionaryRef> {
        self.entries.get(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryRef)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to bytes (KNDX format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let body = bincode::serialize(&self.entries).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(5 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (KNDX format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DictError> {
        if bytes.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &bytes[0..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(DictError::UnsupportedVersion(bytes[4]));
        }
        let entries = bincode::deserialize(&bytes[5..]).map_err(DictError::Deserialize)?;
        Ok(Self { entries })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open a compiled dictionary file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Load a dictionary in any supported format.
    ///
    /// Compiled files are recognized by their magic bytes; anything else is
    /// parsed as Strong's XML (`.xml`) or TSV.
    pub fn load(path: &Path) -> Result<Self, DictError> {
        let bytes = fs::read(path)?;
        if bytes.starts_with(MAGIC) {
            debug!(path = %path.display(), "loading compiled dictionary");
            return Self::from_bytes(&bytes);
        }

        let text = String::from_utf8(bytes)
            .map_err(|e| DictSourceError::Parse(format!("{}: {e}", path.display())))?;
        let source = source::for_path(path);
        debug!(path = %path.display(), source = source.name(), "parsing dictionary source");
        Ok(Self::from_entries(source.parse_str(&text)?))
    }
}
