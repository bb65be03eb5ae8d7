use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_TOML: &str = include_str!("default_glosses.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct GlossConfig {
    glosses: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GlossConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[glosses] table is empty")]
    Empty,
    #[error("empty gloss for lemma: {0}")]
    EmptyValue(String),
    #[error("gloss table already initialized")]
    AlreadyInitialized,
}

/// Lemma → short Japanese meaning.
#[derive(Debug, Clone, Default)]
pub struct GlossTable {
    entries: HashMap<String, String>,
}

impl GlossTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GlossConfigError> {
        // Validate eagerly
        parse_gloss_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlossConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlossTable {
        static INSTANCE: OnceLock<GlossTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_gloss_toml(toml_str).expect("gloss TOML must be valid");
            GlossTable::from_map(map)
        })
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }

    /// Exact-match lookup; no normalization is applied to `lemma`.
    pub fn get(&self, lemma: &str) -> Option<&str> {
        self.entries.get(lemma).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse TOML text into a sorted `BTreeMap<lemma, gloss>`.
pub fn parse_gloss_toml(toml_str: &str) -> Result<BTreeMap<String, String>, GlossConfigError> {
    let config: GlossConfig =
        toml::from_str(toml_str).map_err(|e| GlossConfigError::Parse(e.to_string()))?;

    if config.glosses.is_empty() {
        return Err(GlossConfigError::Empty);
    }
    if let Some((lemma, _)) = config.glosses.iter().find(|(_, g)| g.trim().is_empty()) {
        return Err(GlossConfigError::EmptyValue(lemma.clone()));
    }

    Ok(config.glosses)
}

/// Returns the embedded default gloss TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
