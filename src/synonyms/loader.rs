//! JSON synonym files.
//!
//! The expected document is a list of objects:
//!
//! ```json
//! [
//!   { "word": "happy", "synonym": "joyful" },
//!   { "word": "sad", "synonym": "unhappy" }
//! ]
//! ```
//!
//! `primary` / `alternate` are accepted in place of `word` / `synonym`.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::{ConfigError, SynonymTable};

const PRIMARY_KEYS: [&str; 2] = ["word", "primary"];
const ALTERNATE_KEYS: [&str; 2] = ["synonym", "alternate"];

impl SynonymTable {
    /// Parses a JSON synonym document and builds a table from it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| ConfigError::MalformedSource(e.to_string()))?;
        Self::from_json_value(&document)
    }

    /// Builds a table from an already parsed JSON value.
    pub fn from_json_value(document: &Value) -> Result<Self, ConfigError> {
        let entries = document.as_array().ok_or_else(|| {
            ConfigError::MalformedSource("expected a list of synonym entries".to_string())
        })?;

        let pairs = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| read_entry(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        SynonymTable::build(pairs)
    }

    /// Reads and parses a JSON synonym file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading synonym file");
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

fn read_entry(index: usize, entry: &Value) -> Result<(String, String), ConfigError> {
    let object = entry.as_object().ok_or(ConfigError::InvalidEntry(index))?;

    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    };

    match (field(&PRIMARY_KEYS[..]), field(&ALTERNATE_KEYS[..])) {
        (Some(primary), Some(alternate)) => Ok((primary, alternate)),
        _ => Err(ConfigError::InvalidEntry(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonyms::Side;

    #[test]
    fn test_load_word_synonym_fields() {
        let json = r#"[
            {"word": "happy", "synonym": "joyful"},
            {"word": "sad", "synonym": "unhappy"}
        ]"#;

        let table = SynonymTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.pairs()[0].primary, "happy");
        assert_eq!(table.pairs()[0].alternate, "joyful");
    }

    #[test]
    fn test_load_primary_alternate_fields() {
        let json = r#"[{"primary": "big", "alternate": "large"}]"#;
        let table = SynonymTable::from_json_str(json).unwrap();
        assert_eq!(table.find("large").map(|(_, side)| side), Some(Side::Alternate));
    }

    #[test]
    fn test_not_a_list() {
        let result = SynonymTable::from_json_str(r#""invalid""#);
        assert!(matches!(result, Err(ConfigError::MalformedSource(_))));

        let result = SynonymTable::from_json_str(r#"{"word": "a", "synonym": "b"}"#);
        assert!(matches!(result, Err(ConfigError::MalformedSource(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = SynonymTable::from_json_str("[{");
        assert!(matches!(result, Err(ConfigError::MalformedSource(_))));
    }

    #[test]
    fn test_invalid_entry_index() {
        let json = r#"[
            {"word": "happy", "synonym": "joyful"},
            {"word": "sad"},
            {"word": "big", "synonym": "large"}
        ]"#;
        assert!(matches!(
            SynonymTable::from_json_str(json),
            Err(ConfigError::InvalidEntry(1))
        ));

        let json = r#"[{"word": "happy", "synonym": "joyful"}, 42]"#;
        assert!(matches!(
            SynonymTable::from_json_str(json),
            Err(ConfigError::InvalidEntry(1))
        ));

        let json = r#"[{"word": "happy", "synonym": 7}]"#;
        assert!(matches!(
            SynonymTable::from_json_str(json),
            Err(ConfigError::InvalidEntry(0))
        ));
    }

    #[test]
    fn test_duplicate_in_file() {
        let json = r#"[
            {"word": "happy", "synonym": "joyful"},
            {"word": "joyful", "synonym": "content"}
        ]"#;
        match SynonymTable::from_json_str(json) {
            Err(ConfigError::DuplicateSynonym(value)) => assert_eq!(value, "joyful"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        std::fs::write(&path, r#"[{"word": "quick", "synonym": "fast"}]"#).unwrap();

        let table = SynonymTable::from_file(&path).unwrap();
        assert!(table.contains("fast"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SynonymTable::from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
