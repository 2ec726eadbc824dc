use crate::domain::entities::SavedRequest;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// On-disk store of named request definitions.
///
/// The whole map lives in one JSON file. It is read once at startup and
/// rewritten in full after every mutation. The overwrite is not atomic; a
/// crash mid-write can corrupt the file, which is accepted for a
/// single-user local tool.
pub struct RequestStore {
    path: PathBuf,
    entries: HashMap<String, SavedRequest>,
}

impl RequestStore {
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: HashMap::new(),
        }
    }

    /// Loads the store from its file. A missing file is an empty store,
    /// not an error; an unreadable or unparseable file is an error the
    /// caller reports before continuing with an empty store.
    pub fn load(path: PathBuf) -> Result<Self> {
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::empty(path)),
            Err(e) => return Err(anyhow!("Could not read {}: {}", path.display(), e)),
        };

        let entries: HashMap<String, SavedRequest> = serde_json::from_str(&raw)
            .map_err(|e| anyhow!("Could not parse saved tests in {}: {}", path.display(), e))?;

        Ok(Self { path, entries })
    }

    pub fn get(&self, name: &str) -> Option<&SavedRequest> {
        self.entries.get(name)
    }

    /// Inserts or silently replaces the definition for `name`.
    pub fn upsert(&mut self, name: &str, definition: SavedRequest) {
        self.entries.insert(name.to_string(), definition);
    }

    /// Writes the whole map back to the store file as indented JSON.
    /// The in-memory map is untouched on failure.
    pub fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| anyhow!("Could not serialize saved tests: {}", e))?;
        fs::write(&self.path, serialized)
            .map_err(|e| anyhow!("Could not write {}: {}", self.path.display(), e))
    }

    /// Every saved name, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Method;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("apitester-store-{}-{}.json", tag, std::process::id()))
    }

    fn definition(url: &str) -> SavedRequest {
        SavedRequest::new(url, Method::Get, HashMap::new(), None)
    }

    #[test]
    fn round_trips_a_definition_through_the_file() {
        let path = temp_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut headers = HashMap::new();
        headers.insert("X-Token".to_string(), "abc".to_string());
        let saved = SavedRequest::new("http://x/y", Method::Post, headers, Some(r#"{"a":1}"#));

        let mut store = RequestStore::empty(path.clone());
        store.upsert("foo", saved.clone());
        store.persist().unwrap();

        let reloaded = RequestStore::load(path.clone()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("foo"), Some(&saved));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_loads_as_an_empty_store() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = RequestStore::load(path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        assert!(RequestStore::load(path.clone()).is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn upsert_replaces_without_growing_the_map() {
        let mut store = RequestStore::empty(temp_path("replace"));
        store.upsert("foo", definition("http://x/old"));
        store.upsert("foo", definition("http://x/new"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("foo").unwrap().url, "http://x/new");
    }

    #[test]
    fn persisted_file_is_two_space_indented() {
        let path = temp_path("indent");
        let mut store = RequestStore::empty(path.clone());
        store.upsert("foo", definition("http://x/y"));
        store.persist().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"foo\""));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn names_lists_every_entry() {
        let mut store = RequestStore::empty(temp_path("names"));
        store.upsert("alpha", definition("http://x/a"));
        store.upsert("beta", definition("http://x/b"));

        let mut names: Vec<&str> = store.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["alpha", "beta"]);
    }
}
