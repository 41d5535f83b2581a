//! Key-value persistence for the board
//!
//! The board stores each column under its own key as a JSON array of card
//! records. `FileStore` keeps the whole key space in one TOML file;
//! `MemoryStore` is used for tests and embedding.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::kanban::{Card, ColumnId};

/// A string key-value store
pub trait KeyValueStore: Send {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<K: Into<String>, V: Into<String>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a TOML file of string entries
///
/// The file is read once on open and rewritten on every `set`.
pub struct FileStore {
    file_path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store, treating a missing or empty file as an empty store
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        let entries = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read {}", file_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", file_path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { file_path, entries })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        let content = toml::to_string_pretty(&self.entries)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}

/// Read one column's cards; an absent key or a stored `null` is an empty column
pub fn load_column(store: &dyn KeyValueStore, column: ColumnId) -> Result<Vec<Card>> {
    let key = column.storage_key();
    match store.get(key)? {
        Some(raw) => {
            let cards: Option<Vec<Card>> = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid card records under '{}'", key))?;
            Ok(cards.unwrap_or_default())
        }
        None => Ok(Vec::new()),
    }
}

/// Write one column's cards
pub fn save_column(store: &mut dyn KeyValueStore, column: ColumnId, cards: &[Card]) -> Result<()> {
    let raw = serde_json::to_string(cards)?;
    store.set(column.storage_key(), raw)
}
