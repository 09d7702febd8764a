use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ParamStore;
use crate::types::TileGridError;

/// Store backed by a single JSON object file (`{"key": "value", ...}`).
///
/// The file is read once on open and rewritten on every `set` or `remove`. A missing file
/// is an empty store; it is created on the first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TileGridError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        log::debug!("opened store {} with {} entries", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), TileGridError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }

    /// Flush, or put `key` back to `previous` so memory stays in step with disk.
    fn flush_or_restore(
        &mut self,
        key: &str,
        previous: Option<String>,
    ) -> Result<(), TileGridError> {
        if let Err(err) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

impl ParamStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, TileGridError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TileGridError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        self.flush_or_restore(key, previous)
    }

    fn remove(&mut self, key: &str) -> Result<(), TileGridError> {
        match self.entries.remove(key) {
            Some(previous) => self.flush_or_restore(key, Some(previous)),
            None => Ok(()),
        }
    }
}
