use std::collections::HashMap;

use super::ParamStore;
use crate::types::TileGridError;

/// In-process store; contents are lost when it is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParamStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, TileGridError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TileGridError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), TileGridError> {
        self.entries.remove(key);
        Ok(())
    }
}
