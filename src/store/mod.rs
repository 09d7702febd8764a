//! Key-value persistence for parameter sets.
//!
//! The store is injected by the caller; nothing here reaches for global state.

pub mod cache;
pub mod file;
pub mod memory;

pub use cache::ParameterCache;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::types::TileGridError;

/// Minimal string key-value capability.
pub trait ParamStore {
    fn get(&self, key: &str) -> Result<Option<String>, TileGridError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), TileGridError>;
    /// Drop `key`; removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), TileGridError>;
}

impl<S: ParamStore + ?Sized> ParamStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, TileGridError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TileGridError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), TileGridError> {
        (**self).remove(key)
    }
}
