use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// In-process store. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&mut self, key: String, value: String) -> Result<()> {
        self.0.insert(key, value);
        Ok(())
    }

    fn get(&mut self, key: String) -> Result<Option<String>> {
        Ok(self.0.get(&key).cloned())
    }

    fn delete(&mut self, key: String) -> Result<()> {
        self.0.remove(&key);
        Ok(())
    }
}
