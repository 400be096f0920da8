use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::Result;

/// Host store backed by a Sled database on disk
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    const DB_NAME: &'static str = "storage.sled";

    /// Returns `true` if a database already exists in `path`
    pub fn is_present(path: impl Into<PathBuf>) -> bool {
        let dir = path.into();
        dir.join(Self::DB_NAME).exists()
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let dir = path.into();
        let db = sled::open(dir.join(Self::DB_NAME))?;

        log::info!("Opened DB in {}, recovered = {}", dir.display(), db.was_recovered());

        Ok(Self { db })
    }
}

impl KeyValueStore for SledStore {
    fn set(&mut self, key: String, value: String) -> Result<()> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }

    fn get(&mut self, key: String) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(v) => Ok(Some(String::from_utf8(v.to_vec())?)),
            None => Ok(None),
        }
    }

    fn delete(&mut self, key: String) -> Result<()> {
        if self.db.remove(key.as_bytes())?.is_some() {
            self.db.flush()?;
        } else {
            log::debug!("Delete of absent key {:?}", key);
        }

        Ok(())
    }
}
