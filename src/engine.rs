use crate::error::Result;

mod memory;
mod sled;

pub use self::memory::MemoryStore;
pub use self::sled::SledStore;

/// A persistent string-to-string store provided by the host.
pub trait KeyValueStore {
    fn set(&mut self, key: String, value: String) -> Result<()>;
    fn get(&mut self, key: String) -> Result<Option<String>>;

    /// Deleting a key that is not present is a no-op.
    fn delete(&mut self, key: String) -> Result<()>;
}
