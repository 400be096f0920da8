pub mod engine;
mod error;
mod storage;

pub use engine::{KeyValueStore, MemoryStore, SledStore};
pub use error::{Error, Result};
pub use storage::{load_item, remove_item, save_item};
