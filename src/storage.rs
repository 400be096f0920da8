//! Item helpers over a host [`KeyValueStore`].
//!
//! Each helper makes exactly one call into the store and hands back whatever
//! the store returned, errors included.

use crate::engine::KeyValueStore;
use crate::error::Result;

/// Save `value` under `key`.
pub fn save_item<S>(store: &mut S, key: impl Into<String>, value: impl Into<String>) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    store.set(key.into(), value.into())
}

/// Load the value stored under `key`, or `None` if it is unset.
pub fn load_item<S>(store: &mut S, key: impl Into<String>) -> Result<Option<String>>
where
    S: KeyValueStore + ?Sized,
{
    store.get(key.into())
}

/// Remove `key`. Removing an absent key is not an error.
pub fn remove_item<S>(store: &mut S, key: impl Into<String>) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    store.delete(key.into())
}
